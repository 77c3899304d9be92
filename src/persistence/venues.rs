//! Venue repository.
//!
//! All mutations run inside one transaction each; an error before commit
//! rolls back in full. Reads are single queries with no surrounding
//! transaction.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::models::{CounterpartShowRow, VenueRow, VenueUpcomingRow};
use crate::domain::{NewVenue, VenueEdit, VenueId};
use crate::error::DirectoryError;

/// Venue repository over a shared connection pool.
#[derive(Debug)]
pub struct VenueRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> VenueRepo<'a> {
    /// Creates a repository borrowing the given pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Lists every venue with its upcoming-show count relative to `now`,
    /// ordered by `(city, state, id)` for the location-grouping fold.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Storage`] on database failure.
    pub async fn list_with_upcoming(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<VenueUpcomingRow>, DirectoryError> {
        let rows = sqlx::query_as::<_, VenueUpcomingRow>(
            r"
            SELECT v.id, v.name, v.city, v.state,
                   COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming
            FROM venues v
            LEFT JOIN shows s ON s.venue_id = v.id
            GROUP BY v.id, v.name, v.city, v.state
            ORDER BY v.city, v.state, v.id
            ",
        )
        .bind(now)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Case-insensitive substring search on venue name. The term is passed
    /// through verbatim, SQL wildcards included; the empty term matches
    /// every venue.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Storage`] on database failure.
    pub async fn search(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<VenueUpcomingRow>, DirectoryError> {
        let rows = sqlx::query_as::<_, VenueUpcomingRow>(
            r"
            SELECT v.id, v.name, v.city, v.state,
                   COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming
            FROM venues v
            LEFT JOIN shows s ON s.venue_id = v.id
            WHERE v.name ILIKE '%' || $2 || '%'
            GROUP BY v.id, v.name, v.city, v.state
            ORDER BY v.id
            ",
        )
        .bind(now)
        .bind(term)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Fetches a single venue row by id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Storage`] on database failure.
    pub async fn get(&self, id: VenueId) -> Result<Option<VenueRow>, DirectoryError> {
        let row = sqlx::query_as::<_, VenueRow>(
            r"
            SELECT id, name, genres, city, state, address, phone,
                   image_link, facebook_link, website_link,
                   seeking_talent, seeking_description
            FROM venues WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    /// Lists the venue's shows joined with each show's artist, ordered by
    /// `(start_time, id)`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Storage`] on database failure.
    pub async fn shows_with_artists(
        &self,
        id: VenueId,
    ) -> Result<Vec<CounterpartShowRow>, DirectoryError> {
        let rows = sqlx::query_as::<_, CounterpartShowRow>(
            r"
            SELECT s.id AS show_id, s.start_time,
                   a.id AS counterpart_id,
                   a.name AS counterpart_name,
                   a.image_link AS counterpart_image_link
            FROM shows s
            LEFT JOIN artists a ON a.id = s.artist_id
            WHERE s.venue_id = $1
            ORDER BY s.start_time, s.id
            ",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Inserts a new venue and returns its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] if the genre list fails to encode or the
    /// transaction fails; nothing is written on failure.
    pub async fn create(&self, venue: &NewVenue) -> Result<VenueId, DirectoryError> {
        let genres = venue.genres.encode()?;
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, VenueId>(
            r"
            INSERT INTO venues (name, genres, city, state, address, phone, facebook_link)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            ",
        )
        .bind(&venue.name)
        .bind(&genres)
        .bind(&venue.city)
        .bind(&venue.state)
        .bind(&venue.address)
        .bind(&venue.phone)
        .bind(venue.facebook_link.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Overwrites the editable columns of a venue.
    ///
    /// Only `name`, `city`, `state`, `phone`, `genres`, and
    /// `facebook_link` are in the UPDATE column list; every other column
    /// keeps its stored value.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] if no row has the id, or
    /// [`DirectoryError`] on encode/storage failure; nothing is written on
    /// failure.
    pub async fn update(&self, id: VenueId, edit: &VenueEdit) -> Result<(), DirectoryError> {
        let genres = edit.genres.encode()?;
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r"
            UPDATE venues
            SET name = $2, city = $3, state = $4, phone = $5,
                genres = $6, facebook_link = $7
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(&edit.name)
        .bind(&edit.city)
        .bind(&edit.state)
        .bind(&edit.phone)
        .bind(&genres)
        .bind(edit.facebook_link.as_deref())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::VenueNotFound(id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Deletes a venue and its dependent shows in one transaction.
    ///
    /// The cascade is explicit: shows go first, then the venue. Returns
    /// the number of shows removed alongside the venue.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] if no venue has the id
    /// (the show deletion is rolled back), or [`DirectoryError::Storage`]
    /// on database failure.
    pub async fn delete(&self, id: VenueId) -> Result<u64, DirectoryError> {
        let mut tx = self.pool.begin().await?;

        let shows = sqlx::query("DELETE FROM shows WHERE venue_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let venues = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if venues.rows_affected() == 0 {
            // Dropping the transaction rolls back the show deletion.
            return Err(DirectoryError::VenueNotFound(id));
        }

        tx.commit().await?;
        Ok(shows.rows_affected())
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::GenreList;

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPool::connect(&url).await.expect("connect");
        crate::persistence::migrations::run(&pool)
            .await
            .expect("migrations");
        pool
    }

    fn musical_hop() -> NewVenue {
        NewVenue {
            name: "The Musical Hop".to_string(),
            genres: GenreList::new(vec![
                "Jazz".to_string(),
                "Reggae".to_string(),
                "Swing".to_string(),
            ]),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips_genres() {
        let pool = test_pool().await;
        let repo = VenueRepo::new(&pool);

        let new = musical_hop();
        let id = repo.create(&new).await.expect("create");
        let row = repo.get(id).await.expect("get").expect("exists");

        assert_eq!(row.name, new.name);
        assert_eq!(row.address, new.address);
        assert_eq!(row.phone, new.phone);
        let genres = GenreList::decode(&row.genres).expect("decode");
        assert_eq!(genres, new.genres);

        repo.delete(id).await.expect("cleanup");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn search_is_case_insensitive_substring() {
        let pool = test_pool().await;
        let repo = VenueRepo::new(&pool);

        let hop = repo.create(&musical_hop()).await.expect("create hop");
        let mut park = musical_hop();
        park.name = "Park Square Live Music & Coffee".to_string();
        let park = repo.create(&park).await.expect("create park");

        let now = Utc::now();
        let hits = repo.search("hop", now).await.expect("search");
        assert!(hits.iter().any(|r| r.id == hop));
        assert!(!hits.iter().any(|r| r.id == park));

        let hits = repo.search("Music", now).await.expect("search");
        assert!(hits.iter().any(|r| r.id == hop));
        assert!(hits.iter().any(|r| r.id == park));

        let hits = repo.search("", now).await.expect("search");
        assert!(hits.iter().any(|r| r.id == hop));
        assert!(hits.iter().any(|r| r.id == park));

        repo.delete(hop).await.expect("cleanup");
        repo.delete(park).await.expect("cleanup");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn partial_edit_leaves_address_untouched() {
        let pool = test_pool().await;
        let repo = VenueRepo::new(&pool);

        let id = repo.create(&musical_hop()).await.expect("create");
        let edit = VenueEdit {
            name: "The Musical Hop (renamed)".to_string(),
            genres: GenreList::new(vec!["Folk".to_string()]),
            city: "Oakland".to_string(),
            state: "CA".to_string(),
            phone: "555-000-1111".to_string(),
            facebook_link: None,
        };
        repo.update(id, &edit).await.expect("update");

        let row = repo.get(id).await.expect("get").expect("exists");
        assert_eq!(row.name, edit.name);
        assert_eq!(row.city, "Oakland");
        // Not in the edit set: kept from the create above.
        assert_eq!(row.address, "1015 Folsom Street");

        repo.delete(id).await.expect("cleanup");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_creates_yield_distinct_ids() {
        let pool = test_pool().await;
        let repo = VenueRepo::new(&pool);

        let a = repo.create(&musical_hop()).await.expect("create");
        let b = repo.create(&musical_hop()).await.expect("create");
        assert_ne!(a, b);

        repo.delete(a).await.expect("cleanup");
        repo.delete(b).await.expect("cleanup");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_missing_venue_is_not_found() {
        let pool = test_pool().await;
        let repo = VenueRepo::new(&pool);

        let result = repo.delete(VenueId::new(-1)).await;
        assert!(matches!(result, Err(DirectoryError::VenueNotFound(_))));
    }
}
