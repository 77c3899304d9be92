//! Artist repository.
//!
//! Mirrors the venue repository, including the explicit delete cascade over
//! the artist's shows.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::models::{ArtistNameRow, ArtistRow, ArtistUpcomingRow, CounterpartShowRow};
use crate::domain::{ArtistEdit, ArtistId, NewArtist};
use crate::error::DirectoryError;

/// Artist repository over a shared connection pool.
#[derive(Debug)]
pub struct ArtistRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtistRepo<'a> {
    /// Creates a repository borrowing the given pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Lists every artist as `(id, name)`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Storage`] on database failure.
    pub async fn list(&self) -> Result<Vec<ArtistNameRow>, DirectoryError> {
        let rows =
            sqlx::query_as::<_, ArtistNameRow>("SELECT id, name FROM artists ORDER BY id")
                .fetch_all(self.pool)
                .await?;
        Ok(rows)
    }

    /// Case-insensitive substring search on artist name, each match
    /// carrying its upcoming-show count relative to `now`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Storage`] on database failure.
    pub async fn search(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<ArtistUpcomingRow>, DirectoryError> {
        let rows = sqlx::query_as::<_, ArtistUpcomingRow>(
            r"
            SELECT a.id, a.name,
                   COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming
            FROM artists a
            LEFT JOIN shows s ON s.artist_id = a.id
            WHERE a.name ILIKE '%' || $2 || '%'
            GROUP BY a.id, a.name
            ORDER BY a.id
            ",
        )
        .bind(now)
        .bind(term)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Fetches a single artist row by id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Storage`] on database failure.
    pub async fn get(&self, id: ArtistId) -> Result<Option<ArtistRow>, DirectoryError> {
        let row = sqlx::query_as::<_, ArtistRow>(
            r"
            SELECT id, name, genres, city, state, phone,
                   image_link, facebook_link, website_link,
                   seeking_venue, seeking_description
            FROM artists WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    /// Lists the artist's shows joined with each show's venue, ordered by
    /// `(start_time, id)`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Storage`] on database failure.
    pub async fn shows_with_venues(
        &self,
        id: ArtistId,
    ) -> Result<Vec<CounterpartShowRow>, DirectoryError> {
        let rows = sqlx::query_as::<_, CounterpartShowRow>(
            r"
            SELECT s.id AS show_id, s.start_time,
                   v.id AS counterpart_id,
                   v.name AS counterpart_name,
                   v.image_link AS counterpart_image_link
            FROM shows s
            LEFT JOIN venues v ON v.id = s.venue_id
            WHERE s.artist_id = $1
            ORDER BY s.start_time, s.id
            ",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Inserts a new artist and returns its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] if the genre list fails to encode or the
    /// transaction fails; nothing is written on failure.
    pub async fn create(&self, artist: &NewArtist) -> Result<ArtistId, DirectoryError> {
        let genres = artist.genres.encode()?;
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, ArtistId>(
            r"
            INSERT INTO artists (name, genres, city, state, phone, facebook_link)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(&artist.name)
        .bind(&genres)
        .bind(&artist.city)
        .bind(&artist.state)
        .bind(&artist.phone)
        .bind(artist.facebook_link.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Overwrites the editable columns of an artist. Same partial-update
    /// contract as venues: columns outside the edit set keep their values.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] if no row has the id, or
    /// [`DirectoryError`] on encode/storage failure; nothing is written on
    /// failure.
    pub async fn update(&self, id: ArtistId, edit: &ArtistEdit) -> Result<(), DirectoryError> {
        let genres = edit.genres.encode()?;
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r"
            UPDATE artists
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
            return Err(DirectoryError::ArtistNotFound(id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Deletes an artist and its dependent shows in one transaction,
    /// symmetric with the venue cascade.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] if no artist has the id
    /// (the show deletion is rolled back), or [`DirectoryError::Storage`]
    /// on database failure.
    pub async fn delete(&self, id: ArtistId) -> Result<u64, DirectoryError> {
        let mut tx = self.pool.begin().await?;

        let shows = sqlx::query("DELETE FROM shows WHERE artist_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let artists = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if artists.rows_affected() == 0 {
            return Err(DirectoryError::ArtistNotFound(id));
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

    fn guns_n_petals() -> NewArtist {
        NewArtist {
            name: "Guns N Petals".to_string(),
            genres: GenreList::new(vec!["Rock n Roll".to_string()]),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips() {
        let pool = test_pool().await;
        let repo = ArtistRepo::new(&pool);

        let new = guns_n_petals();
        let id = repo.create(&new).await.expect("create");
        let row = repo.get(id).await.expect("get").expect("exists");

        assert_eq!(row.name, new.name);
        assert_eq!(row.city, new.city);
        let raw = row.genres.expect("genres stored");
        assert_eq!(GenreList::decode(&raw).expect("decode"), new.genres);

        repo.delete(id).await.expect("cleanup");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn edit_missing_artist_is_not_found() {
        let pool = test_pool().await;
        let repo = ArtistRepo::new(&pool);

        let edit = ArtistEdit {
            name: "Nobody".to_string(),
            genres: GenreList::default(),
            city: "Nowhere".to_string(),
            state: "NA".to_string(),
            phone: "000".to_string(),
            facebook_link: None,
        };
        let result = repo.update(ArtistId::new(-1), &edit).await;
        assert!(matches!(result, Err(DirectoryError::ArtistNotFound(_))));
    }
}
