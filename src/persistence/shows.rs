//! Show repository.
//!
//! Show creation verifies both foreign keys inside the insert transaction
//! so a dangling reference fails validation before anything is written.

use sqlx::PgPool;

use super::models::ShowListingRow;
use crate::domain::{NewShow, Show, ShowId, VenueId};
use crate::error::DirectoryError;

/// Show repository over a shared connection pool.
#[derive(Debug)]
pub struct ShowRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ShowRepo<'a> {
    /// Creates a repository borrowing the given pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Lists every show joined with its venue and artist, ordered by
    /// `(start_time, id)`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Storage`] on database failure.
    pub async fn list(&self) -> Result<Vec<ShowListingRow>, DirectoryError> {
        let rows = sqlx::query_as::<_, ShowListingRow>(
            r"
            SELECT s.id AS show_id, s.start_time,
                   v.id AS venue_id, v.name AS venue_name,
                   a.id AS artist_id, a.name AS artist_name,
                   a.image_link AS artist_image_link
            FROM shows s
            LEFT JOIN venues v ON v.id = s.venue_id
            LEFT JOIN artists a ON a.id = s.artist_id
            ORDER BY s.start_time, s.id
            ",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Inserts a new show after verifying both referenced entities exist.
    ///
    /// The existence checks and the insert share one transaction; a
    /// missing venue or artist produces a validation failure naming the
    /// missing side, with no partial insert.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] when a foreign key does not
    /// resolve, or [`DirectoryError::Storage`] on database failure.
    pub async fn create(&self, show: &NewShow) -> Result<Show, DirectoryError> {
        let mut tx = self.pool.begin().await?;

        let venue_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM venues WHERE id = $1)")
                .bind(show.venue_id)
                .fetch_one(&mut *tx)
                .await?;
        if !venue_exists {
            return Err(DirectoryError::Validation(format!(
                "venue {} does not exist",
                show.venue_id
            )));
        }

        let artist_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artists WHERE id = $1)")
                .bind(show.artist_id)
                .fetch_one(&mut *tx)
                .await?;
        if !artist_exists {
            return Err(DirectoryError::Validation(format!(
                "artist {} does not exist",
                show.artist_id
            )));
        }

        let id = sqlx::query_scalar::<_, ShowId>(
            r"
            INSERT INTO shows (start_time, venue_id, artist_id)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(show.start_time)
        .bind(show.venue_id)
        .bind(show.artist_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Show {
            id,
            venue_id: show.venue_id,
            artist_id: show.artist_id,
            start_time: show.start_time,
        })
    }

    /// Counts the shows attached to the given venue. Test and diagnostics
    /// helper for verifying cascade behavior.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Storage`] on database failure.
    pub async fn count_for_venue(&self, venue_id: VenueId) -> Result<i64, DirectoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows WHERE venue_id = $1")
            .bind(venue_id)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::{ArtistId, GenreList, NewArtist, NewVenue};
    use crate::persistence::artists::ArtistRepo;
    use crate::persistence::venues::VenueRepo;
    use chrono::{Duration, Utc};

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPool::connect(&url).await.expect("connect");
        crate::persistence::migrations::run(&pool)
            .await
            .expect("migrations");
        pool
    }

    async fn seed_venue(pool: &PgPool) -> VenueId {
        VenueRepo::new(pool)
            .create(&NewVenue {
                name: "Test Venue".to_string(),
                genres: GenreList::default(),
                city: "Testville".to_string(),
                state: "TS".to_string(),
                address: "1 Test St".to_string(),
                phone: "000".to_string(),
                facebook_link: None,
            })
            .await
            .expect("seed venue")
    }

    async fn seed_artist(pool: &PgPool) -> ArtistId {
        ArtistRepo::new(pool)
            .create(&NewArtist {
                name: "Test Artist".to_string(),
                genres: GenreList::default(),
                city: "Testville".to_string(),
                state: "TS".to_string(),
                phone: "000".to_string(),
                facebook_link: None,
            })
            .await
            .expect("seed artist")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_with_missing_venue_inserts_nothing() {
        let pool = test_pool().await;
        let artist = seed_artist(&pool).await;
        let repo = ShowRepo::new(&pool);

        let missing = VenueId::new(-1);
        let result = repo
            .create(&NewShow {
                venue_id: missing,
                artist_id: artist,
                start_time: Utc::now() + Duration::days(7),
            })
            .await;
        assert!(matches!(result, Err(DirectoryError::Validation(_))));
        assert_eq!(repo.count_for_venue(missing).await.expect("count"), 0);

        ArtistRepo::new(&pool).delete(artist).await.expect("cleanup");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn venue_delete_cascades_over_shows() {
        let pool = test_pool().await;
        let venue = seed_venue(&pool).await;
        let artist = seed_artist(&pool).await;
        let repo = ShowRepo::new(&pool);

        repo.create(&NewShow {
            venue_id: venue,
            artist_id: artist,
            start_time: Utc::now() + Duration::days(1),
        })
        .await
        .expect("create show");
        repo.create(&NewShow {
            venue_id: venue,
            artist_id: artist,
            start_time: Utc::now() - Duration::days(1),
        })
        .await
        .expect("create show");

        let removed = VenueRepo::new(&pool).delete(venue).await.expect("delete");
        assert_eq!(removed, 2);
        assert_eq!(repo.count_for_venue(venue).await.expect("count"), 0);

        ArtistRepo::new(&pool).delete(artist).await.expect("cleanup");
    }
}
