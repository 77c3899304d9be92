//! Artist service: flat listing, search, detail assembly, and mutations.

use chrono::Utc;
use sqlx::PgPool;

use super::{ShowEntry, partition_shows, resolve_counterpart};
use crate::domain::{Artist, ArtistEdit, ArtistId, NewArtist};
use crate::error::DirectoryError;
use crate::persistence::ArtistRepo;

/// An artist inside the flat listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistItem {
    /// Artist id.
    pub id: ArtistId,
    /// Artist name.
    pub name: String,
}

/// An artist inside a search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistSummary {
    /// Artist id.
    pub id: ArtistId,
    /// Artist name.
    pub name: String,
    /// Count of shows starting at or after the query instant.
    pub num_upcoming_shows: i64,
}

/// A fully assembled artist detail view.
#[derive(Debug, Clone)]
pub struct ArtistDetail {
    /// The artist record with decoded genres.
    pub artist: Artist,
    /// Shows strictly before the query instant.
    pub past_shows: Vec<ShowEntry>,
    /// Shows at or after the query instant.
    pub upcoming_shows: Vec<ShowEntry>,
}

/// Orchestrates artist queries and mutations over the shared pool.
#[derive(Debug, Clone)]
pub struct ArtistService {
    pool: PgPool,
}

impl ArtistService {
    /// Creates a new `ArtistService`.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns all artists as a flat list ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Storage`] on database failure.
    pub async fn list(&self) -> Result<Vec<ArtistItem>, DirectoryError> {
        let rows = ArtistRepo::new(&self.pool).list().await?;
        Ok(rows
            .into_iter()
            .map(|r| ArtistItem {
                id: r.id,
                name: r.name,
            })
            .collect())
    }

    /// Case-insensitive substring search on artist name.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Storage`] on database failure.
    pub async fn search(&self, term: &str) -> Result<Vec<ArtistSummary>, DirectoryError> {
        let now = Utc::now();
        let rows = ArtistRepo::new(&self.pool).search(term, now).await?;
        Ok(rows
            .into_iter()
            .map(|r| ArtistSummary {
                id: r.id,
                name: r.name,
                num_upcoming_shows: r.num_upcoming,
            })
            .collect())
    }

    /// Assembles the artist detail view: the record with decoded genres
    /// and its shows partitioned into past and upcoming.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] if the id does not
    /// resolve, [`DirectoryError::Internal`] if a show references a
    /// missing venue, or [`DirectoryError`] on decode/storage failure.
    pub async fn detail(&self, id: ArtistId) -> Result<ArtistDetail, DirectoryError> {
        let now = Utc::now();
        let repo = ArtistRepo::new(&self.pool);

        let row = repo
            .get(id)
            .await?
            .ok_or(DirectoryError::ArtistNotFound(id))?;
        let artist = Artist::try_from(row)?;

        let shows = repo
            .shows_with_venues(id)
            .await?
            .into_iter()
            .map(resolve_counterpart)
            .collect::<Result<Vec<_>, _>>()?;
        let (past_shows, upcoming_shows) = partition_shows(shows, now);

        Ok(ArtistDetail {
            artist,
            past_shows,
            upcoming_shows,
        })
    }

    /// Fetches the stored artist record with decoded genres, without show
    /// history. Backs the edit-form prefill.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] if the id does not
    /// resolve, or [`DirectoryError`] on decode/storage failure.
    pub async fn record(&self, id: ArtistId) -> Result<Artist, DirectoryError> {
        let row = ArtistRepo::new(&self.pool)
            .get(id)
            .await?
            .ok_or(DirectoryError::ArtistNotFound(id))?;
        Artist::try_from(row)
    }

    /// Creates an artist and returns its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on encode/storage failure; the
    /// transaction rolls back in full.
    pub async fn create(&self, artist: &NewArtist) -> Result<ArtistId, DirectoryError> {
        let id = ArtistRepo::new(&self.pool).create(artist).await?;
        tracing::info!(artist_id = %id, name = %artist.name, "artist created");
        Ok(id)
    }

    /// Applies a partial edit to an artist.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] if the id does not
    /// resolve, or [`DirectoryError`] on encode/storage failure.
    pub async fn edit(&self, id: ArtistId, edit: &ArtistEdit) -> Result<(), DirectoryError> {
        ArtistRepo::new(&self.pool).update(id, edit).await?;
        tracing::info!(artist_id = %id, "artist updated");
        Ok(())
    }

    /// Deletes an artist and its dependent shows, symmetric with the
    /// venue cascade.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] if the id does not
    /// resolve, or [`DirectoryError::Storage`] on database failure.
    pub async fn delete(&self, id: ArtistId) -> Result<(), DirectoryError> {
        let shows_removed = ArtistRepo::new(&self.pool).delete(id).await?;
        tracing::info!(artist_id = %id, shows_removed, "artist deleted");
        Ok(())
    }
}
