//! Show service: the global listing and show creation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{ArtistId, NewShow, Show, VenueId, parse_start_time};
use crate::error::DirectoryError;
use crate::persistence::ShowRepo;
use crate::persistence::models::ShowListingRow;

/// A show with both of its endpoints resolved, for the `/shows` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    /// Venue id.
    pub venue_id: i64,
    /// Venue name.
    pub venue_name: String,
    /// Artist id.
    pub artist_id: i64,
    /// Artist name.
    pub artist_name: String,
    /// Artist image link.
    pub artist_image_link: Option<String>,
    /// Booking time.
    pub start_time: DateTime<Utc>,
}

/// Orchestrates show queries and creation over the shared pool.
#[derive(Debug, Clone)]
pub struct ShowService {
    pool: PgPool,
}

impl ShowService {
    /// Creates a new `ShowService`.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists every show with resolved venue and artist names, ordered by
    /// `(start_time, id)`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Internal`] if a show references a
    /// missing venue or artist, or [`DirectoryError::Storage`] on
    /// database failure.
    pub async fn list(&self) -> Result<Vec<ShowListing>, DirectoryError> {
        let rows = ShowRepo::new(&self.pool).list().await?;
        rows.into_iter().map(resolve_listing).collect()
    }

    /// Validates the start time and creates a show referencing an existing
    /// venue and artist.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] when the timestamp does not
    /// parse or a referenced entity does not exist, or
    /// [`DirectoryError::Storage`] on database failure. Nothing is
    /// inserted on failure.
    pub async fn create(
        &self,
        venue_id: VenueId,
        artist_id: ArtistId,
        start_time: &str,
    ) -> Result<Show, DirectoryError> {
        let start_time = parse_start_time(start_time).map_err(|raw| {
            DirectoryError::Validation(format!("start_time does not parse: {raw:?}"))
        })?;

        let show = ShowRepo::new(&self.pool)
            .create(&NewShow {
                venue_id,
                artist_id,
                start_time,
            })
            .await?;

        tracing::info!(
            show_id = %show.id,
            venue_id = %venue_id,
            artist_id = %artist_id,
            start_time = %start_time,
            "show created"
        );
        Ok(show)
    }
}

fn resolve_listing(row: ShowListingRow) -> Result<ShowListing, DirectoryError> {
    match (row.venue_id, row.venue_name, row.artist_id, row.artist_name) {
        (Some(venue_id), Some(venue_name), Some(artist_id), Some(artist_name)) => {
            Ok(ShowListing {
                venue_id,
                venue_name,
                artist_id,
                artist_name,
                artist_image_link: row.artist_image_link,
                start_time: row.start_time,
            })
        }
        _ => Err(DirectoryError::Internal(format!(
            "show {} references a missing venue or artist",
            row.show_id
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::ShowId;

    #[test]
    fn listing_with_missing_side_is_an_internal_error() {
        let row = ShowListingRow {
            show_id: ShowId::new(1),
            start_time: Utc::now(),
            venue_id: Some(1),
            venue_name: Some("The Musical Hop".to_string()),
            artist_id: None,
            artist_name: None,
            artist_image_link: None,
        };
        assert!(matches!(
            resolve_listing(row),
            Err(DirectoryError::Internal(_))
        ));
    }

    #[test]
    fn fully_resolved_listing_maps_through() {
        let now = Utc::now();
        let row = ShowListingRow {
            show_id: ShowId::new(1),
            start_time: now,
            venue_id: Some(1),
            venue_name: Some("The Musical Hop".to_string()),
            artist_id: Some(4),
            artist_name: Some("Guns N Petals".to_string()),
            artist_image_link: Some("https://example.com/gnp.jpg".to_string()),
        };
        let Ok(listing) = resolve_listing(row) else {
            panic!("should resolve");
        };
        assert_eq!(listing.venue_name, "The Musical Hop");
        assert_eq!(listing.artist_name, "Guns N Petals");
        assert_eq!(listing.start_time, now);
    }
}
