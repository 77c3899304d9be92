//! Show DTOs for the global listing and the booking form.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ShowId;
use crate::service::ShowListing;

/// One show in the `GET /shows` listing, with both endpoints resolved.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShowDto {
    /// Hosting venue id.
    pub venue_id: i64,
    /// Hosting venue name.
    pub venue_name: String,
    /// Performing artist id.
    pub artist_id: i64,
    /// Performing artist name.
    pub artist_name: String,
    /// Performing artist image link.
    pub artist_image_link: Option<String>,
    /// Booking time, formatted as `MM/DD/YYYY, HH:MM:SS`.
    pub start_time: String,
}

impl From<ShowListing> for ShowDto {
    fn from(l: ShowListing) -> Self {
        Self {
            venue_id: l.venue_id,
            venue_name: l.venue_name,
            artist_id: l.artist_id,
            artist_name: l.artist_name,
            artist_image_link: l.artist_image_link,
            start_time: crate::domain::format_start_time(l.start_time),
        }
    }
}

/// Form body for `POST /shows/create`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ShowForm {
    /// Performing artist id; must reference an existing artist.
    pub artist_id: i64,
    /// Hosting venue id; must reference an existing venue.
    pub venue_id: i64,
    /// Booking time as submitted; must parse as a timestamp.
    pub start_time: String,
}

/// Response body for `POST /shows/create` (201 Created).
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct ShowCreatedResponse {
    /// Generated show id.
    pub id: ShowId,
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn listing_formats_start_time() {
        let dto = ShowDto::from(ShowListing {
            venue_id: 1,
            venue_name: "The Musical Hop".to_string(),
            artist_id: 4,
            artist_name: "Guns N Petals".to_string(),
            artist_image_link: None,
            start_time: Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap(),
        });
        assert_eq!(dto.start_time, "05/21/2019, 21:30:00");

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["venue_name"], "The Musical Hop");
        assert_eq!(value["artist_name"], "Guns N Petals");
    }
}
