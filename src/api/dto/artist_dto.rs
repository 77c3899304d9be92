//! Artist DTOs for listings, search, detail, and form submissions.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ArtistEdit, ArtistId, GenreList, NewArtist};
use crate::service::{ArtistDetail, ArtistItem, ArtistSummary, ShowEntry};

/// An artist inside the flat `GET /artists` listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistItemDto {
    /// Artist id.
    pub id: ArtistId,
    /// Artist name.
    pub name: String,
}

impl From<ArtistItem> for ArtistItemDto {
    fn from(i: ArtistItem) -> Self {
        Self {
            id: i.id,
            name: i.name,
        }
    }
}

/// An artist inside a search result.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistSummaryDto {
    /// Artist id.
    pub id: ArtistId,
    /// Artist name.
    pub name: String,
    /// Count of upcoming shows.
    pub num_upcoming_shows: i64,
}

impl From<ArtistSummary> for ArtistSummaryDto {
    fn from(s: ArtistSummary) -> Self {
        Self {
            id: s.id,
            name: s.name,
            num_upcoming_shows: s.num_upcoming_shows,
        }
    }
}

/// Response body for `POST /artists/search`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistSearchResponse {
    /// Total number of matches; always equals `data.len()`.
    pub count: usize,
    /// Matching artists.
    pub data: Vec<ArtistSummaryDto>,
}

impl ArtistSearchResponse {
    /// Wraps search results, deriving `count` from the result length.
    #[must_use]
    pub fn new(results: Vec<ArtistSummary>) -> Self {
        let data: Vec<ArtistSummaryDto> = results.into_iter().map(Into::into).collect();
        Self {
            count: data.len(),
            data,
        }
    }
}

/// A show on an artist's detail page, resolved to its venue.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistShowDto {
    /// Hosting venue id.
    pub venue_id: i64,
    /// Hosting venue name.
    pub venue_name: String,
    /// Hosting venue image link.
    pub venue_image_link: Option<String>,
    /// Booking time, formatted as `MM/DD/YYYY, HH:MM:SS`.
    pub start_time: String,
}

impl From<ShowEntry> for ArtistShowDto {
    fn from(e: ShowEntry) -> Self {
        Self {
            venue_id: e.counterpart_id,
            venue_name: e.counterpart_name,
            venue_image_link: e.counterpart_image_link,
            start_time: crate::domain::format_start_time(e.start_time),
        }
    }
}

/// Response body for `GET /artists/{id}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistDetailDto {
    /// Artist id.
    pub id: ArtistId,
    /// Artist name.
    pub name: String,
    /// Decoded genre tags; empty when never set.
    pub genres: Vec<String>,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Phone number.
    pub phone: String,
    /// Artist website link (rendered key: `website`).
    pub website: Option<String>,
    /// Facebook page link.
    pub facebook_link: Option<String>,
    /// Seeking-venue flag.
    pub seeking_venue: Option<bool>,
    /// Seeking description.
    pub seeking_description: Option<String>,
    /// Image link.
    pub image_link: Option<String>,
    /// Shows strictly before now.
    pub past_shows: Vec<ArtistShowDto>,
    /// Shows at or after now.
    pub upcoming_shows: Vec<ArtistShowDto>,
    /// Length of `past_shows`.
    pub past_shows_count: usize,
    /// Length of `upcoming_shows`.
    pub upcoming_shows_count: usize,
}

impl From<ArtistDetail> for ArtistDetailDto {
    fn from(d: ArtistDetail) -> Self {
        let past_shows: Vec<ArtistShowDto> = d.past_shows.into_iter().map(Into::into).collect();
        let upcoming_shows: Vec<ArtistShowDto> =
            d.upcoming_shows.into_iter().map(Into::into).collect();
        Self {
            id: d.artist.id,
            name: d.artist.name,
            genres: d.artist.genres.map(GenreList::into_inner).unwrap_or_default(),
            city: d.artist.city,
            state: d.artist.state,
            phone: d.artist.phone,
            website: d.artist.website_link,
            facebook_link: d.artist.facebook_link,
            seeking_venue: d.artist.seeking_venue,
            seeking_description: d.artist.seeking_description,
            image_link: d.artist.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

/// Response body for `GET /artists/{id}/edit`: the stored record the edit
/// form is prefilled from, without show history.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistRecordDto {
    /// Artist id.
    pub id: ArtistId,
    /// Artist name.
    pub name: String,
    /// Decoded genre tags; empty when never set.
    pub genres: Vec<String>,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Phone number.
    pub phone: String,
    /// Artist website link (rendered key: `website`).
    pub website: Option<String>,
    /// Facebook page link.
    pub facebook_link: Option<String>,
    /// Seeking-venue flag.
    pub seeking_venue: Option<bool>,
    /// Seeking description.
    pub seeking_description: Option<String>,
    /// Image link.
    pub image_link: Option<String>,
}

impl From<crate::domain::Artist> for ArtistRecordDto {
    fn from(a: crate::domain::Artist) -> Self {
        Self {
            id: a.id,
            name: a.name,
            genres: a.genres.map(GenreList::into_inner).unwrap_or_default(),
            city: a.city,
            state: a.state,
            phone: a.phone,
            website: a.website_link,
            facebook_link: a.facebook_link,
            seeking_venue: a.seeking_venue,
            seeking_description: a.seeking_description,
            image_link: a.image_link,
        }
    }
}

/// Form body for `POST /artists/create` and `POST /artists/{id}/edit`.
/// The `genres` key may repeat.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ArtistForm {
    /// Artist name (required).
    pub name: String,
    /// City (required).
    pub city: String,
    /// State (required).
    pub state: String,
    /// Phone number (required).
    pub phone: String,
    /// Genre tags (repeatable key).
    #[serde(default)]
    pub genres: Vec<String>,
    /// Facebook page link.
    #[serde(default)]
    pub facebook_link: Option<String>,
}

impl ArtistForm {
    /// Converts the form into a create change set.
    #[must_use]
    pub fn into_new_artist(self) -> NewArtist {
        NewArtist {
            name: self.name,
            genres: GenreList::new(self.genres),
            city: self.city,
            state: self.state,
            phone: self.phone,
            facebook_link: self.facebook_link,
        }
    }

    /// Converts the form into an edit change set.
    #[must_use]
    pub fn into_edit(self) -> ArtistEdit {
        ArtistEdit {
            name: self.name,
            genres: GenreList::new(self.genres),
            city: self.city,
            state: self.state,
            phone: self.phone,
            facebook_link: self.facebook_link,
        }
    }
}

/// Response body for artist create/edit, reporting the affected identity.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistMutationResponse {
    /// Artist id.
    pub id: ArtistId,
    /// Artist name.
    pub name: String,
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn detail_uses_venue_keys_for_shows() {
        let detail = ArtistDetail {
            artist: crate::domain::Artist {
                id: ArtistId::new(4),
                name: "Guns N Petals".to_string(),
                genres: None,
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                phone: "326-123-5000".to_string(),
                image_link: None,
                facebook_link: None,
                website_link: None,
                seeking_venue: Some(true),
                seeking_description: None,
            },
            past_shows: vec![],
            upcoming_shows: vec![ShowEntry {
                counterpart_id: 1,
                counterpart_name: "The Musical Hop".to_string(),
                counterpart_image_link: Some("https://example.com/hop.jpg".to_string()),
                start_time: Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap(),
            }],
        };

        let value = serde_json::to_value(ArtistDetailDto::from(detail)).unwrap();
        assert_eq!(value["genres"], serde_json::json!([]));
        assert_eq!(value["past_shows_count"], 0);
        assert_eq!(value["upcoming_shows_count"], 1);
        assert_eq!(value["upcoming_shows"][0]["venue_name"], "The Musical Hop");
        assert_eq!(
            value["upcoming_shows"][0]["venue_image_link"],
            "https://example.com/hop.jpg"
        );
        assert_eq!(
            value["upcoming_shows"][0]["start_time"],
            "04/01/2035, 20:00:00"
        );
    }

    #[test]
    fn search_count_equals_data_length() {
        let response = ArtistSearchResponse::new(vec![ArtistSummary {
            id: ArtistId::new(4),
            name: "Guns N Petals".to_string(),
            num_upcoming_shows: 1,
        }]);
        assert_eq!(response.count, 1);
        assert_eq!(response.data.len(), 1);
    }
}
