//! Venue DTOs for listings, search, detail, and form submissions.
//!
//! Detail and listing responses use the page-facing key names
//! (`website`, `artist_name`, `past_shows_count`, ...).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{GenreList, NewVenue, VenueEdit, VenueId};
use crate::service::{LocationGroup, ShowEntry, VenueDetail, VenueSummary};

/// A venue inside a grouped listing or search result.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueSummaryDto {
    /// Venue id.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
    /// Count of upcoming shows.
    pub num_upcoming_shows: i64,
}

impl From<VenueSummary> for VenueSummaryDto {
    fn from(s: VenueSummary) -> Self {
        Self {
            id: s.id,
            name: s.name,
            num_upcoming_shows: s.num_upcoming_shows,
        }
    }
}

/// One `(city, state)` group in the `GET /venues` listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueAreaDto {
    /// Grouping city.
    pub city: String,
    /// Grouping state.
    pub state: String,
    /// Venues at this location.
    pub venues: Vec<VenueSummaryDto>,
}

impl From<LocationGroup> for VenueAreaDto {
    fn from(g: LocationGroup) -> Self {
        Self {
            city: g.city,
            state: g.state,
            venues: g.venues.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response body for `POST /venues/search`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueSearchResponse {
    /// Total number of matches; always equals `data.len()`.
    pub count: usize,
    /// Matching venues.
    pub data: Vec<VenueSummaryDto>,
}

impl VenueSearchResponse {
    /// Wraps search results, deriving `count` from the result length.
    #[must_use]
    pub fn new(results: Vec<VenueSummary>) -> Self {
        let data: Vec<VenueSummaryDto> = results.into_iter().map(Into::into).collect();
        Self {
            count: data.len(),
            data,
        }
    }
}

/// A show on a venue's detail page, resolved to its artist.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueShowDto {
    /// Performing artist id.
    pub artist_id: i64,
    /// Performing artist name.
    pub artist_name: String,
    /// Performing artist image link.
    pub artist_image_link: Option<String>,
    /// Booking time, formatted as `MM/DD/YYYY, HH:MM:SS`.
    pub start_time: String,
}

impl From<ShowEntry> for VenueShowDto {
    fn from(e: ShowEntry) -> Self {
        Self {
            artist_id: e.counterpart_id,
            artist_name: e.counterpart_name,
            artist_image_link: e.counterpart_image_link,
            start_time: crate::domain::format_start_time(e.start_time),
        }
    }
}

/// Response body for `GET /venues/{id}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueDetailDto {
    /// Venue id.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
    /// Decoded genre tags.
    pub genres: Vec<String>,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Phone number.
    pub phone: String,
    /// Venue website link (rendered key: `website`).
    pub website: Option<String>,
    /// Facebook page link.
    pub facebook_link: Option<String>,
    /// Seeking-talent flag.
    pub seeking_talent: Option<bool>,
    /// Seeking description.
    pub seeking_description: Option<String>,
    /// Image link.
    pub image_link: Option<String>,
    /// Shows strictly before now.
    pub past_shows: Vec<VenueShowDto>,
    /// Shows at or after now.
    pub upcoming_shows: Vec<VenueShowDto>,
    /// Length of `past_shows`.
    pub past_shows_count: usize,
    /// Length of `upcoming_shows`.
    pub upcoming_shows_count: usize,
}

impl From<VenueDetail> for VenueDetailDto {
    fn from(d: VenueDetail) -> Self {
        let past_shows: Vec<VenueShowDto> = d.past_shows.into_iter().map(Into::into).collect();
        let upcoming_shows: Vec<VenueShowDto> =
            d.upcoming_shows.into_iter().map(Into::into).collect();
        Self {
            id: d.venue.id,
            name: d.venue.name,
            genres: d.venue.genres.into_inner(),
            address: d.venue.address,
            city: d.venue.city,
            state: d.venue.state,
            phone: d.venue.phone,
            website: d.venue.website_link,
            facebook_link: d.venue.facebook_link,
            seeking_talent: d.venue.seeking_talent,
            seeking_description: d.venue.seeking_description,
            image_link: d.venue.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

/// Response body for `GET /venues/{id}/edit`: the stored record the edit
/// form is prefilled from, without show history.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueRecordDto {
    /// Venue id.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
    /// Decoded genre tags.
    pub genres: Vec<String>,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Phone number.
    pub phone: String,
    /// Venue website link (rendered key: `website`).
    pub website: Option<String>,
    /// Facebook page link.
    pub facebook_link: Option<String>,
    /// Seeking-talent flag.
    pub seeking_talent: Option<bool>,
    /// Seeking description.
    pub seeking_description: Option<String>,
    /// Image link.
    pub image_link: Option<String>,
}

impl From<crate::domain::Venue> for VenueRecordDto {
    fn from(v: crate::domain::Venue) -> Self {
        Self {
            id: v.id,
            name: v.name,
            genres: v.genres.into_inner(),
            address: v.address,
            city: v.city,
            state: v.state,
            phone: v.phone,
            website: v.website_link,
            facebook_link: v.facebook_link,
            seeking_talent: v.seeking_talent,
            seeking_description: v.seeking_description,
            image_link: v.image_link,
        }
    }
}

/// Form body for `POST /venues/create`. The `genres` key may repeat.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VenueForm {
    /// Venue name (required).
    pub name: String,
    /// Street address (required).
    pub address: String,
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

impl VenueForm {
    /// Converts the form into a create change set.
    #[must_use]
    pub fn into_new_venue(self) -> NewVenue {
        NewVenue {
            name: self.name,
            genres: GenreList::new(self.genres),
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            facebook_link: self.facebook_link,
        }
    }
}

/// Form body for `POST /venues/{id}/edit`. There is no `address` key:
/// address is outside the edit surface.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VenueEditForm {
    /// New venue name (required).
    pub name: String,
    /// New city (required).
    pub city: String,
    /// New state (required).
    pub state: String,
    /// New phone number (required).
    pub phone: String,
    /// New genre tags (repeatable key).
    #[serde(default)]
    pub genres: Vec<String>,
    /// New Facebook page link.
    #[serde(default)]
    pub facebook_link: Option<String>,
}

impl VenueEditForm {
    /// Converts the form into an edit change set.
    #[must_use]
    pub fn into_edit(self) -> VenueEdit {
        VenueEdit {
            name: self.name,
            genres: GenreList::new(self.genres),
            city: self.city,
            state: self.state,
            phone: self.phone,
            facebook_link: self.facebook_link,
        }
    }
}

/// Response body for venue create/edit, reporting the affected identity.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueMutationResponse {
    /// Venue id.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn detail_uses_rendered_key_names() {
        let detail = VenueDetail {
            venue: crate::domain::Venue {
                id: VenueId::new(1),
                name: "The Musical Hop".to_string(),
                genres: GenreList::new(vec!["Jazz".to_string()]),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                address: "1015 Folsom Street".to_string(),
                phone: "123-123-1234".to_string(),
                image_link: None,
                facebook_link: None,
                website_link: Some("https://themusicalhop.com".to_string()),
                seeking_talent: Some(true),
                seeking_description: None,
            },
            past_shows: vec![ShowEntry {
                counterpart_id: 4,
                counterpart_name: "Guns N Petals".to_string(),
                counterpart_image_link: None,
                start_time: Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap(),
            }],
            upcoming_shows: vec![],
        };

        let value = serde_json::to_value(VenueDetailDto::from(detail)).unwrap();
        assert_eq!(value["website"], "https://themusicalhop.com");
        assert_eq!(value["past_shows_count"], 1);
        assert_eq!(value["upcoming_shows_count"], 0);
        assert_eq!(value["past_shows"][0]["artist_name"], "Guns N Petals");
        assert_eq!(value["past_shows"][0]["start_time"], "05/21/2019, 21:30:00");
        assert!(value.get("website_link").is_none());
    }

    #[test]
    fn search_count_equals_data_length() {
        let response = VenueSearchResponse::new(vec![
            VenueSummary {
                id: VenueId::new(1),
                name: "The Musical Hop".to_string(),
                num_upcoming_shows: 0,
            },
            VenueSummary {
                id: VenueId::new(3),
                name: "Park Square Live Music & Coffee".to_string(),
                num_upcoming_shows: 1,
            },
        ]);
        assert_eq!(response.count, response.data.len());
        assert_eq!(response.count, 2);
    }

    #[test]
    fn edit_form_maps_into_change_set() {
        let form = VenueEditForm {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "123-123-1234".to_string(),
            genres: vec!["Jazz".to_string(), "Swing".to_string()],
            facebook_link: None,
        };
        let edit = form.into_edit();
        assert_eq!(edit.genres.as_slice(), ["Jazz", "Swing"]);
        assert_eq!(edit.city, "San Francisco");
    }
}
