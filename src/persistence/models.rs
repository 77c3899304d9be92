//! Database row types and their conversions into domain entities.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::{Artist, ArtistId, GenreList, ShowId, Venue, VenueId};
use crate::error::DirectoryError;

/// A full venue row from the `venues` table.
#[derive(Debug, Clone, FromRow)]
pub struct VenueRow {
    /// Primary key.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
    /// Encoded genre list (see [`GenreList`]).
    pub genres: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Street address.
    pub address: String,
    /// Phone number.
    pub phone: String,
    /// Image link.
    pub image_link: Option<String>,
    /// Facebook link.
    pub facebook_link: Option<String>,
    /// Website link.
    pub website_link: Option<String>,
    /// Seeking-talent flag.
    pub seeking_talent: Option<bool>,
    /// Seeking description.
    pub seeking_description: Option<String>,
}

impl TryFrom<VenueRow> for Venue {
    type Error = DirectoryError;

    fn try_from(row: VenueRow) -> Result<Self, Self::Error> {
        let genres = GenreList::decode(&row.genres)?;
        Ok(Self {
            id: row.id,
            name: row.name,
            genres,
            city: row.city,
            state: row.state,
            address: row.address,
            phone: row.phone,
            image_link: row.image_link,
            facebook_link: row.facebook_link,
            website_link: row.website_link,
            seeking_talent: row.seeking_talent,
            seeking_description: row.seeking_description,
        })
    }
}

/// A full artist row from the `artists` table.
#[derive(Debug, Clone, FromRow)]
pub struct ArtistRow {
    /// Primary key.
    pub id: ArtistId,
    /// Artist name.
    pub name: String,
    /// Encoded genre list; `NULL` when never set.
    pub genres: Option<String>,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Phone number.
    pub phone: String,
    /// Image link.
    pub image_link: Option<String>,
    /// Facebook link.
    pub facebook_link: Option<String>,
    /// Website link.
    pub website_link: Option<String>,
    /// Seeking-venue flag.
    pub seeking_venue: Option<bool>,
    /// Seeking description.
    pub seeking_description: Option<String>,
}

impl TryFrom<ArtistRow> for Artist {
    type Error = DirectoryError;

    fn try_from(row: ArtistRow) -> Result<Self, Self::Error> {
        let genres = match row.genres.as_deref() {
            Some(raw) => Some(GenreList::decode(raw)?),
            None => None,
        };
        Ok(Self {
            id: row.id,
            name: row.name,
            genres,
            city: row.city,
            state: row.state,
            phone: row.phone,
            image_link: row.image_link,
            facebook_link: row.facebook_link,
            website_link: row.website_link,
            seeking_venue: row.seeking_venue,
            seeking_description: row.seeking_description,
        })
    }
}

/// Venue listing row with its upcoming-show count, ordered by
/// `(city, state, id)` so the service can fold adjacent rows into
/// location groups.
#[derive(Debug, Clone, FromRow)]
pub struct VenueUpcomingRow {
    /// Primary key.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
    /// City (grouping key, first component).
    pub city: String,
    /// State (grouping key, second component).
    pub state: String,
    /// Count of shows starting at or after the query's `now`.
    pub num_upcoming: i64,
}

/// Minimal artist row for the flat `/artists` listing.
#[derive(Debug, Clone, FromRow)]
pub struct ArtistNameRow {
    /// Primary key.
    pub id: ArtistId,
    /// Artist name.
    pub name: String,
}

/// Artist search result row with its upcoming-show count.
#[derive(Debug, Clone, FromRow)]
pub struct ArtistUpcomingRow {
    /// Primary key.
    pub id: ArtistId,
    /// Artist name.
    pub name: String,
    /// Count of shows starting at or after the query's `now`.
    pub num_upcoming: i64,
}

/// A show row joined with its counterpart entity (the artist when listing a
/// venue's shows, the venue when listing an artist's).
///
/// The join is a LEFT JOIN so a dangling foreign key surfaces as `NULL`
/// counterpart columns; the service treats that as an integrity violation.
#[derive(Debug, Clone, FromRow)]
pub struct CounterpartShowRow {
    /// Show primary key.
    pub show_id: ShowId,
    /// Booking time.
    pub start_time: DateTime<Utc>,
    /// Counterpart primary key; `NULL` if the join missed.
    pub counterpart_id: Option<i64>,
    /// Counterpart name; `NULL` if the join missed.
    pub counterpart_name: Option<String>,
    /// Counterpart image link (nullable column).
    pub counterpart_image_link: Option<String>,
}

/// A show row joined with both its venue and artist for the global listing.
#[derive(Debug, Clone, FromRow)]
pub struct ShowListingRow {
    /// Show primary key.
    pub show_id: ShowId,
    /// Booking time.
    pub start_time: DateTime<Utc>,
    /// Venue primary key; `NULL` if the join missed.
    pub venue_id: Option<i64>,
    /// Venue name; `NULL` if the join missed.
    pub venue_name: Option<String>,
    /// Artist primary key; `NULL` if the join missed.
    pub artist_id: Option<i64>,
    /// Artist name; `NULL` if the join missed.
    pub artist_name: Option<String>,
    /// Artist image link (nullable column).
    pub artist_image_link: Option<String>,
}
