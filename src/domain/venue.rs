//! Venue entity and its change sets.

use super::{GenreList, VenueId};

/// A venue record as stored in the directory.
///
/// Owns a collection of shows; deleting a venue removes its shows in the
/// same transaction (see the persistence layer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    /// Database-generated identifier.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
    /// Genre tags.
    pub genres: GenreList,
    /// City the venue is located in.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Link to a venue image.
    pub image_link: Option<String>,
    /// Facebook page link.
    pub facebook_link: Option<String>,
    /// Venue website link.
    pub website_link: Option<String>,
    /// Whether the venue is currently looking for talent.
    pub seeking_talent: Option<bool>,
    /// Free-text description of what the venue is looking for.
    pub seeking_description: Option<String>,
}

/// Fields accepted when creating a venue.
#[derive(Debug, Clone)]
pub struct NewVenue {
    /// Venue name (required).
    pub name: String,
    /// Genre tags; defaults to the empty list.
    pub genres: GenreList,
    /// City (required).
    pub city: String,
    /// State (required).
    pub state: String,
    /// Street address (required).
    pub address: String,
    /// Phone number (required).
    pub phone: String,
    /// Facebook page link.
    pub facebook_link: Option<String>,
}

/// Fields accepted when editing a venue.
///
/// The edit surface is deliberately partial: address, image/website links,
/// and the seeking flags are never touched by an edit.
#[derive(Debug, Clone)]
pub struct VenueEdit {
    /// New venue name.
    pub name: String,
    /// New genre tags.
    pub genres: GenreList,
    /// New city.
    pub city: String,
    /// New state.
    pub state: String,
    /// New phone number.
    pub phone: String,
    /// New Facebook page link.
    pub facebook_link: Option<String>,
}
