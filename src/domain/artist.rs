//! Artist entity and its change sets.

use super::{ArtistId, GenreList};

/// An artist record as stored in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    /// Database-generated identifier.
    pub id: ArtistId,
    /// Artist name.
    pub name: String,
    /// Genre tags; `None` when never set.
    pub genres: Option<GenreList>,
    /// City the artist is based in.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Contact phone number.
    pub phone: String,
    /// Link to an artist image.
    pub image_link: Option<String>,
    /// Facebook page link.
    pub facebook_link: Option<String>,
    /// Artist website link.
    pub website_link: Option<String>,
    /// Whether the artist is currently looking for venues.
    pub seeking_venue: Option<bool>,
    /// Free-text description of what the artist is looking for.
    pub seeking_description: Option<String>,
}

/// Fields accepted when creating an artist.
#[derive(Debug, Clone)]
pub struct NewArtist {
    /// Artist name (required).
    pub name: String,
    /// Genre tags; defaults to the empty list.
    pub genres: GenreList,
    /// City (required).
    pub city: String,
    /// State (required).
    pub state: String,
    /// Phone number (required).
    pub phone: String,
    /// Facebook page link.
    pub facebook_link: Option<String>,
}

/// Fields accepted when editing an artist.
///
/// Same partial-update contract as venues: untouched columns keep their
/// stored values.
#[derive(Debug, Clone)]
pub struct ArtistEdit {
    /// New artist name.
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
