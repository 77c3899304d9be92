//! Core domain types: entity identifiers, value types for venues, artists,
//! and shows, and the genre tag list with its storage codec.

pub mod artist;
pub mod genres;
pub mod ids;
pub mod show;
pub mod venue;

pub use artist::{Artist, ArtistEdit, NewArtist};
pub use genres::GenreList;
pub use ids::{ArtistId, ShowId, VenueId};
pub use show::{NewShow, Show, format_start_time, parse_start_time};
pub use venue::{NewVenue, Venue, VenueEdit};
