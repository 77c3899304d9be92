//! Persistence layer: PostgreSQL repositories for venues, artists, and
//! shows, plus startup migrations.
//!
//! Each repository borrows the shared `sqlx::PgPool` and makes every
//! database round trip explicit at the call site. Mutations run inside one
//! transaction each; reads are plain queries.

pub mod artists;
pub mod migrations;
pub mod models;
pub mod shows;
pub mod venues;

pub use artists::ArtistRepo;
pub use shows::ShowRepo;
pub use venues::VenueRepo;
