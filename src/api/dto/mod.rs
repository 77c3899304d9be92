//! Data Transfer Objects for request/response serialization.
//!
//! Responses are the view models the directory pages consume, with the
//! page-facing key names (`website`, `artist_name`, `past_shows_count`,
//! ...). Request bodies are urlencoded forms; the `genres` key may repeat.

pub mod artist_dto;
pub mod common_dto;
pub mod show_dto;
pub mod venue_dto;

pub use artist_dto::*;
pub use common_dto::*;
pub use show_dto::*;
pub use venue_dto::*;
