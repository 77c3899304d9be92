//! # bandstand
//!
//! REST directory service for venues, artists, and show bookings.
//!
//! Clients browse venues grouped by location, search venues and artists by
//! name, inspect show history split into past and upcoming, and create or
//! edit records through form submissions. Every operation maps onto one or
//! more PostgreSQL queries or one transactional mutation.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── Handlers + DTOs (api/)
//!     │
//!     ├── VenueService / ArtistService / ShowService (service/)
//!     │     grouping, search shaping, past/upcoming partitioning
//!     │
//!     ├── VenueRepo / ArtistRepo / ShowRepo (persistence/)
//!     │     one transaction per mutation, explicit delete cascades
//!     │
//!     └── PostgreSQL (sqlx)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
