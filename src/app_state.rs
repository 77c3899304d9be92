//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{ArtistService, ShowService, VenueService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor. All services share one `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Venue queries and mutations.
    pub venue_service: Arc<VenueService>,
    /// Artist queries and mutations.
    pub artist_service: Arc<ArtistService>,
    /// Show queries and creation.
    pub show_service: Arc<ShowService>,
}

impl AppState {
    /// Builds the state from a shared connection pool.
    #[must_use]
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self {
            venue_service: Arc::new(VenueService::new(pool.clone())),
            artist_service: Arc::new(ArtistService::new(pool.clone())),
            show_service: Arc::new(ShowService::new(pool)),
        }
    }
}
