//! Query/aggregation and mutation orchestration layer.
//!
//! Services capture `now` once per operation and pass it down as a bind
//! parameter, so every derived past/upcoming classification within one
//! request agrees on the same instant. A show starting exactly at `now`
//! counts as upcoming; the two buckets partition an entity's shows exactly.

pub mod artist_service;
pub mod show_service;
pub mod venue_service;

pub use artist_service::{ArtistDetail, ArtistItem, ArtistService, ArtistSummary};
pub use show_service::{ShowListing, ShowService};
pub use venue_service::{LocationGroup, VenueDetail, VenueService, VenueSummary};

use chrono::{DateTime, Utc};

use crate::error::DirectoryError;
use crate::persistence::models::CounterpartShowRow;

/// A show resolved against its counterpart entity: the artist when viewing
/// a venue, the venue when viewing an artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowEntry {
    /// Counterpart entity id.
    pub counterpart_id: i64,
    /// Counterpart entity name.
    pub counterpart_name: String,
    /// Counterpart image link.
    pub counterpart_image_link: Option<String>,
    /// Booking time.
    pub start_time: DateTime<Utc>,
}

/// Resolves a joined show row, treating NULL counterpart columns as an
/// integrity violation rather than a silently skipped row.
pub(crate) fn resolve_counterpart(row: CounterpartShowRow) -> Result<ShowEntry, DirectoryError> {
    match (row.counterpart_id, row.counterpart_name) {
        (Some(counterpart_id), Some(counterpart_name)) => Ok(ShowEntry {
            counterpart_id,
            counterpart_name,
            counterpart_image_link: row.counterpart_image_link,
            start_time: row.start_time,
        }),
        _ => Err(DirectoryError::Internal(format!(
            "show {} references a missing counterpart",
            row.show_id
        ))),
    }
}

/// Splits resolved shows into `(past, upcoming)` around `now`.
///
/// Past is strictly before `now`; a show starting exactly at `now` lands in
/// the upcoming bucket. Relative order within each bucket is preserved.
pub(crate) fn partition_shows(
    entries: Vec<ShowEntry>,
    now: DateTime<Utc>,
) -> (Vec<ShowEntry>, Vec<ShowEntry>) {
    entries.into_iter().partition(|e| e.start_time < now)
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::ShowId;
    use chrono::TimeZone;

    fn entry(start_time: DateTime<Utc>) -> ShowEntry {
        ShowEntry {
            counterpart_id: 1,
            counterpart_name: "Guns N Petals".to_string(),
            counterpart_image_link: None,
            start_time,
        }
    }

    #[test]
    fn partition_is_exhaustive_and_tie_is_upcoming() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let before = now - chrono::Duration::seconds(1);
        let after = now + chrono::Duration::seconds(1);

        let (past, upcoming) =
            partition_shows(vec![entry(before), entry(now), entry(after)], now);

        assert_eq!(past.len(), 1);
        assert_eq!(past[0].start_time, before);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].start_time, now);
        assert_eq!(upcoming[1].start_time, after);
    }

    #[test]
    fn partition_of_empty_is_empty() {
        let now = Utc::now();
        let (past, upcoming) = partition_shows(vec![], now);
        assert!(past.is_empty());
        assert!(upcoming.is_empty());
    }

    #[test]
    fn missing_counterpart_is_an_internal_error() {
        let row = CounterpartShowRow {
            show_id: ShowId::new(3),
            start_time: Utc::now(),
            counterpart_id: None,
            counterpart_name: None,
            counterpart_image_link: None,
        };
        let result = resolve_counterpart(row);
        assert!(matches!(result, Err(DirectoryError::Internal(_))));
    }

    #[test]
    fn resolved_counterpart_carries_all_fields() {
        let now = Utc::now();
        let row = CounterpartShowRow {
            show_id: ShowId::new(3),
            start_time: now,
            counterpart_id: Some(9),
            counterpart_name: Some("The Musical Hop".to_string()),
            counterpart_image_link: Some("https://example.com/hop.jpg".to_string()),
        };
        let Ok(entry) = resolve_counterpart(row) else {
            panic!("should resolve");
        };
        assert_eq!(entry.counterpart_id, 9);
        assert_eq!(entry.counterpart_name, "The Musical Hop");
        assert_eq!(
            entry.counterpart_image_link.as_deref(),
            Some("https://example.com/hop.jpg")
        );
        assert_eq!(entry.start_time, now);
    }
}
