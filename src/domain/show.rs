//! Show entity, start-time parsing, and display formatting.
//!
//! A show is the join entity between a venue and an artist, carrying the
//! booking `start_time`. Whether a show is "past" or "upcoming" is derived
//! at query time, never stored: a show is past when its start time is
//! strictly before the evaluation instant and upcoming otherwise, so a show
//! starting exactly now counts as upcoming.

use chrono::{DateTime, NaiveDateTime, Utc};

use super::{ArtistId, ShowId, VenueId};

/// Display format for show start times, matching the rendered listings.
const START_TIME_DISPLAY: &str = "%m/%d/%Y, %H:%M:%S";

/// Accepted input formats for form-submitted start times, tried in order
/// after RFC 3339.
const START_TIME_INPUTS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// A show booking linking an artist to a venue at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Show {
    /// Database-generated identifier.
    pub id: ShowId,
    /// Venue hosting the show.
    pub venue_id: VenueId,
    /// Artist performing.
    pub artist_id: ArtistId,
    /// Booking time.
    pub start_time: DateTime<Utc>,
}

/// Fields accepted when creating a show.
#[derive(Debug, Clone, Copy)]
pub struct NewShow {
    /// Venue hosting the show; must reference an existing venue.
    pub venue_id: VenueId,
    /// Artist performing; must reference an existing artist.
    pub artist_id: ArtistId,
    /// Booking time.
    pub start_time: DateTime<Utc>,
}

/// Parses a form-submitted start time.
///
/// Accepts RFC 3339 (`2026-01-01T20:00:00Z`), plain
/// `YYYY-MM-DD HH:MM:SS`, and the `datetime-local` input formats with and
/// without seconds. Naive values are interpreted as UTC.
///
/// # Errors
///
/// Returns the raw input on failure so the caller can build a validation
/// message.
pub fn parse_start_time(raw: &str) -> Result<DateTime<Utc>, &str> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in START_TIME_INPUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(raw)
}

/// Formats a start time the way listings and detail views render it,
/// e.g. `06/15/2026, 21:30:00`.
#[must_use]
pub fn format_start_time(start_time: DateTime<Utc>) -> String {
    start_time.format(START_TIME_DISPLAY).to_string()
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339() {
        let Ok(dt) = parse_start_time("2026-06-15T21:30:00Z") else {
            panic!("rfc3339 should parse");
        };
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 6, 15, 21, 30, 0).unwrap());
    }

    #[test]
    fn parses_space_separated() {
        let Ok(dt) = parse_start_time("2026-06-15 21:30:00") else {
            panic!("space-separated should parse");
        };
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 6, 15, 21, 30, 0).unwrap());
    }

    #[test]
    fn parses_datetime_local_without_seconds() {
        let Ok(dt) = parse_start_time("2026-06-15T21:30") else {
            panic!("datetime-local should parse");
        };
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 6, 15, 21, 30, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_start_time("next tuesday").is_err());
        assert!(parse_start_time("").is_err());
        assert!(parse_start_time("2026-13-40 99:99:99").is_err());
    }

    #[test]
    fn display_format_matches_listing_style() {
        let dt = Utc.with_ymd_and_hms(2026, 6, 5, 9, 7, 3).unwrap();
        assert_eq!(format_start_time(dt), "06/05/2026, 09:07:03");
    }
}
