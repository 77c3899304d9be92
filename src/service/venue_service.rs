//! Venue service: grouped listings, search, detail assembly, and mutations.

use chrono::Utc;
use sqlx::PgPool;

use super::{ShowEntry, partition_shows, resolve_counterpart};
use crate::domain::{NewVenue, Venue, VenueEdit, VenueId};
use crate::error::DirectoryError;
use crate::persistence::VenueRepo;
use crate::persistence::models::VenueUpcomingRow;

/// A venue inside a listing or search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSummary {
    /// Venue id.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
    /// Count of shows starting at or after the query instant.
    pub num_upcoming_shows: i64,
}

/// All venues sharing one `(city, state)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGroup {
    /// Grouping city.
    pub city: String,
    /// Grouping state.
    pub state: String,
    /// Venues at this location; never empty.
    pub venues: Vec<VenueSummary>,
}

/// A fully assembled venue detail view.
#[derive(Debug, Clone)]
pub struct VenueDetail {
    /// The venue record with decoded genres.
    pub venue: Venue,
    /// Shows strictly before the query instant.
    pub past_shows: Vec<ShowEntry>,
    /// Shows at or after the query instant.
    pub upcoming_shows: Vec<ShowEntry>,
}

/// Orchestrates venue queries and mutations over the shared pool.
#[derive(Debug, Clone)]
pub struct VenueService {
    pool: PgPool,
}

impl VenueService {
    /// Creates a new `VenueService`.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns all venues grouped by the distinct `(city, state)` pairs
    /// present in storage. Groups are ordered by `(city, state)` and
    /// venues within a group by id, so output is stable for a fixed
    /// storage state.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Storage`] on database failure.
    pub async fn list_grouped(&self) -> Result<Vec<LocationGroup>, DirectoryError> {
        let now = Utc::now();
        let rows = VenueRepo::new(&self.pool).list_with_upcoming(now).await?;
        Ok(group_by_location(rows))
    }

    /// Case-insensitive substring search on venue name.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Storage`] on database failure.
    pub async fn search(&self, term: &str) -> Result<Vec<VenueSummary>, DirectoryError> {
        let now = Utc::now();
        let rows = VenueRepo::new(&self.pool).search(term, now).await?;
        Ok(rows.into_iter().map(summary_from_row).collect())
    }

    /// Assembles the venue detail view: the record with decoded genres and
    /// its shows partitioned into past and upcoming.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] if the id does not
    /// resolve, [`DirectoryError::Internal`] if a show references a
    /// missing artist, or [`DirectoryError`] on decode/storage failure.
    pub async fn detail(&self, id: VenueId) -> Result<VenueDetail, DirectoryError> {
        let now = Utc::now();
        let repo = VenueRepo::new(&self.pool);

        let row = repo.get(id).await?.ok_or(DirectoryError::VenueNotFound(id))?;
        let venue = Venue::try_from(row)?;

        let shows = repo
            .shows_with_artists(id)
            .await?
            .into_iter()
            .map(resolve_counterpart)
            .collect::<Result<Vec<_>, _>>()?;
        let (past_shows, upcoming_shows) = partition_shows(shows, now);

        Ok(VenueDetail {
            venue,
            past_shows,
            upcoming_shows,
        })
    }

    /// Fetches the stored venue record with decoded genres, without show
    /// history. Backs the edit-form prefill.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] if the id does not
    /// resolve, or [`DirectoryError`] on decode/storage failure.
    pub async fn record(&self, id: VenueId) -> Result<Venue, DirectoryError> {
        let row = VenueRepo::new(&self.pool)
            .get(id)
            .await?
            .ok_or(DirectoryError::VenueNotFound(id))?;
        Venue::try_from(row)
    }

    /// Creates a venue and returns its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on encode/storage failure; the
    /// transaction rolls back in full.
    pub async fn create(&self, venue: &NewVenue) -> Result<VenueId, DirectoryError> {
        let id = VenueRepo::new(&self.pool).create(venue).await?;
        tracing::info!(venue_id = %id, name = %venue.name, "venue created");
        Ok(id)
    }

    /// Applies a partial edit to a venue.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] if the id does not
    /// resolve, or [`DirectoryError`] on encode/storage failure.
    pub async fn edit(&self, id: VenueId, edit: &VenueEdit) -> Result<(), DirectoryError> {
        VenueRepo::new(&self.pool).update(id, edit).await?;
        tracing::info!(venue_id = %id, "venue updated");
        Ok(())
    }

    /// Deletes a venue and its dependent shows.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] if the id does not
    /// resolve, or [`DirectoryError::Storage`] on database failure.
    pub async fn delete(&self, id: VenueId) -> Result<(), DirectoryError> {
        let shows_removed = VenueRepo::new(&self.pool).delete(id).await?;
        tracing::info!(venue_id = %id, shows_removed, "venue deleted");
        Ok(())
    }
}

fn summary_from_row(row: VenueUpcomingRow) -> VenueSummary {
    VenueSummary {
        id: row.id,
        name: row.name,
        num_upcoming_shows: row.num_upcoming,
    }
}

/// Folds rows ordered by `(city, state, id)` into location groups. Two
/// venues sharing a city and state land in the same group; a pair with no
/// venues never produces a group.
fn group_by_location(rows: Vec<VenueUpcomingRow>) -> Vec<LocationGroup> {
    let mut groups: Vec<LocationGroup> = Vec::new();
    for row in rows {
        let matches_last = groups
            .last()
            .is_some_and(|g| g.city == row.city && g.state == row.state);
        if !matches_last {
            groups.push(LocationGroup {
                city: row.city.clone(),
                state: row.state.clone(),
                venues: Vec::new(),
            });
        }
        if let Some(group) = groups.last_mut() {
            group.venues.push(summary_from_row(row));
        }
    }
    groups
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn row(id: i64, name: &str, city: &str, state: &str, num_upcoming: i64) -> VenueUpcomingRow {
        VenueUpcomingRow {
            id: VenueId::new(id),
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            num_upcoming,
        }
    }

    #[test]
    fn venues_sharing_city_and_state_merge_into_one_group() {
        let groups = group_by_location(vec![
            row(1, "The Musical Hop", "San Francisco", "CA", 1),
            row(3, "Park Square Live Music & Coffee", "San Francisco", "CA", 0),
        ]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].city, "San Francisco");
        assert_eq!(groups[0].state, "CA");
        assert_eq!(groups[0].venues.len(), 2);
    }

    #[test]
    fn distinct_pairs_produce_distinct_groups() {
        let groups = group_by_location(vec![
            row(2, "The Dueling Pianos Bar", "New York", "NY", 0),
            row(1, "The Musical Hop", "San Francisco", "CA", 2),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].city, "New York");
        assert_eq!(groups[1].city, "San Francisco");
    }

    #[test]
    fn same_city_different_state_does_not_merge() {
        let groups = group_by_location(vec![
            row(1, "Springfield Hall", "Springfield", "IL", 0),
            row(2, "Springfield Arena", "Springfield", "MA", 0),
        ]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn no_rows_means_no_groups() {
        assert!(group_by_location(vec![]).is_empty());
    }

    #[test]
    fn group_carries_upcoming_counts_through() {
        let groups = group_by_location(vec![row(1, "The Musical Hop", "San Francisco", "CA", 5)]);
        assert_eq!(groups[0].venues[0].num_upcoming_shows, 5);
    }
}
