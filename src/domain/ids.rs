//! Type-safe entity identifiers.
//!
//! [`VenueId`], [`ArtistId`], and [`ShowId`] are newtype wrappers around
//! `i64` database keys (`BIGSERIAL`) so that identifiers of different
//! entities cannot be confused with each other or with plain integers.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a venue.
///
/// Generated by the database at creation time and immutable thereafter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    sqlx::Type,
    ToSchema,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct VenueId(i64);

/// Unique identifier for an artist.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    sqlx::Type,
    ToSchema,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ArtistId(i64);

/// Unique identifier for a show booking.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    sqlx::Type,
    ToSchema,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ShowId(i64);

macro_rules! impl_id {
    ($name:ident) => {
        impl $name {
            /// Wraps an existing database key.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the inner `i64` key.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

impl_id!(VenueId);
impl_id!(ArtistId);
impl_id!(ShowId);

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_is_plain_integer() {
        assert_eq!(format!("{}", VenueId::new(42)), "42");
        assert_eq!(format!("{}", ArtistId::new(7)), "7");
    }

    #[test]
    fn serde_is_transparent() {
        let id = ShowId::new(13);
        let json = serde_json::to_string(&id).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json, "13");
        let back: ShowId = serde_json::from_str(&json).ok().unwrap_or_else(|| {
            panic!("deserialization failed");
        });
        assert_eq!(back, id);
    }

    #[test]
    fn from_i64_round_trip() {
        let id = VenueId::from(99);
        assert_eq!(id.get(), 99);
        assert_eq!(i64::from(id), 99);
    }

    #[test]
    fn hash_works_in_hashmap() {
        use std::collections::HashMap;
        let id = ArtistId::new(5);
        let mut map = HashMap::new();
        map.insert(id, "test");
        assert_eq!(map.get(&id), Some(&"test"));
    }
}
