//! Genre tag list with a loss-free storage codec.
//!
//! Genres are modeled as an ordered list of tag strings but persisted in a
//! single `TEXT` column. The storage representation is a JSON string array
//! (`["Jazz","Classical"]`), which round-trips any tag content — commas,
//! quotes, empty strings — without loss. The on-disk format is an
//! implementation detail of this module, not part of the HTTP contract.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ordered list of genre tags attached to a venue or artist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct GenreList(Vec<String>);

impl GenreList {
    /// Wraps a list of tag strings, preserving order.
    #[must_use]
    pub const fn new(tags: Vec<String>) -> Self {
        Self(tags)
    }

    /// Returns the tags as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consumes the list, returning the inner vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Encodes the list into its storage representation.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    /// Decodes a stored value back into the tag list.
    ///
    /// A stored value that is not a JSON string array is an error, never a
    /// silent repair.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the stored value does not decode
    /// as a string array.
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Self)
    }
}

impl From<Vec<String>> for GenreList {
    fn from(tags: Vec<String>) -> Self {
        Self(tags)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn round_trip(tags: &[&str]) -> Vec<String> {
        let list = GenreList::new(tags.iter().map(|t| (*t).to_string()).collect());
        let Ok(encoded) = list.encode() else {
            panic!("encode failed");
        };
        let Ok(decoded) = GenreList::decode(&encoded) else {
            panic!("decode failed");
        };
        decoded.into_inner()
    }

    #[test]
    fn round_trip_preserves_order() {
        assert_eq!(
            round_trip(&["Jazz", "Classical", "Folk"]),
            vec!["Jazz", "Classical", "Folk"]
        );
    }

    #[test]
    fn round_trip_is_loss_free_for_awkward_tags() {
        assert_eq!(
            round_trip(&["Rock n Roll", "R&B", "tag,with,commas", "quo\"ted", ""]),
            vec!["Rock n Roll", "R&B", "tag,with,commas", "quo\"ted", ""]
        );
    }

    #[test]
    fn empty_list_round_trips() {
        let list = GenreList::default();
        let Ok(encoded) = list.encode() else {
            panic!("encode failed");
        };
        assert_eq!(encoded, "[]");
        let Ok(decoded) = GenreList::decode(&encoded) else {
            panic!("decode failed");
        };
        assert!(decoded.as_slice().is_empty());
    }

    #[test]
    fn decode_rejects_non_array_values() {
        assert!(GenreList::decode("Jazz,Classical").is_err());
        assert!(GenreList::decode("{\"genres\": []}").is_err());
    }
}
