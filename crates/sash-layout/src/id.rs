//! Node identifiers.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Alphabet for generated id segments (lowercase base 36).
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Characters per generated id segment.
const ID_SEGMENT_LEN: usize = 6;

/// Stable string identifier for tree nodes.
///
/// Caller-supplied ids are accepted verbatim; generated ids are two
/// dash-joined alphanumeric segments. The generator is random, not
/// collision-free — the owning tree enforces uniqueness at insertion.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Wrap a caller-supplied id.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Generate a random two-segment id such as `h7k2mq-p04xat`.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let mut raw = String::with_capacity(ID_SEGMENT_LEN * 2 + 1);
        for index in 0..ID_SEGMENT_LEN * 2 {
            if index == ID_SEGMENT_LEN {
                raw.push('-');
            }
            let slot = rng.random_range(0..ID_ALPHABET.len());
            raw.push(ID_ALPHABET[slot] as char);
        }
        Self(raw)
    }

    /// The raw string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_has_two_segments() {
        let id = NodeId::generate();
        let segments: Vec<&str> = id.as_str().split('-').collect();
        assert_eq!(segments.len(), 2);
        for segment in segments {
            assert_eq!(segment.len(), ID_SEGMENT_LEN);
            assert!(
                segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            );
        }
    }

    #[test]
    fn generated_ids_are_distinct_in_practice() {
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..100 {
            assert!(seen.insert(NodeId::generate()));
        }
    }

    #[test]
    fn display_matches_raw_value() {
        let id = NodeId::new("editor-a1");
        assert_eq!(id.to_string(), "editor-a1");
        assert_eq!(id.as_str(), "editor-a1");
    }

    #[test]
    fn conversions_from_str_and_string() {
        assert_eq!(NodeId::from("x"), NodeId::new("x"));
        assert_eq!(NodeId::from(String::from("x")), NodeId::new("x"));
    }
}
