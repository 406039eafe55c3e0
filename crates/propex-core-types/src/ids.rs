//! Typed identifiers for ledger records
//!
//! A `TitleId` uniquely and permanently identifies a property record; it is
//! never reassigned. A `MemberId` identifies a participant. Both are plain
//! string newtypes so that the two id spaces cannot be mixed up at call sites.

use serde::{Deserialize, Serialize};

/// Unique identifier of a property record (e.g. `dp_00001`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TitleId(String);

impl TitleId {
    /// Create a TitleId from an owned or borrowed string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TitleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TitleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unique identifier of a participant (e.g. `member1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(String);

impl MemberId {
    /// Create a MemberId from an owned or borrowed string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_id_display_matches_as_str() {
        let id = TitleId::new("dp_00001");
        assert_eq!(format!("{}", id), "dp_00001");
        assert_eq!(id.as_str(), "dp_00001");
    }

    #[test]
    fn test_member_id_equality() {
        let a = MemberId::new("member1");
        let b = MemberId::from("member1");
        assert_eq!(a, b);
        assert_ne!(a, MemberId::new("member2"));
    }

    #[test]
    fn test_id_serialization_roundtrip() {
        let id = TitleId::new("dp_00001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"dp_00001\"");
        let back: TitleId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
