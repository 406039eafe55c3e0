use chrono::{DateTime, Utc};
use propex_core_types::MemberId;
use serde::{Deserialize, Serialize};

/// Member - a participant that can hold property records
///
/// Members are created and persisted externally; this core only reads them
/// and existence-checks them against the participant registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier of this participant
    pub member_id: MemberId,

    /// Descriptive organisation label
    pub member_org: String,

    /// Timestamp when this record was created
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new Member with the given identifier and organisation label
    pub fn new(member_id: MemberId, member_org: impl Into<String>) -> Self {
        Self {
            member_id,
            member_org: member_org.into(),
            created_at: Utc::now(),
        }
    }
}
