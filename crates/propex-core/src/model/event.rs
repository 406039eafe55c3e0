use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::property::Property;

/// TransferEvent - emitted fact recording a completed ownership transfer
///
/// Carries the post-transfer property snapshot. Append-only: an event is
/// constructed once, emitted through the gateway, and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferEvent {
    /// Unique identifier of this event (UUID v7)
    pub event_id: String,

    /// Snapshot of the property as persisted after the transfer
    pub property: Property,

    /// Timestamp when this event was constructed
    pub emitted_at: DateTime<Utc>,
}

impl TransferEvent {
    /// Create a new TransferEvent carrying the given post-transfer snapshot
    pub fn new(property: Property) -> Self {
        Self {
            event_id: Uuid::now_v7().to_string(),
            property,
            emitted_at: Utc::now(),
        }
    }
}
