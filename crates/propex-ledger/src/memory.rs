use std::collections::HashMap;

use propex_core::errors::{PropexError, Result};
use propex_core::ledger::LedgerGateway;
use propex_core::model::{Member, Property, TransferEvent};
use propex_core_types::{MemberId, TitleId};
use serde::{Deserialize, Serialize};

/// In-memory ledger with typed registries for properties and members
///
/// Single-threaded HashMap-based implementation of the gateway. Concurrent
/// updates are serialized per record through the `revision` token: an update
/// whose revision does not match the stored record fails with a conflict and
/// nothing is written. Emitted events accumulate in an outbox until drained
/// by the surrounding runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryLedger {
    /// Asset registry: title id to property record
    properties: HashMap<TitleId, Property>,
    /// Participant registry: member id to member record
    members: HashMap<MemberId, Member>,
    /// Outbox of emitted transfer events, in emission order
    events: Vec<TransferEvent>,
}

impl MemoryLedger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// List all registered properties
    pub fn list_properties(&self) -> Vec<&Property> {
        self.properties.values().collect()
    }

    /// List all registered members
    pub fn list_members(&self) -> Vec<&Member> {
        self.members.values().collect()
    }

    /// Emitted events, in emission order
    pub fn events(&self) -> &[TransferEvent] {
        &self.events
    }

    /// Drain the event outbox
    pub fn take_events(&mut self) -> Vec<TransferEvent> {
        std::mem::take(&mut self.events)
    }
}

impl LedgerGateway for MemoryLedger {
    fn get_property(&self, title_id: &TitleId) -> Result<Property> {
        self.properties
            .get(title_id)
            .cloned()
            .ok_or_else(|| PropexError::PropertyNotFound {
                title_id: title_id.clone(),
            })
    }

    fn update_property(&mut self, property: &Property) -> Result<()> {
        let stored = self.properties.get_mut(&property.title_id).ok_or_else(|| {
            PropexError::PropertyNotFound {
                title_id: property.title_id.clone(),
            }
        })?;

        // Optimistic concurrency: a stale revision means a concurrent update
        // won; surface it as a retryable conflict, never overwrite.
        if stored.revision != property.revision {
            return Err(PropexError::ConflictingUpdate {
                title_id: property.title_id.clone(),
                expected: property.revision,
                found: stored.revision,
            });
        }

        *stored = property.clone();
        stored.revision += 1;

        tracing::debug!(
            title_id = %property.title_id,
            revision = stored.revision,
            "property record updated"
        );

        Ok(())
    }

    fn add_properties(&mut self, properties: Vec<Property>) -> Result<()> {
        // All-or-nothing: reject the whole batch on any duplicate id
        for property in &properties {
            if self.properties.contains_key(&property.title_id) {
                return Err(PropexError::PropertyAlreadyExists {
                    title_id: property.title_id.clone(),
                });
            }
        }

        for property in properties {
            self.properties.insert(property.title_id.clone(), property);
        }

        Ok(())
    }

    fn get_member(&self, member_id: &MemberId) -> Result<Member> {
        self.members
            .get(member_id)
            .cloned()
            .ok_or_else(|| PropexError::MemberNotFound {
                member_id: member_id.clone(),
            })
    }

    fn member_exists(&self, member_id: &MemberId) -> Result<bool> {
        Ok(self.members.contains_key(member_id))
    }

    fn add_members(&mut self, members: Vec<Member>) -> Result<()> {
        for member in &members {
            if self.members.contains_key(&member.member_id) {
                return Err(PropexError::MemberAlreadyExists {
                    member_id: member.member_id.clone(),
                });
            }
        }

        for member in members {
            self.members.insert(member.member_id.clone(), member);
        }

        Ok(())
    }

    fn emit(&mut self, event: TransferEvent) -> Result<()> {
        tracing::debug!(
            event_id = %event.event_id,
            title_id = %event.property.title_id,
            "transfer event emitted"
        );
        self.events.push(event);
        Ok(())
    }
}
