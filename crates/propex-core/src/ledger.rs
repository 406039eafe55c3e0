//! Ledger gateway boundary
//!
//! The workflow never touches registries directly: every registry lookup,
//! existence check, update and event emission goes through this trait, which
//! is injected into each operation. The surrounding ledger runtime owns
//! durable persistence, per-asset serialization of concurrent updates, and
//! delivery of emitted events to subscribers.

use propex_core_types::{MemberId, TitleId};

use crate::errors::Result;
use crate::model::{Member, Property, TransferEvent};

/// Registry and event primitives provided by the surrounding ledger runtime
///
/// Gateway calls are the only points in the workflow that may block. An
/// implementation detecting a conflicting concurrent update must fail the
/// update with `ConflictingUpdate` rather than silently dropping it.
#[cfg_attr(test, mockall::automock)]
pub trait LedgerGateway {
    /// Resolve a property record from the asset registry
    ///
    /// # Errors
    ///
    /// Returns `PropertyNotFound` if no record carries the given title id.
    fn get_property(&self, title_id: &TitleId) -> Result<Property>;

    /// Persist an updated property record in the asset registry
    ///
    /// # Errors
    ///
    /// Returns `PropertyNotFound` if the record was never registered,
    /// `ConflictingUpdate` if the record's revision is stale, or
    /// `Persistence` if the update could not be stored.
    fn update_property(&mut self, property: &Property) -> Result<()>;

    /// Add a batch of property records to the asset registry
    ///
    /// # Errors
    ///
    /// Returns `PropertyAlreadyExists` on a duplicate title id; no record
    /// from the batch is added in that case.
    fn add_properties(&mut self, properties: Vec<Property>) -> Result<()>;

    /// Resolve a member record from the participant registry
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if no member carries the given id.
    fn get_member(&self, member_id: &MemberId) -> Result<Member>;

    /// Check whether a member exists in the participant registry
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the registry could not be queried.
    fn member_exists(&self, member_id: &MemberId) -> Result<bool>;

    /// Add a batch of member records to the participant registry
    ///
    /// # Errors
    ///
    /// Returns `MemberAlreadyExists` on a duplicate member id; no record
    /// from the batch is added in that case.
    fn add_members(&mut self, members: Vec<Member>) -> Result<()>;

    /// Publish an event to ledger subscribers
    ///
    /// Fire-and-forget from the workflow's perspective once this returns.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the event could not be handed off.
    fn emit(&mut self, event: TransferEvent) -> Result<()>;
}
