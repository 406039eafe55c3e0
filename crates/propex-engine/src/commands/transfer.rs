//! Ownership transfer entry points with boundary logging.
//!
//! Each entry point is one atomic transaction against the ledger: resolve
//! the records named in the request, run the workflow core, and surface any
//! failure to the submitter with its human-readable reason. The runtime that
//! invokes these is expected to roll the transaction back on error.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for transfer operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (core, ledger) use only `tracing::debug!()` for internal
//! details.

use propex_core::errors::Result;
use propex_core::ledger::LedgerGateway;
use propex_core::ops::{is_owner, listing_ops, transfer_ops};
use propex_core::policy::ListingPolicy;
use propex_core::{log_op_end, log_op_error, log_op_start};
use propex_core_types::{MemberId, RequestContext, TitleId};
use serde::{Deserialize, Serialize};

/// Request to mark a property as eligible for transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterPropertyForTransfer {
    /// Title id of the property to list
    pub property: TitleId,
}

/// Request to transfer a listed property to a new owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferProperty {
    /// Title id of the property to transfer
    pub property: TitleId,
    /// Identifier of the proposed new owner
    pub new_owner: MemberId,
}

/// Request to check whether a member owns a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOwnership {
    /// Title id of the property
    pub property: TitleId,
    /// Identifier of the member to check against
    pub member: MemberId,
}

/// Register a property for transfer
///
/// Resolves the property from the asset registry, sets its `for_transfer`
/// flag, and persists the update. Idempotent: re-listing is a state-wise
/// no-op but still issues the update.
///
/// # Errors
///
/// - `PropertyNotFound`: no record carries the requested title id
/// - `Persistence` / `ConflictingUpdate`: the registry update failed
pub fn register_property_for_transfer(
    request: RegisterPropertyForTransfer,
    ledger: &mut dyn LedgerGateway,
) -> Result<()> {
    let ctx = RequestContext::new();
    log_op_start!(
        "register_property_for_transfer",
        request_id = %ctx.request_id,
        title_id = %request.property
    );
    let start = std::time::Instant::now();

    let result = register_impl(&request, ledger).map_err(|e| {
        log_op_error!(
            "register_property_for_transfer",
            e,
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = %ctx.request_id,
            title_id = %request.property
        );
        e
    })?;

    log_op_end!(
        "register_property_for_transfer",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id,
        title_id = %request.property
    );

    Ok(result)
}

fn register_impl(
    request: &RegisterPropertyForTransfer,
    ledger: &mut dyn LedgerGateway,
) -> Result<()> {
    let mut property = ledger.get_property(&request.property)?;
    listing_ops::list_for_transfer(ledger, &mut property)
}

/// Transfer a listed property to a new owner
///
/// Resolves the property, validates it is listed and that the new owner is a
/// known participant, reassigns ownership, persists the record, and emits
/// one `TransferEvent` carrying the post-transfer snapshot. The listing
/// policy decides whether the `for_transfer` flag survives the transfer
/// (`RetainListing` reproduces the observed ledger behavior).
///
/// # Errors
///
/// - `PropertyNotFound`: no record carries the requested title id
/// - `NotTransferable`: the property is not listed for transfer
/// - `UnknownParticipant`: the new owner is not a registered member
/// - `Persistence` / `ConflictingUpdate`: the registry update failed; no
///   event is emitted in that case
pub fn transfer_property(
    request: TransferProperty,
    policy: ListingPolicy,
    ledger: &mut dyn LedgerGateway,
) -> Result<()> {
    let ctx = RequestContext::new();
    log_op_start!(
        "transfer_property",
        request_id = %ctx.request_id,
        title_id = %request.property,
        new_owner = %request.new_owner
    );
    let start = std::time::Instant::now();

    let result = transfer_impl(&request, policy, ledger).map_err(|e| {
        log_op_error!(
            "transfer_property",
            e,
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = %ctx.request_id,
            title_id = %request.property,
            new_owner = %request.new_owner
        );
        e
    })?;

    log_op_end!(
        "transfer_property",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id,
        title_id = %request.property,
        new_owner = %request.new_owner
    );

    Ok(result)
}

fn transfer_impl(
    request: &TransferProperty,
    policy: ListingPolicy,
    ledger: &mut dyn LedgerGateway,
) -> Result<()> {
    let mut property = ledger.get_property(&request.property)?;
    transfer_ops::transfer_property(ledger, &mut property, &request.new_owner, policy)
}

/// Check that a property is owned by a member
///
/// Resolves both records and runs the pure ownership predicate. A property
/// with no owner set is owned by nobody.
///
/// # Errors
///
/// - `PropertyNotFound` / `MemberNotFound`: a requested record is absent
pub fn check_ownership(request: CheckOwnership, ledger: &dyn LedgerGateway) -> Result<bool> {
    let ctx = RequestContext::new();
    log_op_start!(
        "check_ownership",
        request_id = %ctx.request_id,
        title_id = %request.property,
        member_id = %request.member
    );
    let start = std::time::Instant::now();

    let result = check_impl(&request, ledger).map_err(|e| {
        log_op_error!(
            "check_ownership",
            e,
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = %ctx.request_id,
            title_id = %request.property
        );
        e
    })?;

    log_op_end!(
        "check_ownership",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id,
        title_id = %request.property,
        owned = result
    );

    Ok(result)
}

fn check_impl(request: &CheckOwnership, ledger: &dyn LedgerGateway) -> Result<bool> {
    let property = ledger.get_property(&request.property)?;
    let member = ledger.get_member(&request.member)?;
    Ok(is_owner(&property, &member))
}
