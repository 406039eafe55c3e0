use chrono::Utc;
use propex_core_types::MemberId;

use crate::errors::{PropexError, Result};
use crate::ledger::LedgerGateway;
use crate::model::{Property, TransferEvent};
use crate::policy::ListingPolicy;

/// Execute a validated ownership transfer, as a single logical transaction
///
/// Steps, in strict order:
/// 1. Precondition: the property must be listed (`for_transfer = true`);
///    otherwise fail with `NotTransferable` before any gateway call.
/// 2. Existence check: the proposed new owner must be present in the
///    participant registry; otherwise fail with `UnknownParticipant` before
///    any mutation.
/// 3. Mutation: reassign `owner` to the new owner and apply the listing
///    policy to the `for_transfer` flag.
/// 4. Persistence: update the record in the asset registry.
/// 5. Notification: emit exactly one `TransferEvent` carrying the updated
///    snapshot - only after the persistence call succeeded, so an event is
///    never observed for state that was not durably stored.
///
/// If persistence fails, the transaction runtime discards the in-memory
/// mutation along with the rest of the aborted transaction; this function
/// never retries an ambiguous persistence outcome.
///
/// # Errors
///
/// * `NotTransferable` - property is not listed for transfer
/// * `UnknownParticipant` - new owner not found in the participant registry
/// * `Persistence` - registry update or event hand-off failed
/// * `ConflictingUpdate` - a concurrent update won; retryable after re-read
pub fn transfer_property(
    ledger: &mut dyn LedgerGateway,
    property: &mut Property,
    new_owner: &MemberId,
    policy: ListingPolicy,
) -> Result<()> {
    // Step 1: reject unlisted properties before touching any registry
    if !property.for_transfer {
        return Err(PropexError::NotTransferable {
            title_id: property.title_id.clone(),
        });
    }

    // Step 2: the new owner must be a known participant before any mutation
    if !ledger.member_exists(new_owner)? {
        return Err(PropexError::UnknownParticipant {
            member_id: new_owner.clone(),
        });
    }

    tracing::debug!(
        title_id = %property.title_id,
        new_owner = %new_owner,
        "reassigning property owner"
    );

    // Step 3: in-memory mutation
    property.owner = Some(new_owner.clone());
    if policy.clears_listing() {
        property.for_transfer = false;
    }
    property.updated_at = Utc::now();

    // Step 4: persist before notifying
    ledger.update_property(property)?;

    // Step 5: committed outbox - emit only for durably stored state
    ledger.emit(TransferEvent::new(property.clone()))?;

    Ok(())
}
