use chrono::Utc;

use crate::errors::Result;
use crate::ledger::LedgerGateway;
use crate::model::Property;

/// Mark a property as eligible for transfer and persist the change
///
/// Sets `for_transfer = true` on the record and persists it through the asset
/// registry's update primitive. No ownership check is performed at listing
/// time - authorization, if required, belongs to the surrounding identity
/// layer, not to this workflow. Re-listing an already-listed property is a
/// state-wise no-op but still issues the update call.
///
/// # Errors
///
/// Propagates the gateway error if the registry update fails; cannot fail
/// otherwise.
pub fn list_for_transfer(ledger: &mut dyn LedgerGateway, property: &mut Property) -> Result<()> {
    tracing::debug!(
        title_id = %property.title_id,
        already_listed = property.for_transfer,
        "listing property for transfer"
    );

    property.for_transfer = true;
    property.updated_at = Utc::now();

    ledger.update_property(property)?;

    Ok(())
}
