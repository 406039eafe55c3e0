//! List-for-transfer command
//!
//! Usage: propex list-for-transfer <TITLE_ID> [--ledger <PATH>]

use clap::Args;
use std::path::PathBuf;

use propex_core_types::TitleId;
use propex_engine::{register_property_for_transfer, RegisterPropertyForTransfer};
use propex_ledger::snapshot;

#[derive(Debug, Args)]
pub struct ListingArgs {
    /// Title id of the property to register for transfer
    pub title_id: String,

    /// Path to the ledger snapshot
    #[arg(long)]
    pub ledger: Option<PathBuf>,
}

/// Execute list-for-transfer command
pub fn execute(args: ListingArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = super::ledger_path(args.ledger);
    let mut ledger = snapshot::load_ledger(&path)?;

    register_property_for_transfer(
        RegisterPropertyForTransfer {
            property: TitleId::new(args.title_id.clone()),
        },
        &mut ledger,
    )?;

    snapshot::save_ledger(&ledger, &path)?;

    println!("✓ Property {} registered for transfer", args.title_id);

    Ok(())
}
