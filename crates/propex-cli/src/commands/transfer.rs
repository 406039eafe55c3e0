//! Transfer command
//!
//! Usage: propex transfer <TITLE_ID> <NEW_OWNER> [--clear-listing] [--ledger <PATH>]

use clap::Args;
use std::path::PathBuf;

use propex_core::policy::ListingPolicy;
use propex_core_types::{MemberId, TitleId};
use propex_engine::{transfer_property, TransferProperty};
use propex_ledger::snapshot;

#[derive(Debug, Args)]
pub struct TransferArgs {
    /// Title id of the property to transfer
    pub title_id: String,

    /// Member id of the new owner
    pub new_owner: String,

    /// Clear the listing flag after the transfer (one transfer per listing)
    #[arg(long)]
    pub clear_listing: bool,

    /// Path to the ledger snapshot
    #[arg(long)]
    pub ledger: Option<PathBuf>,
}

/// Execute transfer command
pub fn execute(args: TransferArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = super::ledger_path(args.ledger);
    let mut ledger = snapshot::load_ledger(&path)?;

    let policy = if args.clear_listing {
        ListingPolicy::ClearListing
    } else {
        ListingPolicy::RetainListing
    };

    transfer_property(
        TransferProperty {
            property: TitleId::new(args.title_id.clone()),
            new_owner: MemberId::new(args.new_owner.clone()),
        },
        policy,
        &mut ledger,
    )?;

    snapshot::save_ledger(&ledger, &path)?;

    println!(
        "✓ Property {} transferred to {}",
        args.title_id, args.new_owner
    );

    Ok(())
}
