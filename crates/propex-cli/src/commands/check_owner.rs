//! Check-owner command
//!
//! Usage: propex check-owner <TITLE_ID> <MEMBER_ID> [--ledger <PATH>]

use clap::Args;
use std::path::PathBuf;

use propex_core_types::{MemberId, TitleId};
use propex_engine::{check_ownership, CheckOwnership};
use propex_ledger::snapshot;

#[derive(Debug, Args)]
pub struct CheckOwnerArgs {
    /// Title id of the property
    pub title_id: String,

    /// Member id to check against
    pub member_id: String,

    /// Path to the ledger snapshot
    #[arg(long)]
    pub ledger: Option<PathBuf>,
}

/// Execute check-owner command
pub fn execute(args: CheckOwnerArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = super::ledger_path(args.ledger);
    let ledger = snapshot::load_ledger(&path)?;

    let owned = check_ownership(
        CheckOwnership {
            property: TitleId::new(args.title_id.clone()),
            member: MemberId::new(args.member_id.clone()),
        },
        &ledger,
    )?;

    if owned {
        println!("{} is owned by {}", args.title_id, args.member_id);
    } else {
        println!("{} is not owned by {}", args.title_id, args.member_id);
    }

    Ok(())
}
