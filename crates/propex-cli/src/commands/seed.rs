//! Seed command
//!
//! Usage: propex seed [--force] [--ledger <PATH>]

use clap::Args;
use std::path::PathBuf;

use propex_ledger::{seed_demo, snapshot, MemoryLedger};

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Overwrite an existing ledger snapshot
    #[arg(long)]
    pub force: bool,

    /// Path to the ledger snapshot
    #[arg(long)]
    pub ledger: Option<PathBuf>,
}

/// Execute seed command
pub fn execute(args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = super::ledger_path(args.ledger);

    if path.exists() && !args.force {
        return Err(format!(
            "ledger snapshot already exists at {} (use --force to overwrite)",
            path.display()
        )
        .into());
    }

    let mut ledger = MemoryLedger::new();
    seed_demo(&mut ledger)?;
    snapshot::save_ledger(&ledger, &path)?;

    println!(
        "✓ Seeded demo ledger ({} members, {} properties) at {}",
        ledger.list_members().len(),
        ledger.list_properties().len(),
        path.display()
    );

    Ok(())
}
