//! Show command
//!
//! Usage: propex show [TITLE_ID] [--ledger <PATH>]

use clap::Args;
use std::path::PathBuf;

use propex_core::ledger::LedgerGateway;
use propex_core::model::Property;
use propex_core_types::TitleId;
use propex_ledger::snapshot;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Title id of a single property to show (shows everything if omitted)
    pub title_id: Option<String>,

    /// Path to the ledger snapshot
    #[arg(long)]
    pub ledger: Option<PathBuf>,
}

/// Execute show command
pub fn execute(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = super::ledger_path(args.ledger);
    let ledger = snapshot::load_ledger(&path)?;

    match args.title_id {
        Some(title_id) => {
            let property = ledger.get_property(&TitleId::new(title_id))?;
            print_property(&property);
        }
        None => {
            println!("Members:");
            for member in ledger.list_members() {
                println!("  {} ({})", member.member_id, member.member_org);
            }

            println!("Properties:");
            for property in ledger.list_properties() {
                print_property(property);
            }

            println!("Transfer events: {}", ledger.events().len());
        }
    }

    Ok(())
}

fn print_property(property: &Property) {
    let owner = property
        .owner
        .as_ref()
        .map(|o| o.to_string())
        .unwrap_or_else(|| "<unowned>".to_string());

    println!(
        "  {} owner={} for_transfer={} type={} value={} {}",
        property.title_id,
        owner,
        property.for_transfer,
        property.property_type,
        property.property_value,
        property.value_currency
    );
}
