//! Propex CLI
//!
//! Command-line interface for the digital property transfer ledger

use clap::{Parser, Subcommand};
use propex_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "propex")]
#[command(about = "Propex - digital property transfer ledger", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Seed the demo ledger (members and one property)
    Seed(commands::seed::SeedArgs),
    /// Register a property for transfer
    ListForTransfer(commands::listing::ListingArgs),
    /// Transfer a listed property to a new owner
    Transfer(commands::transfer::TransferArgs),
    /// Check whether a member owns a property
    CheckOwner(commands::check_owner::CheckOwnerArgs),
    /// Show ledger contents
    Show(commands::show::ShowArgs),
}

fn main() {
    init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed(args) => commands::seed::execute(args),
        Commands::ListForTransfer(args) => commands::listing::execute(args),
        Commands::Transfer(args) => commands::transfer::execute(args),
        Commands::CheckOwner(args) => commands::check_owner::execute(args),
        Commands::Show(args) => commands::show::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
