//! Propex Core - ownership transfer workflow for digital property records
//!
//! This crate provides the transaction logic governing transfer of ownership
//! of a uniquely identified digital property record between participants in a
//! shared ledger:
//! - Property, Member and TransferEvent models with typed constructors
//! - The `LedgerGateway` trait - the injected registry/event boundary
//! - The two-phase transfer workflow (list-for-transfer, then transfer)
//! - The ownership predicate
//! - Listing policy governing the `for_transfer` flag after a transfer
//!
//! Persistence, identity and consensus live behind the gateway; the workflow
//! itself is synchronous and holds no process-wide state.

pub mod errors;
pub mod ledger;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;

// Re-export commonly used types
pub use errors::{PropexError, PropexErrorKind, Result};
pub use ledger::LedgerGateway;
pub use model::{Member, Property, TransferEvent};
pub use ops::is_owner;
pub use policy::ListingPolicy;
