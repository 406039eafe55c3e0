//! Propex Ledger - in-memory ledger collaborator
//!
//! A concrete `LedgerGateway` backed by in-memory registries, with
//! optimistic-concurrency revision checks, an event outbox, demo-data
//! seeding, and a JSON snapshot so the CLI can keep ledger state between
//! invocations. The workflow core stays ignorant of all of this; it only
//! ever sees the gateway trait.

pub mod memory;
pub mod seed;
pub mod snapshot;

pub use memory::MemoryLedger;
pub use seed::seed_demo;
