//! Transaction entry point layer.
//!
//! Resolves records from the ledger, runs the workflow core, and owns
//! boundary lifecycle logging for each transaction.

pub mod transfer;
