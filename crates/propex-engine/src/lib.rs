//! Propex Engine - transaction entry points
//!
//! Provides the entry points the invoking runtime submits transactions
//! through, coordinating between the workflow core and the injected ledger
//! gateway.

pub mod commands;

pub use commands::transfer::{
    check_ownership, register_property_for_transfer, transfer_property, CheckOwnership,
    RegisterPropertyForTransfer, TransferProperty,
};
