//! Propex core types - shared identifiers and logging schema
//!
//! Foundation crate with no domain logic: typed identifiers for ledger
//! records, request correlation types, and the canonical structured-logging
//! schema constants used by every other crate.

pub mod correlation;
pub mod ids;
pub mod schema;

pub use correlation::{RequestContext, RequestId, TraceId};
pub use ids::{MemberId, TitleId};
