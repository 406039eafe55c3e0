//! Listing policy for the post-transfer `for_transfer` flag
//!
//! The observed ledger behavior never resets `for_transfer` after a
//! successful transfer, so a transferred property stays transferable without
//! being re-listed. That behavior is the default here; deployments that want
//! one-transfer-per-listing opt into `ClearListing`.

use serde::{Deserialize, Serialize};

/// What happens to a property's `for_transfer` flag after a successful
/// transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListingPolicy {
    /// Leave the flag set: the property remains transferable (observed
    /// ledger behavior)
    #[default]
    RetainListing,

    /// Clear the flag: the property must be re-listed before the next
    /// transfer
    ClearListing,
}

impl ListingPolicy {
    /// Whether the flag should be cleared after a successful transfer
    pub fn clears_listing(&self) -> bool {
        matches!(self, ListingPolicy::ClearListing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retains_listing() {
        assert_eq!(ListingPolicy::default(), ListingPolicy::RetainListing);
        assert!(!ListingPolicy::default().clears_listing());
    }

    #[test]
    fn test_clear_listing() {
        assert!(ListingPolicy::ClearListing.clears_listing());
    }
}
