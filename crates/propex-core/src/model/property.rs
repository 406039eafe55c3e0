use chrono::{DateTime, Utc};
use propex_core_types::{MemberId, TitleId};
use serde::{Deserialize, Serialize};

/// Property - a uniquely identified digital property record
///
/// A Property is created once (outside this core), then mutated in place by
/// the listing and transfer operations. Its `title_id` is immutable identity;
/// `owner` is reassigned only by a successful transfer; the descriptive and
/// valuation fields are static business metadata that this core never touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Unique, immutable identity of this record
    pub title_id: TitleId,

    /// Current owner; None until first assigned
    pub owner: Option<MemberId>,

    /// True once the property has been listed for transfer
    pub for_transfer: bool,

    /// Human-readable description
    pub description: String,

    /// Kind of property (e.g. "music")
    pub property_type: String,

    /// Content hash of the underlying digital asset
    pub property_hash: String,

    /// Location of the underlying digital asset
    pub property_url: String,

    /// Static valuation amount
    pub property_value: f64,

    /// Currency of the valuation amount
    pub value_currency: String,

    /// Optimistic-concurrency token owned by the ledger; bumped on every
    /// persisted update. A stale revision surfaces as a conflict.
    pub revision: u64,

    /// Timestamp when this record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this record was last updated
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Create a new Property with the given identity and no owner
    ///
    /// The record starts unlisted (`for_transfer = false`) at revision 0 with
    /// empty descriptive metadata.
    pub fn new(title_id: TitleId) -> Self {
        let now = Utc::now();
        Self {
            title_id,
            owner: None,
            for_transfer: false,
            description: String::new(),
            property_type: String::new(),
            property_hash: String::new(),
            property_url: String::new(),
            property_value: 0.0,
            value_currency: String::new(),
            revision: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the initial owner (builder-style, for registry population)
    pub fn with_owner(mut self, owner: MemberId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Set the descriptive metadata (builder-style, for registry population)
    pub fn with_details(
        mut self,
        description: impl Into<String>,
        property_type: impl Into<String>,
        property_hash: impl Into<String>,
        property_url: impl Into<String>,
    ) -> Self {
        self.description = description.into();
        self.property_type = property_type.into();
        self.property_hash = property_hash.into();
        self.property_url = property_url.into();
        self
    }

    /// Set the valuation metadata (builder-style, for registry population)
    pub fn with_valuation(mut self, value: f64, currency: impl Into<String>) -> Self {
        self.property_value = value;
        self.value_currency = currency.into();
        self
    }

    /// Check whether this property currently has an owner
    pub fn has_owner(&self) -> bool {
        self.owner.is_some()
    }

    /// Check whether this property is listed for transfer
    pub fn is_listed(&self) -> bool {
        self.for_transfer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_property_defaults() {
        let property = Property::new(TitleId::new("dp_00001"));

        assert_eq!(property.title_id, TitleId::new("dp_00001"));
        assert!(!property.has_owner());
        assert!(!property.is_listed());
        assert_eq!(property.revision, 0);
    }

    #[test]
    fn test_builder_chain() {
        let property = Property::new(TitleId::new("dp_00001"))
            .with_owner(MemberId::new("member1"))
            .with_details(
                "music property 00001",
                "music",
                "asdsa2wr4AS",
                "www.acmeproperty.com/url/123",
            )
            .with_valuation(2000.12, "US Dollars");

        assert_eq!(property.owner, Some(MemberId::new("member1")));
        assert_eq!(property.property_type, "music");
        assert_eq!(property.property_value, 2000.12);
        assert_eq!(property.value_currency, "US Dollars");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let property = Property::new(TitleId::new("dp_00001")).with_owner(MemberId::new("member1"));
        let json = serde_json::to_string(&property).unwrap();
        let back: Property = serde_json::from_str(&json).unwrap();
        assert_eq!(back, property);
    }
}
