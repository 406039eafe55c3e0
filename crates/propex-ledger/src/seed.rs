//! Demo data seeding
//!
//! Populates a ledger with the canonical demo network: three members and one
//! music property owned by the first member, installed through the same
//! registry batch primitives the surrounding runtime uses.

use propex_core::errors::Result;
use propex_core::ledger::LedgerGateway;
use propex_core::model::{Member, Property};
use propex_core_types::{MemberId, TitleId};

/// Title id of the demo property
pub const DEMO_PROPERTY_ID: &str = "dp_00001";

/// Seed the demo members and property into the given ledger
///
/// # Errors
///
/// Returns `MemberAlreadyExists` / `PropertyAlreadyExists` if the ledger was
/// already seeded.
pub fn seed_demo(ledger: &mut dyn LedgerGateway) -> Result<()> {
    let members = vec![
        Member::new(MemberId::new("member1"), "Member 1"),
        Member::new(MemberId::new("member2"), "Member 2"),
        Member::new(MemberId::new("member3"), "Member 3"),
    ];
    ledger.add_members(members)?;

    let property = Property::new(TitleId::new(DEMO_PROPERTY_ID))
        .with_owner(MemberId::new("member1"))
        .with_details(
            "music property 00001",
            "music",
            "asdsa2wr4AS",
            "www.acmeproperty.com/url/123",
        )
        .with_valuation(2000.12, "US Dollars");
    ledger.add_properties(vec![property])?;

    Ok(())
}
