use crate::model::{Member, Property};

/// Check that the given property is owned by the given member
///
/// Pure comparison over already-resolved records: true iff the property's
/// recorded owner identifier equals the member's identifier. A property with
/// no owner set is owned by nobody, so the comparison yields false rather
/// than failing.
pub fn is_owner(property: &Property, member: &Member) -> bool {
    property
        .owner
        .as_ref()
        .map(|owner| *owner == member.member_id)
        .unwrap_or(false)
}
