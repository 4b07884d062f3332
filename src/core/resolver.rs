//! Identity resolution against the staff roster.
//!
//! An assignment identifier is ambiguous until resolved: it may equal a
//! member's username, internal id, or email. Resolution scans the roster
//! once; not finding a match is an informational state, not an error, since
//! the identifier may reference a deactivated member or the roster may not
//! have loaded yet.

use crate::models::StaffMember;

/// Find the roster entry an identifier refers to.
///
/// A member matches when the identifier equals its username, id, or email.
/// First match wins; no priority is defined between the three keys, so a
/// pathological roster where one member's id equals another's username
/// resolves in roster order.
pub fn resolve<'a>(identifier: &str, roster: &'a [StaffMember]) -> Option<&'a StaffMember> {
    roster
        .iter()
        .find(|m| m.username == identifier || m.id == identifier || m.email == identifier)
}

/// An assignment identifier after resolution has been attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAssignee<'a> {
    Member(&'a StaffMember),
    Unresolved(&'a str),
}

impl<'a> ResolvedAssignee<'a> {
    pub fn lookup(identifier: &'a str, roster: &'a [StaffMember]) -> Self {
        match resolve(identifier, roster) {
            Some(member) => Self::Member(member),
            None => Self::Unresolved(identifier),
        }
    }

    /// The name to show for this assignee: the resolved username, or the raw
    /// identifier while it remains unresolved.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Member(m) => &m.username,
            Self::Unresolved(raw) => raw,
        }
    }
}
