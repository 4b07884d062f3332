//! Assignment normalization.
//!
//! The `assignedOfficer` field has shipped in three shapes over time: absent,
//! a bare identifier string, and a list of identifiers. Everything in this
//! crate works on one canonical form, a list of at most one identifier, and
//! this module is the only place the other shapes are accepted.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::StaffMember;

/// An assignment value as it may arrive on the wire, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAssignment {
    One(String),
    Many(Vec<String>),
}

/// Collapse a raw assignment into the canonical 0/1-element list.
///
/// Absent becomes empty, a scalar becomes a single-element list, and a list
/// keeps only its first entry. Extra entries are dropped silently; a record
/// denotes at most one assignee.
pub fn normalize(raw: Option<RawAssignment>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some(RawAssignment::One(id)) => vec![id],
        Some(RawAssignment::Many(ids)) => ids.into_iter().take(1).collect(),
    }
}

/// Replace a stored identifier with the roster username it resolves to.
///
/// Records sometimes hold an internal id or email where the username belongs.
/// Once a roster is available we rewrite to the username, which is the
/// stable, human-readable form. Idempotent: an already-canonical value
/// resolves to itself and is left untouched, so re-running this against the
/// same roster never changes anything.
pub fn canonicalize(assignment: &mut [String], roster: &[StaffMember]) {
    if let Some(stored) = assignment.first_mut() {
        if let Some(member) = super::resolver::resolve(stored, roster) {
            if member.username != *stored {
                *stored = member.username.clone();
            }
        }
    }
}

/// Serde shim: accept absent, scalar, or list on input.
///
/// Used with `#[serde(default, deserialize_with = ...)]` on record fields;
/// serialization always emits the canonical list form.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAssignment>::deserialize(deserializer)?;
    Ok(normalize(raw))
}
