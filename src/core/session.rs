//! Edit-session state for a single company record.
//!
//! One `EditSession` owns the working copy for the lifetime of one edit: it
//! is seeded when the editor opens, mutated field by field, reconciled when
//! the roster arrives, and consumed exactly once at submit. Cancel is just
//! dropping it.

use crate::core::assignment::{self, RawAssignment};
use crate::models::{CompanyPatch, CompanyRecord, DriveType, StaffMember};

/// A single field edit. Assignment changes go through their own variant so
/// the session can keep the canonical 0/1-element list invariant.
#[derive(Debug, Clone)]
pub enum FieldChange {
    CompanyName(String),
    CompanyAddress(String),
    Drive(String),
    TypeOfDrive(Option<DriveType>),
    FollowUp(String),
    IsContacted(bool),
    Remarks(String),
    ContactDetails(String),
    Hr1Details(String),
    Hr2Details(String),
    Package(String),
    Assignment(Option<RawAssignment>),
}

#[derive(Debug, Clone)]
pub struct EditSession {
    state: CompanyPatch,
    seeded_assignment: Vec<String>,
    is_existing: bool,
}

impl EditSession {
    /// Open a session for an existing record: copy its fields and normalize
    /// the assignment it carried.
    pub fn seed_from_record(record: &CompanyRecord) -> Self {
        let mut state = CompanyPatch::from_record(record);
        state.assigned_officer.truncate(1);
        let seeded_assignment = state.assigned_officer.clone();
        Self {
            state,
            seeded_assignment,
            is_existing: true,
        }
    }

    /// Open a session for a new record, optionally pre-assigned.
    pub fn seed_new(default_assignee: Option<RawAssignment>) -> Self {
        let assigned = assignment::normalize(default_assignee);
        let state = CompanyPatch {
            assigned_officer: assigned.clone(),
            ..Default::default()
        };
        Self {
            state,
            seeded_assignment: assigned,
            is_existing: false,
        }
    }

    pub fn is_existing(&self) -> bool {
        self.is_existing
    }

    pub fn state(&self) -> &CompanyPatch {
        &self.state
    }

    /// The assignment as it stood at seed time. The submission policy
    /// restores this for roles that may not change assignments.
    pub fn seeded_assignment(&self) -> &[String] {
        &self.seeded_assignment
    }

    /// Pure field replacement; no cross-field side effects. Assignment input
    /// is wrapped into the canonical list form on the way in.
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::CompanyName(v) => self.state.company_name = Some(v),
            FieldChange::CompanyAddress(v) => self.state.company_address = Some(v),
            FieldChange::Drive(v) => self.state.drive = Some(v),
            FieldChange::TypeOfDrive(v) => self.state.type_of_drive = Some(v),
            FieldChange::FollowUp(v) => self.state.follow_up = Some(v),
            FieldChange::IsContacted(v) => self.state.is_contacted = Some(v),
            FieldChange::Remarks(v) => self.state.remarks = Some(v),
            FieldChange::ContactDetails(v) => self.state.contact_details = Some(v),
            FieldChange::Hr1Details(v) => self.state.hr1_details = Some(v),
            FieldChange::Hr2Details(v) => self.state.hr2_details = Some(v),
            FieldChange::Package(v) => self.state.package = Some(v),
            FieldChange::Assignment(raw) => {
                self.state.assigned_officer = assignment::normalize(raw);
            }
        }
    }

    /// Re-canonicalize the assignment against a (newly arrived or changed)
    /// roster. Touches nothing but the assignment field, so it cannot race
    /// with in-progress edits to other fields.
    ///
    /// This is an explicit transition rather than a reaction to the
    /// assignment changing, which is what makes it safe to call repeatedly:
    /// canonicalization is idempotent, so a second call with the same roster
    /// is a no-op and there is no feedback loop to re-trigger.
    pub fn reconcile(&mut self, roster: &[StaffMember]) {
        assignment::canonicalize(&mut self.state.assigned_officer, roster);
    }

    /// Consume the session, yielding the working copy. Only the submission
    /// policy calls this.
    pub(crate) fn into_state(self) -> (CompanyPatch, Vec<String>, bool) {
        (self.state, self.seeded_assignment, self.is_existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn roster() -> Vec<StaffMember> {
        vec![StaffMember {
            id: "u1".to_string(),
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            role: Role::Officer,
        }]
    }

    fn record_with_assignment(raw: &str) -> CompanyRecord {
        let mut record = CompanyRecord::new("Acme");
        record.assigned_officer = vec![raw.to_string()];
        record
    }

    #[test]
    fn test_seed_from_record_copies_fields() {
        let mut record = CompanyRecord::new("Acme");
        record.package = Some("10 LPA".to_string());
        let session = EditSession::seed_from_record(&record);

        assert!(session.is_existing());
        assert_eq!(session.state().company_name.as_deref(), Some("Acme"));
        assert_eq!(session.state().package.as_deref(), Some("10 LPA"));
    }

    #[test]
    fn test_seed_new_with_default_assignee() {
        let session = EditSession::seed_new(Some(RawAssignment::One("alice".to_string())));
        assert!(!session.is_existing());
        assert_eq!(session.state().assigned_officer, vec!["alice".to_string()]);
    }

    #[test]
    fn test_seed_new_without_assignee_is_empty() {
        let session = EditSession::seed_new(None);
        assert!(session.state().assigned_officer.is_empty());
        assert!(session.seeded_assignment().is_empty());
    }

    #[test]
    fn test_apply_wraps_assignment_into_list() {
        let mut session = EditSession::seed_new(None);
        session.apply(FieldChange::Assignment(Some(RawAssignment::Many(vec![
            "alice".to_string(),
            "bob".to_string(),
        ]))));
        assert_eq!(session.state().assigned_officer, vec!["alice".to_string()]);
    }

    #[test]
    fn test_apply_does_not_touch_other_fields() {
        let mut session = EditSession::seed_new(None);
        session.apply(FieldChange::Remarks("note".to_string()));
        session.apply(FieldChange::Package("8 LPA".to_string()));
        assert_eq!(session.state().remarks.as_deref(), Some("note"));
        assert_eq!(session.state().package.as_deref(), Some("8 LPA"));
        assert!(session.state().company_name.is_none());
    }

    #[test]
    fn test_reconcile_canonicalizes_stored_id() {
        let record = record_with_assignment("u1");
        let mut session = EditSession::seed_from_record(&record);
        session.reconcile(&roster());
        assert_eq!(session.state().assigned_officer, vec!["alice".to_string()]);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let record = record_with_assignment("u1");
        let mut session = EditSession::seed_from_record(&record);
        let roster = roster();

        session.reconcile(&roster);
        let once = session.state().clone();
        session.reconcile(&roster);
        assert_eq!(session.state(), &once);
    }

    #[test]
    fn test_reconcile_converges_in_one_application() {
        // A fixed roster must reach the canonical form after one call.
        let record = record_with_assignment("a@x.com");
        let mut session = EditSession::seed_from_record(&record);
        let roster = roster();

        session.reconcile(&roster);
        assert_eq!(session.state().assigned_officer, vec!["alice".to_string()]);
        // Nothing left for further applications to change.
        let fixed = session.state().clone();
        for _ in 0..3 {
            session.reconcile(&roster);
        }
        assert_eq!(session.state(), &fixed);
    }

    #[test]
    fn test_reconcile_only_touches_assignment() {
        let mut record = record_with_assignment("u1");
        record.remarks = Some("unrelated".to_string());
        let mut session = EditSession::seed_from_record(&record);
        session.apply(FieldChange::Package("in progress".to_string()));

        session.reconcile(&roster());
        assert_eq!(session.state().remarks.as_deref(), Some("unrelated"));
        assert_eq!(session.state().package.as_deref(), Some("in progress"));
    }

    #[test]
    fn test_reconcile_with_empty_roster_is_noop() {
        let record = record_with_assignment("u1");
        let mut session = EditSession::seed_from_record(&record);
        session.reconcile(&[]);
        assert_eq!(session.state().assigned_officer, vec!["u1".to_string()]);
    }
}
