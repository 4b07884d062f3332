//! Submission policy: the single source of truth for role-gated mutation.
//!
//! All role-conditioned branching lives in this one decision table rather
//! than scattered across the editing surface.

use crate::models::{CompanyPatch, Role};

use super::session::EditSession;

/// How a finalized edit should be applied. Advisory metadata for the
/// submission sink; the sink may use it to pick an endpoint or display copy.
/// Never persisted or sent anywhere itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Direct,
    PendingApproval,
    Create,
}

/// Consume an edit session and shape the outgoing payload.
///
/// Mode table:
///
/// | acting role     | existing record | mode            |
/// |-----------------|-----------------|-----------------|
/// | Officer         | yes             | PendingApproval |
/// | Officer         | no              | Create          |
/// | Admin / Manager | yes             | Direct          |
/// | Admin / Manager | no              | Create          |
///
/// Officers may not change assignments: whatever the session held at seed
/// time is restored verbatim, even if the editing surface attempted a
/// change. The assignment is then re-flattened to the 0/1-element list in
/// every mode, guarding against any transient multi-element state.
pub fn finalize(session: EditSession, acting_role: Role) -> (CompanyPatch, SubmitMode) {
    let (mut payload, seeded_assignment, is_existing) = session.into_state();

    if !acting_role.can_assign() {
        payload.assigned_officer = seeded_assignment;
    }
    payload.assigned_officer.truncate(1);

    let mode = match (acting_role, is_existing) {
        (Role::Officer, true) => SubmitMode::PendingApproval,
        (_, true) => SubmitMode::Direct,
        (_, false) => SubmitMode::Create,
    };

    (payload, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assignment::RawAssignment;
    use crate::core::session::FieldChange;
    use crate::models::{CompanyRecord, DriveType};

    fn existing_session(assignment: &[&str]) -> EditSession {
        let mut record = CompanyRecord::new("Acme");
        record.assigned_officer = assignment.iter().map(|s| s.to_string()).collect();
        EditSession::seed_from_record(&record)
    }

    #[test]
    fn test_officer_existing_is_pending_approval() {
        let session = existing_session(&["u1"]);
        let (_, mode) = finalize(session, Role::Officer);
        assert_eq!(mode, SubmitMode::PendingApproval);
    }

    #[test]
    fn test_officer_new_is_create() {
        let session = EditSession::seed_new(None);
        let (payload, mode) = finalize(session, Role::Officer);
        assert_eq!(mode, SubmitMode::Create);
        assert!(payload.assigned_officer.is_empty());
    }

    #[test]
    fn test_manager_existing_is_direct() {
        let session = existing_session(&[]);
        let (_, mode) = finalize(session, Role::Manager);
        assert_eq!(mode, SubmitMode::Direct);
    }

    #[test]
    fn test_admin_new_is_create() {
        let session = EditSession::seed_new(None);
        let (_, mode) = finalize(session, Role::Admin);
        assert_eq!(mode, SubmitMode::Create);
    }

    #[test]
    fn test_officer_cannot_change_assignment() {
        let mut session = existing_session(&["u1"]);
        // The surface should never offer this to an officer, but even if it
        // does the policy restores the seeded value.
        session.apply(FieldChange::Assignment(Some(RawAssignment::One(
            "mallory".to_string(),
        ))));

        let (payload, mode) = finalize(session, Role::Officer);
        assert_eq!(mode, SubmitMode::PendingApproval);
        assert_eq!(payload.assigned_officer, vec!["u1".to_string()]);
    }

    #[test]
    fn test_manager_assignment_change_is_honored() {
        let mut session = existing_session(&["u1"]);
        session.apply(FieldChange::Assignment(Some(RawAssignment::One(
            "alice".to_string(),
        ))));

        let (payload, mode) = finalize(session, Role::Manager);
        assert_eq!(mode, SubmitMode::Direct);
        assert_eq!(payload.assigned_officer, vec!["alice".to_string()]);
    }

    #[test]
    fn test_unset_drive_type_reaches_the_record() {
        let mut original = CompanyRecord::new("Acme");
        original.type_of_drive = Some(DriveType::Virtual);

        let mut session = EditSession::seed_from_record(&original);
        session.apply(FieldChange::TypeOfDrive(None));
        let (patch, mode) = finalize(session, Role::Manager);
        assert_eq!(mode, SubmitMode::Direct);

        let mut record = original.clone();
        record.apply_patch(&patch);
        assert_eq!(record.type_of_drive, None);
    }

    #[test]
    fn test_payload_assignment_is_reflattened() {
        // Transient multi-element state must not survive finalize.
        let mut session = existing_session(&["u1"]);
        session.apply(FieldChange::Assignment(Some(RawAssignment::Many(vec![
            "alice".to_string(),
            "bob".to_string(),
        ]))));

        let (payload, _) = finalize(session, Role::Admin);
        assert_eq!(payload.assigned_officer, vec!["alice".to_string()]);
    }
}
