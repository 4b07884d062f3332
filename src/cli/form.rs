//! Interactive field prompts for an edit session.

use anyhow::Result;

use crate::cli::ui::{confirm, select, text_input};
use crate::core::{EditSession, FieldChange, RawAssignment, ResolvedAssignee};
use crate::models::{DriveType, StaffMember};

const DRIVE_TYPES: [DriveType; 3] = [DriveType::OnCampus, DriveType::OffCampus, DriveType::Virtual];

/// Walk the user through every editable field. Each prompt defaults to the
/// session's current value; Esc keeps a field as-is. The assignment prompt
/// is only shown when `can_assign` is set; for other roles the field is not
/// offered at all.
pub fn prompt_company_form(
    session: &mut EditSession,
    roster: &[StaffMember],
    can_assign: bool,
) -> Result<()> {
    if let Some(v) = text_input(
        "Company name:",
        session.state().company_name.as_deref(),
    )? {
        if !v.trim().is_empty() {
            session.apply(FieldChange::CompanyName(v.trim().to_string()));
        }
    }

    if let Some(v) = text_input("Address:", session.state().company_address.as_deref())? {
        session.apply(FieldChange::CompanyAddress(v));
    }

    if let Some(v) = text_input("Drive:", session.state().drive.as_deref())? {
        session.apply(FieldChange::Drive(v));
    }

    prompt_drive_type(session)?;

    if let Some(v) = text_input("Follow up:", session.state().follow_up.as_deref())? {
        session.apply(FieldChange::FollowUp(v));
    }

    let contacted = confirm(
        "Company contacted?",
        session.state().is_contacted.unwrap_or(false),
    )?;
    session.apply(FieldChange::IsContacted(contacted));

    if let Some(v) = text_input(
        "Contact details:",
        session.state().contact_details.as_deref(),
    )? {
        session.apply(FieldChange::ContactDetails(v));
    }

    if let Some(v) = text_input("HR1 details:", session.state().hr1_details.as_deref())? {
        session.apply(FieldChange::Hr1Details(v));
    }

    if let Some(v) = text_input("HR2 details:", session.state().hr2_details.as_deref())? {
        session.apply(FieldChange::Hr2Details(v));
    }

    if let Some(v) = text_input("Package:", session.state().package.as_deref())? {
        session.apply(FieldChange::Package(v));
    }

    if can_assign {
        prompt_assignment(session, roster)?;
    }

    if let Some(v) = text_input("Remarks:", session.state().remarks.as_deref())? {
        session.apply(FieldChange::Remarks(v));
    }

    Ok(())
}

fn prompt_drive_type(session: &mut EditSession) -> Result<()> {
    let mut options: Vec<&str> = DRIVE_TYPES.iter().map(|t| t.as_str()).collect();
    options.push("(unset)");

    if let Some(idx) = select("Type of drive:", &options)? {
        let change = DRIVE_TYPES.get(idx).copied();
        session.apply(FieldChange::TypeOfDrive(change));
    }
    Ok(())
}

fn prompt_assignment(session: &mut EditSession, roster: &[StaffMember]) -> Result<()> {
    let current = match session.state().assigned_officer.first() {
        Some(id) => ResolvedAssignee::lookup(id, roster).display_name().to_string(),
        None => "Unassigned".to_string(),
    };
    println!("Currently assigned: {}", current);

    if roster.is_empty() {
        println!("No staff roster available; leaving assignment unchanged.");
        return Ok(());
    }

    let mut options = vec!["Unassigned".to_string()];
    options.extend(
        roster
            .iter()
            .map(|m| format!("{} ({})", m.username, m.role.as_str())),
    );

    if let Some(idx) = select("Assign officer/manager:", &options)? {
        let change = if idx == 0 {
            None
        } else {
            Some(RawAssignment::One(roster[idx - 1].username.clone()))
        };
        session.apply(FieldChange::Assignment(change));
    }
    Ok(())
}
