use anyhow::Result;

use crate::cli::ui::truncate;
use crate::db::Database;

/// Execute the pending command: list queued edits awaiting review.
pub fn run_pending(db: &Database) -> Result<()> {
    let changes = db.list_pending_changes()?;
    if changes.is_empty() {
        println!("No pending changes.");
        return Ok(());
    }

    println!(
        "{:<28}  {:<14}  {:<16}  {}",
        "COMPANY", "SUBMITTED BY", "QUEUED", "CHANGED FIELDS"
    );

    for change in &changes {
        let company_name = change
            .company_id
            .and_then(|id| db.get_company_by_id(id).ok().flatten())
            .map(|c| c.company_name)
            .unwrap_or_else(|| "(deleted)".to_string());

        println!(
            "{:<28}  {:<14}  {:<16}  {}",
            truncate(&company_name, 28),
            truncate(&change.submitted_by, 14),
            change.created_at.format("%Y-%m-%d %H:%M"),
            summarize_fields(&change.patch),
        );
    }

    println!("\n{} pending change(s).", changes.len());

    Ok(())
}

fn summarize_fields(patch: &crate::models::CompanyPatch) -> String {
    let mut fields = Vec::new();
    if patch.company_name.is_some() {
        fields.push("name");
    }
    if patch.company_address.is_some() {
        fields.push("address");
    }
    if patch.drive.is_some() {
        fields.push("drive");
    }
    if patch.type_of_drive.is_some() {
        fields.push("drive type");
    }
    if patch.follow_up.is_some() {
        fields.push("follow up");
    }
    if patch.is_contacted.is_some() {
        fields.push("contacted");
    }
    if patch.remarks.is_some() {
        fields.push("remarks");
    }
    if patch.contact_details.is_some() {
        fields.push("contact");
    }
    if patch.hr1_details.is_some() || patch.hr2_details.is_some() {
        fields.push("hr");
    }
    if patch.package.is_some() {
        fields.push("package");
    }
    if !patch.assigned_officer.is_empty() {
        fields.push("assignment");
    }

    if fields.is_empty() {
        "-".to_string()
    } else {
        fields.join(", ")
    }
}
