use anyhow::{anyhow, Result};
use uuid::Uuid;

use crate::cli::form::prompt_company_form;
use crate::cli::ui::select;
use crate::config::Config;
use crate::core::{finalize, EditSession, SubmitMode};
use crate::db::Database;
use crate::models::CompanyRecord;
use crate::roster::{HttpRosterProvider, RosterProvider, StaticRoster};
use crate::submit::{DbSubmissionSink, SubmissionSink, SubmitOutcome};

/// Execute the edit command
pub fn run_edit(db: &Database, config: &Config, identifier: &str) -> Result<()> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(anyhow!("Identifier cannot be empty."));
    }

    let company = match find_company(db, identifier)? {
        Some(c) => c,
        None => {
            println!("No company found matching \"{}\".", identifier);
            return Ok(());
        }
    };

    let role = config.acting_user.role;
    if !role.can_assign() {
        println!("As an officer, your changes will be submitted for approval.");
    }

    // Officers never see the assignment control, so skip the roster fetch
    // entirely for them, as the original editor did.
    let roster = if role.can_assign() {
        fetch_roster(config)
    } else {
        Vec::new()
    };

    let mut session = EditSession::seed_from_record(&company);
    session.reconcile(&roster);

    prompt_company_form(&mut session, &roster, role.can_assign())?;

    let (patch, mode) = finalize(session, role);
    let sink = DbSubmissionSink::new(db, config.acting_user.username.clone());
    report_outcome(sink.submit(&patch, mode)?, mode);

    Ok(())
}

pub(super) fn fetch_roster(config: &Config) -> Vec<crate::models::StaffMember> {
    match config.roster_url {
        Some(ref url) => HttpRosterProvider::new(url.clone()).fetch_roster_or_empty(),
        None => StaticRoster(Vec::new()).fetch_roster_or_empty(),
    }
}

pub(super) fn find_company(db: &Database, identifier: &str) -> Result<Option<CompanyRecord>> {
    // Try UUID first
    if let Ok(uuid) = Uuid::parse_str(identifier) {
        return db.get_company_by_id(uuid);
    }

    // Search by name
    let results = db.find_companies_by_name(identifier, 20)?;

    match results.len() {
        0 => Ok(None),
        1 => Ok(results.into_iter().next()),
        _ => {
            // Duplicate names are exactly why we end up here, so label each
            // candidate with enough detail to tell them apart.
            let labels: Vec<String> = results.iter().map(company_choice_label).collect();
            match select("Multiple matches:", &labels)? {
                Some(idx) => Ok(results.into_iter().nth(idx)),
                None => Ok(None),
            }
        }
    }
}

fn company_choice_label(company: &CompanyRecord) -> String {
    let assigned = company
        .assigned_officer
        .first()
        .map(String::as_str)
        .unwrap_or("unassigned");
    format!(
        "{} [{}] {} (updated {})",
        company.company_name,
        &company.id.to_string()[..8],
        assigned,
        company.updated_at.format("%Y-%m-%d"),
    )
}

pub(super) fn report_outcome(outcome: SubmitOutcome, mode: SubmitMode) {
    match outcome {
        SubmitOutcome::Created { company_name } => {
            println!("Created: {}", company_name);
        }
        SubmitOutcome::Updated { company_name } => {
            println!("Updated: {}", company_name);
        }
        SubmitOutcome::QueuedForApproval { change_id } => {
            println!("Submitted for approval (change {}).", change_id);
        }
    }
    if mode == SubmitMode::PendingApproval {
        println!("Only admins and managers can approve your update.");
    }
}
