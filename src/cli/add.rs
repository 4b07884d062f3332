use anyhow::Result;

use crate::cli::edit::{fetch_roster, report_outcome};
use crate::cli::form::prompt_company_form;
use crate::config::Config;
use crate::core::{finalize, EditSession, FieldChange, RawAssignment};
use crate::db::Database;
use crate::submit::{DbSubmissionSink, SubmissionSink};

/// Execute the add command
pub fn run_add(
    db: &Database,
    config: &Config,
    name: Option<String>,
    assign: Option<String>,
) -> Result<()> {
    let role = config.acting_user.role;

    // A caller-supplied default assignee is installed before the form opens;
    // it still flows through normalization like any other assignment input.
    let mut session = EditSession::seed_new(assign.map(RawAssignment::One));

    if let Some(name) = name {
        session.apply(FieldChange::CompanyName(name));
    }

    let roster = if role.can_assign() {
        fetch_roster(config)
    } else {
        Vec::new()
    };
    session.reconcile(&roster);

    prompt_company_form(&mut session, &roster, role.can_assign())?;

    if session
        .state()
        .company_name
        .as_deref()
        .map_or(true, |n| n.trim().is_empty())
    {
        println!("Company name is required; nothing created.");
        return Ok(());
    }

    let (patch, mode) = finalize(session, role);
    let sink = DbSubmissionSink::new(db, config.acting_user.username.clone());
    report_outcome(sink.submit(&patch, mode)?, mode);

    Ok(())
}
