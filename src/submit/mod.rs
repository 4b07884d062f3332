//! Submission sinks: where a finalized edit goes.
//!
//! The editing core hands each finalized payload to exactly one sink call
//! and passes the result upward untouched; no retry logic lives here.

use anyhow::{anyhow, Result};

use crate::core::SubmitMode;
use crate::db::Database;
use crate::models::CompanyPatch;

/// Outcome of a submission, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { company_name: String },
    Updated { company_name: String },
    QueuedForApproval { change_id: String },
}

pub trait SubmissionSink {
    fn submit(&self, patch: &CompanyPatch, mode: SubmitMode) -> Result<SubmitOutcome>;
}

/// Sink backed by the local database: creates and direct updates are applied
/// to the companies table, pending-approval edits are queued for review.
pub struct DbSubmissionSink<'a> {
    db: &'a Database,
    submitted_by: String,
}

impl<'a> DbSubmissionSink<'a> {
    pub fn new(db: &'a Database, submitted_by: impl Into<String>) -> Self {
        Self {
            db,
            submitted_by: submitted_by.into(),
        }
    }
}

impl SubmissionSink for DbSubmissionSink<'_> {
    fn submit(&self, patch: &CompanyPatch, mode: SubmitMode) -> Result<SubmitOutcome> {
        match mode {
            SubmitMode::Create => {
                let record = patch.clone().into_record();
                if record.company_name.is_empty() {
                    return Err(anyhow!("Company name is required."));
                }
                self.db.insert_company(&record)?;
                Ok(SubmitOutcome::Created {
                    company_name: record.company_name,
                })
            }
            SubmitMode::Direct => {
                let id = patch
                    .id
                    .ok_or_else(|| anyhow!("Direct update without a record id."))?;
                let mut record = self
                    .db
                    .get_company_by_id(id)?
                    .ok_or_else(|| anyhow!("Company {} no longer exists.", id))?;
                record.apply_patch(patch);
                self.db.update_company(&record)?;
                Ok(SubmitOutcome::Updated {
                    company_name: record.company_name,
                })
            }
            SubmitMode::PendingApproval => {
                let change_id =
                    self.db
                        .insert_pending_change(patch.id, patch, &self.submitted_by)?;
                Ok(SubmitOutcome::QueuedForApproval { change_id })
            }
        }
    }
}
