//! Storage for officer edits awaiting review.

use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::params;
use uuid::Uuid;

use super::companies::parse_datetime;
use super::Database;
use crate::models::CompanyPatch;

/// A submitted edit waiting for an admin or manager to review it.
#[derive(Debug, Clone)]
pub struct PendingChange {
    pub id: String,
    pub company_id: Option<Uuid>,
    pub patch: CompanyPatch,
    pub submitted_by: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Database {
    pub fn insert_pending_change(
        &self,
        company_id: Option<Uuid>,
        patch: &CompanyPatch,
        submitted_by: &str,
    ) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO pending_changes (id, company_id, patch, submitted_by, status, created_at)
             VALUES (?, ?, ?, ?, 'pending', ?)",
            params![
                id,
                company_id.map(|c| c.to_string()),
                serde_json::to_string(patch)?,
                submitted_by,
                now,
            ],
        )?;
        Ok(id)
    }

    pub fn list_pending_changes(&self) -> Result<Vec<PendingChange>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, company_id, patch, submitted_by, status, created_at
             FROM pending_changes WHERE status = 'pending' ORDER BY created_at ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut changes = Vec::new();
        for row in rows {
            let (id, company_id, patch, submitted_by, status, created_at) = row?;
            changes.push(PendingChange {
                id,
                company_id: company_id.and_then(|c| Uuid::parse_str(&c).ok()),
                patch: serde_json::from_str(&patch)?,
                submitted_by,
                status,
                created_at: parse_datetime(created_at),
            });
        }

        Ok(changes)
    }

    pub fn count_pending_changes(&self) -> Result<u32> {
        let count: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM pending_changes WHERE status = 'pending'",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompanyRecord;

    #[test]
    fn test_insert_and_list_pending() {
        let db = Database::open_memory().unwrap();
        let company = CompanyRecord::new("Acme");
        db.insert_company(&company).unwrap();

        let patch = CompanyPatch {
            id: Some(company.id),
            remarks: Some("officer edit".to_string()),
            ..Default::default()
        };
        db.insert_pending_change(Some(company.id), &patch, "carol")
            .unwrap();

        let pending = db.list_pending_changes().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].submitted_by, "carol");
        assert_eq!(pending[0].company_id, Some(company.id));
        assert_eq!(pending[0].patch.remarks.as_deref(), Some("officer edit"));
        assert_eq!(db.count_pending_changes().unwrap(), 1);
    }

    #[test]
    fn test_pending_patch_preserves_assignment_list() {
        let db = Database::open_memory().unwrap();
        let company = CompanyRecord::new("Acme");
        db.insert_company(&company).unwrap();

        let patch = CompanyPatch {
            id: Some(company.id),
            assigned_officer: vec!["alice".to_string()],
            ..Default::default()
        };
        db.insert_pending_change(Some(company.id), &patch, "boris")
            .unwrap();

        let pending = db.list_pending_changes().unwrap();
        assert_eq!(
            pending[0].patch.assigned_officer,
            vec!["alice".to_string()]
        );
    }
}
