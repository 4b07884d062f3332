use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use uuid::Uuid;

use super::Database;
use crate::models::{CompanyRecord, DriveType};

impl Database {
    // ==================== COMPANY CREATE ====================

    pub fn insert_company(&self, company: &CompanyRecord) -> Result<()> {
        self.conn.execute(
            r#"INSERT INTO companies (
                id, company_name, company_address, drive, type_of_drive,
                follow_up, is_contacted, remarks, contact_details, hr1_details,
                hr2_details, package, assigned_officer, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
            params![
                company.id.to_string(),
                company.company_name,
                company.company_address,
                company.drive,
                company.type_of_drive.map(|t| t.as_str()),
                company.follow_up,
                company.is_contacted as i32,
                company.remarks,
                company.contact_details,
                company.hr1_details,
                company.hr2_details,
                company.package,
                company.assigned_officer.first().map(String::as_str),
                company.created_at.to_rfc3339(),
                company.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    // ==================== COMPANY READ ====================

    pub fn get_company_by_id(&self, id: Uuid) -> Result<Option<CompanyRecord>> {
        let mut stmt = self.conn.prepare("SELECT * FROM companies WHERE id = ?")?;

        let result = stmt.query_row([id.to_string()], row_to_company);

        match result {
            Ok(company) => Ok(Some(company)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Case-insensitive substring search on the company name.
    pub fn find_companies_by_name(&self, query: &str, limit: u32) -> Result<Vec<CompanyRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT * FROM companies WHERE company_name LIKE ? COLLATE NOCASE
             ORDER BY company_name ASC LIMIT ?",
        )?;

        let pattern = format!("%{}%", query);
        let companies = stmt
            .query_map(params![pattern, limit], row_to_company)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(companies)
    }

    pub fn list_companies(&self, limit: u32, offset: u32) -> Result<Vec<CompanyRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT * FROM companies ORDER BY company_name ASC LIMIT ? OFFSET ?",
        )?;

        let companies = stmt
            .query_map([limit, offset], row_to_company)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(companies)
    }

    pub fn count_companies(&self) -> Result<u32> {
        let count: u32 =
            self.conn
                .query_row("SELECT COUNT(*) FROM companies", [], |row| row.get(0))?;
        Ok(count)
    }

    // ==================== COMPANY UPDATE ====================

    pub fn update_company(&self, company: &CompanyRecord) -> Result<()> {
        self.conn.execute(
            r#"UPDATE companies SET
                company_name = ?, company_address = ?, drive = ?,
                type_of_drive = ?, follow_up = ?, is_contacted = ?,
                remarks = ?, contact_details = ?, hr1_details = ?,
                hr2_details = ?, package = ?, assigned_officer = ?,
                updated_at = ?
            WHERE id = ?"#,
            params![
                company.company_name,
                company.company_address,
                company.drive,
                company.type_of_drive.map(|t| t.as_str()),
                company.follow_up,
                company.is_contacted as i32,
                company.remarks,
                company.contact_details,
                company.hr1_details,
                company.hr2_details,
                company.package,
                company.assigned_officer.first().map(String::as_str),
                company.updated_at.to_rfc3339(),
                company.id.to_string(),
            ],
        )?;
        Ok(())
    }
}

fn row_to_company(row: &Row) -> rusqlite::Result<CompanyRecord> {
    let id: String = row.get("id")?;
    let id = Uuid::parse_str(&id).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(CompanyRecord {
        id,
        company_name: row.get("company_name")?,
        company_address: row.get("company_address")?,
        drive: row.get("drive")?,
        type_of_drive: row
            .get::<_, Option<String>>("type_of_drive")?
            .and_then(|s| DriveType::parse(&s)),
        follow_up: row.get("follow_up")?,
        is_contacted: row.get::<_, i32>("is_contacted")? != 0,
        remarks: row.get("remarks")?,
        contact_details: row.get("contact_details")?,
        hr1_details: row.get("hr1_details")?,
        hr2_details: row.get("hr2_details")?,
        package: row.get("package")?,
        assigned_officer: row
            .get::<_, Option<String>>("assigned_officer")?
            .into_iter()
            .collect(),
        created_at: parse_datetime(row.get::<_, String>("created_at")?),
        updated_at: parse_datetime(row.get::<_, String>("updated_at")?),
    })
}

pub(super) fn parse_datetime(s: String) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
