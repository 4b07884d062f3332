pub const SCHEMA_VERSION: i32 = 1;

pub const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS companies (
    id TEXT PRIMARY KEY,
    company_name TEXT NOT NULL,
    company_address TEXT,
    drive TEXT,
    type_of_drive TEXT,
    follow_up TEXT,
    is_contacted INTEGER NOT NULL DEFAULT 0,
    remarks TEXT,
    contact_details TEXT,
    hr1_details TEXT,
    hr2_details TEXT,
    package TEXT,
    assigned_officer TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_companies_name ON companies(company_name);

-- Officer edits to existing companies queue here for later review
CREATE TABLE IF NOT EXISTS pending_changes (
    id TEXT PRIMARY KEY,
    company_id TEXT,
    patch TEXT NOT NULL,
    submitted_by TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending',
    created_at TEXT NOT NULL,
    FOREIGN KEY (company_id) REFERENCES companies(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_pending_changes_status ON pending_changes(status);
CREATE INDEX IF NOT EXISTS idx_pending_changes_company ON pending_changes(company_id);
"#;
