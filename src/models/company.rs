use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::assignment;

/// A recruiting-drive company record.
///
/// `assigned_officer` holds at most one identifier. Input tolerates the
/// legacy wire shapes (absent, bare string, list); output is always the
/// canonical 0/1-element list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub id: Uuid,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_of_drive: Option<DriveType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,
    pub is_contacted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr1_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr2_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, deserialize_with = "assignment::deserialize")]
    pub assigned_officer: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Type of recruiting drive. Wire strings match the upstream data format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriveType {
    #[serde(rename = "On-Campus")]
    OnCampus,
    #[serde(rename = "Off-Campus")]
    OffCampus,
    Virtual,
}

impl DriveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnCampus => "On-Campus",
            Self::OffCampus => "Off-Campus",
            Self::Virtual => "Virtual",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "On-Campus" => Some(Self::OnCampus),
            "Off-Campus" => Some(Self::OffCampus),
            "Virtual" => Some(Self::Virtual),
            _ => None,
        }
    }
}

impl CompanyRecord {
    pub fn new(company_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            company_name: company_name.into(),
            company_address: None,
            drive: None,
            type_of_drive: None,
            follow_up: None,
            is_contacted: false,
            remarks: None,
            contact_details: None,
            hr1_details: None,
            hr2_details: None,
            package: None,
            assigned_officer: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a finalized patch to this record. Absent patch fields leave the
    /// existing values in place; the assignment list replaces wholesale.
    pub fn apply_patch(&mut self, patch: &CompanyPatch) {
        if let Some(ref v) = patch.company_name {
            self.company_name = v.clone();
        }
        if patch.company_address.is_some() {
            self.company_address = patch.company_address.clone();
        }
        if patch.drive.is_some() {
            self.drive = patch.drive.clone();
        }
        if let Some(v) = patch.type_of_drive {
            self.type_of_drive = v;
        }
        if patch.follow_up.is_some() {
            self.follow_up = patch.follow_up.clone();
        }
        if let Some(v) = patch.is_contacted {
            self.is_contacted = v;
        }
        if patch.remarks.is_some() {
            self.remarks = patch.remarks.clone();
        }
        if patch.contact_details.is_some() {
            self.contact_details = patch.contact_details.clone();
        }
        if patch.hr1_details.is_some() {
            self.hr1_details = patch.hr1_details.clone();
        }
        if patch.hr2_details.is_some() {
            self.hr2_details = patch.hr2_details.clone();
        }
        if patch.package.is_some() {
            self.package = patch.package.clone();
        }
        self.assigned_officer = patch.assigned_officer.clone();
        self.updated_at = Utc::now();
    }
}

/// Partial company record: the working copy during an edit session and the
/// outgoing submission payload. Every field is optional except the
/// assignment list, which is always present in canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive: Option<String>,
    /// Outer `None` leaves the stored value alone; `Some(None)` clears it.
    /// On the wire an absent field is untouched and an explicit `null`
    /// clears.
    #[serde(
        default,
        deserialize_with = "deserialize_clearable",
        skip_serializing_if = "Option::is_none"
    )]
    pub type_of_drive: Option<Option<DriveType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_contacted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr1_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr2_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, deserialize_with = "assignment::deserialize")]
    pub assigned_officer: Vec<String>,
}

impl CompanyPatch {
    /// Working copy of an existing record, with every field populated.
    pub fn from_record(record: &CompanyRecord) -> Self {
        Self {
            id: Some(record.id),
            company_name: Some(record.company_name.clone()),
            company_address: record.company_address.clone(),
            drive: record.drive.clone(),
            type_of_drive: Some(record.type_of_drive),
            follow_up: record.follow_up.clone(),
            is_contacted: Some(record.is_contacted),
            remarks: record.remarks.clone(),
            contact_details: record.contact_details.clone(),
            hr1_details: record.hr1_details.clone(),
            hr2_details: record.hr2_details.clone(),
            package: record.package.clone(),
            assigned_officer: record.assigned_officer.clone(),
        }
    }

    /// Build a fresh record from a creation patch.
    pub fn into_record(self) -> CompanyRecord {
        let mut record = CompanyRecord::new(self.company_name.clone().unwrap_or_default());
        if let Some(id) = self.id {
            record.id = id;
        }
        record.apply_patch(&self);
        record
    }
}

/// Serde shim for clearable patch fields: a present value (including an
/// explicit `null`) wraps in `Some`, so only a field absent from the JSON
/// deserializes to the outer `None`.
fn deserialize_clearable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    Ok(Some(Option::<T>::deserialize(deserializer)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accepts_scalar_assignment() {
        let json = r#"{
            "id": "5f9c1a2e-1234-4321-9876-0123456789ab",
            "companyName": "Acme",
            "isContacted": false,
            "assignedOfficer": "u1",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;
        let record: CompanyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.assigned_officer, vec!["u1".to_string()]);
    }

    #[test]
    fn test_record_serializes_assignment_as_list() {
        let mut record = CompanyRecord::new("Acme");
        record.assigned_officer = vec!["alice".to_string()];
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""assignedOfficer":["alice"]"#));
    }

    #[test]
    fn test_drive_type_wire_strings() {
        assert_eq!(
            serde_json::to_string(&DriveType::OnCampus).unwrap(),
            r#""On-Campus""#
        );
        assert_eq!(DriveType::parse("Virtual"), Some(DriveType::Virtual));
        assert_eq!(DriveType::parse("Hybrid"), None);
    }

    #[test]
    fn test_apply_patch_leaves_absent_fields() {
        let mut record = CompanyRecord::new("Acme");
        record.remarks = Some("keep me".to_string());

        let patch = CompanyPatch {
            package: Some("12 LPA".to_string()),
            ..Default::default()
        };
        record.apply_patch(&patch);

        assert_eq!(record.remarks.as_deref(), Some("keep me"));
        assert_eq!(record.package.as_deref(), Some("12 LPA"));
        assert!(record.assigned_officer.is_empty());
    }

    #[test]
    fn test_apply_patch_clears_drive_type() {
        let mut record = CompanyRecord::new("Acme");
        record.type_of_drive = Some(DriveType::Virtual);

        let patch = CompanyPatch {
            type_of_drive: Some(None),
            ..Default::default()
        };
        record.apply_patch(&patch);
        assert_eq!(record.type_of_drive, None);
    }

    #[test]
    fn test_patch_without_drive_type_keeps_stored_value() {
        let mut record = CompanyRecord::new("Acme");
        record.type_of_drive = Some(DriveType::Virtual);
        record.apply_patch(&CompanyPatch::default());
        assert_eq!(record.type_of_drive, Some(DriveType::Virtual));
    }

    #[test]
    fn test_patch_drive_type_null_clears_absent_leaves() {
        let patch: CompanyPatch = serde_json::from_str(r#"{"typeOfDrive": null}"#).unwrap();
        assert_eq!(patch.type_of_drive, Some(None));

        let patch: CompanyPatch = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(patch.type_of_drive, None);
    }

    #[test]
    fn test_from_record_into_record_roundtrip() {
        let mut record = CompanyRecord::new("Acme");
        record.assigned_officer = vec!["alice".to_string()];
        record.type_of_drive = Some(DriveType::Virtual);

        let rebuilt = CompanyPatch::from_record(&record).into_record();
        assert_eq!(rebuilt.id, record.id);
        assert_eq!(rebuilt.company_name, "Acme");
        assert_eq!(rebuilt.type_of_drive, Some(DriveType::Virtual));
        assert_eq!(rebuilt.assigned_officer, vec!["alice".to_string()]);
    }
}
