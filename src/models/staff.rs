use serde::{Deserialize, Serialize};

/// A staff member available for assignment, as supplied by the roster.
///
/// Snapshots are immutable; uniqueness of id/username/email is assumed
/// upstream, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Role {
    Admin,
    Manager,
    #[default]
    Officer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Officer => "Officer",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "Admin" => Self::Admin,
            "Manager" => Self::Manager,
            _ => Self::Officer,
        }
    }

    /// Only admins and managers may present or change the assignment field.
    pub fn can_assign(&self) -> bool {
        matches!(self, Self::Admin | Self::Manager)
    }
}
