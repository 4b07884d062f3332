//! Staff roster providers.
//!
//! The roster is fetched once per session. A fetch failure is non-fatal:
//! callers degrade to an empty roster, which makes every resolution a
//! not-found and canonicalization a no-op.

use anyhow::{anyhow, Result};
use std::time::Duration;

use crate::models::StaffMember;

pub trait RosterProvider {
    fn fetch_roster(&self) -> Result<Vec<StaffMember>>;

    /// Fetch the roster, degrading any failure to an empty list with a
    /// warning rather than propagating an error to the editor.
    fn fetch_roster_or_empty(&self) -> Vec<StaffMember> {
        match self.fetch_roster() {
            Ok(roster) => roster,
            Err(e) => {
                eprintln!("Warning: Failed to fetch staff roster: {}", e);
                Vec::new()
            }
        }
    }
}

/// Roster fetched over HTTP from the user-list endpoint.
pub struct HttpRosterProvider {
    url: String,
    timeout: Duration,
}

impl HttpRosterProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl RosterProvider for HttpRosterProvider {
    fn fetch_roster(&self) -> Result<Vec<StaffMember>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let response = client
            .get(&self.url)
            // The upstream endpoint sits behind an ngrok tunnel that
            // interposes a browser warning page without this header.
            .header("ngrok-skip-browser-warning", "1")
            .send()?;

        if !response.status().is_success() {
            return Err(anyhow!("roster endpoint returned {}", response.status()));
        }

        // The endpoint has been seen returning a JSON null for no users.
        let roster: Option<Vec<StaffMember>> = response.json()?;
        Ok(roster.unwrap_or_default())
    }
}

/// Fixed in-memory roster, for tests and offline runs.
pub struct StaticRoster(pub Vec<StaffMember>);

impl RosterProvider for StaticRoster {
    fn fetch_roster(&self) -> Result<Vec<StaffMember>> {
        Ok(self.0.clone())
    }
}

/// Provider that always fails, for exercising the degraded path.
pub struct UnavailableRoster;

impl RosterProvider for UnavailableRoster {
    fn fetch_roster(&self) -> Result<Vec<StaffMember>> {
        Err(anyhow!("roster source unavailable"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_static_roster() {
        let provider = StaticRoster(vec![StaffMember {
            id: "u1".to_string(),
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            role: Role::Manager,
        }]);
        let roster = provider.fetch_roster().unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].username, "alice");
    }

    #[test]
    fn test_failure_degrades_to_empty() {
        let roster = UnavailableRoster.fetch_roster_or_empty();
        assert!(roster.is_empty());
    }
}
