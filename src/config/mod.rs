//! On-disk configuration: the roster endpoint and the acting user.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::Role;

/// The user running this session. Read-only to the editing core; only the
/// role feeds the submission policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActingUser {
    pub username: String,
    pub role: Role,
}

impl Default for ActingUser {
    fn default() -> Self {
        Self {
            username: whoami(),
            role: Role::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// User-list endpoint for the staff roster. When unset, sessions run
    /// with an empty roster and assignments stay in their raw form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster_url: Option<String>,
    #[serde(default)]
    pub acting_user: ActingUser,
}

impl Config {
    /// Load config, falling back to defaults when no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    fn default_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join("drivecmd").join("config.json"))
    }
}

fn whoami() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "officer".to_string())
}
