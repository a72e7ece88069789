//! Bridge configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Bridge configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// File name of a credential type logo inside its asset directory
    pub logo_file_name: String,

    /// Directory under an issuer holding one asset directory per credential type
    pub issues_directory: String,

    /// Client state file to load (JSON)
    pub state_path: Option<PathBuf>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            logo_file_name: "logo.png".to_string(),
            issues_directory: "Issues".to_string(),
            state_path: None,
        }
    }
}

impl BridgeConfig {
    /// Defaults overridden by `LUMEN_LOGO_FILE`, `LUMEN_ISSUES_DIR` and
    /// `LUMEN_STATE_PATH`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            logo_file_name: lookup("LUMEN_LOGO_FILE").unwrap_or(defaults.logo_file_name),
            issues_directory: lookup("LUMEN_ISSUES_DIR").unwrap_or(defaults.issues_directory),
            state_path: lookup("LUMEN_STATE_PATH").map(PathBuf::from),
        }
    }

    /// Create a new config with a custom state file
    pub fn with_state_path(state_path: impl Into<PathBuf>) -> Self {
        Self {
            state_path: Some(state_path.into()),
            ..Default::default()
        }
    }
}
