//! Client preferences

use serde::{Deserialize, Serialize};

/// User-facing client preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Preferences {
    /// Allows non-HTTPS session URLs and demo scheme managers
    #[serde(default)]
    pub developer_mode: bool,
}
