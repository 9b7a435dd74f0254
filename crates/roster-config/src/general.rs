//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_environment() -> String {
    "development".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Deployment environment name (e.g., "development", "production").
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
        }
    }
}
