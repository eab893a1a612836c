//! Org Configuration
//!
//! Connection settings for the org REST API plus the board's presentation
//! config. Read from `line_item_board.json` in the app config directory, then
//! overridden by `LINE_ITEM_BOARD_*` environment variables.

use std::path::Path;
use std::time::Duration;

use line_item_board_core::BoardConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "line_item_board.json";

pub const ENV_INSTANCE_URL: &str = "LINE_ITEM_BOARD_INSTANCE_URL";
pub const ENV_ACCESS_TOKEN: &str = "LINE_ITEM_BOARD_ACCESS_TOKEN";
pub const ENV_USER_ID: &str = "LINE_ITEM_BOARD_USER_ID";
pub const ENV_API_VERSION: &str = "LINE_ITEM_BOARD_API_VERSION";
pub const ENV_RECORD_ID: &str = "LINE_ITEM_BOARD_RECORD_ID";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrgConfig {
    /// e.g. `https://example.my.salesforce.com`
    pub instance_url: String,
    pub access_token: String,
    /// Signed-in user whose profile gates the board actions
    pub user_id: String,
    pub api_version: String,
    pub request_timeout_secs: u64,
    pub profile_poll_secs: u64,
    pub board: BoardConfig,
}

impl Default for OrgConfig {
    fn default() -> Self {
        Self {
            instance_url: String::new(),
            access_token: String::new(),
            user_id: String::new(),
            api_version: "59.0".to_string(),
            request_timeout_secs: 30,
            profile_poll_secs: 60,
            board: BoardConfig::default(),
        }
    }
}

impl OrgConfig {
    /// Read `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse { path: display, source })
    }

    /// Apply overrides from `lookup` (the process environment in production)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty(ENV_INSTANCE_URL) {
            self.instance_url = v;
        }
        if let Some(v) = non_empty(ENV_ACCESS_TOKEN) {
            self.access_token = v;
        }
        if let Some(v) = non_empty(ENV_USER_ID) {
            self.user_id = v;
        }
        if let Some(v) = non_empty(ENV_API_VERSION) {
            self.api_version = v;
        }
        self
    }

    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::load(path)?.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Instance URL and token are both set
    pub fn is_connected(&self) -> bool {
        !self.instance_url.trim().is_empty() && !self.access_token.trim().is_empty()
    }

    pub fn instance_root(&self) -> &str {
        self.instance_url.trim().trim_end_matches('/')
    }

    /// Base of the versioned REST API
    pub fn api_base(&self) -> String {
        let version = self.api_version.trim().trim_start_matches('v');
        format!("{}/services/data/v{}", self.instance_root(), version)
    }

    /// Browser URL of a record detail page
    pub fn record_url(&self, record_id: &str) -> String {
        format!("{}/{}", self.instance_root(), record_id)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn profile_poll_interval(&self) -> Duration {
        Duration::from_secs(self.profile_poll_secs.max(5))
    }
}
