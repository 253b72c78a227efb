//! # Client configuration: `weight-tracker.toml`
//!
//! Where the user API lives. The browser build embeds the file at compile time,
//! so a missing or partial file means defaults.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"   # scheme + host (+ port) of the API
//! user_path = "/v1/api/user"           # collection path for user records
//! backend = "http"                     # "memory" keeps users in the page instead
//! ```

use serde::{Deserialize, Serialize};

use crate::models::RecordId;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_path")]
    pub user_path: String,
    #[serde(default)]
    pub backend: Backend,
}

/// Where user records live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// The weight-tracker HTTP API.
    #[default]
    Http,
    /// An in-page store that starts empty and is lost on reload.
    Memory,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_user_path() -> String {
    "/v1/api/user".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_path: default_user_path(),
            backend: Backend::default(),
        }
    }
}

impl ClientConfig {
    pub fn filename() -> &'static str {
        "weight-tracker.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse, falling back to defaults on a malformed file.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("invalid {}: {e}; using defaults", Self::filename());
            Self::default()
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api.base_url = base_url.to_string();
        self
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.api.backend = backend;
        self
    }

    /// `GET` / `POST` target.
    pub fn collection_url(&self) -> String {
        let base = self.api.base_url.trim_end_matches('/');
        let path = self.api.user_path.trim_matches('/');
        format!("{base}/{path}")
    }

    /// `GET` / `PUT` / `DELETE` target for one record.
    pub fn record_url(&self, id: RecordId) -> String {
        format!("{}/{id}", self.collection_url())
    }
}
