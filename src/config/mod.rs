#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_endpoint_path, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Where the card service lives and which paths it answers on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    pub server_url: String,
    pub validate_path: String,
    pub upload_path: String,
    pub decrypt_path: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            validate_path: "/validate".to_string(),
            upload_path: "/upload".to_string(),
            decrypt_path: "/decrypt".to_string(),
        }
    }
}

impl ClientSettings {
    pub fn with_server_url(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Self::default()
        }
    }
}

impl ConfigProvider for ClientSettings {
    fn server_url(&self) -> &str {
        &self.server_url
    }

    fn validate_path(&self) -> &str {
        &self.validate_path
    }

    fn upload_path(&self) -> &str {
        &self.upload_path
    }

    fn decrypt_path(&self) -> &str {
        &self.decrypt_path
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validate_url("server.url", &self.server_url)?;
        validate_endpoint_path("endpoints.validate", &self.validate_path)?;
        validate_endpoint_path("endpoints.upload", &self.upload_path)?;
        validate_endpoint_path("endpoints.decrypt", &self.decrypt_path)?;
        Ok(())
    }
}
