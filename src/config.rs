//! Client configuration.
//!
//! Values are baked in at build time: `ECOPOINT_API_BASE` overrides the REST
//! host and `ECOPOINT_LOG` the console log level.

use std::str::FromStr;

use tracing::Level;
use url::Url;

use crate::error::EcoPointError;

pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Shown when the user has no photo; also the "no new photo" marker.
pub const PLACEHOLDER_PHOTO: &str = "/images/profile.png";

pub const CARD_BACKGROUND: &str = "/images/pattern.jpg";
pub const SUCCESS_IMAGE: &str = "/images/berhasil.png";
pub const ERROR_IMAGE: &str = "/images/error.png";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: Url,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Result<Self, EcoPointError> {
        Self::from_values(option_env!("ECOPOINT_API_BASE"), option_env!("ECOPOINT_LOG"))
    }

    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Result<Self, EcoPointError> {
        let mut config = Self::default();

        if let Some(raw) = api_base.map(str::trim).filter(|s| !s.is_empty()) {
            config.api_base = Url::parse(raw)
                .map_err(|e| EcoPointError::Config(format!("Invalid API base '{}': {}", raw, e)))?;
        }

        if let Some(raw) = log_level.map(str::trim).filter(|s| !s.is_empty()) {
            config.log_level = Level::from_str(raw)
                .map_err(|_| EcoPointError::Config(format!("Invalid log level '{}'", raw)))?;
        }

        Ok(config)
    }
}
