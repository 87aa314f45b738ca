/**
 * config.rs
 * Portfolio settings shared by the details panel and the template tags (YAML format)
 *
 * Format:
 * ```yaml
 * dateFormat: F j, Y
 * utcOffsetMinutes: -300
 * completeStatus: complete
 * inProgressStatus: in_progress
 * ```
 *
 * Every key is optional; missing keys fall back to the host defaults.
 */

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::PortfolioError;
use crate::logging::Pretty;

/// Host default for the global date display format
pub const DEFAULT_DATE_FORMAT: &str = "F j, Y";

/// Post status marking a finished project
pub const DEFAULT_COMPLETE_STATUS: &str = "complete";

/// Post status marking a project that is still running
pub const DEFAULT_IN_PROGRESS_STATUS: &str = "in_progress";

/// Largest UTC offset a site can be configured with (14 hours)
const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Portfolio configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioConfig {
    /// PHP-style date format used for human-readable project dates
    pub date_format: String,
    /// Site offset from UTC, applied when printing stored dates
    pub utc_offset_minutes: i32,
    pub complete_status: String,
    pub in_progress_status: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        PortfolioConfig {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            utc_offset_minutes: 0,
            complete_status: DEFAULT_COMPLETE_STATUS.to_string(),
            in_progress_status: DEFAULT_IN_PROGRESS_STATUS.to_string(),
        }
    }
}

impl PortfolioConfig {
    /// Load configuration from a YAML file
    ///
    /// # Arguments
    /// * `path` - Path to the YAML file
    ///
    /// # Example
    /// ```ignore
    /// let config = PortfolioConfig::load("portfolio.yaml")?;
    /// assert_eq!(config.date_format, "F j, Y");
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PortfolioError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| {
            PortfolioError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded portfolio config: {}", Pretty(&config));

        Ok(config)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, PortfolioError> {
        let config: PortfolioConfig = serde_yaml::from_str(content).map_err(|e| {
            PortfolioError::ConfigError(format!("Invalid portfolio YAML: {}", e))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    ///
    /// Ensures:
    /// - dateFormat is non-empty
    /// - utcOffsetMinutes is within +/- 14 hours
    pub fn validate(&self) -> Result<(), PortfolioError> {
        if self.date_format.is_empty() {
            return Err(PortfolioError::ConfigError(
                "dateFormat cannot be empty".to_string(),
            ));
        }

        if self.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(PortfolioError::ConfigError(format!(
                "utcOffsetMinutes out of range: {}",
                self.utc_offset_minutes
            )));
        }

        Ok(())
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PortfolioError> {
        let yaml = serde_yaml::to_string(self).map_err(|e| {
            PortfolioError::SerializationError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path.as_ref(), yaml).map_err(|e| {
            PortfolioError::IoError(format!("Failed to write config: {}", e))
        })?;

        Ok(())
    }

    /// Site offset as a chrono timezone
    ///
    /// Falls back to UTC when the stored offset is out of range.
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .unwrap_or_else(|| Utc.fix())
    }
}
