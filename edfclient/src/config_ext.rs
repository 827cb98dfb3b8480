//! Extension trait for the EDF metadata API configuration
//!
//! This module provides the [`EdfApiConfigExt`] trait which adds the EDF
//! metadata API vocabulary (`api.*` keys) to `edfconfig::Config`.
//!
//! # Example
//!
//! ```no_run
//! use edfconfig::get_config;
//! use edfclient::EdfApiConfigExt;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = get_config();
//!
//! if !config.get_edf_api_enabled()? {
//!     println!("EDF metadata API is disabled");
//!     return Ok(());
//! }
//!
//! println!("API base URL: {}", config.get_edf_api_base_url()?);
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use edfconfig::Config;
use serde_yaml::Value;

/// Default API base URL when none is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Extension trait for managing EDF metadata API settings in edfconfig
///
/// # Auto-persist of default values
///
/// The getters automatically persist default values into the configuration
/// when the corresponding key does not exist yet.
pub trait EdfApiConfigExt {
    /// Check whether the EDF metadata API source is enabled
    ///
    /// Returns `true` (default) unless explicitly disabled.
    fn get_edf_api_enabled(&self) -> Result<bool>;

    /// Enable or disable the EDF metadata API source
    fn set_edf_api_enabled(&self, enabled: bool) -> Result<()>;

    /// Get the API base URL (scheme + host + optional port)
    fn get_edf_api_base_url(&self) -> Result<String>;

    /// Set the API base URL
    fn set_edf_api_base_url(&self, base_url: String) -> Result<()>;

    /// Get the request timeout in seconds
    fn get_edf_api_timeout_secs(&self) -> Result<u64>;

    /// Set the request timeout in seconds
    fn set_edf_api_timeout_secs(&self, timeout_secs: u64) -> Result<()>;
}

impl EdfApiConfigExt for Config {
    fn get_edf_api_enabled(&self) -> Result<bool> {
        match self.get_value(&["api", "enabled"]) {
            Ok(Value::Bool(b)) => Ok(b),
            _ => {
                // Default: enabled
                self.set_edf_api_enabled(true)?;
                Ok(true)
            }
        }
    }

    fn set_edf_api_enabled(&self, enabled: bool) -> Result<()> {
        self.set_value(&["api", "enabled"], Value::Bool(enabled))
    }

    fn get_edf_api_base_url(&self) -> Result<String> {
        match self.get_value(&["api", "base_url"]) {
            Ok(Value::String(s)) if !s.is_empty() => Ok(s),
            _ => {
                // Not set, use default and persist
                self.set_edf_api_base_url(DEFAULT_API_BASE_URL.to_string())?;
                Ok(DEFAULT_API_BASE_URL.to_string())
            }
        }
    }

    fn set_edf_api_base_url(&self, base_url: String) -> Result<()> {
        self.set_value(&["api", "base_url"], Value::String(base_url))
    }

    fn get_edf_api_timeout_secs(&self) -> Result<u64> {
        match self.get_value(&["api", "timeout_secs"]) {
            Ok(Value::Number(n)) => {
                if let Some(timeout) = n.as_u64() {
                    Ok(timeout)
                } else {
                    // Invalid number, use default
                    self.set_edf_api_timeout_secs(DEFAULT_API_TIMEOUT_SECS)?;
                    Ok(DEFAULT_API_TIMEOUT_SECS)
                }
            }
            _ => {
                // Not set, use default and persist
                self.set_edf_api_timeout_secs(DEFAULT_API_TIMEOUT_SECS)?;
                Ok(DEFAULT_API_TIMEOUT_SECS)
            }
        }
    }

    fn set_edf_api_timeout_secs(&self, timeout_secs: u64) -> Result<()> {
        self.set_value(
            &["api", "timeout_secs"],
            Value::Number(serde_yaml::Number::from(timeout_secs)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_API_BASE_URL, "http://localhost:8080");
        assert_eq!(DEFAULT_API_TIMEOUT_SECS, 30);
    }
}
