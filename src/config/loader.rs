//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use crate::error::{RosterError, RosterResult};

use super::types::CaptureConfig;

impl CaptureConfig {
    /// Loads a capture configuration from a YAML file.
    ///
    /// Unset fields fall back to the built-in defaults, so a partial file
    /// overriding a single list is valid.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/ukg/capture.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if the file is missing
    /// or contains invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster_export::config::CaptureConfig;
    ///
    /// let config = CaptureConfig::load("./config/ukg/capture.yaml")?;
    /// # Ok::<(), roster_export::error::RosterError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RosterError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let result = CaptureConfig::load("/nonexistent/capture.yaml");
        assert!(matches!(result, Err(RosterError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_shipped_default_config() {
        let config = CaptureConfig::load("./config/ukg/capture.yaml").unwrap();
        assert_eq!(config, CaptureConfig::default());
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        use std::io::Write;

        let dir = std::env::temp_dir().join("roster_export_config_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.yaml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"max_dates: [not a number\n").unwrap();

        let result = CaptureConfig::load(&path);
        assert!(matches!(result, Err(RosterError::ConfigParseError { .. })));
    }
}
