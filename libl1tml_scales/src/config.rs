use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::constants::{DEFAULT_OUTPUT_SUFFIX, DEFAULT_SCALER_SUFFIX};
use super::error::ConfigError;

/// Structure representing the application configuration. Contains pathing and the
/// expected feature count.
/// Configs are serializable and deserializable to YAML using serde and serde_yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub root_path: PathBuf,
    pub scaler_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub n_inputs: Option<usize>,
}

impl Default for Config {
    /// Generate a new Config object. All fields will be empty/invalid
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("None"),
            scaler_path: None,
            output_path: None,
            n_inputs: None,
        }
    }
}

impl Config {
    /// Read the configuration in a YAML file
    /// Returns a Config if successful
    pub fn read_config_file(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::BadFilePath(config_path.to_path_buf()));
        }

        let yaml_str = std::fs::read_to_string(config_path)?;

        Ok(serde_yaml::from_str::<Self>(&yaml_str)?)
    }

    /// Get the path to the fitted scaler exported by the offline fitting step.
    /// The explicit override takes precedence; otherwise the standard location
    /// under the root directory is used.
    pub fn get_scaler_file(&self) -> Result<PathBuf, ConfigError> {
        let scaler_path = match &self.scaler_path {
            Some(path) => path.clone(),
            None => self.root_path.join(DEFAULT_SCALER_SUFFIX),
        };
        if scaler_path.exists() {
            Ok(scaler_path)
        } else {
            Err(ConfigError::BadFilePath(scaler_path))
        }
    }

    /// Get the path to the generated header. The firmware directory must already
    /// exist; the header itself is created or overwritten.
    pub fn get_output_file(&self) -> Result<PathBuf, ConfigError> {
        let output_path = match &self.output_path {
            Some(path) => path.clone(),
            None => self.root_path.join(DEFAULT_OUTPUT_SUFFIX),
        };
        match output_path.parent() {
            Some(parent) if parent.exists() => Ok(output_path),
            _ => Err(ConfigError::BadFilePath(output_path)),
        }
    }
}

//Unit tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locations() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("part1_outputs")).unwrap();
        std::fs::create_dir_all(dir.path().join("part3/firmware/Scaler/hls")).unwrap();
        std::fs::write(
            dir.path().join("part1_outputs/hwScaler.json"),
            "{\"mean_\":[0.0],\"scale_\":[1.0]}",
        )
        .unwrap();

        let config = Config {
            root_path: dir.path().to_path_buf(),
            ..Default::default()
        };
        assert_eq!(
            config.get_scaler_file().unwrap(),
            dir.path().join("part1_outputs/hwScaler.json")
        );
        assert_eq!(
            config.get_output_file().unwrap(),
            dir.path().join("part3/firmware/Scaler/hls/scales.h")
        );
    }

    #[test]
    fn test_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let scaler_path = dir.path().join("custom_scaler.json");
        std::fs::write(&scaler_path, "{\"mean_\":[0.0],\"scale_\":[1.0]}").unwrap();
        let output_path = dir.path().join("scales.h");

        let config = Config {
            root_path: PathBuf::from("/nonexistent"),
            scaler_path: Some(scaler_path.clone()),
            output_path: Some(output_path.clone()),
            n_inputs: None,
        };
        assert_eq!(config.get_scaler_file().unwrap(), scaler_path);
        assert_eq!(config.get_output_file().unwrap(), output_path);
    }

    #[test]
    fn test_missing_scaler_is_an_error() {
        let config = Config {
            root_path: PathBuf::from("/nonexistent"),
            ..Default::default()
        };
        match config.get_scaler_file() {
            Err(ConfigError::BadFilePath(_)) => (),
            _ => panic!(),
        }
    }
}
