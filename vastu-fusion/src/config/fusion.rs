//! Top-level FusionConfig.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::matching::AlignerConfig;
use crate::registration::RegistrationConfig;

use super::error::ConfigLoadError;

/// Default config location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Full VastuFusion configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct FusionConfig {
    /// Pairwise alignment settings
    #[serde(default)]
    pub alignment: AlignerConfig,

    /// Registration driver settings
    #[serde(default)]
    pub registration: RegistrationConfig,
}

impl FusionConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&contents)
    }

    /// Load from the default path, falling back to built-in defaults when
    /// the file does not exist.
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Validate every section.
    pub fn validate(&self) -> crate::error::Result<()> {
        self.alignment.validate()?;
        self.registration.validate()
    }
}
