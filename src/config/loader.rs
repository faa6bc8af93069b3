//! Configuration structures and loading logic.

use crate::download::DEFAULT_USER_AGENT;
use crate::error::{Error, Result};
use crate::fs::default_models_dir;
use crate::models::ModelDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,

    /// Extra or overriding face swap models, keyed by name.
    #[serde(default)]
    pub swap_models: BTreeMap<String, ModelDescriptor>,

    /// Extra or overriding face enhancer models, keyed by name.
    #[serde(default)]
    pub enhancer_models: BTreeMap<String, ModelDescriptor>,
}

/// General options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Base directory for cached models.
    #[serde(default)]
    pub models_directory: Option<PathBuf>,

    /// Whether to show a progress bar for large downloads.
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// User agent sent with every HTTP request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            models_directory: None,
            show_progress: true,
            user_agent: default_user_agent(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration if the file exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(
                "Configuration file not found: {}. Using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the effective models directory.
    pub fn models_directory(&self) -> PathBuf {
        self.options
            .models_directory
            .clone()
            .unwrap_or_else(default_models_dir)
    }
}
