use crate::error::{Result, RosterError};
use crate::roster::RequestContext;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".rosterql.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub schema: SchemaSettings,

    #[serde(default)]
    pub request: RequestSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaSettings {
    #[serde(default = "default_limit_depth")]
    pub limit_depth: usize,

    #[serde(default = "default_limit_complexity")]
    pub limit_complexity: usize,
}

fn default_limit_depth() -> usize {
    10
}

fn default_limit_complexity() -> usize {
    1000
}

impl Default for SchemaSettings {
    fn default() -> Self {
        Self {
            limit_depth: default_limit_depth(),
            limit_complexity: default_limit_complexity(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestSettings {
    /// Treat every request as coming from an anonymous caller
    #[serde(default)]
    pub anonymous: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl RosterConfig {
    /// Loads the explicit config file if given, otherwise searches upward
    /// from `start_path`. Falls back to defaults when nothing is found.
    pub fn resolve(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(RosterError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::load(path)
            }
            None => match Self::find_config_file(start_path) {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RosterConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Request context for CLI requests; `force_anonymous` overrides the file.
    pub fn request_context(&self, force_anonymous: bool) -> RequestContext {
        RequestContext {
            is_anonymous: force_anonymous || self.request.anonymous,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
