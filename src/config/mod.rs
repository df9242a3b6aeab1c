pub mod models;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::models::{
    ConfigItem, FileLoggingConfigItem, GridTemplateConfigItem, ImportanceConfigItem,
};
use crate::core::template::GridTemplate;
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub grid_template: GridTemplateConfigItem,
    #[serde(default)]
    pub default_importance: ImportanceConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Parse(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Parse(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Parse(format!("Invalid JSON in '{}': {}", path.display(), e)))?;

        let importance = *data.default_importance.get_value();
        if !(0.0..=1.0).contains(&importance) {
            return Err(Error::config(format!(
                "default_importance in '{}' must be between 0 and 1, got {}.",
                path.display(),
                importance
            )));
        }

        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn grid_template(&self) -> &GridTemplate {
        self.data.grid_template.get_value()
    }
    pub fn default_importance(&self) -> f64 {
        *self.data.default_importance.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }
}
