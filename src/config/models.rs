use crate::core::template::GridTemplate;
use crate::core::types::Bool;
use serde::{Deserialize, Serialize};

pub use crate::core::models::DEFAULT_IMPORTANCE;

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridTemplateConfigItem {
    pub value: GridTemplate,
    pub description: String,
}
impl ConfigItem<GridTemplate> for GridTemplateConfigItem {
    fn get_value(&self) -> &GridTemplate {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportanceConfigItem {
    pub value: f64,
    pub description: String,
}

impl Default for ImportanceConfigItem {
    fn default() -> Self {
        Self {
            value: DEFAULT_IMPORTANCE,
            description: "Importance used for items without an explicit value.".into(),
        }
    }
}

impl ConfigItem<f64> for ImportanceConfigItem {
    fn get_value(&self) -> &f64 {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}
