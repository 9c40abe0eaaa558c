use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::colors::{ColorOverrides, ColorTable};
use crate::error::{Error, Result};
use crate::format::{Target, DEFAULT_LOCALE_TAG};
use crate::level::LevelSpec;

/// Construction options for a [`Logger`](crate::Logger)
///
/// ```yaml
/// level: DEBUG      # or a rank from 0 to 4
/// locale: en-US
/// target: browser   # or terminal
/// colors:           # optional, any subset; the rest come from the target's preset
///   debug: "#6B7280"
///   error: crimson
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerOptions {
    pub level: LevelSpec,
    pub locale: String,
    pub target: Target,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorOverrides>,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: LevelSpec::default(),
            locale: DEFAULT_LOCALE_TAG.to_string(),
            target: Target::detect(),
            colors: None,
        }
    }
}

impl LoggerOptions {
    pub fn with_level(mut self, level: impl Into<LevelSpec>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn with_colors(mut self, colors: ColorTable) -> Self {
        self.colors = Some(colors.into());
        self
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load options from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_yaml_str(&content)?;
        info!("Loaded logger options from {:?}", path);
        Ok(options)
    }

    /// Color table in effect: the target's preset with any overrides applied
    pub fn color_table(&self) -> ColorTable {
        let preset = self.target.colors();
        match &self.colors {
            Some(overrides) => overrides.apply(preset),
            None => preset,
        }
    }
}
