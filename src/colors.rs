use serde::{Deserialize, Serialize};

use crate::level::Severity;

const ANSI_RED: &str = "\u{1b}[31m";
const ANSI_GREEN: &str = "\u{1b}[32m";
const ANSI_MAGENTA: &str = "\u{1b}[35m";
const ANSI_CYAN: &str = "\u{1b}[36m";
const ANSI_RESET: &str = "\u{1b}[0m";

/// Color token per severity plus the token used to return to the default style.
///
/// Terminal tables hold ANSI escape sequences, browser tables hold CSS color
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTable {
    pub trace: String,
    pub debug: String,
    pub info: String,
    pub warn: String,
    pub error: String,
    pub default: String,
}

impl ColorTable {
    pub fn terminal() -> Self {
        Self {
            trace: ANSI_RESET.to_string(),
            debug: ANSI_CYAN.to_string(),
            info: ANSI_GREEN.to_string(),
            warn: ANSI_MAGENTA.to_string(),
            error: ANSI_RED.to_string(),
            default: ANSI_RESET.to_string(),
        }
    }

    pub fn browser() -> Self {
        Self {
            trace: "inherit".to_string(),
            debug: "blue".to_string(),
            info: "teal".to_string(),
            warn: "orangered".to_string(),
            error: "red".to_string(),
            default: "inherit".to_string(),
        }
    }

    /// Get the color token for a specific severity
    pub fn get(&self, severity: Severity) -> &str {
        match severity {
            Severity::Trace => &self.trace,
            Severity::Debug => &self.debug,
            Severity::Info => &self.info,
            Severity::Warn => &self.warn,
            Severity::Error => &self.error,
        }
    }

    pub fn default_color(&self) -> &str {
        &self.default
    }
}

/// Per-field replacements applied on top of a preset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ColorOverrides {
    /// Replace the fields that are set, keep `base` for the rest
    pub fn apply(&self, base: ColorTable) -> ColorTable {
        ColorTable {
            trace: self.trace.clone().unwrap_or(base.trace),
            debug: self.debug.clone().unwrap_or(base.debug),
            info: self.info.clone().unwrap_or(base.info),
            warn: self.warn.clone().unwrap_or(base.warn),
            error: self.error.clone().unwrap_or(base.error),
            default: self.default.clone().unwrap_or(base.default),
        }
    }
}

impl From<ColorTable> for ColorOverrides {
    fn from(table: ColorTable) -> Self {
        Self {
            trace: Some(table.trace),
            debug: Some(table.debug),
            info: Some(table.info),
            warn: Some(table.warn),
            error: Some(table.error),
            default: Some(table.default),
        }
    }
}
