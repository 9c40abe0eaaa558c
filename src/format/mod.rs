//! Turns a severity, a timestamp and caller messages into console arguments.
//!
//! Two strategies exist, one per [`Target`]. The target is fixed when the
//! logger is built and picks both the strategy and its color preset.

pub mod browser;
pub mod terminal;

use chrono::{DateTime, Local, Locale};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::colors::ColorTable;
use crate::level::Severity;

pub const DEFAULT_LOCALE: Locale = Locale::ja_JP;
pub const DEFAULT_LOCALE_TAG: &str = "ja-JP";

/// Date and time pattern rendered through the locale's own formats.
///
/// Uses the locale's glibc-style `d_fmt`/`t_fmt`, so `ja_JP` renders
/// `2024年05月23日 17時00分00秒` rather than the `2024/5/23 17:00:00` that
/// browser `toLocaleString` produces.
const TIMESTAMP_PATTERN: &str = "%x %X";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// ANSI escape sequences
    Terminal,
    /// `%c` directives with trailing CSS arguments
    #[serde(rename = "browser", alias = "browser_console")]
    #[value(name = "browser")]
    BrowserConsole,
}

impl Default for Target {
    fn default() -> Self {
        Self::detect()
    }
}

impl Target {
    /// wasm builds run inside a browser console, everything else in a terminal
    pub fn detect() -> Self {
        if cfg!(target_arch = "wasm32") {
            Target::BrowserConsole
        } else {
            Target::Terminal
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Target::Terminal => "terminal",
            Target::BrowserConsole => "browser",
        }
    }

    pub fn colors(&self) -> ColorTable {
        match self {
            Target::Terminal => ColorTable::terminal(),
            Target::BrowserConsole => ColorTable::browser(),
        }
    }

    pub fn format(&self, request: &FormatRequest<'_>) -> Vec<String> {
        match self {
            Target::Terminal => terminal::format(request),
            Target::BrowserConsole => browser::format(request),
        }
    }
}

/// Everything one log call needs to produce its output arguments
pub struct FormatRequest<'a> {
    pub severity: Severity,
    pub now: DateTime<Local>,
    pub locale: Locale,
    pub messages: &'a [&'a dyn Display],
    pub colors: &'a ColorTable,
}

impl FormatRequest<'_> {
    pub fn timestamp(&self) -> String {
        localized_timestamp(&self.now, self.locale)
    }
}

pub fn localized_timestamp(now: &DateTime<Local>, locale: Locale) -> String {
    now.format_localized(TIMESTAMP_PATTERN, locale).to_string()
}

/// Resolve a locale identifier such as `ja-JP` or `en_US`.
///
/// Unknown identifiers fall back to [`DEFAULT_LOCALE`].
pub fn resolve_locale(tag: &str) -> Locale {
    let normalized = tag.trim().replace('-', "_");
    match Locale::try_from(normalized.as_str()) {
        Ok(locale) => locale,
        Err(_) => {
            warn!("Unknown locale '{}', falling back to {}", tag, DEFAULT_LOCALE_TAG);
            DEFAULT_LOCALE
        }
    }
}
