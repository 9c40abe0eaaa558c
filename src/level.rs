use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Width every tag occupies inside its brackets
pub const TAG_WIDTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// All severities, most verbose first
    pub const ALL: [Severity; 5] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Number of distinct severities. Numeric levels must be below this.
    pub const COUNT: usize = Self::ALL.len();

    /// Rank for ordering (higher = more severe)
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Trace => 0,
            Severity::Debug => 1,
            Severity::Info => 2,
            Severity::Warn => 3,
            Severity::Error => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Label right-padded with spaces to `TAG_WIDTH`
    pub fn padded_tag(&self) -> String {
        format!("{:<width$}", self.label(), width = TAG_WIDTH)
    }

    /// Resolve a numeric rank, rejecting anything outside the enumeration
    pub fn from_rank(rank: i64) -> Result<Self> {
        if rank < 0 || rank >= Self::COUNT as i64 {
            return Err(Error::InvalidConfiguration(format!(
                "level must be a number between 0 and {}, got {}",
                Self::COUNT - 1,
                rank
            )));
        }
        Ok(Self::ALL[rank as usize])
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Info
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|severity| severity.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidConfiguration(format!("unknown level label '{}'", s)))
    }
}

// Labels are read through `FromStr` so config files accept any case
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Severity::Trace,
            log::Level::Debug => Severity::Debug,
            log::Level::Info => Severity::Info,
            log::Level::Warn => Severity::Warn,
            log::Level::Error => Severity::Error,
        }
    }
}

impl From<Severity> for log::LevelFilter {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Trace => log::LevelFilter::Trace,
            Severity::Debug => log::LevelFilter::Debug,
            Severity::Info => log::LevelFilter::Info,
            Severity::Warn => log::LevelFilter::Warn,
            Severity::Error => log::LevelFilter::Error,
        }
    }
}

/// Minimum level as supplied by a caller: either a rank or a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelSpec {
    Rank(i64),
    Named(Severity),
}

impl LevelSpec {
    pub fn resolve(&self) -> Result<Severity> {
        match self {
            LevelSpec::Rank(rank) => Severity::from_rank(*rank),
            LevelSpec::Named(severity) => Ok(*severity),
        }
    }
}

impl Default for LevelSpec {
    fn default() -> Self {
        LevelSpec::Named(Severity::Info)
    }
}

impl From<Severity> for LevelSpec {
    fn from(severity: Severity) -> Self {
        LevelSpec::Named(severity)
    }
}

impl From<i64> for LevelSpec {
    fn from(rank: i64) -> Self {
        LevelSpec::Rank(rank)
    }
}

impl FromStr for LevelSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<i64>() {
            Ok(rank) => Ok(LevelSpec::Rank(rank)),
            Err(_) => s.parse::<Severity>().map(LevelSpec::Named),
        }
    }
}
