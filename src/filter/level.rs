use crate::error::Result;
use crate::level::{LevelSpec, Severity};

/// Emit/suppress gate comparing a call's severity to a fixed minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelFilter {
    minimum_level: Severity,
}

impl LevelFilter {
    pub fn new(minimum_level: Severity) -> Self {
        Self { minimum_level }
    }

    pub fn from_spec(spec: LevelSpec) -> Result<Self> {
        spec.resolve().map(Self::new)
    }

    pub fn minimum_level(&self) -> Severity {
        self.minimum_level
    }

    /// Check if a call at `severity` should reach the console
    pub fn should_emit(&self, severity: Severity) -> bool {
        should_emit(severity, self.minimum_level)
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::new(Severity::Info)
    }
}

pub fn should_emit(severity: Severity, minimum_level: Severity) -> bool {
    severity.rank() >= minimum_level.rank()
}
