//! The leveled logger itself.
//!
//! A [`Logger`] is immutable once built. Each call runs the level filter, asks
//! the bound formatter for its arguments using a fresh timestamp, and hands them
//! verbatim to the console channel for that severity.
//!
//! ```no_run
//! use taglog::{Logger, LoggerOptions, Severity};
//!
//! let log = Logger::new(LoggerOptions::default().with_level(Severity::Trace)).unwrap();
//! log.trace(&[&"hello world!", &"this is taglog."]);
//! ```

use chrono::Locale;
use log::debug;
use std::fmt::Display;

use crate::clock::{Clock, SystemClock};
use crate::colors::ColorTable;
use crate::config::LoggerOptions;
use crate::console::{default_console, Channel, Console};
use crate::error::Result;
use crate::filter::LevelFilter;
use crate::format::{resolve_locale, FormatRequest, Target};
use crate::level::Severity;

#[cfg(test)]
mod test;

pub struct Logger {
    filter: LevelFilter,
    locale_tag: String,
    locale: Locale,
    target: Target,
    colors: ColorTable,
    console: Box<dyn Console>,
    clock: Box<dyn Clock>,
}

impl Logger {
    /// Build a logger writing to the default console with the system clock
    pub fn new(options: LoggerOptions) -> Result<Self> {
        Self::builder().options(options).build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    pub fn minimum_level(&self) -> Severity {
        self.filter.minimum_level()
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn locale(&self) -> &str {
        &self.locale_tag
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.filter.should_emit(severity)
    }

    /// Arguments a call at `severity` would hand to the console right now
    pub fn format(&self, severity: Severity, messages: &[&dyn Display]) -> Vec<String> {
        let request = FormatRequest {
            severity,
            now: self.clock.now(),
            locale: self.locale,
            messages,
            colors: &self.colors,
        };
        self.target.format(&request)
    }

    pub fn emit(&self, severity: Severity, messages: &[&dyn Display]) {
        if !self.is_enabled(severity) {
            return;
        }

        let args = self.format(severity, messages);
        self.console.emit(Channel::for_severity(severity), &args);
    }

    pub fn trace(&self, messages: &[&dyn Display]) {
        self.emit(Severity::Trace, messages)
    }

    pub fn debug(&self, messages: &[&dyn Display]) {
        self.emit(Severity::Debug, messages)
    }

    pub fn info(&self, messages: &[&dyn Display]) {
        self.emit(Severity::Info, messages)
    }

    pub fn warn(&self, messages: &[&dyn Display]) {
        self.emit(Severity::Warn, messages)
    }

    pub fn error(&self, messages: &[&dyn Display]) {
        self.emit(Severity::Error, messages)
    }

    /// Install as the global `log` backend, capped at the configured minimum
    pub fn install(self) -> std::result::Result<(), log::SetLoggerError> {
        let max_level = log::LevelFilter::from(self.minimum_level());
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.is_enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let message = record.args();
        self.emit(record.level().into(), &[message as &dyn Display]);
    }

    fn flush(&self) {}
}

/// Assembles a [`Logger`] from options plus an injected console and clock
#[derive(Default)]
pub struct LoggerBuilder {
    options: LoggerOptions,
    console: Option<Box<dyn Console>>,
    clock: Option<Box<dyn Clock>>,
}

impl LoggerBuilder {
    pub fn options(mut self, options: LoggerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn level(mut self, level: impl Into<crate::level::LevelSpec>) -> Self {
        self.options.level = level.into();
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.options.locale = locale.into();
        self
    }

    pub fn target(mut self, target: Target) -> Self {
        self.options.target = target;
        self
    }

    pub fn colors(mut self, colors: ColorTable) -> Self {
        self.options.colors = Some(colors.into());
        self
    }

    pub fn console(mut self, console: impl Console + 'static) -> Self {
        self.console = Some(Box::new(console));
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Fails with `InvalidConfiguration` when the level does not resolve
    pub fn build(self) -> Result<Logger> {
        let filter = LevelFilter::from_spec(self.options.level)?;
        let locale = resolve_locale(&self.options.locale);
        let colors = self.options.color_table();
        let target = self.options.target;

        debug!(
            "Logger ready: minimum level {}, target {}, locale {}",
            filter.minimum_level(),
            target.name(),
            self.options.locale
        );

        Ok(Logger {
            filter,
            locale_tag: self.options.locale,
            locale,
            target,
            colors,
            console: self.console.unwrap_or_else(default_console),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
        })
    }
}
