use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::level::Severity;

/// Console output stream a call is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Error,
    Warn,
    Info,
    Debug,
}

impl Channel {
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Trace | Severity::Debug => Channel::Debug,
            Severity::Info => Channel::Info,
            Severity::Warn => Channel::Warn,
            Severity::Error => Channel::Error,
        }
    }
}

/// Sink receiving fully formatted argument lists
pub trait Console: Send + Sync {
    fn emit(&self, channel: Channel, args: &[String]);
}

impl<T: Console + ?Sized> Console for Arc<T> {
    fn emit(&self, channel: Channel, args: &[String]) {
        (**self).emit(channel, args)
    }
}

/// Writes arguments separated by spaces, error/warn to stderr and the rest to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn emit(&self, channel: Channel, args: &[String]) {
        let line = args.join(" ");
        let _ = match channel {
            Channel::Error | Channel::Warn => writeln!(io::stderr().lock(), "{}", line),
            Channel::Info | Channel::Debug => writeln!(io::stdout().lock(), "{}", line),
        };
    }
}

/// Records every call in memory, for capturing output inside a host
#[derive(Debug, Default)]
pub struct MemoryConsole {
    records: Mutex<Vec<(Channel, Vec<String>)>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(Channel, Vec<String>)>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn records(&self) -> Vec<(Channel, Vec<String>)> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Console for MemoryConsole {
    fn emit(&self, channel: Channel, args: &[String]) {
        self.lock().push((channel, args.to_vec()));
    }
}

/// Forwards to the browser's `console.*` functions
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WebConsole;

#[cfg(target_arch = "wasm32")]
impl Console for WebConsole {
    fn emit(&self, channel: Channel, args: &[String]) {
        use wasm_bindgen::JsValue;

        let data: js_sys::Array = args.iter().map(|arg| JsValue::from_str(arg)).collect();
        match channel {
            Channel::Error => web_sys::console::error(&data),
            Channel::Warn => web_sys::console::warn(&data),
            Channel::Info => web_sys::console::info(&data),
            Channel::Debug => web_sys::console::debug(&data),
        }
    }
}

/// Console matching the compile target
#[cfg(not(target_arch = "wasm32"))]
pub fn default_console() -> Box<dyn Console> {
    Box::new(StdConsole)
}

#[cfg(target_arch = "wasm32")]
pub fn default_console() -> Box<dyn Console> {
    Box::new(WebConsole)
}
