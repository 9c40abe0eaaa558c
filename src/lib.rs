//! Leveled console logger.
//!
//! Every emitted line carries a `[TAG  ]` severity prefix padded to five
//! columns, a localized timestamp, and color styling suited to where it runs:
//! ANSI escapes in a terminal, `%c` directives with CSS arguments in a browser
//! console.

pub mod clock;
pub mod colors;
pub mod config;
pub mod console;
pub mod error;
pub mod filter;
pub mod format;
pub mod level;
pub mod logger;

pub use clock::{Clock, FixedClock, SystemClock};
pub use colors::{ColorOverrides, ColorTable};
pub use config::LoggerOptions;
pub use console::{Channel, Console, MemoryConsole, StdConsole};
pub use error::{Error, Result};
pub use filter::LevelFilter;
pub use format::Target;
pub use level::{LevelSpec, Severity};
pub use logger::{Logger, LoggerBuilder};
