pub mod level;

pub use level::{should_emit, LevelFilter};
