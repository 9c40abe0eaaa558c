use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Construction was given a level or option it cannot honour
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("failed to parse logger options: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("failed to read logger options from {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
