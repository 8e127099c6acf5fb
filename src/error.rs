use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the snippet library.
#[derive(Error, Debug)]
pub enum SnippetError {
    #[error("second range is shorter than the first: {first} elements vs {second}")]
    LengthMismatch { first: usize, second: usize },

    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    #[error("unknown snippet '{0}'")]
    UnknownSnippet(String),

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, SnippetError>;
