//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and YAML errors, and provides semantic variants
//! for descriptor construction and settings installation failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("batch description error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid channels mapping '{value}': {reason}")]
    InvalidChannelsMap { value: String, reason: String },

    #[error("invalid task description: {0}")]
    InvalidTask(String),

    #[error("tasks are already installed into settings")]
    TasksAlreadyInstalled,
}

impl Error {
    pub fn invalid_channels<V: Into<String>, R: std::fmt::Display>(value: V, reason: R) -> Self {
        Error::InvalidChannelsMap {
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
