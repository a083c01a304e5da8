use thiserror::Error;

/// Rejections raised by the custom value parsers while the command line is parsed
#[derive(Debug, Error, PartialEq)]
pub enum ArgError {
    #[error("unrecognized level {value}")]
    UnrecognizedLevel { value: String },

    #[error("unrecognized source {name}, should be one of {valid}")]
    UnrecognizedSource { name: String, valid: String },

    #[error("invalid effort {value}: must be a number between 0.0 and 1.0")]
    InvalidEffort { value: String },
}
