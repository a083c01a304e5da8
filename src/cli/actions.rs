//! Validating converters for flags whose values need more than a plain type cast.
//!
//! Each converter is a pure function from the raw token to a typed value, used
//! as a clap `value_parser`. Clap reports a rejection as an invalid value for
//! the flag that carried it.
use std::path::PathBuf;

use clap::ValueEnum;

use crate::core::settings::WordsDump;
use crate::types::{WordsDumpSource, log_level};

use super::errors::ArgError;

/// Resolves `--log-level`: a symbolic name (`DEBUG`, `INFO`, `WARN`,
/// `WARNING`, `ERROR`, `CRITICAL`) or a raw integer severity.
pub fn parse_log_level(value: &str) -> Result<i32, ArgError> {
    if let Some(level) = log_level::from_name(value) {
        return Ok(level);
    }
    value.parse::<i32>().map_err(|_| ArgError::UnrecognizedLevel {
        value: value.to_string(),
    })
}

/// Parses one `--dump-words SRC[:PATH]` target. Only the first colon splits,
/// so paths may contain colons themselves.
pub fn parse_words_dump(value: &str) -> Result<WordsDump, ArgError> {
    let (src, path) = match value.split_once(':') {
        Some((src, path)) => (src, Some(PathBuf::from(path))),
        None => (value, None),
    };
    let source =
        WordsDumpSource::from_str(src, false).map_err(|_| ArgError::UnrecognizedSource {
            name: src.to_string(),
            valid: WordsDumpSource::valid_names(),
        })?;
    Ok(WordsDump { source, path })
}

/// Parses `--effort`, which must lie within 0.0..=1.0.
pub fn parse_effort(value: &str) -> Result<f64, ArgError> {
    match value.parse::<f64>() {
        Ok(effort) if (0.0..=1.0).contains(&effort) => Ok(effort),
        _ => Err(ArgError::InvalidEffort {
            value: value.to_string(),
        }),
    }
}
