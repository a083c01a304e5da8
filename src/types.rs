//! Shared types and enums used across subsync.
//! Includes `StreamType`, `WordsDumpSource` and the numeric log severities
//! accepted by `--log-level`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Media type of an embedded stream, used for criteria-based selection.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamType {
    Sub,
    Audio,
}

impl std::fmt::Display for StreamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StreamType::Sub => "sub",
            StreamType::Audio => "audio",
        };
        write!(f, "{}", s)
    }
}

/// Pipeline taps whose recognized words may be dumped for debugging.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum WordsDumpSource {
    #[serde(rename = "sub")]
    Sub,
    #[serde(rename = "subPipe")]
    SubPipe,
    #[serde(rename = "subRaw")]
    SubRaw,
    #[serde(rename = "ref")]
    Ref,
    #[serde(rename = "refPipe")]
    RefPipe,
    #[serde(rename = "refRaw")]
    RefRaw,
    #[serde(rename = "audio")]
    Audio,
}

impl WordsDumpSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordsDumpSource::Sub => "sub",
            WordsDumpSource::SubPipe => "subPipe",
            WordsDumpSource::SubRaw => "subRaw",
            WordsDumpSource::Ref => "ref",
            WordsDumpSource::RefPipe => "refPipe",
            WordsDumpSource::RefRaw => "refRaw",
            WordsDumpSource::Audio => "audio",
        }
    }

    /// Comma separated list of every valid source, in declaration order.
    pub fn valid_names() -> String {
        Self::value_variants()
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// Manual implementation for ValueEnum: names are camelCase, not kebab-case
impl clap::ValueEnum for WordsDumpSource {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            WordsDumpSource::Sub,
            WordsDumpSource::SubPipe,
            WordsDumpSource::SubRaw,
            WordsDumpSource::Ref,
            WordsDumpSource::RefPipe,
            WordsDumpSource::RefRaw,
            WordsDumpSource::Audio,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

impl std::fmt::Display for WordsDumpSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Numeric log severities, compatible with the classic syslog-like scale.
pub mod log_level {
    pub const DEBUG: i32 = 10;
    pub const INFO: i32 = 20;
    pub const WARNING: i32 = 30;
    pub const ERROR: i32 = 40;
    pub const CRITICAL: i32 = 50;

    /// Resolves a symbolic level name. Matching is case sensitive.
    pub fn from_name(name: &str) -> Option<i32> {
        match name {
            "DEBUG" => Some(DEBUG),
            "INFO" => Some(INFO),
            "WARN" | "WARNING" => Some(WARNING),
            "ERROR" => Some(ERROR),
            "CRITICAL" => Some(CRITICAL),
            _ => None,
        }
    }

    pub fn to_filter(level: i32) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter;
        match level {
            l if l < DEBUG => LevelFilter::TRACE,
            l if l <= DEBUG => LevelFilter::DEBUG,
            l if l <= INFO => LevelFilter::INFO,
            l if l <= WARNING => LevelFilter::WARN,
            _ => LevelFilter::ERROR,
        }
    }
}
