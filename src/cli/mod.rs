//! Command Line Interface (CLI) layer for subsync.
//!
//! This module defines the argument grammar (`args`, `options`), the
//! validating value parsers (`actions`), their error type (`errors`), the
//! task builder (`builder`) that turns parsed arguments into `Settings`, and
//! the orchestration logic (`runner`) used by the binary.
pub mod actions;
pub mod args;
pub mod builder;
pub mod errors;
pub mod options;
pub mod runner;

pub use args::{BatchArgs, CliArgs, HeadlessArgs, Mode, SettingsArgs, SyncArgs};
pub use builder::{build_settings, parse_batch_args, parse_sync_args};
pub use options::{DebugArgs, SyncOptionArgs};
pub use runner::run;

use clap::Parser;

/// Parses an argument list (program name first) into `CliArgs`.
pub fn parse_cmd_args<I, T>(argv: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CliArgs::try_parse_from(argv)
}
