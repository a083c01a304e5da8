use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::types::StreamType;

use super::actions::parse_effort;
use super::options::{DebugArgs, SyncOptionArgs};

#[derive(Parser, Debug)]
#[command(
    name = "subsync",
    about = "Subtitle Speech Synchronizer",
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Print version number
    #[arg(short = 'v', long)]
    pub version: bool,

    #[command(subcommand)]
    pub mode: Option<Mode>,

    #[command(flatten)]
    pub headless: HeadlessArgs,

    #[command(flatten)]
    pub sync_options: SyncOptionArgs,

    #[command(flatten)]
    pub debug: DebugArgs,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Synchronization
    Sync(SyncArgs),
    /// Batch synchronization
    Batch(BatchArgs),
    /// Change default settings
    Settings(SettingsArgs),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Sync(_) => "sync",
            Mode::Batch(_) => "batch",
            Mode::Settings(_) => "settings",
        }
    }

    pub fn min_effort(&self) -> Option<f64> {
        match self {
            Mode::Sync(args) => args.min_effort,
            Mode::Batch(args) => args.min_effort,
            Mode::Settings(args) => args.min_effort,
        }
    }
}

#[derive(Args, Debug)]
#[command(next_help_heading = "headless options")]
pub struct HeadlessArgs {
    /// Headless mode (command line only)
    #[arg(long, global = true)]
    pub cli: bool,

    /// Verbosity level for headless job
    #[arg(long, global = true, value_name = "LEVEL", default_value_t = 1)]
    pub verbose: u8,
}

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Path to subtitle file
    #[arg(long = "sub", visible_alias = "sub-file", value_name = "PATH")]
    pub sub: PathBuf,

    /// Subtitle stream ID (1-based)
    #[arg(long, value_name = "NO", value_parser = clap::value_parser!(u32).range(1..))]
    pub sub_stream: Option<u32>,

    /// Select subtitle stream by language
    #[arg(long, value_name = "LANG")]
    pub sub_stream_by_lang: Option<String>,

    /// Subtitle language
    #[arg(long)]
    pub sub_lang: Option<String>,

    /// Subtitle character encoding
    #[arg(long)]
    pub sub_enc: Option<String>,

    /// Subtitle framerate
    #[arg(long)]
    pub sub_fps: Option<f64>,

    /// Path to reference file
    #[arg(long = "ref", visible_alias = "ref-file", value_name = "PATH")]
    pub reference: PathBuf,

    /// Reference stream ID (1-based)
    #[arg(long, value_name = "NO", value_parser = clap::value_parser!(u32).range(1..))]
    pub ref_stream: Option<u32>,

    /// Select reference stream by type
    #[arg(long, value_enum, value_name = "TYPE")]
    pub ref_stream_by_type: Option<StreamType>,

    /// Select reference stream by language
    #[arg(long, value_name = "LANG")]
    pub ref_stream_by_lang: Option<String>,

    /// Reference language
    #[arg(long)]
    pub ref_lang: Option<String>,

    /// Reference character encoding (for subtitle references)
    #[arg(long)]
    pub ref_enc: Option<String>,

    /// Reference framerate
    #[arg(long)]
    pub ref_fps: Option<f64>,

    /// Reference audio channels mapping (for audio references)
    #[arg(long, value_name = "CHANNELS")]
    pub ref_channels: Option<String>,

    /// Output file path (used with --cli)
    #[arg(long = "out", visible_alias = "out-file", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Output framerate (for fps-based subtitles)
    #[arg(long)]
    pub out_fps: Option<f64>,

    /// Output character encoding
    #[arg(long)]
    pub out_enc: Option<String>,

    /// How hard to try (0.0 - 1.0) (used with --cli)
    #[arg(long = "effort", value_name = "EFFORT", value_parser = parse_effort)]
    pub min_effort: Option<f64>,

    /// Overwrite existing files (used with --cli)
    #[arg(long)]
    pub overwrite: bool,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Batch job YAML description
    #[arg(value_name = "BATCH")]
    pub batch: PathBuf,

    /// How hard to try (0.0 - 1.0)
    #[arg(long = "effort", value_name = "EFFORT", value_parser = parse_effort)]
    pub min_effort: Option<f64>,

    /// Overwrite existing files
    #[arg(long)]
    pub overwrite: bool,
}

#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// How hard to try (0.0 - 1.0) (used with --cli)
    #[arg(long = "effort", value_name = "EFFORT", value_parser = parse_effort)]
    pub min_effort: Option<f64>,
}
