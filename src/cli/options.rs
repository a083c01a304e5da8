//! Shared flag groups available with every subcommand.
//!
//! Long flag spellings come from the internal option names through
//! [`option_flag`](crate::core::naming::option_flag) unless an explicit
//! spelling is given, so these groups are declared with the clap builder API.
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Args, Command, FromArgMatches, value_parser};

use crate::core::naming::resolve_flag;
use crate::core::settings::{Settings, WordsDump};

use super::actions::{parse_log_level, parse_words_dump};

fn option(name: &'static str, flag: Option<&str>) -> Arg {
    let long = resolve_flag(name, flag);
    Arg::new(name)
        .long(long.trim_start_matches("--").to_string())
        .global(true)
}

/// Synchronization tuning overrides. Absent values keep the settings defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncOptionArgs {
    pub jobs_no: Option<usize>,
    pub window_size: Option<f64>,
    pub max_point_dist: Option<f64>,
    pub min_points_no: Option<usize>,
    pub min_word_prob: Option<f64>,
    pub min_word_len: Option<usize>,
    pub min_correlation: Option<f64>,
    pub min_words_sim: Option<f64>,
    pub out_time_offset: Option<f64>,
}

impl SyncOptionArgs {
    pub fn apply(&self, settings: &mut Settings) {
        let sync = &mut settings.sync;
        if let Some(v) = self.jobs_no {
            sync.jobs_no = v;
        }
        if let Some(v) = self.window_size {
            sync.window_size = v;
        }
        if let Some(v) = self.max_point_dist {
            sync.max_point_dist = v;
        }
        if let Some(v) = self.min_points_no {
            sync.min_points_no = v;
        }
        if let Some(v) = self.min_word_prob {
            sync.min_word_prob = v;
        }
        if let Some(v) = self.min_word_len {
            sync.min_word_len = v;
        }
        if let Some(v) = self.min_correlation {
            sync.min_correlation = v;
        }
        if let Some(v) = self.min_words_sim {
            sync.min_words_sim = v;
        }
        if let Some(v) = self.out_time_offset {
            sync.out_time_offset = v;
        }
    }
}

impl FromArgMatches for SyncOptionArgs {
    fn from_arg_matches(m: &ArgMatches) -> Result<Self, clap::Error> {
        Ok(Self {
            jobs_no: m.get_one::<usize>("jobsNo").copied(),
            window_size: m.get_one::<f64>("windowSize").copied(),
            max_point_dist: m.get_one::<f64>("maxPointDist").copied(),
            min_points_no: m.get_one::<usize>("minPointsNo").copied(),
            min_word_prob: m.get_one::<f64>("minWordProb").copied(),
            min_word_len: m.get_one::<usize>("minWordLen").copied(),
            min_correlation: m.get_one::<f64>("minCorrelation").copied(),
            min_words_sim: m.get_one::<f64>("minWordsSim").copied(),
            out_time_offset: m.get_one::<f64>("outTimeOffset").copied(),
        })
    }

    fn update_from_arg_matches(&mut self, m: &ArgMatches) -> Result<(), clap::Error> {
        *self = Self::from_arg_matches(m)?;
        Ok(())
    }
}

impl Args for SyncOptionArgs {
    fn augment_args(cmd: Command) -> Command {
        cmd.next_help_heading("synchronization options").args([
            option("jobsNo", Some("--jobs"))
                .value_name("NO")
                .value_parser(value_parser!(usize))
                .help("Number of concurrent synchronization threads. 0 for auto."),
            option("windowSize", None)
                .value_name("SIZE")
                .value_parser(value_parser!(f64))
                .help("Maximum expected subtitle offset. In seconds."),
            option("maxPointDist", None)
                .value_name("DIST")
                .value_parser(value_parser!(f64))
                .help("Maximum distance of a synchronization point from the fitted line, in seconds"),
            option("minPointsNo", None)
                .value_name("NO")
                .value_parser(value_parser!(usize))
                .help("Minimum number of synchronization points required to accept a result"),
            option("minWordProb", None)
                .value_name("PROB")
                .value_parser(value_parser!(f64))
                .help("Minimum speech recognition score for a word to be used"),
            option("minWordLen", None)
                .value_name("LEN")
                .value_parser(value_parser!(usize))
                .help("Minimum word length, in letters, for a word to be used"),
            option("minCorrelation", None)
                .value_name("CORRELATION")
                .value_parser(value_parser!(f64))
                .help("Minimum correlation factor required to accept a result"),
            option("minWordsSim", None)
                .value_name("SIM")
                .value_parser(value_parser!(f64))
                .help("Minimum similarity for two words to be paired"),
            option("outTimeOffset", None)
                .value_name("OFFSET")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .help("Time offset added to the synchronized subtitles, in seconds"),
        ])
    }

    fn augment_args_for_update(cmd: Command) -> Command {
        Self::augment_args(cmd)
    }
}

/// Logging and word-dump options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugArgs {
    pub log_level: Option<i32>,
    pub log_file: Option<PathBuf>,
    /// In command-line order.
    pub dump_words: Vec<WordsDump>,
}

impl DebugArgs {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(level) = self.log_level {
            settings.debug.log_level = level;
        }
        if let Some(path) = &self.log_file {
            settings.debug.log_file = Some(path.clone());
        }
        settings
            .debug
            .dump_words
            .extend(self.dump_words.iter().cloned());
    }
}

impl FromArgMatches for DebugArgs {
    fn from_arg_matches(m: &ArgMatches) -> Result<Self, clap::Error> {
        Ok(Self {
            log_level: m.get_one::<i32>("logLevel").copied(),
            log_file: m.get_one::<PathBuf>("logFile").cloned(),
            dump_words: m
                .get_many::<WordsDump>("dumpWords")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
        })
    }

    fn update_from_arg_matches(&mut self, m: &ArgMatches) -> Result<(), clap::Error> {
        *self = Self::from_arg_matches(m)?;
        Ok(())
    }
}

impl Args for DebugArgs {
    fn augment_args(cmd: Command) -> Command {
        cmd.next_help_heading("debug options").args([
            option("logLevel", None)
                .value_name("LEVEL")
                .value_parser(parse_log_level)
                .allow_negative_numbers(true)
                .help(
                    "Set logging level, numerical value or one of: DEBUG, INFO, WARNING, ERROR, CRITICAL",
                ),
            option("logFile", None)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Write logs to the specified file"),
            option("dumpWords", None)
                .value_name("SRC[:PATH]")
                .action(ArgAction::Append)
                .value_parser(parse_words_dump)
                .help(
                    "Dump words to file, or to standard output if there is no PATH; \
                     SRC is one of: sub, subPipe, subRaw, ref, refPipe, refRaw, audio",
                ),
        ])
    }

    fn augment_args_for_update(cmd: Command) -> Command {
        Self::augment_args(cmd)
    }
}
