//! Process configuration handed to the execution engine.
//!
//! `Settings` starts from defaults, receives the tuning and debug overrides
//! from the command line, and is given its task list exactly once.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::task::{SyncTask, SyncTaskList};
use crate::error::{Error, Result};
use crate::types::{WordsDumpSource, log_level};

/// Requested dump of recognized words; no path means standard output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordsDump {
    pub source: WordsDumpSource,
    pub path: Option<PathBuf>,
}

/// Alignment tuning parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncParams {
    /// Worker threads; 0 picks the number of CPUs.
    pub jobs_no: usize,
    /// Maximum expected offset, in seconds.
    pub window_size: f64,
    pub max_point_dist: f64,
    pub min_points_no: usize,
    pub min_word_prob: f64,
    pub min_word_len: usize,
    pub min_correlation: f64,
    pub min_words_sim: f64,
    pub min_effort: f64,
    /// Added to every output timestamp, in seconds.
    pub out_time_offset: f64,
}

impl Default for SyncParams {
    fn default() -> Self {
        Self {
            jobs_no: 0,
            window_size: 30.0 * 60.0,
            max_point_dist: 2.0,
            min_points_no: 20,
            min_word_prob: 0.3,
            min_word_len: 5,
            min_correlation: 0.9999,
            min_words_sim: 0.6,
            min_effort: 0.5,
            out_time_offset: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugSettings {
    pub log_level: i32,
    pub log_file: Option<PathBuf>,
    pub dump_words: Vec<WordsDump>,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            log_level: log_level::WARNING,
            log_file: None,
            dump_words: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub sync: SyncParams,
    pub debug: DebugSettings,
    /// Headless mode (no interactive front end).
    pub cli: bool,
    pub verbose: u8,
    pub overwrite: bool,
    #[serde(skip)]
    tasks: Option<SyncTaskList>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sync: SyncParams::default(),
            debug: DebugSettings::default(),
            cli: false,
            verbose: 1,
            overwrite: false,
            tasks: None,
        }
    }
}

impl Settings {
    /// Active job list, if a task builder has run.
    pub fn tasks(&self) -> Option<&SyncTaskList> {
        self.tasks.as_ref()
    }

    /// Installs the job list. Fails when one is already installed.
    pub fn install_tasks(&mut self, tasks: SyncTaskList) -> Result<()> {
        if self.tasks.is_some() {
            return Err(Error::TasksAlreadyInstalled);
        }
        debug!("Installing {} task(s) into settings", tasks.len());
        self.tasks = Some(tasks);
        Ok(())
    }

    pub fn install_task(&mut self, task: SyncTask) -> Result<()> {
        self.install_tasks(SyncTaskList::new(vec![task]))
    }

    /// Consumes the settings, yielding the job list alongside the rest.
    pub fn take_tasks(mut self) -> (Self, Option<SyncTaskList>) {
        let tasks = self.tasks.take();
        (self, tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::{RefFile, SubFile};

    fn task() -> SyncTask {
        SyncTask::new(SubFile::new("a.srt"), RefFile::new("b.mp4"), None)
    }

    #[test]
    fn tasks_are_written_once() {
        let mut settings = Settings::default();
        assert!(settings.tasks().is_none());
        settings.install_task(task()).unwrap();
        assert_eq!(settings.tasks().map(SyncTaskList::len), Some(1));
        assert!(matches!(
            settings.install_tasks(SyncTaskList::default()),
            Err(Error::TasksAlreadyInstalled)
        ));
    }

    #[test]
    fn serialized_settings_use_option_names() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["sync"]["windowSize"], 1800.0);
        assert_eq!(json["debug"]["logLevel"], 30);
        assert!(json.get("tasks").is_none());
    }
}
