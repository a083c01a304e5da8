//! Synchronization job descriptors: subtitle, reference and output sides,
//! the `SyncTask` that groups them, and `SyncTaskList` batches loaded from
//! YAML descriptions.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::channels::ChannelsMap;
use crate::error::{Error, Result};
use crate::types::StreamType;

/// How a stream is picked from a multi-stream container.
///
/// An explicit index always wins; criteria are only consulted when no index
/// was given.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StreamSelection {
    #[default]
    Auto,
    /// Zero-based stream index.
    Index(usize),
    By {
        kind: Option<StreamType>,
        lang: Option<String>,
    },
}

impl StreamSelection {
    pub fn index(&self) -> Option<usize> {
        match self {
            StreamSelection::Index(no) => Some(*no),
            _ => None,
        }
    }
}

/// Subtitle input of a job.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubFile {
    pub path: PathBuf,
    pub stream: StreamSelection,
    pub lang: Option<String>,
    pub enc: Option<String>,
    pub fps: Option<f64>,
}

impl SubFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Selects the stream by zero-based index.
    pub fn select(&mut self, index: usize) {
        self.stream = StreamSelection::Index(index);
    }

    pub fn select_by_lang(&mut self, lang: &str) {
        self.stream = StreamSelection::By {
            kind: None,
            lang: Some(lang.to_string()),
        };
    }

    /// Overlays the overrides that are present, keeping current values otherwise.
    pub fn set_not_none(&mut self, lang: Option<&str>, enc: Option<&str>, fps: Option<f64>) {
        if let Some(lang) = lang {
            self.lang = Some(lang.to_string());
        }
        if let Some(enc) = enc {
            self.enc = Some(enc.to_string());
        }
        if fps.is_some() {
            self.fps = fps;
        }
    }
}

/// Reference input of a job: a subtitle file or an audio/video container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RefFile {
    pub path: PathBuf,
    pub stream: StreamSelection,
    pub lang: Option<String>,
    pub enc: Option<String>,
    pub fps: Option<f64>,
    /// Only meaningful when the selected stream is audio.
    pub channels: Option<ChannelsMap>,
}

impl RefFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn select(&mut self, index: usize) {
        self.stream = StreamSelection::Index(index);
    }

    pub fn select_by(&mut self, kind: Option<StreamType>, lang: Option<&str>) {
        self.stream = StreamSelection::By {
            kind,
            lang: lang.map(str::to_string),
        };
    }

    pub fn set_not_none(&mut self, lang: Option<&str>, enc: Option<&str>, fps: Option<f64>) {
        if let Some(lang) = lang {
            self.lang = Some(lang.to_string());
        }
        if let Some(enc) = enc {
            self.enc = Some(enc.to_string());
        }
        if fps.is_some() {
            self.fps = fps;
        }
    }
}

/// Destination of the synchronized subtitles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputFile {
    pub path: PathBuf,
    /// Framerate for frame-based subtitle formats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enc: Option<String>,
}

impl OutputFile {
    pub fn new<P: Into<PathBuf>>(path: P, fps: Option<f64>, enc: Option<String>) -> Self {
        Self {
            path: path.into(),
            fps,
            enc,
        }
    }
}

/// One synchronization request.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncTask {
    pub sub: SubFile,
    pub reference: RefFile,
    pub out: Option<OutputFile>,
    /// Per-job effort floor; `None` means the settings default applies.
    pub min_effort: Option<f64>,
}

impl SyncTask {
    pub fn new(sub: SubFile, reference: RefFile, out: Option<OutputFile>) -> Self {
        Self {
            sub,
            reference,
            out,
            min_effort: None,
        }
    }
}

/// Ordered batch of jobs, typically loaded from a YAML description.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SyncTaskList {
    tasks: Vec<SyncTask>,
}

impl SyncTaskList {
    pub fn new(tasks: Vec<SyncTask>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SyncTask> {
        self.tasks.iter()
    }

    pub fn tasks(&self) -> &[SyncTask] {
        &self.tasks
    }

    /// Loads a batch description. An empty document yields an empty list.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading batch description: {:?}", path);
        let text = fs::read_to_string(path)?;
        let list = Self::from_yaml(&text)?;
        debug!("Loaded {} task(s) from {:?}", list.len(), path);
        Ok(list)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let entries: Option<Vec<TaskEntry>> = serde_yaml::from_str(text)?;
        let tasks = entries
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(no, entry)| {
                entry
                    .into_task()
                    .map_err(|e| Error::InvalidTask(format!("task {}: {}", no + 1, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { tasks })
    }

    pub fn to_yaml(&self) -> Result<String> {
        let entries: Vec<TaskEntry> = self.tasks.iter().map(TaskEntry::from_task).collect();
        Ok(serde_yaml::to_string(&entries)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_yaml()?)?;
        info!("Saved {} task(s) to {:?}", self.len(), path);
        Ok(())
    }
}

impl From<Vec<SyncTask>> for SyncTaskList {
    fn from(tasks: Vec<SyncTask>) -> Self {
        Self::new(tasks)
    }
}

impl<'a> IntoIterator for &'a SyncTaskList {
    type Item = &'a SyncTask;
    type IntoIter = std::slice::Iter<'a, SyncTask>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

// Batch description document model. Stream numbers are one-based, as on the
// command line. Selection criteria and language overrides use separate keys.

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct SubEntry {
    path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stream: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stream_by_lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    enc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fps: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct RefEntry {
    path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stream: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stream_by_type: Option<StreamType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stream_by_lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    enc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    channels: Option<ChannelsMap>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct TaskEntry {
    sub: SubEntry,
    #[serde(rename = "ref")]
    reference: RefEntry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    out: Option<OutputFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    effort: Option<f64>,
}

fn one_based(stream: usize) -> std::result::Result<usize, String> {
    stream
        .checked_sub(1)
        .ok_or_else(|| "stream numbers start at 1".to_string())
}

impl TaskEntry {
    fn into_task(self) -> std::result::Result<SyncTask, String> {
        let s = self.sub;
        let mut sub = SubFile::new(s.path);
        if let Some(no) = s.stream {
            sub.select(one_based(no)?);
        } else if let Some(lang) = &s.stream_by_lang {
            sub.select_by_lang(lang);
        }
        sub.lang = s.lang;
        sub.enc = s.enc;
        sub.fps = s.fps;

        let r = self.reference;
        let mut reference = RefFile::new(r.path);
        if let Some(no) = r.stream {
            reference.select(one_based(no)?);
        } else if r.stream_by_type.is_some() || r.stream_by_lang.is_some() {
            reference.select_by(r.stream_by_type, r.stream_by_lang.as_deref());
        }
        reference.lang = r.lang;
        reference.enc = r.enc;
        reference.fps = r.fps;
        reference.channels = r.channels;

        let mut task = SyncTask::new(sub, reference, self.out);
        task.min_effort = self.effort;
        Ok(task)
    }

    fn from_task(task: &SyncTask) -> Self {
        let sub_by_lang = match &task.sub.stream {
            StreamSelection::By { lang, .. } => lang.clone(),
            _ => None,
        };
        let (ref_by_type, ref_by_lang) = match &task.reference.stream {
            StreamSelection::By { kind, lang } => (*kind, lang.clone()),
            _ => (None, None),
        };
        TaskEntry {
            sub: SubEntry {
                path: task.sub.path.clone(),
                stream: task.sub.stream.index().map(|no| no + 1),
                stream_by_lang: sub_by_lang,
                lang: task.sub.lang.clone(),
                enc: task.sub.enc.clone(),
                fps: task.sub.fps,
            },
            reference: RefEntry {
                path: task.reference.path.clone(),
                stream: task.reference.stream.index().map(|no| no + 1),
                stream_by_type: ref_by_type,
                stream_by_lang: ref_by_lang,
                lang: task.reference.lang.clone(),
                enc: task.reference.enc.clone(),
                fps: task.reference.fps,
                channels: task.reference.channels.clone(),
            },
            out: task.out.clone(),
            effort: task.min_effort,
        }
    }
}
