//! Translation of parsed arguments into sync jobs and the `Settings` object
//! that carries them to the execution engine.
use tracing::{debug, info};

use crate::core::channels::ChannelsMap;
use crate::core::settings::Settings;
use crate::core::task::{OutputFile, RefFile, SubFile, SyncTask, SyncTaskList};
use crate::error::Result;

use super::args::{BatchArgs, CliArgs, Mode, SyncArgs};

/// Empty selection values count as absent.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Builds the single job described by `sync` arguments and installs it as
/// the only entry of the settings' task list.
///
/// A stream index, when given, always wins: language or type based selection
/// is then not evaluated at all.
pub fn parse_sync_args(args: &SyncArgs, settings: &mut Settings) -> Result<SyncTask> {
    let mut sub = SubFile::new(&args.sub);
    if let Some(no) = args.sub_stream {
        sub.select(no as usize - 1);
    } else if let Some(lang) = non_empty(&args.sub_stream_by_lang) {
        sub.select_by_lang(lang);
    }
    sub.set_not_none(
        args.sub_lang.as_deref(),
        args.sub_enc.as_deref(),
        args.sub_fps,
    );

    let mut reference = RefFile::new(&args.reference);
    if let Some(no) = args.ref_stream {
        reference.select(no as usize - 1);
    } else if args.ref_stream_by_type.is_some() || non_empty(&args.ref_stream_by_lang).is_some() {
        reference.select_by(args.ref_stream_by_type, non_empty(&args.ref_stream_by_lang));
    }
    reference.set_not_none(
        args.ref_lang.as_deref(),
        args.ref_enc.as_deref(),
        args.ref_fps,
    );
    if let Some(channels) = &args.ref_channels {
        reference.channels = Some(ChannelsMap::deserialize(channels)?);
    }

    let out = args
        .out
        .as_ref()
        .filter(|path| !path.as_os_str().is_empty())
        .map(|path| OutputFile::new(path, args.out_fps, args.out_enc.clone()));

    let mut task = SyncTask::new(sub, reference, out);
    task.min_effort = args.min_effort;
    debug!("Built sync task: {:?}", task);

    settings.install_task(task.clone())?;
    Ok(task)
}

/// Loads the batch description named by `batch` arguments and installs it as
/// the settings' task list.
pub fn parse_batch_args(args: &BatchArgs, settings: &mut Settings) -> Result<SyncTaskList> {
    let tasks = SyncTaskList::load(&args.batch)?;
    info!("Batch description lists {} task(s)", tasks.len());
    settings.install_tasks(tasks.clone())?;
    Ok(tasks)
}

/// Builds the complete process configuration for a parsed command line.
///
/// Tuning and debug overrides are applied onto the defaults first; then the
/// task builder matching the subcommand runs, if any.
pub fn build_settings(args: &CliArgs) -> Result<Settings> {
    let mut settings = Settings::default();
    args.sync_options.apply(&mut settings);
    args.debug.apply(&mut settings);
    settings.cli = args.headless.cli;
    settings.verbose = args.headless.verbose;

    if let Some(mode) = &args.mode {
        if let Some(effort) = mode.min_effort() {
            settings.sync.min_effort = effort;
        }
        match mode {
            Mode::Sync(sync) => {
                settings.overwrite = sync.overwrite;
                parse_sync_args(sync, &mut settings)?;
            }
            Mode::Batch(batch) => {
                settings.overwrite = batch.overwrite;
                parse_batch_args(batch, &mut settings)?;
            }
            Mode::Settings(_) => {}
        }
    }

    Ok(settings)
}
