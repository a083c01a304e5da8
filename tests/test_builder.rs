//! Task builder tests: parsed command lines become jobs installed into `Settings`.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use subsync::cli::{CliArgs, Mode, build_settings, parse_batch_args, parse_sync_args};
use subsync::{ChannelsMap, Error, Settings, StreamSelection, StreamType, SyncTaskList};

fn cli(args: &[&str]) -> CliArgs {
    let argv = std::iter::once("subsync").chain(args.iter().copied());
    CliArgs::try_parse_from(argv).expect("arguments should parse")
}

fn sync_settings(args: &[&str]) -> Settings {
    build_settings(&cli(args)).expect("settings should build")
}

#[test]
fn sync_minimal_job() {
    let settings = sync_settings(&["sync", "--sub", "a.srt", "--ref", "b.mp4"]);
    let tasks = settings.tasks().expect("tasks installed");
    assert_eq!(tasks.len(), 1);

    let task = &tasks.tasks()[0];
    assert_eq!(task.sub.path, PathBuf::from("a.srt"));
    assert_eq!(task.reference.path, PathBuf::from("b.mp4"));
    assert!(task.out.is_none());
    assert_eq!(task.sub.stream, StreamSelection::Auto);
    assert_eq!(task.reference.stream, StreamSelection::Auto);
    assert!(task.reference.channels.is_none());
}

#[test]
fn sync_index_is_stored_zero_based() {
    let settings = sync_settings(&[
        "sync", "--sub", "a.srt", "--sub-stream", "2", "--ref", "b.mp4", "--ref-stream-by-lang", "eng",
    ]);
    let task = &settings.tasks().unwrap().tasks()[0];
    assert_eq!(task.sub.stream, StreamSelection::Index(1));
    assert_eq!(
        task.reference.stream,
        StreamSelection::By {
            kind: None,
            lang: Some("eng".to_string())
        }
    );
}

#[test]
fn sync_index_wins_over_language() {
    let settings = sync_settings(&[
        "sync",
        "--sub", "a.mkv", "--sub-stream", "1", "--sub-stream-by-lang", "pol",
        "--ref", "b.mkv", "--ref-stream", "4", "--ref-stream-by-type", "audio",
    ]);
    let task = &settings.tasks().unwrap().tasks()[0];
    assert_eq!(task.sub.stream, StreamSelection::Index(0));
    assert_eq!(task.reference.stream, StreamSelection::Index(3));
    assert!(task.sub.lang.is_none());
}

#[test]
fn sync_type_selection_and_overrides() {
    let settings = sync_settings(&[
        "sync",
        "--sub", "a.srt", "--sub-lang", "pol", "--sub-enc", "cp1250", "--sub-fps", "25",
        "--ref", "b.mkv", "--ref-stream-by-type", "audio", "--ref-lang", "eng",
        "--ref-channels", "FL,FR",
        "--out", "c.srt", "--out-fps", "23.976", "--out-enc", "utf-8",
        "--effort", "0.9", "--overwrite",
    ]);
    assert!(settings.overwrite);
    assert_eq!(settings.sync.min_effort, 0.9);

    let task = &settings.tasks().unwrap().tasks()[0];
    assert_eq!(task.min_effort, Some(0.9));
    assert_eq!(task.sub.lang.as_deref(), Some("pol"));
    assert_eq!(task.sub.enc.as_deref(), Some("cp1250"));
    assert_eq!(task.sub.fps, Some(25.0));
    assert_eq!(
        task.reference.stream,
        StreamSelection::By {
            kind: Some(StreamType::Audio),
            lang: None
        }
    );
    assert_eq!(task.reference.lang.as_deref(), Some("eng"));
    assert_eq!(
        task.reference.channels,
        Some(ChannelsMap::deserialize("FL,FR").unwrap())
    );

    let out = task.out.as_ref().expect("output descriptor");
    assert_eq!(out.path, PathBuf::from("c.srt"));
    assert_eq!(out.fps, Some(23.976));
    assert_eq!(out.enc.as_deref(), Some("utf-8"));
}

#[test]
fn sync_returns_installed_job() {
    let args = cli(&["sync", "--sub", "a.srt", "--ref", "b.mp4"]);
    let Some(Mode::Sync(sync)) = &args.mode else {
        panic!("expected sync mode");
    };
    let mut settings = Settings::default();
    let task = parse_sync_args(sync, &mut settings).unwrap();
    assert_eq!(settings.tasks().unwrap().tasks(), &[task]);
}

#[test]
fn malformed_channels_install_nothing() {
    let args = cli(&["sync", "--sub", "a.srt", "--ref", "b.mkv", "--ref-channels", "FL,XX"]);
    let Some(Mode::Sync(sync)) = &args.mode else {
        panic!("expected sync mode");
    };
    let mut settings = Settings::default();
    let err = parse_sync_args(sync, &mut settings).unwrap_err();
    assert!(matches!(err, Error::InvalidChannelsMap { .. }));
    assert!(settings.tasks().is_none());
}

#[test]
fn tuning_and_debug_overrides_reach_settings() {
    let settings = sync_settings(&[
        "--jobs", "3",
        "--min-word-len", "4",
        "--log-level", "INFO",
        "--dump-words", "sub:words.txt",
        "--cli",
        "sync", "--sub", "a.srt", "--ref", "b.mp4",
        "--out-time-offset", "1.25",
    ]);
    assert_eq!(settings.sync.jobs_no, 3);
    assert_eq!(settings.sync.min_word_len, 4);
    assert_eq!(settings.sync.out_time_offset, 1.25);
    assert_eq!(settings.sync.window_size, 1800.0);
    assert_eq!(settings.debug.log_level, 20);
    assert_eq!(settings.debug.dump_words.len(), 1);
    assert!(settings.cli);
}

#[test]
fn batch_installs_list() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "- sub: {{path: a.srt}}\n  ref: {{path: a.mkv, stream: 2}}\n\
         - sub: {{path: b.srt, lang: eng}}\n  ref: {{path: b.mkv}}\n  out: {{path: b.out.srt}}"
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let args = cli(&["batch", path.as_str()]);
    let Some(Mode::Batch(batch)) = &args.mode else {
        panic!("expected batch mode");
    };
    let mut settings = Settings::default();
    let tasks = parse_batch_args(batch, &mut settings).unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(settings.tasks(), Some(&tasks));
    assert_eq!(tasks.tasks()[0].reference.stream, StreamSelection::Index(1));
    assert_eq!(
        tasks.tasks()[1].out.as_ref().map(|o| o.path.clone()),
        Some(PathBuf::from("b.out.srt"))
    );
}

#[test]
fn empty_batch_installs_empty_list() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap().to_string();
    let settings = build_settings(&cli(&["batch", path.as_str()])).unwrap();
    assert_eq!(settings.tasks(), Some(&SyncTaskList::default()));
}

#[test]
fn missing_batch_description_is_an_io_error() {
    let err = build_settings(&cli(&["batch", "/nonexistent/jobs.yaml"])).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn settings_mode_builds_no_tasks() {
    let settings = build_settings(&cli(&["settings", "--effort", "0.2"])).unwrap();
    assert!(settings.tasks().is_none());
    assert_eq!(settings.sync.min_effort, 0.2);
}

#[test]
fn no_mode_builds_defaults() {
    let settings = build_settings(&cli(&[])).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn empty_selection_languages_are_ignored() {
    let settings = sync_settings(&[
        "sync", "--sub", "a.srt", "--sub-stream-by-lang", "",
        "--ref", "b.mkv", "--ref-stream-by-lang", "",
    ]);
    let task = &settings.tasks().unwrap().tasks()[0];
    assert_eq!(task.sub.stream, StreamSelection::Auto);
    assert_eq!(task.reference.stream, StreamSelection::Auto);
}

#[test]
fn empty_language_with_type_selects_by_type_only() {
    let settings = sync_settings(&[
        "sync", "--sub", "a.srt", "--ref", "b.mkv",
        "--ref-stream-by-type", "sub", "--ref-stream-by-lang", "",
    ]);
    let task = &settings.tasks().unwrap().tasks()[0];
    assert_eq!(
        task.reference.stream,
        StreamSelection::By {
            kind: Some(StreamType::Sub),
            lang: None
        }
    );
}
