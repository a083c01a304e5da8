use std::fs::File;
use std::sync::Mutex;

use clap::CommandFactory;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::core::settings::{DebugSettings, Settings};
use crate::core::task::{SyncTask, SyncTaskList};
use crate::types::log_level;

use super::args::{CliArgs, Mode};
use super::builder::build_settings;

/// Installs the global subscriber. `RUST_LOG` takes precedence over `--log-level`.
pub fn init_logging(debug: &DebugSettings) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::builder()
        .with_default_directive(log_level::to_filter(debug.log_level).into())
        .from_env_lossy();
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match &debug.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| e as Box<dyn std::error::Error>)
}

fn describe(task: &SyncTask) -> String {
    let out = task
        .out
        .as_ref()
        .map(|o| o.path.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{} <- {} => {}",
        task.sub.path.display(),
        task.reference.path.display(),
        out
    )
}

fn print_tasks(tasks: &SyncTaskList, verbose: u8) -> crate::Result<()> {
    if verbose == 0 {
        for task in tasks {
            println!("{}", describe(task));
        }
    } else {
        print!("{}", tasks.to_yaml()?);
    }
    Ok(())
}

/// Configures logging from the debug options and builds the settings for an
/// execution engine.
pub fn configure(args: &CliArgs) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut probe = Settings::default();
    args.debug.apply(&mut probe);
    init_logging(&probe.debug)?;

    let settings = build_settings(args)?;
    for dump in &settings.debug.dump_words {
        info!("Words from {} will be dumped to {:?}", dump.source, dump.path);
    }
    Ok(settings)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(mode) = &args.mode else {
        CliArgs::command().print_help()?;
        return Ok(());
    };

    let settings = configure(&args)?;
    info!("Mode: {}", mode.name());

    match mode {
        Mode::Sync(_) | Mode::Batch(_) => {
            let (settings, tasks) = settings.take_tasks();
            let tasks = tasks.unwrap_or_default();
            if tasks.is_empty() {
                warn!("No synchronization tasks to run");
            }
            if !settings.cli {
                info!("Interactive front end is not available, reporting planned tasks");
            }
            print_tasks(&tasks, settings.verbose)?;
        }
        Mode::Settings(_) => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
