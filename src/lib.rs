#![doc = r#"
subsync — command-line front end of a subtitle speech synchronizer.

This crate turns a command line into typed synchronization jobs. It declares the
argument grammar (`sync`, `batch` and `settings` subcommands plus shared tuning and
debug flags), validates the values, and builds a [`Settings`] object holding the
job list and tuning parameters for a downstream alignment engine. The engine itself
(audio decoding, speech recognition, offset correlation) is not part of this crate.

Parse a command line and build settings
---------------------------------------
```rust,no_run
use subsync::cli::{build_settings, parse_cmd_args};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_cmd_args(["subsync", "sync", "--sub", "a.srt", "--ref", "b.mp4"])?;
    let settings = build_settings(&args)?;
    for task in settings.tasks().into_iter().flatten() {
        println!("{:?} <- {:?}", task.sub.path, task.reference.path);
    }
    Ok(())
}
```

Build jobs programmatically
---------------------------
```rust
use subsync::{ChannelsMap, RefFile, Settings, StreamType, SubFile, SyncTask};

fn main() -> subsync::Result<()> {
    let mut sub = SubFile::new("movie.srt");
    sub.select(0);

    let mut reference = RefFile::new("movie.mkv");
    reference.select_by(Some(StreamType::Audio), Some("eng"));
    reference.channels = Some(ChannelsMap::deserialize("FL,FR")?);

    let mut settings = Settings::default();
    settings.install_task(SyncTask::new(sub, reference, None))?;
    Ok(())
}
```

Error handling
--------------
Grammar violations are reported by clap (`clap::Error`, exit status 2). Job
construction returns `subsync::Result<T>`; match on `subsync::Error` for specific
cases such as a malformed channel mapping or an unreadable batch description.

Useful modules
--------------
- [`cli`] — argument grammar, value parsers and the task builder.
- [`core`] — job descriptors, channel maps, option naming and `Settings`.
- [`types`] — shared enums (`StreamType`, `WordsDumpSource`) and log severities.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod cli;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use crate::core::channels::{AudioChannel, ChannelsMap};
pub use crate::core::naming::option_flag;
pub use crate::core::settings::{DebugSettings, Settings, SyncParams, WordsDump};
pub use crate::core::task::{OutputFile, RefFile, StreamSelection, SubFile, SyncTask, SyncTaskList};
pub use error::{Error, Result};
pub use types::{StreamType, WordsDumpSource};
