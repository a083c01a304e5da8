//! Core building blocks: option naming, job descriptors, channel maps, and
//! the process-wide `Settings` object the task builder fills in. These are
//! consumed by the `cli` layer and by downstream execution engines.
pub mod channels;
pub mod naming;
pub mod settings;
pub mod task;
