//! Launch - resolved commands and fire-and-forget spawning

mod command;
mod spawner;

pub use command::LaunchCommand;
pub use spawner::{Launched, ProcessSpawner, RecordingSpawner, Spawner, launch};
