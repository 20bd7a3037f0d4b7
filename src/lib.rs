//! WizLauncher - a project-aware launcher for creative tools
//!
//! A read-only registry maps projects to the tools (and versions) they use;
//! a selection resolves to a concrete command which is started
//! fire-and-forget.

pub mod config;
pub mod error;
pub mod launch;
pub mod registry;
pub mod selection;
pub mod tui;

pub use error::{LauncherError, Result};
