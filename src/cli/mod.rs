//! CLI module for wizlauncher - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for registry queries and
//! launching, and TUI launch when no subcommand is given.

pub mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
