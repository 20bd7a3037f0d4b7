//! CLI command definitions using clap.
//!
//! With no subcommand the TUI starts. Subcommands:
//! - projects / tools / versions: query the registry
//! - resolve: print the command a launch would run
//! - launch: resolve and start a tool
//! - check: validate the registry

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wizlauncher::registry::VersionPolicy;

/// WizLauncher - pick a project, launch its tools
#[derive(Parser, Debug)]
#[command(name = "wizlauncher")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Registry file path (overrides config and search paths)
    #[arg(short, long, global = true)]
    pub registry: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Version policy: strict or permissive (overrides config)
    #[arg(long, global = true, value_parser = parse_version_policy)]
    pub version_policy: Option<VersionPolicy>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

fn parse_version_policy(s: &str) -> Result<VersionPolicy, String> {
    VersionPolicy::from_str(s).ok_or_else(|| format!("expected 'strict' or 'permissive', got '{}'", s))
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects
    Projects,

    /// List the tools configured for a project
    Tools {
        /// Project name
        project: String,
    },

    /// List known versions of a tool
    Versions {
        /// Tool name
        tool: String,
    },

    /// Print the command that would launch a tool
    Resolve {
        /// Tool name
        tool: String,

        /// Version to substitute into the launch template
        version: String,
    },

    /// Launch a tool
    Launch {
        /// Tool name
        tool: String,

        /// Version (defaults to the project's pin, then the latest known)
        version: Option<String>,

        /// Project the tool must belong to; supplies its pinned version
        #[arg(short, long)]
        project: Option<String>,

        /// Print the command instead of running it
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Validate the registry and print a summary
    Check,
}
