//! Resolved launch command

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A concrete executable invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchCommand {
    /// Tool this command was resolved for
    pub tool: String,
    /// Version substituted into the templates
    pub version: String,
    /// Executable path
    pub program: PathBuf,
    /// Arguments passed to the executable
    pub args: Vec<String>,
}

impl LaunchCommand {
    /// Create a command with no arguments
    pub fn new(tool: impl Into<String>, version: impl Into<String>, program: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            version: version.into(),
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Set the arguments
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Get the executable path
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program.to_string_lossy()))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(s: &str) -> String {
    if s.is_empty() || s.contains(char::is_whitespace) {
        format!("\"{}\"", s)
    } else {
        s.to_string()
    }
}
