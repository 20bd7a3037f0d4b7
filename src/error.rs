//! Error types for WizLauncher
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in WizLauncher
///
/// There is no unknown-project variant: project lookups return an empty
/// tool list instead of failing.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// No launch template registered for a tool
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Version is not among the tool's known versions
    #[error("Unsupported version '{version}' for tool '{tool}'")]
    UnsupportedVersion { tool: String, version: String },

    /// The OS refused to start the process
    #[error("Failed to launch {program}: {reason}")]
    LaunchFailed { program: String, reason: String },

    /// Registry file could not be read or failed validation
    #[error("Registry error: {0}")]
    Registry(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for WizLauncher operations
pub type Result<T> = std::result::Result<T, LauncherError>;
