//! Process spawning
//!
//! `ProcessSpawner` starts the tool and returns immediately. The child handle
//! is dropped without waiting; tokio reaps the process in the background.

use std::io::ErrorKind;
use std::process::Stdio;
use std::sync::Mutex;

use log::{info, warn};
use tokio::process::Command;

use crate::error::{LauncherError, Result};

use super::command::LaunchCommand;

/// A successfully started tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launched {
    pub tool: String,
    pub version: String,
    /// OS process id, when the platform reports one
    pub pid: Option<u32>,
}

impl Launched {
    fn from_command(command: &LaunchCommand, pid: Option<u32>) -> Self {
        Self {
            tool: command.tool.clone(),
            version: command.version.clone(),
            pid,
        }
    }
}

/// Starts resolved commands
pub trait Spawner: Send + Sync {
    /// Start the process without waiting for it
    fn spawn(&self, command: &LaunchCommand) -> Result<Launched>;
}

/// Spawns real OS processes via tokio
///
/// Must be called from within a tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSpawner;

impl ProcessSpawner {
    pub fn new() -> Self {
        Self
    }
}

impl Spawner for ProcessSpawner {
    fn spawn(&self, command: &LaunchCommand) -> Result<Launched> {
        let mut cmd = Command::new(command.program());
        cmd.args(&command.args);
        cmd.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());

        let child = cmd.spawn().map_err(|e| launch_failed(command, &e))?;
        let pid = child.id();
        drop(child);

        Ok(Launched::from_command(command, pid))
    }
}

fn launch_failed(command: &LaunchCommand, err: &std::io::Error) -> LauncherError {
    let reason = match err.kind() {
        ErrorKind::NotFound => format!("executable not found ({})", err),
        ErrorKind::PermissionDenied => format!("permission denied ({})", err),
        _ => err.to_string(),
    };
    LauncherError::LaunchFailed {
        program: command.program().display().to_string(),
        reason,
    }
}

/// Launch a command, logging the outcome
pub fn launch(spawner: &dyn Spawner, command: &LaunchCommand) -> Result<Launched> {
    info!("Launching {} {}: {}", command.tool, command.version, command);
    match spawner.spawn(command) {
        Ok(launched) => {
            info!("Launched {} {} (pid {:?})", launched.tool, launched.version, launched.pid);
            Ok(launched)
        }
        Err(e) => {
            warn!("Launch of {} {} failed: {}", command.tool, command.version, e);
            Err(e)
        }
    }
}

/// Spawner that records commands instead of starting them
///
/// Drives the CLI handlers and the TUI in tests without starting processes.
#[derive(Debug, Default)]
pub struct RecordingSpawner {
    launched: Mutex<Vec<LaunchCommand>>,
    fail_with: Option<String>,
}

impl RecordingSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every spawn fail with the given reason
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            launched: Mutex::new(Vec::new()),
            fail_with: Some(reason.into()),
        }
    }

    /// Commands recorded so far
    pub fn launched(&self) -> Vec<LaunchCommand> {
        self.launched.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl Spawner for RecordingSpawner {
    fn spawn(&self, command: &LaunchCommand) -> Result<Launched> {
        if let Some(reason) = &self.fail_with {
            return Err(LauncherError::LaunchFailed {
                program: command.program().display().to_string(),
                reason: reason.clone(),
            });
        }
        if let Ok(mut launched) = self.launched.lock() {
            launched.push(command.clone());
        }
        Ok(Launched::from_command(command, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_executable_fails() {
        let cmd = LaunchCommand::new("Maya", "2023", "/nonexistent/wizlauncher-test/maya2023");
        let result = ProcessSpawner::new().spawn(&cmd);

        match result {
            Err(LauncherError::LaunchFailed { program, reason }) => {
                assert_eq!(program, "/nonexistent/wizlauncher-test/maya2023");
                assert!(reason.contains("not found"));
            }
            other => panic!("Expected LaunchFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_spawn_does_not_wait() {
        let cmd = LaunchCommand::new("sleep", "0", "sleep").with_args(vec!["5".to_string()]);

        let start = std::time::Instant::now();
        let launched = ProcessSpawner::new().spawn(&cmd).unwrap();

        assert!(start.elapsed() < std::time::Duration::from_secs(2));
        assert!(launched.pid.is_some());
        assert_eq!(launched.tool, "sleep");
    }

    #[tokio::test]
    async fn test_launch_keeps_running_after_failure() {
        let spawner = ProcessSpawner::new();
        let missing = LaunchCommand::new("Photoshop", "2021", "/nonexistent/photoshop");

        assert!(launch(&spawner, &missing).is_err());
        // Second attempt still goes through the same spawner
        assert!(launch(&spawner, &missing).is_err());
    }

    #[test]
    fn test_recording_spawner_records() {
        let spawner = RecordingSpawner::new();
        let cmd = LaunchCommand::new("Blender", "2.93", "/opt/blender/blender");

        let launched = launch(&spawner, &cmd).unwrap();
        assert_eq!(launched.tool, "Blender");
        assert_eq!(launched.pid, None);
        assert_eq!(spawner.launched(), vec![cmd]);
    }

    #[test]
    fn test_recording_spawner_failing() {
        let spawner = RecordingSpawner::failing("permission denied");
        let cmd = LaunchCommand::new("Houdini", "18.5", "/opt/houdini");

        let err = spawner.spawn(&cmd).unwrap_err();
        assert_eq!(err.to_string(), "Failed to launch /opt/houdini: permission denied");
        assert!(spawner.launched().is_empty());
    }
}
