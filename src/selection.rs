//! Current UI selection
//!
//! Last-write-wins state owned by whichever front-end is driving the
//! registry. Nothing here is persisted.

/// Selected project, tool, and version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub project: Option<String>,
    pub tool: Option<String>,
    pub version: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a project; clears the tool and version
    pub fn select_project(&mut self, project: impl Into<String>) {
        self.project = Some(project.into());
        self.tool = None;
        self.version = None;
    }

    /// Select a tool at the version shown for its row
    pub fn select_tool(&mut self, tool: impl Into<String>, version: impl Into<String>) {
        self.tool = Some(tool.into());
        self.version = Some(version.into());
    }

    /// Override the version of the selected tool
    pub fn select_version(&mut self, version: impl Into<String>) {
        if self.tool.is_some() {
            self.version = Some(version.into());
        }
    }

    /// The (tool, version) pair to launch, when both are set
    pub fn launch_target(&self) -> Option<(&str, &str)> {
        match (&self.tool, &self.version) {
            (Some(tool), Some(version)) => Some((tool.as_str(), version.as_str())),
            _ => None,
        }
    }
}
