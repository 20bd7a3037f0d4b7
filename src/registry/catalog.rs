//! Registry loading from YAML configuration
//!
//! Loads the tool table and project list from a YAML file, validates the
//! cross references once, and answers lookups for the lifetime of the process.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{LauncherError, Result};
use crate::launch::LaunchCommand;

use super::definition::{
    ProjectEntry, ToolDefinition, ToolVersionRecord, VersionPolicy, substitute_version,
};

const BUILTIN_REGISTRY: &str = include_str!("../../assets/registry.yml");

/// A (tool, version) pin inside a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectToolRef {
    pub tool: String,
    pub version: String,
}

/// A project as written in the registry file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default)]
    pub tools: Vec<ProjectToolRef>,
}

/// Registry file structure
///
/// Versions must be quoted in YAML (`"2.93"`), otherwise they parse as numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub tools: Vec<ToolDefinition>,
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
}

impl RegistryFile {
    /// Parse a registry file from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| LauncherError::Registry(format!("Failed to parse registry YAML: {}", e)))
    }
}

/// Read-only project → tools mapping and launch resolver
#[derive(Debug, Clone)]
pub struct Registry {
    projects: Vec<ProjectEntry>,
    project_index: HashMap<String, usize>,
    tools: HashMap<String, ToolDefinition>,
    tool_order: Vec<String>,
    policy: VersionPolicy,
}

impl Registry {
    /// Build a registry from a parsed registry file
    pub fn new(file: RegistryFile) -> Result<Self> {
        let mut tools = HashMap::new();
        let mut tool_order = Vec::new();
        for tool in file.tools {
            if tools.contains_key(&tool.name) {
                return Err(LauncherError::Registry(format!("duplicate tool '{}'", tool.name)));
            }
            tool_order.push(tool.name.clone());
            tools.insert(tool.name.clone(), tool);
        }

        let mut projects = Vec::with_capacity(file.projects.len());
        let mut project_index = HashMap::new();
        for project in file.projects {
            if project_index.contains_key(&project.name) {
                return Err(LauncherError::Registry(format!("duplicate project '{}'", project.name)));
            }
            let entry = Self::build_project(project, &tools)?;
            project_index.insert(entry.name.clone(), projects.len());
            projects.push(entry);
        }

        debug!("Registry built: {} projects, {} tools", projects.len(), tools.len());

        Ok(Self {
            projects,
            project_index,
            tools,
            tool_order,
            policy: VersionPolicy::default(),
        })
    }

    fn build_project(project: ProjectConfig, tools: &HashMap<String, ToolDefinition>) -> Result<ProjectEntry> {
        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(project.tools.len());

        for pin in project.tools {
            let tool = tools.get(&pin.tool).ok_or_else(|| {
                LauncherError::Registry(format!(
                    "project '{}' references unknown tool '{}'",
                    project.name, pin.tool
                ))
            })?;
            if !tool.supports(&pin.version) {
                return Err(LauncherError::Registry(format!(
                    "project '{}' pins {} {}, which is not in its known versions",
                    project.name, pin.tool, pin.version
                )));
            }
            if !seen.insert((pin.tool.clone(), pin.version.clone())) {
                return Err(LauncherError::Registry(format!(
                    "project '{}' lists {} {} twice",
                    project.name, pin.tool, pin.version
                )));
            }
            records.push(ToolVersionRecord::new(pin.tool, pin.version, tool.launch.clone()));
        }

        Ok(ProjectEntry {
            name: project.name,
            tools: records,
        })
    }

    /// Load registry from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            LauncherError::Registry(format!(
                "Failed to read registry file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Load registry from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        Self::new(RegistryFile::from_yaml(content)?)
    }

    /// The registry compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_REGISTRY)
    }

    /// Set the version policy used by `resolve_launch_command`
    pub fn with_version_policy(mut self, policy: VersionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the version policy
    pub fn version_policy(&self) -> VersionPolicy {
        self.policy
    }

    /// Project names in display order
    pub fn list_projects(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.name.as_str()).collect()
    }

    /// Get a project entry
    pub fn project(&self, name: &str) -> Option<&ProjectEntry> {
        self.project_index.get(name).map(|&i| &self.projects[i])
    }

    /// Tools of a project in display order, empty for unknown projects
    pub fn list_tools(&self, project: &str) -> &[ToolVersionRecord] {
        self.project(project).map(|p| p.tools.as_slice()).unwrap_or(&[])
    }

    /// Known versions of a tool, most recent first, empty for unknown tools
    pub fn list_versions(&self, tool: &str) -> &[String] {
        self.tools.get(tool).map(|t| t.versions.as_slice()).unwrap_or(&[])
    }

    /// Get a tool definition
    pub fn tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    /// Tool names in file order
    pub fn tool_names(&self) -> Vec<&str> {
        self.tool_order.iter().map(|s| s.as_str()).collect()
    }

    /// Icon path of a tool
    pub fn icon_path(&self, tool: &str) -> Option<&str> {
        self.tools.get(tool).and_then(|t| t.icon.as_deref())
    }

    /// Most recent known version of a tool
    pub fn default_version(&self, tool: &str) -> Option<&str> {
        self.tools.get(tool).and_then(|t| t.latest())
    }

    /// Version a project pins for a tool (first matching row)
    pub fn pinned_version(&self, project: &str, tool: &str) -> Option<&str> {
        self.list_tools(project)
            .iter()
            .find(|r| r.tool_name == tool)
            .map(|r| r.version.as_str())
    }

    /// Number of projects
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Number of tools
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Build the concrete command for a tool at a version
    pub fn resolve_launch_command(&self, tool: &str, version: &str) -> Result<LaunchCommand> {
        let definition = self
            .tools
            .get(tool)
            .ok_or_else(|| LauncherError::UnknownTool(tool.to_string()))?;

        if self.policy == VersionPolicy::Strict && !definition.supports(version) {
            return Err(LauncherError::UnsupportedVersion {
                tool: tool.to_string(),
                version: version.to_string(),
            });
        }

        let program = substitute_version(&definition.launch, version);
        let args = definition
            .args
            .iter()
            .map(|a| substitute_version(a, version))
            .collect();

        Ok(LaunchCommand::new(tool, version, program).with_args(args))
    }
}
