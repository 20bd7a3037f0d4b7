//! Tool definitions and project records
//!
//! Defines the tool table entries and the per-project (tool, version) rows.

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the selected version in launch templates
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// How `resolve_launch_command` treats versions missing from a tool's list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionPolicy {
    /// Only versions listed for the tool resolve
    Strict,
    /// Any version string is substituted into the template
    Permissive,
}

impl Default for VersionPolicy {
    fn default() -> Self {
        Self::Strict
    }
}

impl VersionPolicy {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "permissive" | "lenient" => Some(Self::Permissive),
            _ => None,
        }
    }

    /// Get the config-file spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }
}

/// An entry in the tool table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (e.g., "Maya")
    pub name: String,
    /// Known versions, most recent first
    #[serde(default)]
    pub versions: Vec<String>,
    /// Executable path template
    pub launch: String,
    /// Argument templates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// Icon path for UIs that show one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ToolDefinition {
    /// Check whether a version is listed for this tool
    pub fn supports(&self, version: &str) -> bool {
        self.versions.iter().any(|v| v == version)
    }

    /// Most recent known version
    pub fn latest(&self) -> Option<&str> {
        self.versions.first().map(|s| s.as_str())
    }
}

/// A (tool, version) row of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolVersionRecord {
    pub tool_name: String,
    pub version: String,
    pub launch_template: String,
}

impl ToolVersionRecord {
    pub fn new(
        tool_name: impl Into<String>,
        version: impl Into<String>,
        launch_template: impl Into<String>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            version: version.into(),
            launch_template: launch_template.into(),
        }
    }
}

/// A project and its tools in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub name: String,
    pub tools: Vec<ToolVersionRecord>,
}

/// Replace every version placeholder in `template`
pub fn substitute_version(template: &str, version: &str) -> String {
    template.replace(VERSION_PLACEHOLDER, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_policy_from_str() {
        assert_eq!(VersionPolicy::from_str("strict"), Some(VersionPolicy::Strict));
        assert_eq!(VersionPolicy::from_str("Permissive"), Some(VersionPolicy::Permissive));
        assert_eq!(VersionPolicy::from_str("lenient"), Some(VersionPolicy::Permissive));
        assert_eq!(VersionPolicy::from_str("whatever"), None);
    }

    #[test]
    fn test_version_policy_default() {
        assert_eq!(VersionPolicy::default(), VersionPolicy::Strict);
        assert_eq!(VersionPolicy::default().as_str(), "strict");
    }

    #[test]
    fn test_version_policy_yaml() {
        let policy: VersionPolicy = serde_yaml::from_str("permissive").unwrap();
        assert_eq!(policy, VersionPolicy::Permissive);
    }

    fn tool(yaml: &str) -> ToolDefinition {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_tool_definition_yaml() {
        let tool = tool(
            "name: Blender\nversions: [\"2.93\", \"2.92\"]\nlaunch: /opt/blender-{version}/blender\nargs: [--factory-startup]\nicon: icons/blender.png\n",
        );

        assert_eq!(tool.name, "Blender");
        assert_eq!(tool.versions, vec!["2.93", "2.92"]);
        assert_eq!(tool.args, vec!["--factory-startup"]);
        assert_eq!(tool.icon.as_deref(), Some("icons/blender.png"));
    }

    #[test]
    fn test_tool_supports_and_latest() {
        let houdini = tool("name: Houdini\nversions: [\"18.5\", \"18.0\", \"17.5\"]\nlaunch: houdini\n");
        assert!(houdini.supports("18.0"));
        assert!(!houdini.supports("19.0"));
        assert_eq!(houdini.latest(), Some("18.5"));

        let bare = tool("name: Krita\nlaunch: krita\n");
        assert!(bare.args.is_empty());
        assert_eq!(bare.latest(), None);
    }

    #[test]
    fn test_substitute_version() {
        assert_eq!(
            substitute_version(r"C:\Program Files\Autodesk\Maya{version}\bin\maya.exe", "2023"),
            r"C:\Program Files\Autodesk\Maya2023\bin\maya.exe"
        );
        assert_eq!(substitute_version("/opt/{version}/{version}", "1"), "/opt/1/1");
        assert_eq!(substitute_version("/usr/bin/gimp", "2.10"), "/usr/bin/gimp");
    }

    #[test]
    fn test_substitute_leaves_other_braces() {
        assert_eq!(substitute_version("{tool}-{version}", "7.2"), "{tool}-7.2");
    }
}
