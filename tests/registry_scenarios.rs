//! Registry and launch integration tests
//!
//! Exercises the registry through its public API with the built-in data set
//! and with registry files written to a temp dir.

use std::fs;

use tempfile::TempDir;
use wizlauncher::launch::{self, ProcessSpawner, RecordingSpawner};
use wizlauncher::registry::{self, Registry, RegistrySource, VersionPolicy};
use wizlauncher::selection::Selection;
use wizlauncher::{LauncherError, Result};

fn names(registry: &Registry, project: &str) -> Vec<(String, String)> {
    registry
        .list_tools(project)
        .iter()
        .map(|r| (r.tool_name.clone(), r.version.clone()))
        .collect()
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items.iter().map(|(t, v)| (t.to_string(), v.to_string())).collect()
}

#[test]
fn test_mobile_game_tools_in_order() -> Result<()> {
    let registry = Registry::builtin()?;
    assert_eq!(
        names(&registry, "MobileGame"),
        pairs(&[("Maya", "2023"), ("Blender", "2.93"), ("Photoshop", "2021"), ("Houdini", "18.5")])
    );
    Ok(())
}

#[test]
fn test_cutscene_tools_exclude_maya() -> Result<()> {
    let registry = Registry::builtin()?;
    let tools = names(&registry, "CutSceneA");
    assert_eq!(tools, pairs(&[("Photoshop", "2021"), ("Houdini", "18.5")]));
    assert!(tools.iter().all(|(t, _)| t != "Maya"));
    Ok(())
}

#[test]
fn test_unknown_project_is_empty() -> Result<()> {
    let registry = Registry::builtin()?;
    assert!(registry.list_tools("NonexistentProject").is_empty());
    assert!(registry.list_tools("").is_empty());
    Ok(())
}

#[test]
fn test_no_orphaned_tool_references() -> Result<()> {
    let registry = Registry::builtin()?;
    for project in registry.list_projects() {
        for record in registry.list_tools(project) {
            let tool = registry
                .tool(&record.tool_name)
                .unwrap_or_else(|| panic!("{} references missing tool {}", project, record.tool_name));
            assert!(registry.icon_path(&tool.name).is_some());
            assert_eq!(record.launch_template, tool.launch);
        }
    }
    Ok(())
}

#[test]
fn test_resolve_maya_2023() -> Result<()> {
    let registry = Registry::builtin()?;
    let template = &registry.tool("Maya").map(|t| t.launch.clone()).unwrap_or_default();
    assert!(template.contains(registry::VERSION_PLACEHOLDER));

    let command = registry.resolve_launch_command("Maya", "2023")?;
    let program = command.program.to_string_lossy().to_string();
    assert!(program.contains("2023"));
    assert!(!program.contains(registry::VERSION_PLACEHOLDER));
    assert_eq!(program, template.replace("{version}", "2023"));
    Ok(())
}

#[test]
fn test_resolve_is_pure() -> Result<()> {
    let registry = Registry::builtin()?;
    for tool in registry.tool_names() {
        for version in registry.list_versions(tool) {
            let first = registry.resolve_launch_command(tool, version)?;
            let second = registry.resolve_launch_command(tool, version)?;
            assert_eq!(first, second);
            assert_eq!(first.to_string(), second.to_string());
        }
    }
    Ok(())
}

#[test]
fn test_resolve_unknown_tool() {
    let registry = Registry::builtin().unwrap();
    let err = registry.resolve_launch_command("ZBrush", "2023").unwrap_err();
    assert!(matches!(err, LauncherError::UnknownTool(_)));
}

#[test]
fn test_version_policies() -> Result<()> {
    let strict = Registry::builtin()?;
    assert!(matches!(
        strict.resolve_launch_command("Blender", "4.1"),
        Err(LauncherError::UnsupportedVersion { .. })
    ));

    let permissive = Registry::builtin()?.with_version_policy(VersionPolicy::Permissive);
    let command = permissive.resolve_launch_command("Blender", "4.1")?;
    assert!(command.program.to_string_lossy().contains("Blender 4.1"));
    Ok(())
}

#[test]
fn test_list_versions_most_recent_first() -> Result<()> {
    let registry = Registry::builtin()?;
    assert_eq!(registry.list_versions("Maya"), ["2023", "2022", "2021", "2020"]);
    assert_eq!(registry.list_versions("Blender"), ["2.93", "2.92", "2.91"]);
    assert!(registry.list_versions("ZBrush").is_empty());
    Ok(())
}

#[tokio::test]
async fn test_launch_missing_executable_reports_failure() -> Result<()> {
    let dir = TempDir::new()?;
    let registry_path = dir.path().join("registry.yml");
    let missing = dir.path().join("bin").join("maya{version}");
    fs::write(
        &registry_path,
        format!(
            "tools:\n  - name: Maya\n    versions: [\"2023\"]\n    launch: '{}'\nprojects:\n  - name: MobileGame\n    tools:\n      - {{ tool: Maya, version: \"2023\" }}\n",
            missing.display()
        ),
    )?;

    let (registry, source) = registry::load_registry(Some(registry_path.as_path()))?;
    assert_eq!(source, RegistrySource::File(registry_path.clone()));

    let command = registry.resolve_launch_command("Maya", "2023")?;
    let spawner = ProcessSpawner::new();
    let err = launch::launch(&spawner, &command).unwrap_err();
    assert!(matches!(err, LauncherError::LaunchFailed { .. }));

    // Still usable afterwards
    assert_eq!(registry.list_tools("MobileGame").len(), 1);
    assert!(launch::launch(&spawner, &command).is_err());
    Ok(())
}

#[test]
fn test_selection_drives_launch() -> Result<()> {
    let registry = Registry::builtin()?;
    let spawner = RecordingSpawner::new();
    let mut selection = Selection::new();

    selection.select_project("CutSceneA");
    let first = &registry.list_tools("CutSceneA")[0];
    selection.select_tool(first.tool_name.clone(), first.version.clone());
    selection.select_version("2019");

    let (tool, version) = selection.launch_target().unwrap();
    let command = registry.resolve_launch_command(tool, version)?;
    launch::launch(&spawner, &command)?;

    let launched = spawner.launched();
    assert_eq!(launched.len(), 1);
    assert_eq!(launched[0].tool, "Photoshop");
    assert_eq!(launched[0].version, "2019");
    Ok(())
}

#[test]
fn test_invalid_registry_file_fails_to_load() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("registry.yml");
    fs::write(
        &path,
        "tools: []\nprojects:\n  - name: Orphan\n    tools:\n      - { tool: Houdini, version: \"18.5\" }\n",
    )?;

    let err = registry::load_registry(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, LauncherError::Registry(_)));
    Ok(())
}
