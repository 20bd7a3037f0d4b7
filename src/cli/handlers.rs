//! Subcommand handlers.
//!
//! Each handler writes to the given output so the binary can pass stdout and
//! tests can pass a buffer.

use colored::*;
use eyre::{Context, Result};
use log::info;
use serde_json::json;
use std::io::Write;

use wizlauncher::launch::{self, Spawner};
use wizlauncher::registry::{Registry, RegistrySource};

pub fn handle_projects(registry: &Registry, json: bool, out: &mut impl Write) -> Result<()> {
    let projects = registry.list_projects();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&projects)?)?;
        return Ok(());
    }
    for project in projects {
        writeln!(out, "{}", project)?;
    }
    Ok(())
}

pub fn handle_tools(registry: &Registry, project: &str, json: bool, out: &mut impl Write) -> Result<()> {
    info!("Listing tools for project: {}", project);
    let tools = registry.list_tools(project);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(tools)?)?;
        return Ok(());
    }
    if tools.is_empty() {
        writeln!(out, "{}", format!("No tools configured for '{}'", project).yellow())?;
        return Ok(());
    }

    let width = tools.iter().map(|t| t.tool_name.len()).max().unwrap_or(0).max(4);
    writeln!(out, "{}", format!("{:<width$}  Version", "Name").bold())?;
    for record in tools {
        writeln!(out, "{:<width$}  {}", record.tool_name, record.version)?;
    }
    Ok(())
}

pub fn handle_versions(registry: &Registry, tool: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let versions = registry.list_versions(tool);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(versions)?)?;
        return Ok(());
    }
    if versions.is_empty() {
        writeln!(out, "{}", format!("No versions known for '{}'", tool).yellow())?;
        return Ok(());
    }
    for version in versions {
        writeln!(out, "{}", version)?;
    }
    Ok(())
}

pub fn handle_resolve(registry: &Registry, tool: &str, version: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let command = registry.resolve_launch_command(tool, version)?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&command)?)?;
    } else {
        writeln!(out, "{}", command)?;
    }
    Ok(())
}

/// Pick the version to launch: explicit, then the project's pin, then latest.
///
/// A given project must list the tool, even when the version is explicit.
pub fn choose_version(
    registry: &Registry,
    tool: &str,
    version: Option<&str>,
    project: Option<&str>,
) -> Result<String> {
    let pinned = match project {
        Some(p) => Some(
            registry
                .pinned_version(p, tool)
                .ok_or_else(|| eyre::eyre!("Tool '{}' is not configured for project '{}'", tool, p))?,
        ),
        None => None,
    };
    if let Some(v) = version.or(pinned) {
        return Ok(v.to_string());
    }
    if registry.tool(tool).is_none() {
        return Err(wizlauncher::LauncherError::UnknownTool(tool.to_string()).into());
    }
    registry
        .default_version(tool)
        .map(str::to_string)
        .ok_or_else(|| eyre::eyre!("No versions known for '{}'; pass one explicitly", tool))
}

pub fn handle_launch(
    registry: &Registry,
    spawner: &dyn Spawner,
    tool: &str,
    version: Option<&str>,
    project: Option<&str>,
    dry_run: bool,
    out: &mut impl Write,
) -> Result<()> {
    let version = choose_version(registry, tool, version, project)?;
    let command = registry.resolve_launch_command(tool, &version)?;

    if dry_run {
        writeln!(out, "{} {}", "Would launch:".cyan(), command)?;
        return Ok(());
    }

    let launched = launch::launch(spawner, &command).context(format!("Could not start {} {}", tool, version))?;
    match launched.pid {
        Some(pid) => writeln!(out, "{} {} {} (pid {})", "Launched".green(), launched.tool, launched.version, pid)?,
        None => writeln!(out, "{} {} {}", "Launched".green(), launched.tool, launched.version)?,
    }
    Ok(())
}

pub fn handle_check(registry: &Registry, source: &RegistrySource, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        let summary = json!({
            "source": source.to_string(),
            "projects": registry.project_count(),
            "tools": registry.tool_count(),
            "version_policy": registry.version_policy().as_str(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }
    writeln!(
        out,
        "{} {}: {} projects, {} tools, version policy {}",
        "Registry OK:".green(),
        source,
        registry.project_count(),
        registry.tool_count(),
        registry.version_policy().as_str()
    )?;
    Ok(())
}
