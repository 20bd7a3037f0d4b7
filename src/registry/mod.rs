//! Tool registry - project/tool tables, loading, and launch resolution
//!
//! The registry is loaded once at startup and never mutated afterwards.

mod catalog;
mod definition;

pub use catalog::{ProjectConfig, ProjectToolRef, Registry, RegistryFile};
pub use definition::{
    ProjectEntry, ToolDefinition, ToolVersionRecord, VERSION_PLACEHOLDER, VersionPolicy, substitute_version,
};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// File name looked up in the working directory
pub const LOCAL_REGISTRY_FILE: &str = "wizlauncher-registry.yml";

/// Where a loaded registry came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    File(PathBuf),
    Builtin,
}

impl std::fmt::Display for RegistrySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin => write!(f, "built-in registry"),
        }
    }
}

/// User-level registry path: <config_dir>/wizlauncher/registry.yml
pub fn user_registry_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(env!("CARGO_PKG_NAME")).join("registry.yml"))
}

/// Load the registry from the standard search paths.
///
/// Search order:
/// 1. Explicit path if provided (errors are fatal)
/// 2. ./wizlauncher-registry.yml
/// 3. <config_dir>/wizlauncher/registry.yml
/// 4. Built-in registry
///
/// A file found in step 2 or 3 that fails to load is an error; the search
/// does not fall through to the next location.
pub fn load_registry(explicit_path: Option<&Path>) -> Result<(Registry, RegistrySource)> {
    if let Some(path) = explicit_path {
        let registry = Registry::from_file(path)?;
        log::info!("Loaded registry from {}", path.display());
        return Ok((registry, RegistrySource::File(path.to_path_buf())));
    }

    let candidates = std::iter::once(PathBuf::from(LOCAL_REGISTRY_FILE)).chain(user_registry_path());
    for candidate in candidates {
        if candidate.exists() {
            let registry = Registry::from_file(&candidate)?;
            log::info!("Loaded registry from {}", candidate.display());
            return Ok((registry, RegistrySource::File(candidate)));
        }
    }

    log::info!("No registry file found, using built-in registry");
    Ok((Registry::builtin()?, RegistrySource::Builtin))
}
