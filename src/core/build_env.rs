//! Build environment setup
//!
//! A [`BuildEnvironment`] is an immutable snapshot of the environment a
//! build step runs under: variables, an ordered search-path prefix, and
//! toolchain metadata. Augmentation always produces a new value, so one
//! build step can never leak environment changes into another - the
//! orchestrator decides which updated snapshot flows downstream.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::target::{Arch, TargetPlatform};
use crate::error::ConfigError;
use crate::infra::vstools;

/// Compiler warning suppressed for every MSVC compilation unit
const MSVC_WARNING_FLAGS: &str = "/wd4334";

/// Environment snapshot for build steps
#[derive(Debug, Clone, PartialEq)]
pub struct BuildEnvironment {
    /// Environment variables
    vars: HashMap<String, String>,
    /// Directories prepended to the search path, highest priority first
    search_paths: Vec<PathBuf>,
    /// MSBuild platform toolset number, when targeting MSVC
    toolset: Option<String>,
    /// Target architecture
    arch: Arch,
}

impl BuildEnvironment {
    /// Snapshot the ambient process environment
    pub fn from_host(arch: Arch) -> Self {
        Self {
            vars: std::env::vars().collect(),
            search_paths: Vec::new(),
            toolset: None,
            arch,
        }
    }

    /// An empty environment, for tests and diagnostics
    pub fn empty(arch: Arch) -> Self {
        Self {
            vars: HashMap::new(),
            search_paths: Vec::new(),
            toolset: None,
            arch,
        }
    }

    /// Look up a variable
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Search-path prefix, highest priority first
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Platform toolset number, when targeting MSVC
    pub fn toolset(&self) -> Option<&str> {
        self.toolset.as_deref()
    }

    /// Target architecture
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Set a variable
    #[must_use]
    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    /// Set a variable only when the snapshot does not carry it already
    #[must_use]
    pub fn with_var_if_absent(mut self, name: &str, value: &str) -> Self {
        self.vars
            .entry(name.to_string())
            .or_insert_with(|| value.to_string());
        self
    }

    /// Prepend a flag to a whitespace-separated flag variable (CFLAGS etc.)
    #[must_use]
    pub fn with_flag_prepended(mut self, name: &str, flag: &str) -> Self {
        let value = match self.vars.get(name) {
            Some(existing) if !existing.is_empty() => format!("{flag} {existing}"),
            _ => flag.to_string(),
        };
        self.vars.insert(name.to_string(), value);
        self
    }

    /// Prepend a directory to the search path
    ///
    /// The most recently prepended directory takes the highest priority,
    /// matching repeated `PATH = dir + sep + PATH` updates.
    #[must_use]
    pub fn with_prepended_search_path(mut self, dir: &Path) -> Self {
        self.search_paths.insert(0, dir.to_path_buf());
        self
    }

    /// Record the platform toolset
    #[must_use]
    pub fn with_toolset(mut self, toolset: &str) -> Self {
        self.toolset = Some(toolset.to_string());
        self
    }

    /// Flatten into the variable map handed to process execution
    ///
    /// Search-path entries are folded into `PATH` (or the host's
    /// capitalization of it) ahead of the inherited value.
    pub fn to_env_map(&self) -> HashMap<String, String> {
        let mut map = self.vars.clone();

        if !self.search_paths.is_empty() {
            let separator = if cfg!(windows) { ";" } else { ":" };
            let path_key = map
                .keys()
                .find(|key| key.eq_ignore_ascii_case("PATH"))
                .cloned()
                .unwrap_or_else(|| "PATH".to_string());

            let prefix = self
                .search_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(separator);

            let value = match map.get(&path_key) {
                Some(existing) if !existing.is_empty() => {
                    format!("{prefix}{separator}{existing}")
                }
                _ => prefix,
            };
            map.insert(path_key, value);
        }

        map
    }
}

/// Resolve the build environment for a target
///
/// Windows targets locate the requested Visual Studio installation and
/// derive the toolset variables; POSIX targets run under the ambient
/// environment.
pub fn resolve(target: &TargetPlatform) -> Result<BuildEnvironment, ConfigError> {
    match target {
        TargetPlatform::WindowsMsvc { vs, arch } => {
            let installation = vstools::locate(*vs, *arch)?;
            Ok(BuildEnvironment::from_host(*arch)
                .with_toolset(vs.platform_toolset())
                .with_var_if_absent("VISUALSTUDIOVERSION", vs.version_number())
                .with_var("GYP_MSVS_VERSION", vs.year())
                .with_var(
                    "GYP_MSVS_OVERRIDE_PATH",
                    &installation.ide_dir().display().to_string(),
                )
                .with_var("CL", MSVC_WARNING_FLAGS)
                .with_var("PLATFORM", arch.msvc_env_platform())
                .with_var("PLATFORM_TOOLSET", vs.platform_toolset()))
        }
        TargetPlatform::LinuxGcc { arch } | TargetPlatform::MacClang { arch } => {
            Ok(BuildEnvironment::from_host(*arch))
        }
    }
}
