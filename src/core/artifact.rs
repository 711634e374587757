//! Dependency build artifacts
//!
//! An [`ArtifactSet`] describes what a completed dependency build left on
//! disk. It is created by a dependency builder and consumed read-only by
//! the orchestrator; the static library order is preserved all the way
//! into the linker flags.

use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::error::FilesystemError;

/// Paths and library names produced by a dependency build
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    /// Root of the dependency's install tree
    pub install_dir: PathBuf,
    /// Header directory fed to `-I`
    pub include_dir: PathBuf,
    /// Library directory fed to `-L`
    pub lib_dir: PathBuf,
    /// Runtime binary directory, when the build produces one
    pub bin_dir: Option<PathBuf>,
    /// Static library names fed to `-l`, in link order
    pub static_libs: Vec<String>,
    /// Wildcard file names of runtime libraries inside `bin_dir`
    pub dynamic_libs: Vec<String>,
}

impl ArtifactSet {
    /// Describe a conventional `bin`/`include`/`lib` install tree
    pub fn for_install_dir(install_dir: &Path) -> Self {
        Self {
            install_dir: install_dir.to_path_buf(),
            include_dir: install_dir.join(defaults::INCLUDE_SUBDIR),
            lib_dir: install_dir.join(defaults::LIB_SUBDIR),
            bin_dir: Some(install_dir.join(defaults::BIN_SUBDIR)),
            static_libs: Vec::new(),
            dynamic_libs: Vec::new(),
        }
    }

    /// Set the static libraries to link, in order
    #[must_use]
    pub fn with_static_libs<I, S>(mut self, libs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.static_libs = libs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the runtime library name patterns
    #[must_use]
    pub fn with_dynamic_libs<I, S>(mut self, libs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dynamic_libs = libs.into_iter().map(Into::into).collect();
        self
    }

    /// Check that the build left the directories configure will reference
    ///
    /// A build step that exits zero but produces no include or lib tree is
    /// still a failure; configure must never see dangling paths.
    pub fn verify_produced(&self, producer: &str) -> Result<(), FilesystemError> {
        for dir in [&self.include_dir, &self.lib_dir] {
            if !dir.is_dir() {
                return Err(FilesystemError::MissingArtifact {
                    path: dir.clone(),
                    producer: producer.to_string(),
                });
            }
        }
        Ok(())
    }
}
