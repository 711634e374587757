//! Dependency builders
//!
//! The two third-party libraries Qt links against are built through this
//! trait, one builder per library. A builder owns its source and install
//! locations, picks the build strategy from the target, and yields an
//! [`ArtifactSet`] on success. Any failing external step aborts the run.

use std::path::Path;

use crate::core::artifact::ArtifactSet;
use crate::core::build_env::BuildEnvironment;
use crate::error::QtforgeError;
use crate::infra::process::CommandRunner;

/// A third-party library built ahead of the Qt configure step
pub trait DependencyBuilder {
    /// Display name ("ICU", "OpenSSL")
    fn name(&self) -> &'static str;

    /// Source checkout the build runs in; also the tree a rebuild cleans
    fn source_dir(&self) -> &Path;

    /// Qt configure flag recorded when this dependency was built
    fn configure_flag(&self) -> &'static str;

    /// Run the platform build strategy and describe what it produced
    ///
    /// Creates the install directory if absent. Fatal on any non-zero
    /// exit; there is no partial-result recovery.
    fn build(
        &self,
        env: &BuildEnvironment,
        runner: &dyn CommandRunner,
    ) -> Result<ArtifactSet, QtforgeError>;
}
