//! Qt configure, build, and install
//!
//! Runs Qt's own configure script with the aggregated dependency flags,
//! drives the platform make tool, and installs the SDK. An already
//! configured source tree (Makefile present) is never reconfigured; the
//! existing configuration is kept with a warning.

use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::core::artifact::ArtifactSet;
use crate::core::build_env::BuildEnvironment;
use crate::core::target::{BuildStrategy, TargetPlatform};
use crate::error::QtforgeError;
use crate::infra::filesystem;
use crate::infra::process::{CommandRunner, Invocation};

/// Ordered configure flags accumulated across the run
///
/// User options and derived dependency flags keep their insertion order;
/// `-I`/`-L`/`-l` entries are synthesized per dependency, in build order.
/// Configure scripts can be order-sensitive, so nothing is ever sorted or
/// deduplicated.
#[derive(Debug, Clone, Default)]
pub struct ConfigureOptions {
    flags: Vec<String>,
    include_dirs: Vec<PathBuf>,
    lib_dirs: Vec<PathBuf>,
    static_libs: Vec<String>,
}

impl ConfigureOptions {
    /// Start from the user-supplied options
    pub fn new(user_options: Vec<String>) -> Self {
        Self {
            flags: user_options,
            ..Self::default()
        }
    }

    /// Append a derived flag
    pub fn push_flag(&mut self, flag: impl Into<String>) {
        self.flags.push(flag.into());
    }

    /// Absorb a dependency's include/lib/static-lib contributions
    pub fn add_artifact(&mut self, artifact: &ArtifactSet) {
        self.include_dirs.push(artifact.include_dir.clone());
        self.lib_dirs.push(artifact.lib_dir.clone());
        self.static_libs.extend(artifact.static_libs.iter().cloned());
    }

    /// Render into configure arguments: flags, then -I/-L/-l groups
    pub fn to_args(&self) -> Vec<String> {
        let mut args = self.flags.clone();
        for dir in &self.include_dirs {
            args.push("-I".to_string());
            args.push(dir.display().to_string());
        }
        for dir in &self.lib_dirs {
            args.push("-L".to_string());
            args.push(dir.display().to_string());
        }
        for lib in &self.static_libs {
            args.push("-l".to_string());
            args.push(lib.clone());
        }
        args
    }
}

/// Qt builder
#[derive(Debug)]
pub struct QtBuilder {
    source_dir: PathBuf,
    install_dir: PathBuf,
    strategy: BuildStrategy,
    platform_identifier: String,
    jobs: usize,
    companion_config: PathBuf,
}

impl QtBuilder {
    /// Create a builder for the given target
    pub fn new(
        target: &TargetPlatform,
        source_dir: PathBuf,
        install_dir: PathBuf,
        jobs: usize,
        companion_config: PathBuf,
    ) -> Self {
        Self {
            source_dir,
            install_dir,
            strategy: target.strategy(),
            platform_identifier: target.identifier(),
            jobs,
            companion_config,
        }
    }

    /// Whether a previous configure run left its marker behind
    pub fn already_configured(&self) -> bool {
        self.source_dir.join(defaults::CONFIGURE_MARKER).exists()
    }

    /// Configure (unless already configured), build, install, and place
    /// the companion configuration file next to the installed binaries
    ///
    /// Returns `true` when configure was skipped.
    pub fn build(
        &self,
        env: &BuildEnvironment,
        options: &ConfigureOptions,
        runner: &dyn CommandRunner,
    ) -> Result<bool, QtforgeError> {
        let skipped = self.already_configured();
        if skipped {
            tracing::warn!("Qt already configured; keeping the existing configuration");
        } else {
            runner.run(&self.configure_invocation(env, options))?;
        }

        let make = self.make_program();
        let mut build = Invocation::new(make.clone(), &self.source_dir);
        if make != "nmake" {
            build = build.arg(format!("-j{}", self.jobs));
        }
        runner.run(&build.env_map(env.to_env_map()))?;
        runner.run(
            &Invocation::new(make, &self.source_dir)
                .arg("install")
                .env_map(env.to_env_map()),
        )?;

        filesystem::copy_file(
            &self.companion_config,
            &self
                .install_dir
                .join(defaults::BIN_SUBDIR)
                .join(defaults::QT_CONF_FILE),
        )?;

        Ok(skipped)
    }

    fn configure_invocation(
        &self,
        env: &BuildEnvironment,
        options: &ConfigureOptions,
    ) -> Invocation {
        let script = match self.strategy {
            BuildStrategy::Msvc => self.source_dir.join("configure.bat"),
            _ => self.source_dir.join("configure"),
        };

        Invocation::new(script.display().to_string(), &self.source_dir)
            .args(["-prefix".to_string(), self.install_dir.display().to_string()])
            .args(["-platform".to_string(), self.platform_identifier.clone()])
            .args(["-opensource", "-confirm-license"])
            .args(["-nomake", "examples", "-nomake", "tests"])
            .args(options.to_args())
            .env_map(env.to_env_map())
    }

    /// The make tool for this platform: jom when installed, else nmake,
    /// on Windows; make elsewhere
    fn make_program(&self) -> String {
        match self.strategy {
            BuildStrategy::Msvc => {
                if which::which("jom").is_ok() {
                    "jom".to_string()
                } else {
                    "nmake".to_string()
                }
            }
            _ => "make".to_string(),
        }
    }
}
