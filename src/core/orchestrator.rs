//! Build orchestration
//!
//! The linear driver behind every target subcommand: resolve the build
//! environment, optionally clean, build the dependencies in fixed order,
//! feed their artifacts into Qt's configure/build/install, then copy the
//! dependency runtime binaries into the installed SDK.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::defaults;
use crate::core::build_env;
use crate::core::dependency::DependencyBuilder;
use crate::core::icu::IcuBuilder;
use crate::core::openssl::OpensslBuilder;
use crate::core::target::TargetPlatform;
use crate::core::toolkit::{ConfigureOptions, QtBuilder};
use crate::error::QtforgeError;
use crate::infra::process::CommandRunner;
use crate::infra::{filesystem, git};

/// Which dependencies this run builds
///
/// Evaluated once when the request is assembled; a skipped dependency
/// contributes nothing to the configure flags.
#[derive(Debug, Clone, Copy)]
pub struct DependencySelection {
    /// Build ICU
    pub icu: bool,
    /// Build OpenSSL
    pub openssl: bool,
}

impl Default for DependencySelection {
    fn default() -> Self {
        Self {
            icu: true,
            openssl: true,
        }
    }
}

/// Everything a build run needs, assembled by the CLI
#[derive(Debug)]
pub struct BuildRequest {
    /// Target platform the SDK is produced for
    pub target: TargetPlatform,
    /// Install directory override; defaults to `install/<platform-dir>`
    pub install_dir: Option<PathBuf>,
    /// Wipe build output and untracked source files first
    pub rebuild: bool,
    /// User-supplied configure options, in order
    pub config_options: Vec<String>,
    /// Dependencies to build
    pub dependencies: DependencySelection,
    /// Parallel jobs for the Qt build step
    pub jobs: usize,
}

/// What a completed run produced
#[derive(Debug, Serialize)]
pub struct BuildSummary {
    /// Platform identifier the SDK was built for
    pub target: String,
    /// Per-platform output directory name
    pub platform_dir: String,
    /// Final SDK location
    pub install_dir: PathBuf,
    /// Dependencies built this run, in build order
    pub built_dependencies: Vec<String>,
    /// Whether an existing Qt configuration was kept
    pub configure_skipped: bool,
    /// Runtime libraries copied next to the Qt binaries
    pub runtime_binaries: Vec<PathBuf>,
}

/// Run a full build
///
/// Strictly sequential; every external step blocks and any failure aborts
/// the run, leaving partial output in place for inspection.
pub fn execute(
    root_dir: &Path,
    request: &BuildRequest,
    runner: &dyn CommandRunner,
) -> Result<BuildSummary, QtforgeError> {
    let platform_dir = request.target.platform_dir();
    let build_dir = root_dir.join(defaults::BUILD_DIR).join(&platform_dir);
    let install_dir = match &request.install_dir {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => root_dir.join(dir),
        None => root_dir.join(defaults::INSTALL_DIR).join(&platform_dir),
    };
    let qt_source = root_dir.join(defaults::QT_SOURCE_DIR);

    let mut env = build_env::resolve(&request.target)?;

    if request.rebuild {
        tracing::info!("Cleaning {platform_dir} build output");
        filesystem::remove_dir_all(&build_dir)?;
        filesystem::remove_dir_all(&install_dir)?;
        git::clean_tree(&qt_source, runner)?;
    }

    let builders: [(bool, Box<dyn DependencyBuilder>); 2] = [
        (
            request.dependencies.icu,
            Box::new(IcuBuilder::new(
                &request.target,
                root_dir.join(defaults::ICU_SOURCE_DIR),
                build_dir.join(defaults::ICU_INSTALL_SUBDIR),
            )),
        ),
        (
            request.dependencies.openssl,
            Box::new(OpensslBuilder::new(
                &request.target,
                root_dir.join(defaults::OPENSSL_SOURCE_DIR),
                build_dir.join(defaults::OPENSSL_INSTALL_SUBDIR),
            )),
        ),
    ];

    let mut options = ConfigureOptions::new(request.config_options.clone());
    let mut runtime_libs: Vec<(PathBuf, String)> = Vec::new();
    let mut built_dependencies = Vec::new();

    for (enabled, builder) in &builders {
        if !enabled {
            tracing::info!("Skipping {} build", builder.name());
            continue;
        }

        tracing::info!("Building {}", builder.name());
        if request.rebuild {
            git::clean_tree(builder.source_dir(), runner)?;
        }

        let artifact = builder.build(&env, runner)?;
        options.add_artifact(&artifact);

        // Downstream steps must find the just-built runtime libraries on
        // the search path, e.g. when a Qt build tool links against them.
        if let Some(bin_dir) = &artifact.bin_dir {
            for pattern in &artifact.dynamic_libs {
                runtime_libs.push((bin_dir.clone(), pattern.clone()));
            }
            env = env.with_prepended_search_path(bin_dir);
        }

        options.push_flag(builder.configure_flag());
        built_dependencies.push(builder.name().to_string());
    }

    tracing::info!("Building Qt");
    let toolkit = QtBuilder::new(
        &request.target,
        qt_source,
        install_dir.clone(),
        request.jobs,
        root_dir.join(defaults::QT_CONF_FILE),
    );
    let configure_skipped = toolkit.build(&env, &options, runner)?;

    let install_bin = install_dir.join(defaults::BIN_SUBDIR);
    let mut runtime_binaries = Vec::new();
    for (bin_dir, pattern) in &runtime_libs {
        runtime_binaries.extend(filesystem::copy_matching(bin_dir, pattern, &install_bin)?);
    }

    Ok(BuildSummary {
        target: request.target.identifier(),
        platform_dir,
        install_dir,
        built_dependencies,
        configure_skipped,
        runtime_binaries,
    })
}
