//! ICU build
//!
//! Builds ICU4C from the checkout under `thirdparty/icu/src`. On Windows
//! the `allinone` solution is built with MSBuild and the arch-suffixed
//! output directories are copied into the install tree; on POSIX the
//! `runConfigureICU` script drives a static-only configure + make.

use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::core::artifact::ArtifactSet;
use crate::core::build_env::BuildEnvironment;
use crate::core::dependency::DependencyBuilder;
use crate::core::target::{BuildStrategy, TargetPlatform};
use crate::error::{ConfigError, QtforgeError};
use crate::infra::filesystem;
use crate::infra::process::{CommandRunner, Invocation};

/// Runtime libraries a Windows ICU build produces
const WINDOWS_DYNAMIC_LIBS: [&str; 3] = ["icudt*.dll", "icuin*.dll", "icuuc*.dll"];

/// ICU4C builder
#[derive(Debug)]
pub struct IcuBuilder {
    source_dir: PathBuf,
    install_dir: PathBuf,
    strategy: BuildStrategy,
}

impl IcuBuilder {
    /// Create a builder for the given target
    pub fn new(target: &TargetPlatform, source_dir: PathBuf, install_dir: PathBuf) -> Self {
        Self {
            source_dir,
            install_dir,
            strategy: target.strategy(),
        }
    }

    fn artifact_set(&self) -> ArtifactSet {
        let artifact = ArtifactSet::for_install_dir(&self.install_dir);
        match self.strategy {
            BuildStrategy::Msvc => artifact.with_dynamic_libs(WINDOWS_DYNAMIC_LIBS),
            BuildStrategy::PosixLinux => artifact.with_static_libs(["dl"]),
            BuildStrategy::Mac => artifact,
        }
    }

    fn build_msvc(
        &self,
        env: &BuildEnvironment,
        runner: &dyn CommandRunner,
    ) -> Result<(), QtforgeError> {
        let toolset = env.toolset().ok_or(ConfigError::MissingToolset)?;
        let arch = env.arch();
        let project_dir = self.source_dir.join("source").join("allinone");

        let mut invocation = Invocation::new("msbuild", &project_dir)
            .args(["allinone.sln", "/m", "/p:Configuration=Release"])
            .arg(format!("/p:Platform={}", arch.msvc_project_platform()))
            .arg(format!("/p:PlatformToolset=v{toolset}"))
            .arg("/p:TargetFrameworkMoniker=.NETFramework,Version=v3.5");
        if let Some(ucrt) = env.var("UCRTVERSION") {
            invocation = invocation.arg(format!("/p:WindowsTargetPlatformVersion={ucrt}"));
        }
        runner.run(&invocation.env_map(env.to_env_map()))?;

        // The solution writes bin64/lib64 for x64; install always uses the
        // unsuffixed names. Destinations are replaced wholesale.
        let suffix = arch.dir_suffix();
        let copies = [
            (format!("bin{suffix}"), defaults::BIN_SUBDIR),
            (defaults::INCLUDE_SUBDIR.to_string(), defaults::INCLUDE_SUBDIR),
            (format!("lib{suffix}"), defaults::LIB_SUBDIR),
        ];
        for (from, to) in copies {
            filesystem::replace_dir(&self.source_dir.join(from), &self.install_dir.join(to))?;
        }
        Ok(())
    }

    fn build_posix(
        &self,
        configure_target: &str,
        env: &BuildEnvironment,
        runner: &dyn CommandRunner,
    ) -> Result<(), QtforgeError> {
        let source = self.source_dir.join("source");
        let configure = source.join("runConfigureICU");

        runner.run(
            &Invocation::new(configure.display().to_string(), &source)
                .arg(configure_target)
                .arg(format!("--prefix={}", self.install_dir.display()))
                .args(["--enable-shared=no", "--enable-static=yes"])
                .env_map(env.to_env_map()),
        )?;
        runner.run(&Invocation::new("make", &source).env_map(env.to_env_map()))?;
        runner.run(
            &Invocation::new("make", &source)
                .arg("install")
                .env_map(env.to_env_map()),
        )?;
        Ok(())
    }
}

impl DependencyBuilder for IcuBuilder {
    fn name(&self) -> &'static str {
        "ICU"
    }

    fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    fn configure_flag(&self) -> &'static str {
        "-icu"
    }

    fn build(
        &self,
        env: &BuildEnvironment,
        runner: &dyn CommandRunner,
    ) -> Result<ArtifactSet, QtforgeError> {
        filesystem::create_dir_all(&self.install_dir)?;

        match self.strategy {
            BuildStrategy::Msvc => self.build_msvc(env, runner)?,
            BuildStrategy::PosixLinux => {
                let env = env
                    .clone()
                    .with_flag_prepended("CFLAGS", "-fPIC")
                    .with_flag_prepended("CXXFLAGS", "-fPIC");
                self.build_posix("Linux/gcc", &env, runner)?;
            }
            BuildStrategy::Mac => self.build_posix("MacOSX", env, runner)?,
        }

        let artifact = self.artifact_set();
        artifact.verify_produced(self.name())?;
        Ok(artifact)
    }
}
