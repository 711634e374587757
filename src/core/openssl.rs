//! OpenSSL build
//!
//! Builds OpenSSL from the checkout under `thirdparty/openssl/src`. On
//! Windows the perl Configure / ms build-script / nmake sequence produces
//! the static `nt.mak` flavor; on POSIX the `config`/`Configure` scripts
//! drive make. Every platform runs the library's own test target before
//! installing.

use std::path::{Path, PathBuf};

use crate::core::artifact::ArtifactSet;
use crate::core::build_env::BuildEnvironment;
use crate::core::dependency::DependencyBuilder;
use crate::core::target::{Arch, BuildStrategy, TargetPlatform};
use crate::error::QtforgeError;
use crate::infra::filesystem;
use crate::infra::process::{CommandRunner, Invocation};

/// Static libraries (and Win32 system libraries) Qt links against
const WINDOWS_STATIC_LIBS: [&str; 7] = [
    "ssleay32", "libeay32", "advapi32", "crypt32", "gdi32", "user32", "ws2_32",
];
const LINUX_STATIC_LIBS: [&str; 3] = ["ssl", "crypto", "dl"];

/// OpenSSL builder
#[derive(Debug)]
pub struct OpensslBuilder {
    source_dir: PathBuf,
    install_dir: PathBuf,
    strategy: BuildStrategy,
    arch: Arch,
}

impl OpensslBuilder {
    /// Create a builder for the given target
    pub fn new(target: &TargetPlatform, source_dir: PathBuf, install_dir: PathBuf) -> Self {
        Self {
            source_dir,
            install_dir,
            strategy: target.strategy(),
            arch: target.arch(),
        }
    }

    fn artifact_set(&self) -> ArtifactSet {
        let artifact = ArtifactSet::for_install_dir(&self.install_dir);
        match self.strategy {
            BuildStrategy::Msvc => artifact.with_static_libs(WINDOWS_STATIC_LIBS),
            BuildStrategy::PosixLinux => artifact.with_static_libs(LINUX_STATIC_LIBS),
            BuildStrategy::Mac => artifact,
        }
    }

    fn build_msvc(
        &self,
        env: &BuildEnvironment,
        runner: &dyn CommandRunner,
    ) -> Result<(), QtforgeError> {
        let (config, ms_script) = match self.arch {
            Arch::X86 => ("VC-WIN32", "do_ms.bat"),
            Arch::Amd64 => ("VC-WIN64A", "do_win64a.bat"),
        };

        runner.run(
            &Invocation::new("perl", &self.source_dir)
                .args(["Configure", config, "no-asm"])
                .arg(format!("--prefix={}", self.install_dir.display()))
                .env_map(env.to_env_map()),
        )?;
        runner.run(
            &Invocation::new(
                self.source_dir.join("ms").join(ms_script).display().to_string(),
                &self.source_dir,
            )
            .env_map(env.to_env_map()),
        )?;

        // static build; ntdll.mak (the shared flavor) is never used
        let makefile = Path::new("ms").join("nt.mak").display().to_string();
        for target_args in [vec![], vec!["test"], vec!["install"]] {
            runner.run(
                &Invocation::new("nmake", &self.source_dir)
                    .args(["-f", makefile.as_str()])
                    .args(target_args)
                    .env_map(env.to_env_map()),
            )?;
        }
        Ok(())
    }

    fn build_posix(
        &self,
        configure: Invocation,
        env: &BuildEnvironment,
        runner: &dyn CommandRunner,
    ) -> Result<(), QtforgeError> {
        runner.run(&configure.env_map(env.to_env_map()))?;
        for target_args in [vec![], vec!["test"], vec!["install"]] {
            runner.run(
                &Invocation::new("make", &self.source_dir)
                    .args(target_args)
                    .env_map(env.to_env_map()),
            )?;
        }
        Ok(())
    }
}

impl DependencyBuilder for OpensslBuilder {
    fn name(&self) -> &'static str {
        "OpenSSL"
    }

    fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    fn configure_flag(&self) -> &'static str {
        "-openssl-linked"
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
                let configure = Invocation::new(
                    self.source_dir.join("config").display().to_string(),
                    &self.source_dir,
                )
                .arg(format!("--prefix={}", self.install_dir.display()))
                .arg("-fPIC");
                self.build_posix(configure, env, runner)?;
            }
            BuildStrategy::Mac => {
                let config = match self.arch {
                    Arch::Amd64 => "darwin64-x86_64-cc",
                    Arch::X86 => "darwin64-i386-cc",
                };
                let configure = Invocation::new(
                    self.source_dir.join("Configure").display().to_string(),
                    &self.source_dir,
                )
                .arg(config)
                .arg(format!("--prefix={}", self.install_dir.display()));
                self.build_posix(configure, env, runner)?;
            }
        }

        let artifact = self.artifact_set();
        artifact.verify_produced(self.name())?;
        Ok(artifact)
    }
}
