//! Command-line interface module
//!
//! This module handles argument parsing and output formatting. It contains
//! no build logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::core::orchestrator::{BuildRequest, DependencySelection};
use crate::core::target::{Arch, TargetPlatform, VsVersion};
use crate::infra::vstools;
use commands::Commands;

/// Qtforge - Cross-platform Qt SDK builder
///
/// Build Qt together with ICU and OpenSSL from source into an
/// installable SDK tree.
#[derive(Parser, Debug)]
#[command(name = "qtforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output the build summary as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Install directory (defaults to install/<platform> under the
    /// current directory)
    #[arg(short, long, global = true)]
    pub install: Option<PathBuf>,

    /// Rebuild from scratch (warning: removes all untracked files from
    /// the source trees, submodules included)
    #[arg(short, long, global = true)]
    pub rebuild: bool,

    /// Additional option for the Qt configure script (repeatable;
    /// configure flags themselves start with '-')
    #[arg(
        short = 'c',
        long = "config-option",
        global = true,
        allow_hyphen_values = true
    )]
    pub config_option: Vec<String>,

    /// Skip building the ICU library
    #[arg(long, global = true)]
    pub skip_icu_build: bool,

    /// Skip building the OpenSSL library
    #[arg(long, global = true)]
    pub skip_openssl_build: bool,

    /// Parallel jobs for the Qt build step (defaults to the CPU count)
    #[arg(short, long, global = true)]
    pub jobs: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let target = match &self.command {
            Commands::Doctor => return commands::doctor::execute().await,
            Commands::Win32Msvc {
                vs_version,
                platform,
            } => {
                let arch = Arch::from_flag(platform)?;
                let vs = match vs_version {
                    Some(version) => VsVersion::parse(version)?,
                    None => vstools::locate_newest(arch)?.version,
                };
                TargetPlatform::WindowsMsvc { vs, arch }
            }
            Commands::LinuxGcc => TargetPlatform::LinuxGcc { arch: Arch::host() },
            Commands::MacxClang { platform } => TargetPlatform::MacClang {
                arch: Arch::from_flag(platform)?,
            },
        };

        let request = BuildRequest {
            target,
            install_dir: self.install.clone(),
            rebuild: self.rebuild,
            config_options: self.config_option.clone(),
            dependencies: DependencySelection {
                icu: !self.skip_icu_build,
                openssl: !self.skip_openssl_build,
            },
            jobs: self.jobs.unwrap_or_else(num_cpus::get),
        };

        let root_dir = std::env::current_dir()?;
        commands::build::execute(&root_dir, request, self.json).await
    }
}
