//! CLI command implementations

pub mod build;
pub mod doctor;

use clap::Subcommand;

/// Available CLI commands
///
/// Each target subcommand builds the full SDK for that platform.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build for Windows with Microsoft Visual C++
    #[command(name = "win32-msvc")]
    Win32Msvc {
        /// Visual Studio version (2015, 2017, 2019); defaults to the
        /// newest installation found
        vs_version: Option<String>,

        /// Platform architecture
        #[arg(short, long, default_value = "x86", value_parser = ["x86", "amd64"])]
        platform: String,
    },

    /// Build for Linux with GCC
    #[command(name = "linux-gcc")]
    LinuxGcc,

    /// Build for Mac OS X with Clang
    #[command(name = "macx-clang")]
    MacxClang {
        /// Platform architecture
        #[arg(short, long, default_value = "amd64", value_parser = ["x86", "amd64"])]
        platform: String,
    },

    /// Check that the external build tools are available
    Doctor,
}
