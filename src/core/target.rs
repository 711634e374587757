//! Target platform selection
//!
//! A build run is pinned to one [`TargetPlatform`] chosen on the command
//! line. Everything derived from it - the Qt mkspec-style platform
//! identifier, the per-platform output directory, and the build strategy -
//! is a pure function of the enum value, so the same invocation always
//! selects the same commands.

use std::fmt;

use crate::error::ConfigError;

/// Target architecture tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    /// 32-bit x86
    X86,
    /// 64-bit x86
    Amd64,
}

impl Arch {
    /// Parse the CLI `--platform` value
    pub fn from_flag(value: &str) -> Result<Self, ConfigError> {
        match value {
            "x86" => Ok(Self::X86),
            "amd64" => Ok(Self::Amd64),
            other => Err(ConfigError::UnsupportedTarget {
                target: other.to_string(),
            }),
        }
    }

    /// Architecture of the machine qtforge is running on
    pub fn host() -> Self {
        if cfg!(target_pointer_width = "64") {
            Self::Amd64
        } else {
            Self::X86
        }
    }

    /// MSBuild solution platform name
    pub fn msvc_project_platform(self) -> &'static str {
        match self {
            Self::X86 => "Win32",
            Self::Amd64 => "x64",
        }
    }

    /// Value of the `PLATFORM` environment variable under the MSVC toolchain
    pub fn msvc_env_platform(self) -> &'static str {
        match self {
            Self::X86 => "X86",
            Self::Amd64 => "X64",
        }
    }

    /// Suffix of the arch-specific `bin`/`lib` directories in an ICU
    /// Windows build output
    pub fn dir_suffix(self) -> &'static str {
        match self {
            Self::X86 => "",
            Self::Amd64 => "64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X86 => write!(f, "x86"),
            Self::Amd64 => write!(f, "amd64"),
        }
    }
}

/// Supported Visual Studio releases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VsVersion {
    Vs2015,
    Vs2017,
    Vs2019,
}

impl VsVersion {
    /// Supported versions, newest first
    pub const ALL: [Self; 3] = [Self::Vs2019, Self::Vs2017, Self::Vs2015];

    /// Parse the CLI version argument ("2015", "2017", "2019")
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "2015" => Ok(Self::Vs2015),
            "2017" => Ok(Self::Vs2017),
            "2019" => Ok(Self::Vs2019),
            other => Err(ConfigError::UnknownVsVersion {
                version: other.to_string(),
                supported: "2015, 2017, 2019".to_string(),
            }),
        }
    }

    /// Release year, as used in `GYP_MSVS_VERSION` and the platform
    /// identifier
    pub fn year(self) -> &'static str {
        match self {
            Self::Vs2015 => "2015",
            Self::Vs2017 => "2017",
            Self::Vs2019 => "2019",
        }
    }

    /// Internal version number (`VISUALSTUDIOVERSION`)
    pub fn version_number(self) -> &'static str {
        match self {
            Self::Vs2015 => "14.0",
            Self::Vs2017 => "15.0",
            Self::Vs2019 => "16.0",
        }
    }

    /// MSBuild platform toolset number (passed as `v<toolset>`)
    pub fn platform_toolset(self) -> &'static str {
        match self {
            Self::Vs2015 => "140",
            Self::Vs2017 => "141",
            Self::Vs2019 => "142",
        }
    }
}

impl fmt::Display for VsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}

/// How a dependency or the toolkit gets built for the selected target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStrategy {
    /// MSBuild/nmake project builds with the Visual C++ toolset
    Msvc,
    /// configure + make with position-independent code
    PosixLinux,
    /// configure + make, Darwin configure targets
    Mac,
}

/// The platform a run produces an SDK for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetPlatform {
    /// Windows with Microsoft Visual C++
    WindowsMsvc { vs: VsVersion, arch: Arch },
    /// Linux with GCC
    LinuxGcc { arch: Arch },
    /// macOS with Clang
    MacClang { arch: Arch },
}

impl TargetPlatform {
    /// Qt mkspec-style platform identifier passed to configure scripts
    pub fn identifier(&self) -> String {
        match self {
            Self::WindowsMsvc { vs, .. } => format!("win32-msvc{}", vs.year()),
            Self::LinuxGcc { arch: Arch::Amd64 } => "linux-g++-64".to_string(),
            Self::LinuxGcc { arch: Arch::X86 } => "linux-g++-32".to_string(),
            Self::MacClang { arch: Arch::Amd64 } => "macx-clang".to_string(),
            Self::MacClang { arch: Arch::X86 } => "macx-clang-32".to_string(),
        }
    }

    /// Name of the per-platform `build/` and `install/` subdirectory
    pub fn platform_dir(&self) -> String {
        match self {
            Self::WindowsMsvc { arch, .. } => format!("{}_{arch}", self.identifier()),
            _ => self.identifier(),
        }
    }

    /// Architecture tag of the target
    pub fn arch(&self) -> Arch {
        match self {
            Self::WindowsMsvc { arch, .. }
            | Self::LinuxGcc { arch }
            | Self::MacClang { arch } => *arch,
        }
    }

    /// Build strategy for this target
    pub fn strategy(&self) -> BuildStrategy {
        match self {
            Self::WindowsMsvc { .. } => BuildStrategy::Msvc,
            Self::LinuxGcc { .. } => BuildStrategy::PosixLinux,
            Self::MacClang { .. } => BuildStrategy::Mac,
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}
