//! Visual Studio installation lookup
//!
//! Resolves the Visual C++ toolset a Windows build runs under. The
//! `VSINSTALLDIR` environment variable overrides probing; otherwise the
//! well-known installation roots are checked, edition by edition.

use std::path::PathBuf;

use crate::core::target::{Arch, VsVersion};
use crate::error::ConfigError;

/// Environment variable overriding installation probing
pub const ENV_VS_INSTALL_DIR: &str = "VSINSTALLDIR";

/// Editions probed for 2017-style installation roots, most specific first
const EDITIONS: [&str; 4] = ["Enterprise", "Professional", "Community", "BuildTools"];

/// A located Visual Studio installation
#[derive(Debug, Clone)]
pub struct VsInstallation {
    /// Installation root (contains `VC` and `Common7`)
    pub install_dir: PathBuf,
    /// Release the installation belongs to
    pub version: VsVersion,
}

impl VsInstallation {
    /// Visual C++ tools directory
    pub fn vc_dir(&self) -> PathBuf {
        self.install_dir.join("VC")
    }

    /// IDE directory, the value of `GYP_MSVS_OVERRIDE_PATH`
    pub fn ide_dir(&self) -> PathBuf {
        self.install_dir.join("Common7").join("IDE")
    }
}

/// Candidate installation roots for a release, probed in order
pub fn candidate_roots(version: VsVersion) -> Vec<PathBuf> {
    let program_files = PathBuf::from(r"C:\Program Files (x86)");
    match version {
        VsVersion::Vs2015 => {
            vec![program_files.join("Microsoft Visual Studio 14.0")]
        }
        VsVersion::Vs2017 | VsVersion::Vs2019 => EDITIONS
            .iter()
            .map(|edition| {
                program_files
                    .join("Microsoft Visual Studio")
                    .join(version.year())
                    .join(edition)
            })
            .collect(),
    }
}

/// Locate the installation for a requested release and architecture
///
/// `VSINSTALLDIR` wins when it points at an existing installation with a
/// `VC` directory; otherwise the candidate roots are probed. Nothing
/// found is a fatal configuration error.
pub fn locate(version: VsVersion, arch: Arch) -> Result<VsInstallation, ConfigError> {
    if let Ok(dir) = std::env::var(ENV_VS_INSTALL_DIR) {
        let install_dir = PathBuf::from(dir);
        if install_dir.join("VC").is_dir() {
            return Ok(VsInstallation {
                install_dir,
                version,
            });
        }
    }

    for root in candidate_roots(version) {
        if root.join("VC").is_dir() {
            return Ok(VsInstallation {
                install_dir: root,
                version,
            });
        }
    }

    Err(ConfigError::VisualStudioNotFound {
        version: version.year().to_string(),
        arch: arch.to_string(),
    })
}

/// Locate the newest installed release when no version was requested
pub fn locate_newest(arch: Arch) -> Result<VsInstallation, ConfigError> {
    for version in VsVersion::ALL {
        if let Ok(installation) = locate(version, arch) {
            return Ok(installation);
        }
    }
    Err(ConfigError::NoVisualStudioInstallation {
        arch: arch.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_roots_2015_is_single_root() {
        let roots = candidate_roots(VsVersion::Vs2015);
        assert_eq!(roots.len(), 1);
        assert!(roots[0].ends_with("Microsoft Visual Studio 14.0"));
    }

    #[test]
    fn test_candidate_roots_2017_probes_editions() {
        let roots = candidate_roots(VsVersion::Vs2017);
        assert_eq!(roots.len(), 4);
        assert!(roots[0].ends_with("Microsoft Visual Studio/2017/Enterprise"));
        assert!(roots
            .iter()
            .any(|root| root.to_string_lossy().contains("Community")));
    }

    #[test]
    fn test_installation_derived_dirs() {
        let installation = VsInstallation {
            install_dir: PathBuf::from(r"C:\VS\2017\Community"),
            version: VsVersion::Vs2017,
        };
        assert!(installation.vc_dir().ends_with("VC"));
        let ide = installation.ide_dir();
        assert!(ide.ends_with(PathBuf::from("Common7").join("IDE")));
    }
}
