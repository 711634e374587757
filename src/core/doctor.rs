//! Host tool preflight
//!
//! Checks that the external tools a build shells out to are actually on
//! the PATH before a multi-hour build discovers a missing one halfway in.

use std::path::PathBuf;

/// One external tool check
#[derive(Debug)]
pub struct ToolCheck {
    /// Program name looked up on the PATH
    pub name: &'static str,
    /// What the build uses it for
    pub purpose: &'static str,
    /// Whether a build on this host can succeed without it
    pub required: bool,
    /// Resolved location, when found
    pub path: Option<PathBuf>,
}

fn check(name: &'static str, purpose: &'static str, required: bool) -> ToolCheck {
    ToolCheck {
        name,
        purpose,
        required,
        path: which::which(name).ok(),
    }
}

/// Check the tools a build on this host shells out to
pub fn check_host_tools() -> Vec<ToolCheck> {
    let mut checks = vec![
        check("git", "source tree cleaning on --rebuild", true),
        check("perl", "OpenSSL Configure script", true),
    ];

    if cfg!(windows) {
        checks.push(check("msbuild", "ICU solution build", true));
        checks.push(check("nmake", "OpenSSL and Qt builds", true));
        checks.push(check("jom", "parallel Qt build (nmake fallback)", false));
    } else {
        checks.push(check("make", "dependency and Qt builds", true));
    }

    checks
}

/// Whether every required tool was found
pub fn all_required_present(checks: &[ToolCheck]) -> bool {
    checks
        .iter()
        .all(|check| !check.required || check.path.is_some())
}
