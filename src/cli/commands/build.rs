//! Build command implementation
//!
//! Thin wrapper over the orchestrator: runs the build with the real
//! process runner and renders the summary.

use std::path::Path;

use anyhow::Result;

use crate::cli::output::status;
use crate::core::orchestrator::{self, BuildRequest};
use crate::infra::process::SystemRunner;

/// Execute a target build
pub async fn execute(root_dir: &Path, request: BuildRequest, json: bool) -> Result<()> {
    tracing::info!("Building for target {}", request.target.identifier());

    let runner = SystemRunner;
    let summary = orchestrator::execute(root_dir, &request, &runner)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{} Build complete", status::SUCCESS);
    println!("  Target: {}", summary.target);
    println!("  Install: {}", summary.install_dir.display());
    if summary.built_dependencies.is_empty() {
        println!("  Dependencies: skipped");
    } else {
        println!("  Dependencies: {}", summary.built_dependencies.join(", "));
    }
    if summary.configure_skipped {
        println!(
            "{} Qt was already configured; the existing configuration was kept",
            status::WARNING
        );
    }
    if !summary.runtime_binaries.is_empty() {
        println!(
            "  Runtime libraries copied: {}",
            summary.runtime_binaries.len()
        );
    }

    Ok(())
}
