//! Doctor command implementation
//!
//! Reports which external build tools are present on this host.

use anyhow::{bail, Result};

use crate::cli::output::{create_spinner, status};
use crate::core::doctor;

/// Execute the doctor command
pub async fn execute() -> Result<()> {
    let spinner = create_spinner("Checking build tools...");
    let checks = doctor::check_host_tools();
    spinner.finish_and_clear();

    for check in &checks {
        match &check.path {
            Some(path) => {
                println!("{} {} ({})", status::SUCCESS, check.name, path.display());
            }
            None if check.required => {
                println!("{} {} - missing, {}", status::ERROR, check.name, check.purpose);
            }
            None => {
                println!(
                    "{} {} - not found, {}",
                    status::WARNING,
                    check.name,
                    check.purpose
                );
            }
        }
    }

    if !doctor::all_required_present(&checks) {
        bail!("Required build tools are missing");
    }

    Ok(())
}
