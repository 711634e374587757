//! Already-configured Qt trees
//!
//! A Makefile in the Qt source tree means configure already ran; the run
//! must keep the existing configuration, warn, and carry on with build
//! and install.

mod common;

use common::{RecordingRunner, TestProject};
use qtforge::core::orchestrator::{self, BuildRequest, DependencySelection};
use qtforge::core::target::{Arch, TargetPlatform};

fn request() -> BuildRequest {
    BuildRequest {
        target: TargetPlatform::LinuxGcc { arch: Arch::Amd64 },
        install_dir: None,
        rebuild: false,
        config_options: Vec::new(),
        dependencies: DependencySelection {
            icu: false,
            openssl: false,
        },
        jobs: 2,
    }
}

#[test]
fn marker_suppresses_reconfiguration() {
    let project = TestProject::new();
    project.create_file("qt/Makefile", "all:\n");
    let runner = RecordingRunner::default();

    let summary = orchestrator::execute(project.path(), &request(), &runner).unwrap();

    assert!(summary.configure_skipped);
    assert_eq!(
        runner.programs(),
        vec!["make", "make"],
        "configure must not run against a configured tree"
    );
}

#[test]
fn absent_marker_configures_normally() {
    let project = TestProject::new();
    let runner = RecordingRunner::default();

    let summary = orchestrator::execute(project.path(), &request(), &runner).unwrap();

    assert!(!summary.configure_skipped);
    assert_eq!(runner.programs(), vec!["configure", "make", "make"]);
}

#[test]
fn rerun_against_configured_tree_still_installs() {
    let project = TestProject::new();
    let runner = RecordingRunner::default();

    // first run configures; pretend it produced the marker
    orchestrator::execute(project.path(), &request(), &runner).unwrap();
    project.create_file("qt/Makefile", "all:\n");

    let second = RecordingRunner::default();
    let summary = orchestrator::execute(project.path(), &request(), &second).unwrap();

    assert!(summary.configure_skipped);
    let programs = second.programs();
    assert_eq!(programs, vec!["make", "make"]);
    let invocations = second.invocations();
    assert_eq!(invocations[1].args, vec!["install"]);
}
