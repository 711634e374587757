//! Per-dependency skip flags
//!
//! A skipped dependency contributes nothing: no build commands, no
//! configure paths, no derived flag.

mod common;

use common::{RecordingRunner, TestProject};
use qtforge::core::orchestrator::{self, BuildRequest, DependencySelection};
use qtforge::core::target::{Arch, TargetPlatform};

fn request(dependencies: DependencySelection) -> BuildRequest {
    BuildRequest {
        target: TargetPlatform::LinuxGcc { arch: Arch::Amd64 },
        install_dir: None,
        rebuild: false,
        config_options: Vec::new(),
        dependencies,
        jobs: 2,
    }
}

fn qt_configure_args(runner: &RecordingRunner) -> Vec<String> {
    runner
        .invocations()
        .iter()
        .find(|invocation| invocation.program.ends_with("configure"))
        .expect("Qt configure must run")
        .args
        .clone()
}

#[test]
fn skipping_icu_removes_its_contributions() {
    let project = TestProject::new();
    project.prepare_dependency_install("linux-g++-64", "openssl");
    let runner = RecordingRunner::default();

    let selection = DependencySelection {
        icu: false,
        openssl: true,
    };
    let summary = orchestrator::execute(project.path(), &request(selection), &runner).unwrap();

    assert_eq!(summary.built_dependencies, vec!["OpenSSL"]);
    assert!(!runner
        .programs()
        .iter()
        .any(|program| program == "runConfigureICU"));

    let args = qt_configure_args(&runner);
    assert!(!args.contains(&"-icu".to_string()));
    assert!(args.contains(&"-openssl-linked".to_string()));
    assert!(!args.iter().any(|arg| arg.contains("icu")));
    assert!(args.contains(&"ssl".to_string()));
}

#[test]
fn skipping_openssl_removes_its_contributions() {
    let project = TestProject::new();
    project.prepare_dependency_install("linux-g++-64", "icu");
    let runner = RecordingRunner::default();

    let selection = DependencySelection {
        icu: true,
        openssl: false,
    };
    let summary = orchestrator::execute(project.path(), &request(selection), &runner).unwrap();

    assert_eq!(summary.built_dependencies, vec!["ICU"]);

    let args = qt_configure_args(&runner);
    assert!(args.contains(&"-icu".to_string()));
    assert!(!args.contains(&"-openssl-linked".to_string()));
    assert!(!args.iter().any(|arg| arg.contains("openssl")));
    assert!(!args.contains(&"ssl".to_string()));
    assert!(!args.contains(&"crypto".to_string()));
}

#[test]
fn skipping_both_leaves_a_bare_configure() {
    let project = TestProject::new();
    let runner = RecordingRunner::default();

    let selection = DependencySelection {
        icu: false,
        openssl: false,
    };
    let summary = orchestrator::execute(project.path(), &request(selection), &runner).unwrap();

    assert!(summary.built_dependencies.is_empty());
    assert_eq!(runner.programs(), vec!["configure", "make", "make"]);

    let args = qt_configure_args(&runner);
    assert!(!args.contains(&"-I".to_string()));
    assert!(!args.contains(&"-L".to_string()));
    assert!(!args.contains(&"-l".to_string()));
}
