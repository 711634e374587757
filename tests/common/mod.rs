//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests: a project tree with the
//! expected source checkouts, and command runner doubles that observe the
//! build without running real tools.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use qtforge::error::CommandError;
use qtforge::infra::process::{CommandRunner, Invocation};

/// A temporary project root with qt/ and thirdparty/ checkouts in place
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    /// Create a project tree with source directories and qt.conf
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        for sub in [
            "qt",
            "thirdparty/icu/src/source",
            "thirdparty/openssl/src",
        ] {
            std::fs::create_dir_all(dir.path().join(sub)).expect("Failed to create source tree");
        }
        std::fs::write(dir.path().join("qt.conf"), "[Paths]\nPrefix = ..\n")
            .expect("Failed to write qt.conf");
        Self { dir }
    }

    /// Project root path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a directory under the project root
    pub fn create_dir(&self, name: &str) {
        std::fs::create_dir_all(self.path().join(name)).expect("Failed to create directory");
    }

    /// Create a file under the project root
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a path exists under the project root
    pub fn exists(&self, name: &str) -> bool {
        self.path().join(name).exists()
    }

    /// Pre-create the include/lib trees a dependency build would produce,
    /// so artifact verification passes under a recording runner
    pub fn prepare_dependency_install(&self, platform_dir: &str, dependency: &str) {
        for sub in ["include", "lib"] {
            self.create_dir(&format!("build/{platform_dir}/{dependency}/{sub}"));
        }
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Runner that records every invocation and reports success
#[derive(Debug, Default)]
pub struct RecordingRunner {
    invocations: RefCell<Vec<Invocation>>,
}

impl RecordingRunner {
    /// Everything run so far, in order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Programs run so far, in order, paths reduced to file names
    pub fn programs(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|invocation| {
                PathBuf::from(&invocation.program)
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| invocation.program.clone())
            })
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), CommandError> {
        self.invocations.borrow_mut().push(invocation.clone());
        Ok(())
    }
}

/// Recording runner that also creates the given directories on every
/// invocation, standing in for the directories a real build tool would
/// produce (needed when a rebuild wipes pre-created fixtures)
#[derive(Debug)]
pub struct ProvisioningRunner {
    inner: RecordingRunner,
    dirs: Vec<PathBuf>,
}

impl ProvisioningRunner {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self {
            inner: RecordingRunner::default(),
            dirs,
        }
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.inner.invocations()
    }

    pub fn programs(&self) -> Vec<String> {
        self.inner.programs()
    }
}

impl CommandRunner for ProvisioningRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), CommandError> {
        for dir in &self.dirs {
            std::fs::create_dir_all(dir).expect("Failed to provision directory");
        }
        self.inner.run(invocation)
    }
}

/// Runner that fails any invocation of the given program
#[derive(Debug)]
pub struct FailingRunner {
    program: String,
}

impl FailingRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl CommandRunner for FailingRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), CommandError> {
        if invocation.program == self.program {
            Err(CommandError::Failed {
                command: invocation.command_line(),
                status: "exit status: 2".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
