//! Test utilities
//!
//! Command runner doubles shared by the unit tests. Integration tests
//! carry their own copies in `tests/common`.

use std::cell::RefCell;

use crate::error::CommandError;
use crate::infra::process::{CommandRunner, Invocation};

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
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), CommandError> {
        self.invocations.borrow_mut().push(invocation.clone());
        Ok(())
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
