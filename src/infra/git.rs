//! Version-control clean operations
//!
//! A rebuild wipes every untracked file from the Qt and dependency source
//! trees, submodules included. The operation is destructive and only ever
//! runs when the user passed `--rebuild`.

use std::path::Path;

use crate::error::CommandError;
use crate::infra::process::{CommandRunner, Invocation};

const CLEAN_ARGS: [&str; 2] = ["clean", "-dxf"];

/// Remove all untracked files from `tree`, recursing into submodules
///
/// Equivalent to `git clean -dxf` followed by
/// `git submodule foreach --recursive git clean -dxf`.
pub fn clean_tree(tree: &Path, runner: &dyn CommandRunner) -> Result<(), CommandError> {
    runner.run(&Invocation::new("git", tree).args(CLEAN_ARGS))?;
    runner.run(
        &Invocation::new("git", tree)
            .args(["submodule", "foreach", "--recursive", "git"])
            .args(CLEAN_ARGS),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingRunner;
    use std::path::PathBuf;

    #[test]
    fn test_clean_tree_runs_both_clean_commands() {
        let runner = RecordingRunner::default();
        clean_tree(Path::new("/work/qt"), &runner).unwrap();

        let invocations = runner.invocations();
        assert_eq!(invocations.len(), 2);

        assert_eq!(invocations[0].program, "git");
        assert_eq!(invocations[0].args, vec!["clean", "-dxf"]);
        assert_eq!(invocations[0].cwd, PathBuf::from("/work/qt"));

        assert_eq!(invocations[1].program, "git");
        assert_eq!(
            invocations[1].args,
            vec!["submodule", "foreach", "--recursive", "git", "clean", "-dxf"]
        );
        assert_eq!(invocations[1].cwd, PathBuf::from("/work/qt"));
    }

    #[test]
    fn test_clean_tree_inherits_environment() {
        let runner = RecordingRunner::default();
        clean_tree(Path::new("/work/qt"), &runner).unwrap();

        for invocation in runner.invocations() {
            assert!(invocation.env.is_empty(), "git runs in the ambient environment");
        }
    }

    #[test]
    fn test_clean_tree_propagates_failure() {
        let runner = crate::test_utils::FailingRunner::new("git");
        let result = clean_tree(Path::new("/work/qt"), &runner);
        assert!(result.is_err());
    }
}
