use std::sync::Mutex;

use super::CommandRunner;
use crate::error::{GitTagsError, Result};

enum Behavior {
    Stdout(String),
    Fail(String),
}

/// Mock command runner for testing without a git binary.
///
/// Returns canned stdout (or a canned failure) and records every argument
/// list it receives, so tests can assert which query form was selected.
pub struct MockCommandRunner {
    behavior: Behavior,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockCommandRunner {
    /// A runner whose every invocation succeeds with the given stdout.
    pub fn with_stdout(stdout: impl Into<String>) -> Self {
        MockCommandRunner {
            behavior: Behavior::Stdout(stdout.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A runner whose every invocation fails as if the process could not run.
    pub fn failing(message: impl Into<String>) -> Self {
        MockCommandRunner {
            behavior: Behavior::Fail(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The argument lists received so far, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, args: &[&str]) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push(args.iter().map(|s| s.to_string()).collect());

        match &self.behavior {
            Behavior::Stdout(stdout) => Ok(stdout.clone()),
            Behavior::Fail(message) => Err(GitTagsError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                message.clone(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_returns_stdout() {
        let runner = MockCommandRunner::with_stdout("tag: v1.0.0;abc;\n");
        assert_eq!(runner.run(&["log"]).unwrap(), "tag: v1.0.0;abc;\n");
    }

    #[test]
    fn test_mock_records_calls() {
        let runner = MockCommandRunner::with_stdout("");
        runner.run(&["log", "--tags"]).unwrap();
        runner.run(&["log", "v1.0.0..HEAD"]).unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], vec!["log", "--tags"]);
        assert_eq!(calls[1], vec!["log", "v1.0.0..HEAD"]);
    }

    #[test]
    fn test_mock_failure() {
        let runner = MockCommandRunner::failing("git not found");
        let err = runner.run(&["log"]).unwrap_err();
        assert!(matches!(err, GitTagsError::Io(_)));
        assert_eq!(runner.calls().len(), 1);
    }
}
