use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::CommandRunner;
use crate::error::{GitTagsError, Result};

/// Real command runner invoking the git executable as a subprocess.
///
/// The program name defaults to `git` and can be overridden (for example from
/// the `[git] bin` configuration key). An optional working directory scopes
/// the invocation to a repository other than the current one.
pub struct SystemCommandRunner {
    program: String,
    dir: Option<PathBuf>,
}

impl SystemCommandRunner {
    /// Create a runner invoking `git` in the current working directory.
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Create a runner invoking a custom program name or path.
    pub fn with_program(program: impl Into<String>) -> Self {
        SystemCommandRunner {
            program: program.into(),
            dir: None,
        }
    }

    /// Run the program inside `dir` instead of the current working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    fn command_string(&self, args: &[&str]) -> String {
        if args.is_empty() {
            return self.program.clone();
        }
        format!("{} {}", self.program, args.join(" "))
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, args: &[&str]) -> Result<String> {
        let command_string = self.command_string(args);
        debug!(command = %command_string, "running external command");

        let mut command = Command::new(&self.program);
        if let Some(dir) = &self.dir {
            command.current_dir(dir);
        }
        let output = command.args(args).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitTagsError::Command {
                command: command_string,
                status: output.status,
                stderr,
            });
        }

        String::from_utf8(output.stdout).map_err(|source| GitTagsError::OutputUtf8 {
            command: command_string,
            source,
        })
    }
}
