use thiserror::Error;

/// Unified error type for git-tags operations
#[derive(Error, Debug)]
pub enum GitTagsError {
    #[error("git command `{command}` failed with status {status}: {stderr}")]
    Command {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("git command `{command}` produced non-UTF-8 output")]
    OutputUtf8 {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Invalid semver range: {0}")]
    Range(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-tags
pub type Result<T> = std::result::Result<T, GitTagsError>;

impl GitTagsError {
    /// Create a range error with context
    pub fn range(msg: impl Into<String>) -> Self {
        GitTagsError::Range(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitTagsError::Config(msg.into())
    }
}
