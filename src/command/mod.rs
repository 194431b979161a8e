//! Process invocation abstraction layer
//!
//! This module provides a trait-based abstraction over the external `git`
//! invocation, allowing for multiple implementations including the real
//! subprocess runner and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [CommandRunner] trait, which defines the
//! single operation the tag lister needs: run the version-control executable
//! with an argument list and capture its standard output as text. The
//! concrete implementations include:
//!
//! - [system::SystemCommandRunner]: the real implementation using `std::process::Command`
//! - [mock::MockCommandRunner]: a canned-output implementation for testing
//!
//! Most code should depend on the [CommandRunner] trait rather than concrete
//! implementations; tests substitute a fake runner without mutating any
//! shared global state.

pub mod mock;
pub mod system;

pub use mock::MockCommandRunner;
pub use system::SystemCommandRunner;

use crate::error::Result;

/// Runs the version-control executable and captures its output.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// A failed invocation is a whole-call failure: implementations return
/// [crate::error::GitTagsError::Command] when the process exits non-zero and
/// propagate spawn failures unchanged. No retries, no timeout beyond what the
/// underlying process facility provides.
pub trait CommandRunner: Send + Sync {
    /// Run the executable with the given arguments.
    ///
    /// # Arguments
    /// * `args` - Argument list passed to the program (e.g. `["log", "--tags"]`)
    ///
    /// # Returns
    /// * `Ok(String)` - The captured standard output, as UTF-8 text
    /// * `Err` - If the process cannot be started, exits non-zero, or emits
    ///   non-UTF-8 output
    fn run(&self, args: &[&str]) -> Result<String>;
}
