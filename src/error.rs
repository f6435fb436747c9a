//! Error types for the kwgit CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for kwgit operations.
///
/// Each variant maps to a specific exit code. Backend failures raised while
/// deleting a batch never escape the batch; they are recorded in the
/// deletion ledger instead.
#[derive(Error, Debug)]
pub enum KwgitError {
    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Invalid regex, index, day window or config file.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The base branch used for a merge check does not resolve.
    #[error("The base branch '{0}' does not exist in this repository")]
    BaseBranchNotFound(String),

    /// A named ref could not be resolved.
    #[error("Ref '{0}' not found")]
    RefNotFound(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// A deletion set contains the current branch or a protected branch.
    #[error("{0}")]
    InvariantViolation(String),
}

impl KwgitError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            KwgitError::UserError(_) => exit_codes::USER_ERROR,
            KwgitError::ConfigError(_) => exit_codes::USER_ERROR,
            KwgitError::InvariantViolation(_) => exit_codes::INVARIANT_VIOLATION,
            KwgitError::GitError(_) => exit_codes::GIT_FAILURE,
            KwgitError::BaseBranchNotFound(_) => exit_codes::NOT_FOUND,
            KwgitError::RefNotFound(_) => exit_codes::NOT_FOUND,
        }
    }
}

/// Result type alias for kwgit operations.
pub type Result<T> = std::result::Result<T, KwgitError>;
