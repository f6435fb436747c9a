//! Exit code constants for the kwgit CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid pattern/index/config)
//! - 2: Invariant violation (current or protected branch selected for deletion)
//! - 3: Git operation failure
//! - 4: Branch or ref not found

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid regex, index or configuration.
pub const USER_ERROR: i32 = 1;

/// A deletion selection included the checked-out or a protected branch.
pub const INVARIANT_VIOLATION: i32 = 2;

/// Git operation failure outside of a deletion batch.
pub const GIT_FAILURE: i32 = 3;

/// A base branch or named ref could not be resolved.
pub const NOT_FOUND: i32 = 4;
