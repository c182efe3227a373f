//! Exit code constants for the templator CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, no workspace)
//! - 2: Nothing to do (no templates, missing title)
//! - 3: Cancelled at a prompt
//! - 4: File system failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or no usable workspace.
pub const USER_ERROR: i32 = 1;

/// The command had nothing to work with: no templates or no title.
pub const NOTHING_TO_DO: i32 = 2;

/// The user cancelled a prompt or a pick.
pub const CANCELLED: i32 = 3;

/// Reading or writing a file failed.
pub const IO_FAILURE: i32 = 4;
