//! Process exit codes.

pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, or an engine failure.
pub const ERROR: i32 = 2;

/// Input closed before the session could start.
pub const INTERRUPTED: i32 = 130;
