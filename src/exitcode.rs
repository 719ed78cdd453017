//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Any validation, configuration or edit failure
pub const FAILURE: i32 = 1;
