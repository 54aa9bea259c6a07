//! Exit codes for the CLI

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Input rejected before formatting
pub const INPUT_ERROR: i32 = 3;

/// The body did not pass the check
pub const VALIDATION_ERROR: i32 = 5;
