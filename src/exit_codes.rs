//! Exit code constants for the promptgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown field, invalid settings)
//! - 2: Preset lookup found no match
//! - 3: Template rendering failure
//! - 4: Configuration record failed validation
//! - 5: Text-completion service failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown record field, or invalid settings file.
pub const USER_ERROR: i32 = 1;

/// No preset description matched the query.
pub const LOOKUP_MISS: i32 = 2;

/// A custom template could not be rendered.
pub const TEMPLATE_FAILURE: i32 = 3;

/// The configuration record violates a caller-side constraint.
pub const INVALID_RECORD: i32 = 4;

/// The text-completion service rejected or failed the request.
pub const SERVICE_FAILURE: i32 = 5;
