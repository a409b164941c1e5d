//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain    | Description                              |
//! |---------|-----------|------------------------------------------|
//! | 0       | Universal | Success                                  |
//! | 1       | Universal | General error (unspecified)              |
//! | 2       | Universal | CLI usage error (bad args)               |
//! | 10-19   | solve     | Fetch/solve/deliver pipeline codes       |

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Solve pipeline (10-19)
// =============================================================================

/// Input payload missing token/data/query or carrying wrong JSON types.
/// Nothing is posted to the output endpoint.
pub const EXIT_MALFORMED_INPUT: u8 = 10;

/// A query range violates `0 <= l <= r <= n-1`. The whole batch is
/// aborted; no answers are delivered.
pub const EXIT_RANGE_OUT_OF_BOUNDS: u8 = 11;

/// Network error or non-success status on either the fetch or the
/// delivery call.
pub const EXIT_TRANSPORT: u8 = 12;
