//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args, clap default) |
//! | 3-9     | convert          | Conversion-specific codes                |
//!
//! With `--strict`, truncated input (4) takes precedence over problem rows
//! (3): a structurally damaged input makes the row counters themselves
//! suspect.

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
// Convert (3-9)
// =============================================================================

/// Problem rows found (logins missing required fields) and `--strict` set.
pub const EXIT_CONVERT_PROBLEMS: u8 = 3;

/// Input ended inside an unterminated multi-line record and `--strict` set.
pub const EXIT_CONVERT_TRUNCATED: u8 = 4;

/// Input is empty or has no header line.
pub const EXIT_CONVERT_EMPTY: u8 = 5;

/// Profile file failed to parse or validate.
pub const EXIT_CONVERT_BAD_PROFILE: u8 = 6;

/// File read/write failure.
pub const EXIT_IO: u8 = 7;
