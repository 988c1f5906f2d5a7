//! # gradcheck-cli: Command-Line Front End
//!
//! Provides the `gradcheck` command-line interface over the same engine the
//! HTTP service uses.
//!
//! ## Subcommands
//!
//! - `gradcheck ask`: interactive questionnaire, then the diagnosis.
//! - `gradcheck evaluate [PATH]`: evaluate a JSON fact object from a file
//!   or stdin.
//! - `gradcheck rules`: list the requirement rules.
//! - `gradcheck questions`: print the questionnaire as JSON.
//!
//! ```bash
//! gradcheck ask
//! echo '{"credits_percentage": 100}' | gradcheck evaluate --json
//! ```
//!
//! Exit codes: 0 when every requirement is met, 1 when at least one is
//! not, 2 on operational error (unreadable input, invalid JSON).

pub mod ask;
pub mod catalog;
pub mod evaluate;
pub mod report;

/// Exit code when every requirement is met.
pub const EXIT_PASSED: u8 = 0;
/// Exit code when at least one requirement is unmet.
pub const EXIT_PENDING: u8 = 1;
/// Exit code for operational errors.
pub const EXIT_ERROR: u8 = 2;
