// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! prtitle - Pull request title validator
//!
//! Checks that a pull request title follows the Conventional Commits header
//! format `type(scope)!: subject` and reports every problem it finds.
//!
//! # Features
//!
//! - **Type rule**: configurable type list, Conventional Commits defaults
//! - **Scope rule**: optional scope allow-list, multiple comma-separated scopes
//! - **Subject rule**: required subject, optional full-match pattern with a
//!   custom error template
//! - **Suggestions**: "Did you mean" hints for near-miss types and scopes
//!
//! # Example
//!
//! ```
//! use prtitle::config::ValidationOptions;
//! use prtitle::rules::validate_pr_title;
//!
//! assert!(validate_pr_title("feat: Add feature", None).is_empty());
//!
//! let options = ValidationOptions::default().with_types(["fix"]);
//! let errors = validate_pr_title("fox: foobar", Some(&options));
//! assert!(errors[0].message.contains("Did you mean \"fix\"?"));
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod rules;
pub mod text;
pub mod title;

// Re-exports for convenience
pub use config::ValidationOptions;
pub use error::{ErrorKind, PrTitleError, Result, ValidationError};
pub use rules::validate_pr_title;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of prtitle.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
