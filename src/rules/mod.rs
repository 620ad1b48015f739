// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule module for pull request title validation.
//!
//! Each rule inspects one field of the parsed title and returns either `Ok`
//! or a [`ValidationError`](crate::error::ValidationError). The engine runs
//! all of them and collects the failures.

mod engine;
mod report;
mod scope;
mod subject;
mod types;

pub use engine::{validate_pr_title, TitleValidator};
pub use report::{format_error, ValidationReport};
pub use scope::validate_scope;
pub use subject::validate_subject;
pub use types::validate_type;
