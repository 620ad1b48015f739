// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Title validation: parse once, run every rule, collect every error.

use crate::config::ValidationOptions;
use crate::error::ValidationError;
use crate::title::parse_title;

use super::report::ValidationReport;
use super::scope::validate_scope;
use super::subject::validate_subject;
use super::types::validate_type;

/// Validate a pull request title.
///
/// The type, scope and subject rules always all run; the returned list holds
/// one entry per failing rule, in that order. An empty list means the title
/// is valid.
pub fn validate_pr_title(title: &str, options: Option<&ValidationOptions>) -> Vec<ValidationError> {
    let defaults = ValidationOptions::default();
    let options = options.unwrap_or(&defaults);
    let parsed = parse_title(title);

    let checks = [
        validate_type(title, parsed.r#type.as_deref(), options.types.as_deref()),
        validate_scope(title, parsed.scope.as_deref(), options.scopes.as_deref()),
        validate_subject(title, parsed.subject.as_deref(), options),
    ];

    let errors: Vec<ValidationError> = checks.into_iter().filter_map(Result::err).collect();
    tracing::debug!("Title {:?} produced {} error(s)", title, errors.len());
    errors
}

/// Validator bound to one set of options.
#[derive(Debug, Clone, Default)]
pub struct TitleValidator {
    options: ValidationOptions,
}

impl TitleValidator {
    /// Create a new validator with the given options.
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// Validate a title, returning the raw error list.
    pub fn errors(&self, title: &str) -> Vec<ValidationError> {
        validate_pr_title(title, Some(&self.options))
    }

    /// Validate a title into a report.
    pub fn validate(&self, title: &str) -> ValidationReport {
        let mut report = ValidationReport::new(title.to_string());
        report.errors = self.errors(title);
        report
    }
}
