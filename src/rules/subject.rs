// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Subject rule: the subject must be present and, when a pattern is
//! configured, matched by it in full.

use std::collections::HashMap;

use fancy_regex::Regex;

use crate::config::ValidationOptions;
use crate::error::{ErrorContext, ErrorKind, ValidationError};
use crate::text::format_message;

/// Check the parsed subject.
pub fn validate_subject(
    title: &str,
    parsed_subject: Option<&str>,
    options: &ValidationOptions,
) -> Result<(), ValidationError> {
    let subject = match parsed_subject {
        Some(subject) if !subject.trim().is_empty() => subject,
        _ => {
            return Err(ValidationError::new(
                format!("No subject found in pull request title \"{}\".", title),
                ErrorKind::SubjectNotFoundError,
            ))
        }
    };

    let Some(pattern) = options.subject_pattern.as_deref().filter(|p| !p.is_empty()) else {
        return Ok(());
    };

    let regex = match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(e) => {
            tracing::warn!("Subject pattern {:?} does not compile: {}", pattern, e);
            return Err(ValidationError::new(
                format!(
                    "The configured subject pattern \"{}\" is not a valid regular expression: {}",
                    pattern, e
                ),
                ErrorKind::SubjectError,
            )
            .with_context(pattern_context(subject, pattern)));
        }
    };

    check_pattern(title, subject, &regex, options.subject_pattern_error.as_deref())
}

fn pattern_context(subject: &str, pattern: &str) -> ErrorContext {
    ErrorContext {
        subject: Some(subject.to_string()),
        subject_pattern: Some(pattern.to_string()),
        ..Default::default()
    }
}

/// Require the leftmost match of `regex` in `subject` to cover the whole subject.
fn check_pattern(
    title: &str,
    subject: &str,
    regex: &Regex,
    template: Option<&str>,
) -> Result<(), ValidationError> {
    let pattern = regex.as_str();
    let context = pattern_context(subject, pattern);

    let default_message = match regex.find(subject) {
        Ok(Some(m)) if m.as_str().len() == subject.len() => return Ok(()),
        Ok(Some(_)) => format!(
            "The subject \"{}\" found in pull request title \"{}\" isn't an exact match for the configured pattern \"{}\". Please provide a subject that matches the whole pattern exactly.",
            subject, title, pattern
        ),
        Ok(None) => format!(
            "The subject \"{}\" found in pull request title \"{}\" doesn't match the configured pattern \"{}\".",
            subject, title, pattern
        ),
        Err(e) => {
            tracing::warn!("Subject pattern {:?} failed on {:?}: {}", pattern, subject, e);
            return Err(ValidationError::new(
                format!(
                    "The configured subject pattern \"{}\" could not be evaluated against the subject \"{}\": {}",
                    pattern, subject, e
                ),
                ErrorKind::SubjectError,
            )
            .with_context(context));
        }
    };

    tracing::debug!("Subject {:?} rejected by pattern {:?}", subject, pattern);

    let message = match template {
        Some(template) if !template.is_empty() => {
            let variables = HashMap::from([
                ("subject", subject.to_string()),
                ("subjectPattern", pattern.to_string()),
                ("title", title.to_string()),
            ]);
            format_message(template, &variables)
        }
        _ => default_message,
    };

    Err(ValidationError::new(message, ErrorKind::SubjectError).with_context(context))
}
