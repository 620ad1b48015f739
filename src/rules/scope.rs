// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Scope rule: every comma-separated scope must be in the configured list.

use crate::error::{ErrorContext, ErrorKind, ValidationError};
use crate::text::suggest_words;

/// Check the parsed scope against the configured scopes.
///
/// Without a configured list every scope passes, and a title without a
/// scope always passes.
pub fn validate_scope(
    title: &str,
    parsed_scope: Option<&str>,
    scopes: Option<&[String]>,
) -> Result<(), ValidationError> {
    let (Some(scopes), Some(raw)) = (scopes, parsed_scope) else {
        return Ok(());
    };

    let unknown: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|given| !scopes.iter().any(|s| s.as_str() == *given))
        .collect();

    if unknown.is_empty() {
        return Ok(());
    }

    tracing::debug!("Unknown scopes {:?} in title {:?}", unknown, title);

    let message = format!(
        "Unknown {} \"{}\" found in pull request title \"{}\". {}Use one of the available scopes: {}.",
        if unknown.len() > 1 { "scopes" } else { "scope" },
        unknown.join(","),
        title,
        suggest_words(&unknown, Some(scopes)),
        scopes.join(", ")
    );

    Err(
        ValidationError::new(message, ErrorKind::ScopeError).with_context(ErrorContext {
            error_word: Some(raw.to_string()),
            available_words: Some(scopes.to_vec()),
            ..Default::default()
        }),
    )
}
