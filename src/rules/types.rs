// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Type rule: the parsed type must be in the effective type vocabulary.

use crate::config::DefaultType;
use crate::error::{ErrorContext, ErrorKind, ValidationError};
use crate::text::suggest_word;

/// Check the parsed type against the configured types, or the defaults.
pub fn validate_type(
    title: &str,
    parsed_type: Option<&str>,
    types: Option<&[String]>,
) -> Result<(), ValidationError> {
    let configured = types.filter(|t| !t.is_empty());
    let available: Vec<&str> = match configured {
        Some(types) => types.iter().map(String::as_str).collect(),
        None => DefaultType::names(),
    };

    if let Some(parsed) = parsed_type {
        if available.contains(&parsed) {
            return Ok(());
        }
    }

    let word = parsed_type.unwrap_or("null");
    tracing::debug!("Unknown type {:?} in title {:?}", word, title);

    let message = format!(
        "Unknown release type \"{}\" found in pull request title \"{}\". {}\n\n{}",
        word,
        title,
        suggest_word(word, types),
        available_types_block(configured)
    );

    Err(
        ValidationError::new(message, ErrorKind::TypeError).with_context(ErrorContext {
            error_word: parsed_type.map(str::to_string),
            available_words: types.map(<[String]>::to_vec),
            ..Default::default()
        }),
    )
}

/// Render the `Available types:` listing.
///
/// Descriptions are only known for the default vocabulary.
fn available_types_block(configured: Option<&[String]>) -> String {
    let bullets: Vec<String> = match configured {
        Some(types) => types.iter().map(|t| format!(" - {}", t)).collect(),
        None => DefaultType::all()
            .iter()
            .map(|t| format!(" - {}: {}", t.as_str(), t.description()))
            .collect(),
    };

    format!("Available types:\n{}", bullets.join("\n"))
}
