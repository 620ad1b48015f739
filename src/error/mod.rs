// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for prtitle.
//!
//! Two families live here. [`ValidationError`] is a plain value produced by
//! the title validators and handed back to the caller as data. [`PrTitleError`]
//! covers everything that can make the tool itself fail (configuration, I/O,
//! an invalid title when the configured action says to fail).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for prtitle operations.
#[derive(Error, Debug)]
pub enum PrTitleError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // The title failed validation and the configured action is `error`
    #[error("Invalid pull request title: {count} issue(s) found")]
    InvalidTitle { count: usize },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Which rule a [`ValidationError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The parsed type is not in the effective type vocabulary.
    TypeError,
    /// One or more scopes are not in the configured scope list.
    ScopeError,
    /// The subject is missing or blank.
    SubjectNotFoundError,
    /// The subject does not satisfy the configured pattern.
    SubjectError,
}

impl ErrorKind {
    /// Get the wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::TypeError => "TYPE_ERROR",
            ErrorKind::ScopeError => "SCOPE_ERROR",
            ErrorKind::SubjectNotFoundError => "SUBJECT_NOT_FOUND_ERROR",
            ErrorKind::SubjectError => "SUBJECT_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured details attached to a [`ValidationError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorContext {
    /// The offending word (type or raw scope segment).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_word: Option<String>,

    /// The configured vocabulary the word was checked against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_words: Option<Vec<String>>,

    /// The subject that failed the pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// The configured subject pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_pattern: Option<String>,
}

/// A single problem found in a pull request title.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// Rendered, human-readable message.
    pub message: String,
    /// Rule that produced the error.
    pub kind: ErrorKind,
    /// Structured details for programmatic consumers.
    pub context: ErrorContext,
}

impl ValidationError {
    /// Create a new validation error with an empty context.
    pub fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
            context: ErrorContext::default(),
        }
    }

    /// Attach structured context.
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = context;
        self
    }
}

/// Result type alias for prtitle operations.
pub type Result<T> = std::result::Result<T, PrTitleError>;
