// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the validation options that can be loaded from prtitle.toml or
//! passed on the command line, and the default type vocabulary.

use serde::{Deserialize, Serialize};

/// Options controlling how a pull request title is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Allowed types. Absent or empty means the default vocabulary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,

    /// Allowed scopes. Absent means any scope (or none) is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Regular expression the whole subject has to match.
    #[serde(alias = "subjectPattern", skip_serializing_if = "Option::is_none")]
    pub subject_pattern: Option<String>,

    /// Message template used instead of the default subject pattern message.
    #[serde(alias = "subjectPatternError", skip_serializing_if = "Option::is_none")]
    pub subject_pattern_error: Option<String>,

    /// What the command line tool does with an invalid title.
    /// Absent means [`ErrorAction::Error`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ErrorAction>,
}

impl ValidationOptions {
    /// Load options from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load options from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Set the allowed types.
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Set the allowed scopes.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Set the subject pattern.
    pub fn with_subject_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.subject_pattern = Some(pattern.into());
        self
    }

    /// Set the subject pattern error template.
    pub fn with_subject_pattern_error(mut self, template: impl Into<String>) -> Self {
        self.subject_pattern_error = Some(template.into());
        self
    }

    /// Set the error action.
    pub fn with_action(mut self, action: ErrorAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// How an invalid title is handled by the command line tool.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ErrorAction {
    /// Report the errors and fail.
    #[default]
    Error,
    /// Report the errors but succeed.
    Warning,
    /// Do not report anything.
    Ignore,
}

/// The default type vocabulary, from the Conventional Commits type registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
}

impl DefaultType {
    /// Get the string representation of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DefaultType::Feat => "feat",
            DefaultType::Fix => "fix",
            DefaultType::Docs => "docs",
            DefaultType::Style => "style",
            DefaultType::Refactor => "refactor",
            DefaultType::Perf => "perf",
            DefaultType::Test => "test",
            DefaultType::Build => "build",
            DefaultType::Ci => "ci",
            DefaultType::Chore => "chore",
            DefaultType::Revert => "revert",
        }
    }

    /// Get a description of the type.
    pub fn description(&self) -> &'static str {
        match self {
            DefaultType::Feat => "A new feature",
            DefaultType::Fix => "A bug fix",
            DefaultType::Docs => "Documentation only changes",
            DefaultType::Style => {
                "Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)"
            }
            DefaultType::Refactor => "A code change that neither fixes a bug nor adds a feature",
            DefaultType::Perf => "A code change that improves performance",
            DefaultType::Test => "Adding missing tests or correcting existing tests",
            DefaultType::Build => {
                "Changes that affect the build system or external dependencies (example scopes: gulp, broccoli, npm)"
            }
            DefaultType::Ci => {
                "Changes to our CI configuration files and scripts (example scopes: Travis, Circle, BrowserStack, SauceLabs)"
            }
            DefaultType::Chore => "Other changes that don't modify src or test files",
            DefaultType::Revert => "Reverts a previous commit",
        }
    }

    /// Get all default types, in registry order.
    pub fn all() -> &'static [DefaultType] {
        &[
            DefaultType::Feat,
            DefaultType::Fix,
            DefaultType::Docs,
            DefaultType::Style,
            DefaultType::Refactor,
            DefaultType::Perf,
            DefaultType::Test,
            DefaultType::Build,
            DefaultType::Ci,
            DefaultType::Chore,
            DefaultType::Revert,
        ]
    }

    /// Get the names of all default types.
    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(DefaultType::as_str).collect()
    }
}
