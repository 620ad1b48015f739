// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# prtitle configuration
#
# Every key is optional. Remove a key to fall back to its default.

# Allowed types. When omitted (or empty) the Conventional Commits defaults
# are used: feat, fix, docs, style, refactor, perf, test, build, ci, chore, revert.
types = ["feat", "fix", "docs", "refactor", "test", "chore"]

# Allowed scopes. When omitted, any scope (and no scope) is accepted.
# A title without a scope always passes this check.
scopes = ["core", "cli", "config", "docs"]

# Regular expression the whole subject must match. The subject includes the
# space after the colon. This one rejects subjects starting with an uppercase letter.
subject_pattern = '^(?!\s?[A-Z]).+$'

# Message used when the subject does not match. Available placeholders:
# {subject}, {title}, {subjectPattern}
subject_pattern_error = 'The subject "{subject}" found in the pull request title "{title}" cannot start with an uppercase character.'

# What to do with an invalid title: "error", "warning" or "ignore".
action = "error"
"#
}
