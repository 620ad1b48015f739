// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Decomposition of a title into type, scope, subject and breaking marker.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the header line of a conventional title.
    ///
    /// The subject capture keeps everything after the colon, including the
    /// separating space, so patterns see exactly what the author typed.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>\w*)(?:\((?P<scope>[^()]*)\))?(?P<breaking>!)?:(?P<subject>.*)$"
    ).unwrap();
}

/// The components of a pull request title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTitle {
    /// Type (feat, fix, ...), `None` when the title has no header.
    pub r#type: Option<String>,
    /// Raw scope text between the parentheses, possibly comma-separated.
    pub scope: Option<String>,
    /// Everything after the colon, untrimmed.
    pub subject: Option<String>,
    /// Whether the `!` breaking marker is present.
    pub breaking: bool,
}

impl ParsedTitle {
    /// The type as rendered in messages: the literal `null` when absent.
    pub fn type_or_null(&self) -> &str {
        self.r#type.as_deref().unwrap_or("null")
    }
}

/// Parse a title. Never fails; unrecognized input yields empty fields.
pub fn parse_title(title: &str) -> ParsedTitle {
    let header = title.lines().next().unwrap_or("");

    let Some(captures) = HEADER_REGEX.captures(header) else {
        tracing::debug!("Title {:?} has no conventional header", title);
        return ParsedTitle::default();
    };

    let non_empty = |name: &str| {
        captures
            .name(name)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let parsed = ParsedTitle {
        r#type: non_empty("type"),
        scope: non_empty("scope"),
        subject: captures.name("subject").map(|m| m.as_str().to_string()),
        breaking: captures.name("breaking").is_some(),
    };

    tracing::debug!("Parsed title {:?} into {:?}", title, parsed);
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let parsed = parse_title("feat: Add feature");
        assert_eq!(parsed.r#type.as_deref(), Some("feat"));
        assert_eq!(parsed.scope, None);
        assert_eq!(parsed.subject.as_deref(), Some(" Add feature"));
        assert!(!parsed.breaking);
    }

    #[test]
    fn test_parse_without_space() {
        let parsed = parse_title("fix:Fix bug");
        assert_eq!(parsed.r#type.as_deref(), Some("fix"));
        assert_eq!(parsed.subject.as_deref(), Some("Fix bug"));
    }

    #[test]
    fn test_parse_breaking() {
        let parsed = parse_title("feat!: Drop old API");
        assert_eq!(parsed.r#type.as_deref(), Some("feat"));
        assert!(parsed.breaking);
    }

    #[test]
    fn test_parse_scope_and_breaking() {
        let parsed = parse_title("refactor(core)!: Rework internals");
        assert_eq!(parsed.r#type.as_deref(), Some("refactor"));
        assert_eq!(parsed.scope.as_deref(), Some("core"));
        assert!(parsed.breaking);
    }

    #[test]
    fn test_parse_multiple_scopes() {
        let parsed = parse_title("fix(core, e2e): Bar");
        assert_eq!(parsed.scope.as_deref(), Some("core, e2e"));
    }

    #[test]
    fn test_parse_no_colon() {
        let parsed = parse_title("Fix bug");
        assert_eq!(parsed, ParsedTitle::default());
        assert_eq!(parsed.type_or_null(), "null");
    }

    #[test]
    fn test_parse_empty_subject() {
        assert_eq!(parse_title("fix:").subject.as_deref(), Some(""));
        assert_eq!(parse_title("fix: ").subject.as_deref(), Some(" "));
    }

    #[test]
    fn test_parse_empty_type_and_scope() {
        let parsed = parse_title("(): something");
        assert_eq!(parsed.r#type, None);
        assert_eq!(parsed.scope, None);
        assert_eq!(parsed.subject.as_deref(), Some(" something"));
    }

    #[test]
    fn test_parse_uses_first_line_only() {
        let parsed = parse_title("docs: Update readme\n\nLonger description");
        assert_eq!(parsed.subject.as_deref(), Some(" Update readme"));
    }
}
