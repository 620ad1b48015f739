// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::{ConfigError, PrTitleError, Result};
use std::path::{Path, PathBuf};

use super::schema::ValidationOptions;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["prtitle.toml", ".prtitle.toml", ".config/prtitle.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(path) = find_in_dir(&current) {
            return Some(path);
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(path) = find_in_dir(&home) {
            return Some(path);
        }
    }

    // XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("prtitle").join("config.toml");
        if path.exists() {
            return Some(path);
        }
    }

    None
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<ValidationOptions> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(ValidationOptions::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<ValidationOptions> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(PrTitleError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        PrTitleError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<ValidationOptions> {
    toml::from_str(content).map_err(|e| {
        PrTitleError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Merge two sets of options, with every value set in the overlay taking precedence.
pub fn merge_options(base: ValidationOptions, overlay: ValidationOptions) -> ValidationOptions {
    ValidationOptions {
        types: overlay.types.or(base.types),
        scopes: overlay.scopes.or(base.scopes),
        subject_pattern: overlay.subject_pattern.or(base.subject_pattern),
        subject_pattern_error: overlay.subject_pattern_error.or(base.subject_pattern_error),
        action: overlay.action.or(base.action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorAction;

    #[test]
    fn test_parse_minimal_config() {
        let options = parse_config("").unwrap();
        assert_eq!(options, ValidationOptions::default());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
types = ["feat", "fix"]
scopes = ["core", "cli"]
subject_pattern = "^(?![A-Z]).+$"
subject_pattern_error = "The subject \"{subject}\" must start lowercase."
action = "warning"
"#;
        let options = parse_config(toml).unwrap();
        assert_eq!(options.types, Some(vec!["feat".to_string(), "fix".to_string()]));
        assert_eq!(options.scopes, Some(vec!["core".to_string(), "cli".to_string()]));
        assert_eq!(options.subject_pattern.as_deref(), Some("^(?![A-Z]).+$"));
        assert!(options
            .subject_pattern_error
            .as_deref()
            .unwrap()
            .contains("{subject}"));
        assert_eq!(options.action, Some(ErrorAction::Warning));
    }

    #[test]
    fn test_parse_camel_case_aliases() {
        let toml = r#"
subjectPattern = "^[a-z]"
subjectPatternError = "lowercase please"
"#;
        let options = parse_config(toml).unwrap();
        assert_eq!(options.subject_pattern.as_deref(), Some("^[a-z]"));
        assert_eq!(options.subject_pattern_error.as_deref(), Some("lowercase please"));
    }

    #[test]
    fn test_parse_invalid_action() {
        let err = parse_config("action = \"explode\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config_from(Path::new("/nonexistent/prtitle.toml")).unwrap_err();
        assert!(matches!(
            err,
            PrTitleError::Config(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn test_find_config_file_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".prtitle.toml"), "types = [\"feat\"]").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".prtitle.toml"));

        let options = load_config_from(&found).unwrap();
        assert_eq!(options.types, Some(vec!["feat".to_string()]));
    }

    #[test]
    fn test_merge_options() {
        let base = parse_config(
            r#"
types = ["feat"]
scopes = ["core"]
action = "warning"
"#,
        )
        .unwrap();
        let overlay = ValidationOptions::default().with_scopes(["cli"]);
        let merged = merge_options(base, overlay);

        assert_eq!(merged.types, Some(vec!["feat".to_string()]));
        assert_eq!(merged.scopes, Some(vec!["cli".to_string()]));
        assert_eq!(merged.action, Some(ErrorAction::Warning));
    }

    #[test]
    fn test_merge_explicit_default_action_wins() {
        let base = parse_config("action = \"warning\"").unwrap();
        let overlay = ValidationOptions::default().with_action(ErrorAction::Error);
        let merged = merge_options(base, overlay);
        assert_eq!(merged.action, Some(ErrorAction::Error));
    }

    #[test]
    fn test_merge_unset_action_keeps_base() {
        let base = parse_config("action = \"ignore\"").unwrap();
        let merged = merge_options(base, ValidationOptions::default());
        assert_eq!(merged.action, Some(ErrorAction::Ignore));

        let merged = merge_options(ValidationOptions::default(), ValidationOptions::default());
        assert_eq!(merged.action, None);
    }
}
