// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation report types and rendering.

use crate::cli::args::OutputFormat;
use crate::error::ValidationError;
use console::{style, Style};

/// Format a single validation error for terminal output.
pub fn format_error(error: &ValidationError) -> String {
    let mut lines = error.message.lines();
    let first = lines.next().unwrap_or("");

    let mut output = format!(
        "{} {} {}",
        style("✗").red().bold(),
        Style::new().red().apply_to(error.kind.as_str()),
        first
    );

    for line in lines {
        output.push_str("\n    ");
        output.push_str(line);
    }

    output
}

/// Result of validating one pull request title.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// The title that was validated.
    pub title: String,
    /// Errors, one per failing rule.
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Create a new, empty report.
    pub fn new(title: String) -> Self {
        Self {
            title,
            errors: Vec::new(),
        }
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => println!("{}", self.to_json()),
            _ => println!("{}", self.to_text()),
        }
    }

    /// Render in text format.
    pub fn to_text(&self) -> String {
        let status = if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        let mut output = format!("{} {}", status, style(&self.title).cyan());
        for error in &self.errors {
            output.push_str("\n  ");
            output.push_str(&format_error(error));
        }
        output
    }

    /// Render in JSON format.
    pub fn to_json(&self) -> String {
        let json = serde_json::json!({
            "valid": self.is_valid(),
            "title": self.title,
            "errors": self.errors,
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            "Valid".to_string()
        } else {
            format!("Invalid ({} errors)", self.errors.len())
        }
    }
}
