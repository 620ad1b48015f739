// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! `{name}` placeholder interpolation for user-supplied message templates.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{(\w+)\}").unwrap();
}

/// Replace every `{name}` in `template` with `variables[name]`.
///
/// Unknown placeholders are left as they are and substituted values are
/// never interpolated again.
pub fn format_message(template: &str, variables: &HashMap<&str, String>) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
