// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Text helpers used to build validation messages.

mod suggest;
mod template;

pub use suggest::{best_match, suggest_word, suggest_words, SIMILARITY_THRESHOLD};
pub use template::format_message;
