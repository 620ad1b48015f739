// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Pull request title parsing.

mod parser;

pub use parser::{parse_title, ParsedTitle};
