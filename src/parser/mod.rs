//! Assembly source line parsing.
//!
//! This module turns raw text lines into classified records:
//! - [`classify`]: Maps one physical line to a [`ClassifiedLine`]
//! - [`keywords`]: The closed set of directive keywords
//!
//! Classification is line-oriented and regex-free. Each line is handled on its
//! own with a fixed precedence of plain string operations, so every input line
//! produces exactly one record and there is no failure state.

pub mod classify;
pub mod keywords;

pub use classify::{classify, ClassifiedLine, LineKind};
pub use keywords::{is_directive_keyword, DIRECTIVE_KEYWORDS};
