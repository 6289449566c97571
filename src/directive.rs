//! Inline directive parsing for `asmalign:` comments
//!
//! Supports in-file configuration overrides via special comments:
//! `; asmalign: --col 48 --gapsize 4`
//!
//! The directive is an ordinary comment as far as the formatter is concerned
//! and is re-emitted like any other comment line.

use regex::Regex;

use crate::config::Config;
use crate::format::IndentStyle;
use crate::process::split_lines;

/// Parsed directive options that can override config
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectiveOverrides {
    pub comment_column: Option<usize>,
    pub gap: Option<usize>,
    pub check_indent: Option<bool>,
    pub indent_style: Option<IndentStyle>,
}

impl DirectiveOverrides {
    /// Check if any overrides are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comment_column.is_none()
            && self.gap.is_none()
            && self.check_indent.is_none()
            && self.indent_style.is_none()
    }

    /// Write the overrides that are set into `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(column) = self.comment_column {
            config.comment_column = column;
        }
        if let Some(gap) = self.gap {
            config.gap = gap;
        }
        if let Some(check) = self.check_indent {
            config.check_indent = check;
        }
        if let Some(style) = self.indent_style {
            config.indent_style = style;
        }
    }
}

/// Pattern matching a directive comment for the given comment marker
fn directive_re(comment_char: &str) -> Option<Regex> {
    Regex::new(&format!(
        r"(?i)^\s*{}\s*asmalign:\s*(.*?)\s*$",
        regex::escape(comment_char)
    ))
    .ok()
}

/// Parse an asmalign directive line and return option overrides
///
/// # Returns
/// * `Some(DirectiveOverrides)` if the line is a directive with at least one known option
/// * `None` otherwise
#[must_use]
pub fn parse_directive(line: &str, comment_char: &str) -> Option<DirectiveOverrides> {
    if comment_char.is_empty() {
        return None;
    }
    let re = directive_re(comment_char)?;
    let caps = re.captures(line)?;
    let args_str = caps.get(1)?.as_str();

    parse_directive_args(args_str)
}

/// Parse directive arguments into overrides
fn parse_directive_args(args_str: &str) -> Option<DirectiveOverrides> {
    let mut overrides = DirectiveOverrides::default();
    let mut tokens = args_str.split_whitespace();

    while let Some(token) = tokens.next() {
        match token {
            "-c" | "--col" => {
                overrides.comment_column = tokens.next().and_then(|v| v.parse().ok());
            }
            "-g" | "--gapsize" => {
                overrides.gap = tokens.next().and_then(|v| v.parse().ok());
            }
            "--check-indent" => {
                overrides.check_indent = Some(true);
            }
            "--no-check-indent" => {
                overrides.check_indent = Some(false);
            }
            "--indent-style" => {
                overrides.indent_style = tokens.next().and_then(|v| v.parse().ok());
            }
            _ => {
                // Unknown option, skip
            }
        }
    }

    if overrides.is_empty() {
        None
    } else {
        Some(overrides)
    }
}

/// Scan input for asmalign directives and return the first found
///
/// Only the first directive is used (subsequent ones are ignored).
pub fn find_directive<R: std::io::BufRead>(
    input: &mut R,
    comment_char: &str,
) -> Option<DirectiveOverrides> {
    if comment_char.is_empty() {
        return None;
    }
    let re = directive_re(comment_char)?;
    let mut buffer = String::new();

    while input.read_line(&mut buffer).ok()? > 0 {
        // Same line boundaries as the formatter
        if let Some(line) = split_lines(&buffer).into_iter().find(|l| re.is_match(l)) {
            return parse_directive(line, comment_char);
        }
        buffer.clear();
    }

    None
}
