//! Formatting pipeline
//!
//! Implements the whole-file pass:
//! - Classify every line independently
//! - Reduce the records to column widths (needs the complete file)
//! - Re-emit every record against those widths
//! - Join with `\n`, ending in exactly one newline

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::config::Config;
use crate::format::{check_indentation, compute_widths, emit, ColumnWidths, IndentWarning};
use crate::parser::{classify, ClassifiedLine};
use crate::Result;

/// What a formatting run measured, for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatReport {
    /// Column widths computed over the whole input
    pub widths: ColumnWidths,
    /// Left margin applied to code lines
    pub indent_width: usize,
    /// Number of input lines (equals number of output lines)
    pub line_count: usize,
    /// Indentation problems, empty unless `check_indent` is set
    pub indent_warnings: Vec<IndentWarning>,
}

/// Classify every line with the configured comment marker
#[must_use]
pub fn classify_lines<S: AsRef<str>>(lines: &[S], config: &Config) -> Vec<ClassifiedLine> {
    lines
        .iter()
        .map(|line| classify(line.as_ref(), &config.comment_char))
        .collect()
}

/// Format a sequence of lines, one output line per input line
#[must_use]
pub fn format_lines<S: AsRef<str>>(lines: &[S], config: &Config) -> (Vec<String>, ColumnWidths) {
    let records = classify_lines(lines, config);
    let widths = compute_widths(&records);
    let formatted = emit(&records, widths, &config.layout_params());
    (formatted, widths)
}

/// Split text into lines without their terminators
///
/// Besides `\n` and `\r\n`, a lone `\r`, vertical tab, form feed, the
/// information separators `\x1c`..`\x1e`, NEL and the Unicode line and
/// paragraph separators end a line. A final terminator does not start an
/// extra empty line.
#[must_use]
pub fn split_lines(source: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = source;
    while let Some(end) = rest.find(is_line_break) {
        lines.push(&rest[..end]);
        let terminator = if rest[end..].starts_with("\r\n") {
            2
        } else {
            rest[end..].chars().next().map_or(1, char::len_utf8)
        };
        rest = &rest[end + terminator..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Format a whole source buffer
#[must_use]
pub fn format_source(source: &str, config: &Config) -> String {
    let lines = split_lines(source);
    let (formatted, _) = format_lines(&lines, config);
    join_lines(&formatted)
}

/// Format everything readable from `input` and write it to `output`
///
/// The input must be UTF-8 text. Nothing is written if reading fails.
pub fn format_file<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    config: &Config,
) -> Result<FormatReport> {
    let mut source = String::new();
    input
        .read_to_string(&mut source)
        .context("failed to read input as UTF-8 text")?;

    let lines = split_lines(&source);
    let (formatted, widths) = format_lines(&lines, config);

    let indent_warnings = if config.check_indent {
        check_indentation(&lines, config.indent_style)
    } else {
        Vec::new()
    };

    output
        .write_all(join_lines(&formatted).as_bytes())
        .context("failed to write formatted output")?;

    Ok(FormatReport {
        widths,
        indent_width: widths.indent_width(config.gap),
        line_count: lines.len(),
        indent_warnings,
    })
}

/// Join lines with `\n` and terminate with exactly one newline
fn join_lines(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
