//! Column layout for classified lines
//!
//! Layout is two-phase. [`compute_widths`] reduces the whole file to the
//! widest label, mnemonic and operand fields, then [`emit`] re-renders each
//! record against those widths:
//!
//! ```text
//! <label>:<pad to indent><mnemonic><pad to width><gap><operands><pad>; comment
//! ```
//!
//! `indent = label width + gap + 1`, the `+ 1` being the colon. Label-less code
//! lines are indented by the same amount so every mnemonic starts in one column.
//! All widths count characters, not bytes.

use crate::parser::{ClassifiedLine, LineKind};

/// Maximum field lengths across a file (0 when a field never appears)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub label: usize,
    pub mnemonic: usize,
    pub operands: usize,
}

impl ColumnWidths {
    /// Left margin of every code line for the given column gap
    #[must_use]
    pub fn indent_width(&self, gap: usize) -> usize {
        self.label + gap + 1
    }
}

/// Rendering parameters for [`emit`]
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams<'a> {
    /// Comment marker written before comment text
    pub comment_char: &'a str,
    /// Target column for trailing comments
    pub comment_column: usize,
    /// Spaces between columns
    pub gap: usize,
}

/// Compute column widths over all records
#[must_use]
pub fn compute_widths(records: &[ClassifiedLine]) -> ColumnWidths {
    records
        .iter()
        .fold(ColumnWidths::default(), |widths, record| ColumnWidths {
            label: widths.label.max(char_len(record.label())),
            mnemonic: widths.mnemonic.max(char_len(record.mnemonic())),
            operands: widths.operands.max(char_len(record.operands())),
        })
}

/// Render every record as an output line
#[must_use]
pub fn emit(
    records: &[ClassifiedLine],
    widths: ColumnWidths,
    params: &LayoutParams<'_>,
) -> Vec<String> {
    records
        .iter()
        .map(|record| emit_line(record, widths, params))
        .collect()
}

/// Render a single record
#[must_use]
pub fn emit_line(
    record: &ClassifiedLine,
    widths: ColumnWidths,
    params: &LayoutParams<'_>,
) -> String {
    let mut line = match record.kind {
        LineKind::Blank => return String::new(),
        LineKind::Comment => {
            return format!(
                "{} {}",
                params.comment_char,
                record.comment().unwrap_or_default()
            );
        }
        LineKind::Label => format!("{}:", record.label().unwrap_or_default()),
        LineKind::Keyword | LineKind::Instruction => render_code(record, widths, params),
    };

    if let Some(comment) = record.comment() {
        append_comment(&mut line, comment, params);
    }

    line
}

/// Render the label, mnemonic and operand columns of a code line
fn render_code(
    record: &ClassifiedLine,
    widths: ColumnWidths,
    params: &LayoutParams<'_>,
) -> String {
    let indent = widths.indent_width(params.gap);
    let mut line = String::with_capacity(indent + widths.mnemonic + params.gap + widths.operands);

    match record.label() {
        Some(label) => {
            let head = format!("{label}:");
            line.push_str(&format!("{head:<indent$}"));
        }
        None => push_spaces(&mut line, indent),
    }

    let mnemonic = record.mnemonic().unwrap_or_default();
    line.push_str(&format!("{mnemonic:<width$}", width = widths.mnemonic));

    if let Some(operands) = record.operands() {
        push_spaces(&mut line, params.gap);
        line.push_str(operands);
    }

    line
}

/// Append a trailing comment after `|len - column| + 1` spaces
///
/// Lines shorter than the column are padded up to it. Lines already past it
/// still get `len - column + 1` spaces, so the comment moves further right.
fn append_comment(line: &mut String, comment: &str, params: &LayoutParams<'_>) {
    let padding = comment_padding(line.chars().count(), params.comment_column);
    push_spaces(line, padding);
    line.push_str(params.comment_char);
    line.push(' ');
    line.push_str(comment);
}

/// Spaces placed between code and a trailing comment
#[must_use]
pub fn comment_padding(line_len: usize, comment_column: usize) -> usize {
    line_len.abs_diff(comment_column) + 1
}

fn push_spaces(line: &mut String, count: usize) {
    line.extend(std::iter::repeat(' ').take(count));
}

fn char_len(field: Option<&str>) -> usize {
    field.map_or(0, |text| text.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::classify;

    const PARAMS: LayoutParams<'static> = LayoutParams {
        comment_char: ";",
        comment_column: 40,
        gap: 2,
    };

    fn records(lines: &[&str]) -> Vec<ClassifiedLine> {
        lines.iter().map(|line| classify(line, ";")).collect()
    }

    #[test]
    fn test_widths_empty() {
        assert_eq!(compute_widths(&[]), ColumnWidths::default());
    }

    #[test]
    fn test_widths_take_maximum() {
        let recs = records(&[
            "start: mov eax, 1",
            "section .data",
            "longer_label:",
            "; comment is ignored for widths",
            "ret",
        ]);
        let widths = compute_widths(&recs);
        assert_eq!(widths.label, "longer_label".len());
        assert_eq!(widths.mnemonic, "section".len());
        assert_eq!(widths.operands, "eax, 1".len());
    }

    #[test]
    fn test_widths_count_characters() {
        let recs = records(&["étiquette: mov eax, 1"]);
        assert_eq!(compute_widths(&recs).label, 9);
    }

    #[test]
    fn test_indent_width() {
        let widths = ColumnWidths {
            label: 4,
            mnemonic: 3,
            operands: 6,
        };
        assert_eq!(widths.indent_width(2), 7);
        assert_eq!(ColumnWidths::default().indent_width(0), 1);
    }

    #[test]
    fn test_blank_and_comment_lines() {
        let recs = records(&["   ", "  ;   just a comment"]);
        let widths = compute_widths(&recs);
        let out = emit(&recs, widths, &PARAMS);
        assert_eq!(out, vec!["".to_string(), "; just a comment".to_string()]);
    }

    #[test]
    fn test_label_line_is_not_padded() {
        let recs = records(&["very_long_label: nop", "x:"]);
        let widths = compute_widths(&recs);
        assert_eq!(emit_line(&recs[1], widths, &PARAMS), "x:");
    }

    #[test]
    fn test_label_instruction_with_comment() {
        let recs = records(&["loop: add eax, 1 ; increment"]);
        let widths = compute_widths(&recs);
        let line = emit_line(&recs[0], widths, &PARAMS);

        // indent = 4 + 2 + 1 = 7
        let code = "loop:  add  eax, 1";
        assert!(line.starts_with(code));
        assert_eq!(line.len(), 40 + 1 + "; increment".len());
        assert_eq!(
            line,
            format!("{code}{}; increment", " ".repeat(40 - code.len() + 1))
        );
    }

    #[test]
    fn test_keyword_uses_indent() {
        let recs = records(&["start: nop", "section .text"]);
        let widths = compute_widths(&recs);
        // indent = 5 + 2 + 1 = 8, mnemonic width = 7
        assert_eq!(emit_line(&recs[0], widths, &PARAMS), "start:  nop    ");
        assert_eq!(emit_line(&recs[1], widths, &PARAMS), "        section  .text");
    }

    #[test]
    fn test_mnemonic_padded_even_without_operands() {
        let recs = records(&["syscall", "ret"]);
        let widths = compute_widths(&recs);
        assert_eq!(emit_line(&recs[1], widths, &PARAMS), "   ret    ");
    }

    #[test]
    fn test_operands_kept_verbatim() {
        let recs = records(&["mov  eax,    [ebx+ 4]"]);
        let widths = compute_widths(&recs);
        assert_eq!(
            emit_line(&recs[0], widths, &PARAMS),
            "   mov  eax,    [ebx+ 4]"
        );
    }

    #[test]
    fn test_label_with_trailing_comment() {
        let recs = records(&["done: ; finished"]);
        let widths = compute_widths(&recs);
        let line = emit_line(&recs[0], widths, &PARAMS);
        // "done:" is 5 chars, so 36 spaces follow
        assert_eq!(line, format!("done:{}; finished", " ".repeat(36)));
    }

    #[test]
    fn test_comment_padding_formula() {
        assert_eq!(comment_padding(20, 40), 21);
        assert_eq!(comment_padding(40, 40), 1);
        assert_eq!(comment_padding(50, 40), 11);
        assert_eq!(comment_padding(0, 0), 1);
    }

    #[test]
    fn test_long_line_pushes_comment_right() {
        let operands = "a".repeat(50 - 3 - 3 - 2);
        let source = format!("mov {operands} ; c");
        let recs = records(&[source.as_str()]);
        let widths = compute_widths(&recs);
        let line = emit_line(&recs[0], widths, &PARAMS);

        let code_len = 3 + 3 + 2 + operands.len();
        assert_eq!(code_len, 50);
        assert_eq!(&line[code_len..], format!("{}; c", " ".repeat(11)));
    }

    #[test]
    fn test_single_space_gap() {
        let params = LayoutParams {
            gap: 1,
            ..PARAMS
        };
        let recs = records(&["lbl: mov eax, 1", "inc eax"]);
        let widths = compute_widths(&recs);
        assert_eq!(emit_line(&recs[0], widths, &params), "lbl: mov eax, 1");
        assert_eq!(emit_line(&recs[1], widths, &params), "     inc eax");
    }

    #[test]
    fn test_custom_comment_char() {
        let params = LayoutParams {
            comment_char: "#",
            comment_column: 10,
            gap: 1,
        };
        let recs: Vec<ClassifiedLine> = ["#top", "li a0, 1 # one"]
            .iter()
            .map(|line| classify(line, "#"))
            .collect();
        let widths = compute_widths(&recs);
        assert_eq!(emit_line(&recs[0], widths, &params), "# top");
        // indent 2, "li" then " a0, 1" -> 10 chars -> 1 space
        assert_eq!(emit_line(&recs[1], widths, &params), "  li a0, 1 # one");
    }

    #[test]
    fn test_emit_preserves_line_count() {
        let recs = records(&["", "; c", "a:", "nop", "", "section .bss"]);
        let widths = compute_widths(&recs);
        assert_eq!(emit(&recs, widths, &PARAMS).len(), recs.len());
    }
}
