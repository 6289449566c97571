//! Line classifier
//!
//! Rules are applied in this order:
//! 1. Blank: nothing but whitespace
//! 2. Comment: the trimmed line starts with the comment marker
//! 3. Trailing comment: split at the FIRST comment marker
//! 4. Label: the code part contains a colon (split at the first one)
//! 5. Keyword or instruction: first token of the code part
//!
//! The classifier is not quote-aware. A comment marker inside a string literal
//! (`db "a;b"`) starts a comment, and a comment marker before a colon cuts the
//! code before label detection runs.

use super::keywords::is_directive_keyword;

/// Structural role of a source line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineKind {
    #[default]
    Blank,
    Comment,
    Label,
    Keyword,
    Instruction,
}

/// One classified source line
///
/// Optional fields are `None` when absent. `operands` and `comment` are never
/// `Some("")`; `label` may be empty for a bare `:`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    pub label: Option<String>,
    pub mnemonic: Option<String>,
    pub operands: Option<String>,
    pub comment: Option<String>,
}

impl ClassifiedLine {
    /// Label text, if any
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Lower-cased mnemonic, if any
    #[must_use]
    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_deref()
    }

    /// Operand text, if any
    #[must_use]
    pub fn operands(&self) -> Option<&str> {
        self.operands.as_deref()
    }

    /// Comment text without the marker, if any
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// Classify one raw source line
///
/// `comment_char` is the comment marker and may be longer than one character.
/// An empty marker disables comment detection entirely.
#[must_use]
pub fn classify(raw_line: &str, comment_char: &str) -> ClassifiedLine {
    let line = raw_line.strip_suffix('\n').unwrap_or(raw_line).trim();

    if line.is_empty() {
        return ClassifiedLine::default();
    }

    let has_marker = !comment_char.is_empty();

    if has_marker {
        if line.starts_with(comment_char) {
            // Banner markers (`;;;`) collapse to a single one
            let text = line.trim_start_matches(comment_char);
            return ClassifiedLine {
                kind: LineKind::Comment,
                comment: Some(text.trim().to_string()),
                ..Default::default()
            };
        }
    }

    let (code, comment) = if has_marker {
        line.split_once(comment_char).unwrap_or((line, ""))
    } else {
        (line, "")
    };
    let code = code.trim();
    let comment = non_empty(comment.trim());

    if let Some((label_part, after_label)) = code.split_once(':') {
        let label = Some(label_part.trim().to_string());
        let after_label = after_label.trim();

        if after_label.is_empty() {
            return ClassifiedLine {
                kind: LineKind::Label,
                label,
                comment,
                ..Default::default()
            };
        }

        let (mnemonic, operands) = split_first_word(after_label);
        return ClassifiedLine {
            kind: LineKind::Instruction,
            label,
            mnemonic: Some(mnemonic.to_lowercase()),
            operands: non_empty(operands),
            comment,
        };
    }

    if code.is_empty() {
        return ClassifiedLine {
            comment,
            ..Default::default()
        };
    }

    let (first, rest) = split_first_word(code);
    let mnemonic = first.to_lowercase();
    let kind = if is_directive_keyword(&mnemonic) {
        LineKind::Keyword
    } else {
        LineKind::Instruction
    };

    ClassifiedLine {
        kind,
        label: None,
        mnemonic: Some(mnemonic),
        operands: non_empty(rest),
        comment,
    }
}

/// Split trimmed text at its first run of whitespace
///
/// The remainder keeps its internal whitespace untouched.
fn split_first_word(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], text[idx..].trim_start()),
        None => (text, ""),
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
