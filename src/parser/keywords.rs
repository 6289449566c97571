//! Assembler directive keywords
//!
//! A closed set of non-instruction commands. A line whose first token (after
//! lower-casing) is in this set is classified as a keyword rather than an
//! instruction. Data-definition pseudo-ops (`db`, `dd`, `resb`, ...) are not
//! in the set and are laid out like instructions.

/// Directive keywords, lower-case
pub const DIRECTIVE_KEYWORDS: &[&str] = &[
    "equ", "%assign", "%define", "section", "bits", "org", "global", "extern",
];

/// Check if an already lower-cased token is a directive keyword
#[must_use]
pub fn is_directive_keyword(token: &str) -> bool {
    DIRECTIVE_KEYWORDS.contains(&token)
}
