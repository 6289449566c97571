//! Indentation style checks
//!
//! Reports lines whose leading whitespace does not match the expected style.
//! Detection only: the layout engine rewrites all leading whitespace anyway,
//! so nothing here changes output.
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// Tab after zero or more spaces
static MIXED_TABS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ *\t").unwrap());
// One or more leading spaces
static SPACE_INDENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ +").unwrap());

/// Expected indentation character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    #[default]
    Spaces,
    Tabs,
}

impl FromStr for IndentStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spaces" | "space" => Ok(Self::Spaces),
            "tabs" | "tab" => Ok(Self::Tabs),
            other => Err(format!("unknown indent style '{other}' (expected spaces or tabs)")),
        }
    }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces => write!(f, "spaces"),
            Self::Tabs => write!(f, "tabs"),
        }
    }
}

/// What is wrong with a line's indentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentIssue {
    /// A tab appears in the leading whitespace
    MixedTabs,
    /// Line is indented with spaces
    SpaceIndent,
}

/// An indentation problem on one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentWarning {
    /// 1-based line number
    pub line: usize,
    pub issue: IndentIssue,
}

impl fmt::Display for IndentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.issue {
            IndentIssue::MixedTabs => write!(f, "Line {} has mixed spaces and tabs.", self.line),
            IndentIssue::SpaceIndent => write!(f, "Line {} starts with spaces.", self.line),
        }
    }
}

/// Check every line against the expected indentation style
#[must_use]
pub fn check_indentation<S: AsRef<str>>(lines: &[S], style: IndentStyle) -> Vec<IndentWarning> {
    let (pattern, issue) = match style {
        IndentStyle::Spaces => (&*MIXED_TABS_RE, IndentIssue::MixedTabs),
        IndentStyle::Tabs => (&*SPACE_INDENT_RE, IndentIssue::SpaceIndent),
    };

    lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            pattern
                .is_match(line.as_ref())
                .then_some(IndentWarning {
                    line: idx + 1,
                    issue,
                })
        })
        .collect()
}
