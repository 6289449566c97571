//! asmalign - Column-aligning formatter for assembly source
//!
//! Classifies every line of an assembly file (blank, comment, label, keyword,
//! instruction) and re-emits it with labels, mnemonics, operands and trailing
//! comments aligned in columns. Only whitespace changes.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod directive;
pub mod error;
pub mod format;
pub mod parser;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use directive::{find_directive, parse_directive, DirectiveOverrides};
pub use error::Result;
pub use format::{ColumnWidths, IndentStyle, LayoutParams};
pub use parser::{classify, ClassifiedLine, LineKind};
pub use process::{format_file, format_source, FormatReport};
