//! Assembly source layout.
//!
//! This module contains the column-alignment logic organized into submodules:
//! - [`layout`]: Computes column widths across a file and re-emits aligned lines
//! - [`indentation`]: Reports leading whitespace that breaks the indentation style

pub mod indentation;
pub mod layout;

pub use indentation::{check_indentation, IndentIssue, IndentStyle, IndentWarning};
pub use layout::{comment_padding, compute_widths, emit, emit_line, ColumnWidths, LayoutParams};
