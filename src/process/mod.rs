//! File processing and formatting pipeline.
//!
//! This module runs the whole-file formatting pass and decides where its
//! result goes:
//! - [`pipeline`]: classify, measure and re-emit every line of an input
//! - [`destination`]: stdout or file, with confirmation before overwriting
//!   the input
//!
//! The main entry point is [`format_file`] which processes a buffered reader
//! and writes formatted output to any `Write` implementation.

pub mod destination;
pub mod pipeline;

pub use destination::{resolve_destination, Confirm, Destination, StdinConfirm};
pub use pipeline::{format_file, format_lines, format_source, split_lines, FormatReport};
