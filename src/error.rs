//! Error types and result aliases for asmalign.
//!
//! The formatter core is total and never fails; errors only come from the
//! surrounding I/O and configuration layers:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
