//! Output destination and the overwrite policy
//!
//! Writing the result back onto its own input needs a yes from the user. The
//! answer comes from a [`Confirm`] implementation so the policy can run without
//! a terminal.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::Result;

/// Source of yes/no answers
pub trait Confirm {
    /// Ask `prompt` and return whether the answer was yes
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Asks on stderr and reads one line from stdin
///
/// An empty answer counts as yes. End of input counts as no.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{prompt}")?;
        stderr.flush()?;

        let mut answer = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut answer)
            .context("failed to read confirmation from stdin")?;
        if read == 0 {
            return Ok(false);
        }
        Ok(is_affirmative(&answer))
    }
}

/// `y`, `Y` or an empty answer
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "")
}

/// Where the formatted text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// No output path given
    Stdout,
    /// Write to this file
    File(PathBuf),
    /// Overwrite of the input was declined; show the result instead
    Skipped,
}

/// Prompt shown before overwriting `path`
#[must_use]
pub fn overwrite_prompt(path: &Path) -> String {
    format!("Do you want to overwrite: {}? [Y/n] ", path.display())
}

/// Decide the destination, asking before overwriting the input
pub fn resolve_destination<C: Confirm + ?Sized>(
    input: &Path,
    output: Option<&Path>,
    confirm: &mut C,
) -> Result<Destination> {
    let Some(output) = output else {
        return Ok(Destination::Stdout);
    };

    if is_same_file(input, output) && !confirm.confirm(&overwrite_prompt(output))? {
        return Ok(Destination::Skipped);
    }

    Ok(Destination::File(output.to_path_buf()))
}

/// Same path, or two paths naming the same existing file
fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
