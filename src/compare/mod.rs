//! Token-level side-by-side comparison.
//!
//! Both inputs go through the same stages: escape, tokenize, highlight the
//! hunks found by [`diff`], then split into well-formed display lines. The
//! two line lists are finally zipped into [`Line`] rows.

mod assemble;
mod diff;
mod escape;
mod highlight;
mod normalize;
mod stats;
mod token;
mod types;

use crate::config::Settings;
use crate::constant::{DIFF_TIMEOUT_MS, MAX_INPUT_CHARS};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

pub use assemble::assemble;
pub use diff::{Hunk, Side, diff, diff_until};
pub use escape::escape;
pub use highlight::{MarkedStream, MarkedToken, highlight};
pub use normalize::normalize;
pub use stats::count;
pub use token::{Token, render, tokenize};
pub use types::{Comparison, Line, Stats};

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Input {side:?} is {len} characters, limit is {limit} characters")]
    InputTooLarge { side: Side, len: usize, limit: usize },

    #[error("Unbalanced highlight markers on line {line}")]
    MalformedMarkers { line: usize },
}

/// Runs comparisons with a fixed input ceiling and diff time budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparer {
    max_input_chars: usize,
    timeout: Option<Duration>,
}

impl Default for Comparer {
    fn default() -> Self {
        Self::new(MAX_INPUT_CHARS, Some(Duration::from_millis(DIFF_TIMEOUT_MS)))
    }
}

impl Comparer {
    pub fn new(max_input_chars: usize, timeout: Option<Duration>) -> Self {
        Self {
            max_input_chars,
            timeout,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let timeout =
            (settings.diff_timeout_ms > 0).then(|| Duration::from_millis(settings.diff_timeout_ms));
        Self::new(settings.max_input_chars, timeout)
    }

    /// Reject a side whose input exceeds the configured ceiling
    pub fn check_input(&self, side: Side, text: &str) -> Result<(), CompareError> {
        let len = text.chars().count();
        if len > self.max_input_chars {
            warn!(
                "Rejecting side {:?}: {} characters over limit {}",
                side, len, self.max_input_chars
            );
            return Err(CompareError::InputTooLarge {
                side,
                len,
                limit: self.max_input_chars,
            });
        }
        Ok(())
    }

    /// Check both inputs, then compare them
    pub fn compare(&self, text_a: &str, text_b: &str) -> Result<Comparison, CompareError> {
        self.check_input(Side::A, text_a)?;
        self.check_input(Side::B, text_b)?;
        let deadline = self.timeout.map(|timeout| Instant::now() + timeout);
        compare_until(deadline, text_a, text_b)
    }
}

/// Compare two raw texts with a minimal edit script and no size limit
pub fn compare_texts(text_a: &str, text_b: &str) -> Result<Comparison, CompareError> {
    compare_until(None, text_a, text_b)
}

fn compare_until(
    deadline: Option<Instant>,
    text_a: &str,
    text_b: &str,
) -> Result<Comparison, CompareError> {
    if text_a.is_empty() && text_b.is_empty() {
        debug!("Both inputs empty, nothing to compare");
        return Ok(Comparison::default());
    }

    let escaped_a = escape(text_a);
    let escaped_b = escape(text_b);

    let tokens_a = tokenize(&escaped_a);
    let tokens_b = tokenize(&escaped_b);

    let hunks = diff_until(deadline, &tokens_a, &tokens_b);
    debug!(
        tokens_a = tokens_a.len(),
        tokens_b = tokens_b.len(),
        hunks = hunks.len(),
        "Computed token diff"
    );

    let lines_a = normalize(&highlight(&tokens_a, &hunks, Side::A))?;
    let lines_b = normalize(&highlight(&tokens_b, &hunks, Side::B))?;

    Ok(Comparison {
        rows: assemble(lines_a, lines_b),
        stats_a: count(text_a),
        stats_b: count(text_b),
    })
}
