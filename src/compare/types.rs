use serde::{Deserialize, Serialize};

/// One display row of the side-by-side view. Both halves are HTML-safe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub text_a: String,
    pub text_b: String,
}

/// Character and word counts for one raw input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Characters excluding all whitespace
    pub chars_only: usize,
    /// Characters excluding line breaks
    pub with_spaces: usize,
    /// Characters excluding carriage returns only
    pub with_newlines: usize,
    pub words: usize,
}

/// Full result of comparing two texts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub rows: Vec<Line>,
    pub stats_a: Stats,
    pub stats_b: Stats,
}

impl Comparison {
    /// True when there is nothing to display (both inputs were empty)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows where the two sides differ
    pub fn changed_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.text_a != row.text_b).count()
    }
}
