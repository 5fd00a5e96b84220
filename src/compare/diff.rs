use super::token::Token;
use similar::{Algorithm, DiffOp, DiffTag, capture_diff_slices_deadline};
use std::time::Instant;

/// Which half of a comparison a hunk range refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// A maximal region where the two token sequences disagree.
///
/// A zero count means nothing is consumed on that side (pure insertion or
/// deletion at `start`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hunk {
    pub start_a: usize,
    pub count_a: usize,
    pub start_b: usize,
    pub count_b: usize,
}

impl Hunk {
    /// `(start, count)` for one side
    pub fn range(&self, side: Side) -> (usize, usize) {
        match side {
            Side::A => (self.start_a, self.count_a),
            Side::B => (self.start_b, self.count_b),
        }
    }
}

/// Compute the minimal edit script and fold it into zero-context hunks
pub fn diff(tokens_a: &[Token<'_>], tokens_b: &[Token<'_>]) -> Vec<Hunk> {
    diff_until(None, tokens_a, tokens_b)
}

/// Like [`diff`], but Myers stops refining once `deadline` has passed.
///
/// Past the deadline the remaining region is reported as one replaced block,
/// so the hunks stay correct but may be larger than the minimum.
pub fn diff_until(
    deadline: Option<Instant>,
    tokens_a: &[Token<'_>],
    tokens_b: &[Token<'_>],
) -> Vec<Hunk> {
    let ops = capture_diff_slices_deadline(Algorithm::Myers, tokens_a, tokens_b, deadline);
    let hunks = group_into_hunks(&ops);

    tracing::trace!(
        ops = ops.len(),
        hunks = hunks.len(),
        "Folded edit script into hunks"
    );
    hunks
}

/// Merge every run of consecutive non-equal ops into a single hunk
fn group_into_hunks(ops: &[DiffOp]) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut current: Option<Hunk> = None;

    for (tag, old_range, new_range) in ops.iter().map(DiffOp::as_tag_tuple) {
        if tag == DiffTag::Equal {
            if let Some(hunk) = current.take() {
                hunks.push(hunk);
            }
            continue;
        }

        match current.as_mut() {
            Some(hunk) => {
                hunk.count_a += old_range.len();
                hunk.count_b += new_range.len();
            }
            None => {
                current = Some(Hunk {
                    start_a: old_range.start,
                    count_a: old_range.len(),
                    start_b: new_range.start,
                    count_b: new_range.len(),
                });
            }
        }
    }

    if let Some(hunk) = current {
        hunks.push(hunk);
    }

    hunks
}
