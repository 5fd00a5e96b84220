use super::diff::{Hunk, Side};
use super::token::Token;
use crate::constant::{MARK_CLOSE, MARK_OPEN};
use std::fmt;

/// A token together with the markers attached to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkedToken<'a> {
    pub token: Token<'a>,
    /// An opening marker precedes the token
    pub open: bool,
    /// A closing marker follows the token
    pub close: bool,
}

/// One side's tokens with highlight markers applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedStream<'a> {
    tokens: Vec<MarkedToken<'a>>,
}

impl<'a> MarkedStream<'a> {
    pub fn tokens(&self) -> &[MarkedToken<'a>] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of highlighted regions in the stream
    pub fn mark_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.open).count()
    }
}

impl<'a> From<Vec<MarkedToken<'a>>> for MarkedStream<'a> {
    fn from(tokens: Vec<MarkedToken<'a>>) -> Self {
        Self { tokens }
    }
}

/// Flat form: markers inline, line breaks as `\n`
impl fmt::Display for MarkedStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for marked in &self.tokens {
            if marked.open {
                f.write_str(MARK_OPEN)?;
            }
            f.write_str(marked.token.as_str())?;
            if marked.close {
                f.write_str(MARK_CLOSE)?;
            }
        }
        Ok(())
    }
}

/// Wrap the changed range of every hunk on `side` in a marker pair.
///
/// Only the first and last token of a hunk carry a marker. The end index is
/// clamped to the sequence; a hunk starting past the end gets no marker at
/// all, so markers always come in pairs.
pub fn highlight<'a>(tokens: &[Token<'a>], hunks: &[Hunk], side: Side) -> MarkedStream<'a> {
    let mut marked: Vec<MarkedToken<'a>> = tokens
        .iter()
        .map(|&token| MarkedToken {
            token,
            open: false,
            close: false,
        })
        .collect();

    for hunk in hunks {
        let (start, count) = hunk.range(side);
        if count == 0 || start >= marked.len() {
            continue;
        }

        let end = (start + count - 1).min(marked.len() - 1);
        marked[start].open = true;
        marked[end].close = true;
    }

    MarkedStream::from(marked)
}
