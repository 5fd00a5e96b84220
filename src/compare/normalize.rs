//! Splits a marked stream into display lines that are each well-formed.

use super::CompareError;
use super::highlight::MarkedStream;
use super::stats::is_text_whitespace;
use crate::constant::{MARK_CLOSE, MARK_OPEN, VISIBLE_SPACE};

/// Accumulates one display line, tracking whether a marker is open
struct LineWriter {
    buf: String,
    open: bool,
}

impl LineWriter {
    fn new() -> Self {
        Self {
            buf: String::new(),
            open: false,
        }
    }

    fn push_text(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    fn open_mark(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.buf.push_str(MARK_OPEN);
        self.open = true;
        true
    }

    /// Close the open marker, turning the whitespace run right before it
    /// into `&nbsp;` so a highlighted trailing blank stays visible
    fn close_mark(&mut self) -> bool {
        if !self.open {
            return false;
        }

        let kept = self.buf.trim_end_matches(is_text_whitespace).len();
        let blanks = self.buf[kept..].chars().count();
        self.buf.truncate(kept);
        for _ in 0..blanks {
            self.buf.push_str(VISIBLE_SPACE);
        }

        self.buf.push_str(MARK_CLOSE);
        self.open = false;
        true
    }
}

/// Split a marked stream into display lines.
///
/// A marker that is still open when a line break is reached gets closed at
/// the end of that line and reopened at the start of the next one, so every
/// line carries balanced, non-nested markers. Each break is visited once,
/// which bounds the number of repairs by the number of breaks.
pub fn normalize(stream: &MarkedStream<'_>) -> Result<Vec<String>, CompareError> {
    let mut lines = Vec::new();
    let mut line = LineWriter::new();
    let mut crossings = 0usize;

    for marked in stream.tokens() {
        if marked.open && !line.open_mark() {
            return Err(CompareError::MalformedMarkers { line: lines.len() });
        }

        if marked.token.is_line_break() {
            let carried = line.open;
            if carried {
                line.close_mark();
                crossings += 1;
            }
            lines.push(std::mem::replace(&mut line, LineWriter::new()).buf);
            if carried {
                line.open_mark();
            }
        } else {
            line.push_text(marked.token.as_str());
        }

        if marked.close && !line.close_mark() {
            return Err(CompareError::MalformedMarkers { line: lines.len() });
        }
    }

    if line.open {
        return Err(CompareError::MalformedMarkers { line: lines.len() });
    }
    lines.push(line.buf);

    tracing::trace!(
        lines = lines.len(),
        crossings,
        "Normalized marker boundaries"
    );
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::highlight::MarkedToken;
    use crate::compare::token::{Token, tokenize};

    /// Build a stream from text, marking the given `(first, last)` token spans
    fn marked<'a>(text: &'a str, spans: &[(usize, usize)]) -> MarkedStream<'a> {
        let mut tokens: Vec<MarkedToken<'_>> = tokenize(text)
            .into_iter()
            .map(|token| MarkedToken {
                token,
                open: false,
                close: false,
            })
            .collect();
        for &(first, last) in spans {
            tokens[first].open = true;
            tokens[last].close = true;
        }
        MarkedStream::from(tokens)
    }

    fn assert_balanced(line: &str) {
        let mut depth = 0i32;
        let mut rest = line;
        while let Some(idx) = rest.find('<') {
            rest = &rest[idx..];
            if rest.starts_with(MARK_OPEN) {
                depth += 1;
                assert_eq!(depth, 1, "nested marker in {:?}", line);
                rest = &rest[MARK_OPEN.len()..];
            } else if rest.starts_with(MARK_CLOSE) {
                depth -= 1;
                assert_eq!(depth, 0, "unmatched close in {:?}", line);
                rest = &rest[MARK_CLOSE.len()..];
            } else {
                panic!("unexpected markup in {:?}", line);
            }
        }
        assert_eq!(depth, 0, "unclosed marker in {:?}", line);
    }

    #[test]
    fn test_normalize_empty_stream_is_one_line() {
        let lines = normalize(&MarkedStream::default()).unwrap();
        assert_eq!(lines, vec![String::new()]);
    }

    #[test]
    fn test_normalize_plain_lines() {
        let lines = normalize(&marked("one\ntwo\n", &[])).unwrap();
        assert_eq!(lines, vec!["one", "two", ""]);
    }

    #[test]
    fn test_normalize_mark_within_line() {
        // tokens: one \n two
        let lines = normalize(&marked("one\ntwo", &[(2, 2)])).unwrap();
        assert_eq!(lines, vec!["one", "<em>two</em>"]);
    }

    #[test]
    fn test_normalize_mark_across_breaks() {
        // tokens: a \n b \n c \n d
        let lines = normalize(&marked("a\nb\nc\nd", &[(0, 4)])).unwrap();
        assert_eq!(
            lines,
            vec!["<em>a</em>", "<em>b</em>", "<em>c</em>", "d"]
        );
        for line in &lines {
            assert_balanced(line);
        }
    }

    #[test]
    fn test_normalize_mark_on_line_break_token() {
        // tokens: a \n b
        let opened_on_break = normalize(&marked("a\nb", &[(1, 2)])).unwrap();
        assert_eq!(opened_on_break, vec!["a<em></em>", "<em>b</em>"]);

        let closed_on_break = normalize(&marked("a\nb", &[(0, 1)])).unwrap();
        assert_eq!(closed_on_break, vec!["<em>a</em>", "<em></em>b"]);
    }

    #[test]
    fn test_normalize_trailing_whitespace_visible() {
        // tokens: x ' ' ' ' y
        let lines = normalize(&marked("x  y", &[(0, 2)])).unwrap();
        assert_eq!(lines, vec!["<em>x&nbsp;&nbsp;</em>y"]);
    }

    #[test]
    fn test_normalize_whitespace_before_break_repair() {
        // tokens: a ' ' \n b
        let lines = normalize(&marked("a \nb", &[(0, 3)])).unwrap();
        assert_eq!(lines, vec!["<em>a&nbsp;</em>", "<em>b</em>"]);
    }

    #[test]
    fn test_normalize_whitespace_only_mark() {
        // tokens: a ' ' '\t' b
        let lines = normalize(&marked("a \tb", &[(1, 2)])).unwrap();
        assert_eq!(lines, vec!["a<em>&nbsp;&nbsp;</em>b"]);
    }

    #[test]
    fn test_normalize_ascii_separator_before_close_visible() {
        // tokens: x '\u{1c}' y
        let lines = normalize(&marked("x\u{1c}y", &[(0, 1)])).unwrap();
        assert_eq!(lines, vec!["<em>x&nbsp;</em>y"]);
    }

    #[test]
    fn test_normalize_unmarked_whitespace_untouched() {
        let lines = normalize(&marked("a  b", &[(3, 3)])).unwrap();
        assert_eq!(lines, vec!["a  <em>b</em>"]);
    }

    #[test]
    fn test_normalize_rejects_nested_markers() {
        let stream = MarkedStream::from(vec![
            MarkedToken {
                token: Token::WordRun("a"),
                open: true,
                close: false,
            },
            MarkedToken {
                token: Token::LineBreak,
                open: false,
                close: false,
            },
            MarkedToken {
                token: Token::WordRun("b"),
                open: true,
                close: true,
            },
        ]);
        assert!(matches!(
            normalize(&stream),
            Err(CompareError::MalformedMarkers { line: 1 })
        ));
    }

    #[test]
    fn test_normalize_rejects_unclosed_marker() {
        let stream = MarkedStream::from(vec![MarkedToken {
            token: Token::WordRun("a"),
            open: true,
            close: false,
        }]);
        assert!(matches!(
            normalize(&stream),
            Err(CompareError::MalformedMarkers { line: 0 })
        ));
    }

    #[test]
    fn test_normalize_rejects_stray_close() {
        let stream = MarkedStream::from(vec![MarkedToken {
            token: Token::Char("x"),
            open: false,
            close: true,
        }]);
        assert!(normalize(&stream).is_err());
    }
}
