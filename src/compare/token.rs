//! Tokenizer splitting escaped text into comparison units.

use std::fmt;

/// An atomic comparison unit borrowed from the escaped text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token<'a> {
    /// Reserved line separator, never produced from literal text
    LineBreak,
    /// Character reference such as `&amp;` or `&#x2F;`, kept verbatim
    EntityRef(&'a str),
    /// Maximal run of ASCII letters, case preserved
    WordRun(&'a str),
    /// Any other single character
    Char(&'a str),
}

impl<'a> Token<'a> {
    /// Textual form of the token, with `LineBreak` rendered as `\n`
    pub fn as_str(&self) -> &'a str {
        match *self {
            Token::LineBreak => "\n",
            Token::EntityRef(s) | Token::WordRun(s) | Token::Char(s) => s,
        }
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Token::LineBreak)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split escaped text into tokens.
///
/// At every position the rules are tried in order:
/// 1. a character reference `&#?[A-Za-z0-9]+;`
/// 2. a newline, which becomes [`Token::LineBreak`]
/// 3. a maximal run of ASCII letters
/// 4. exactly one character
///
/// Keeping words whole is what lets two texts that only differ in spacing
/// still diff at word granularity.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0usize;

    while pos < text.len() {
        let rest = &text[pos..];

        if let Some(len) = entity_len(rest) {
            tokens.push(Token::EntityRef(&rest[..len]));
            pos += len;
            continue;
        }

        if rest.starts_with('\n') {
            tokens.push(Token::LineBreak);
            pos += 1;
            continue;
        }

        let word_len = rest
            .bytes()
            .take_while(|b| b.is_ascii_alphabetic())
            .count();
        if word_len > 0 {
            tokens.push(Token::WordRun(&rest[..word_len]));
            pos += word_len;
            continue;
        }

        // rest is non-empty, so there is always a next char
        let char_len = rest.chars().next().map_or(1, char::len_utf8);
        tokens.push(Token::Char(&rest[..char_len]));
        pos += char_len;
    }

    tokens
}

/// Byte length of a character reference at the start of `text`, if any
fn entity_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.first() != Some(&b'&') {
        return None;
    }

    let mut idx = 1;
    if bytes.get(idx) == Some(&b'#') {
        idx += 1;
    }

    let body = bytes[idx..]
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    if body == 0 {
        return None;
    }
    idx += body;

    (bytes.get(idx) == Some(&b';')).then_some(idx + 1)
}

/// Concatenate the textual form of a token sequence
pub fn render(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(Token::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::escape::escape;

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_words_and_spaces() {
        assert_eq!(
            tokenize("hello  World"),
            vec![
                Token::WordRun("hello"),
                Token::Char(" "),
                Token::Char(" "),
                Token::WordRun("World"),
            ]
        );
    }

    #[test]
    fn test_tokenize_entities() {
        assert_eq!(
            tokenize("a&amp;b&#x2F;"),
            vec![
                Token::WordRun("a"),
                Token::EntityRef("&amp;"),
                Token::WordRun("b"),
                Token::EntityRef("&#x2F;"),
            ]
        );
    }

    #[test]
    fn test_tokenize_malformed_ampersand() {
        assert_eq!(
            tokenize("&;&#;&x"),
            vec![
                Token::Char("&"),
                Token::Char(";"),
                Token::Char("&"),
                Token::Char("#"),
                Token::Char(";"),
                Token::Char("&"),
                Token::WordRun("x"),
            ]
        );
    }

    #[test]
    fn test_tokenize_line_breaks() {
        assert_eq!(
            tokenize("a\n\nb"),
            vec![
                Token::WordRun("a"),
                Token::LineBreak,
                Token::LineBreak,
                Token::WordRun("b"),
            ]
        );
    }

    #[test]
    fn test_tokenize_digits_and_non_latin_are_single_chars() {
        assert_eq!(
            tokenize("42我爱"),
            vec![
                Token::Char("4"),
                Token::Char("2"),
                Token::Char("我"),
                Token::Char("爱"),
            ]
        );
    }

    #[test]
    fn test_tokenize_round_trip() {
        let inputs = [
            "",
            "\n\n\n",
            "plain words only",
            "mixed 日本語 and English\r\nline two",
            "a & b && c &amp; d &#; &",
            "<script>alert('x')</script>",
            "tabs\tand\u{a0}nbsp",
        ];
        for input in inputs {
            let escaped = escape(input);
            assert_eq!(render(&tokenize(&escaped)), escaped, "input: {:?}", input);
        }
    }
}
