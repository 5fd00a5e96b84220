use super::types::Stats;

/// Unicode whitespace plus the ASCII separators U+001C..=U+001F, which
/// `char::is_whitespace` leaves out
pub(super) fn is_text_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Count characters and words in a raw input
pub fn count(text: &str) -> Stats {
    if text.is_empty() {
        return Stats::default();
    }

    let words = text
        .split(is_text_whitespace)
        .filter(|word| !word.is_empty())
        .count();

    let without_cr = text.chars().filter(|&c| c != '\r');
    let with_newlines = without_cr.clone().count();

    let without_lf = without_cr.filter(|&c| c != '\n');
    let with_spaces = without_lf.clone().count();

    let chars_only = without_lf.filter(|&c| !is_text_whitespace(c)).count();

    Stats {
        chars_only,
        with_spaces,
        with_newlines,
        words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_empty() {
        assert_eq!(count(""), Stats::default());
    }

    #[test]
    fn test_count_english() {
        let stats = count("hello world\r\nsecond  line\n");
        assert_eq!(stats.words, 4);
        assert_eq!(stats.with_newlines, 25);
        assert_eq!(stats.with_spaces, 23);
        assert_eq!(stats.chars_only, 20);
    }

    #[test]
    fn test_count_chinese() {
        let stats = count("我爱你 世界");
        assert_eq!(stats.words, 2);
        assert_eq!(stats.with_newlines, 6);
        assert_eq!(stats.with_spaces, 6);
        assert_eq!(stats.chars_only, 5);
    }

    #[test]
    fn test_count_whitespace_only() {
        let stats = count(" \t\r\n ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.with_newlines, 4);
        assert_eq!(stats.with_spaces, 3);
        assert_eq!(stats.chars_only, 0);
    }

    #[test]
    fn test_count_ascii_separators_are_whitespace() {
        let stats = count("one\u{1c}two\u{1f}three");
        assert_eq!(stats.words, 3);
        assert_eq!(stats.with_spaces, 13);
        assert_eq!(stats.chars_only, 11);
    }
}
