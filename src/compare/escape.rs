/// Substitutions applied in order. `&` has to go first, otherwise the
/// entities introduced by the later rules would be escaped a second time.
const REPLACEMENTS: [(char, &str); 8] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('\'', "&#39;"),
    ('"', "&quot;"),
    ('/', "&#x2F;"),
    ('`', "&#x60;"),
    ('=', "&#x3D;"),
];

/// HTML-escape raw input so user text can never be mistaken for markup
pub fn escape(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut escaped = text.to_string();
    for (needle, entity) in REPLACEMENTS {
        if escaped.contains(needle) {
            escaped = escaped.replace(needle, entity);
        }
    }
    escaped
}
