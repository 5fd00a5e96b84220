use super::types::Line;

/// Pad the shorter line list with empty strings and pair both positionally
pub fn assemble(lines_a: Vec<String>, lines_b: Vec<String>) -> Vec<Line> {
    let max_lines = lines_a.len().max(lines_b.len());
    let mut left = lines_a.into_iter();
    let mut right = lines_b.into_iter();

    (0..max_lines)
        .map(|_| Line {
            text_a: left.next().unwrap_or_default(),
            text_b: right.next().unwrap_or_default(),
        })
        .collect()
}
