use super::COMMENT_MARKER;

/// Split source text into raw lines. `\r\n` endings are accepted and
/// trailing empty lines are dropped, so they never count toward line numbers.
pub fn read_all_lines(input: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = input.lines().collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Blank lines and full-line comments are skipped wherever they appear.
pub fn is_skippable(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}
