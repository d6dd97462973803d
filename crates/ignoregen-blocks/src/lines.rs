//! Line-level helpers shared by the extractor and the reassembler.

/// A line is empty when it contains nothing but whitespace.
pub fn is_empty_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// Drop every empty or whitespace-only line.
pub fn cut_empty_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter(|line| !is_empty_line(line.as_ref()))
        .map(|line| line.as_ref().to_string())
        .collect()
}

/// Collapse a run of trailing empty lines down to one.
///
/// A single trailing empty line is kept. Empty lines elsewhere are untouched.
pub fn trim_last_empty_lines(mut lines: Vec<String>) -> Vec<String> {
    while lines.len() >= 2
        && is_empty_line(&lines[lines.len() - 1])
        && is_empty_line(&lines[lines.len() - 2])
    {
        lines.pop();
    }
    lines
}
