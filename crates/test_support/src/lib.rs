pub mod split_cases;
pub mod split_snapshot;

/// Escape `text` for one-line snapshot output (quotes, backslashes and
/// control characters).
pub fn escape_text(text: &str) -> String {
    text.escape_debug().to_string()
}

/// Report every segment row where two snapshots disagree.
///
/// Rows are numbered from 0, matching the `segment #i` wording of
/// [`split_snapshot::check_split_laws`]. A row only one side has shows
/// `<missing>` on the other.
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    use std::fmt::Write;

    fn cell(side: &[String], row: usize) -> &str {
        side.get(row).map_or("<missing>", String::as_str)
    }

    let mut out = format!(
        "expected {} segments, actual {} segments\n",
        expected.len(),
        actual.len()
    );
    let rows = expected.len().max(actual.len());
    for row in (0..rows).filter(|&row| expected.get(row) != actual.get(row)) {
        let _ = writeln!(out, "  #{row:<3} expected: {}", cell(expected, row));
        let _ = writeln!(out, "         actual: {}", cell(actual, row));
    }
    out
}
