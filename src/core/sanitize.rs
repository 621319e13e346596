// src/core/sanitize.rs

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Cell-text folding used by the table extractor.
///
/// Trims, then rewrites left to right: a run of line breaks becomes one space,
/// any other run of two or more whitespace chars becomes one space, a lone
/// whitespace char is kept as is (so a single `\u{a0}` survives). A line break
/// followed by indentation therefore leaves a double space behind, and the
/// yoweb layouts use that double space as their field separator.
pub fn fold_cell_text(s: &str) -> String {
    let s = s.trim();
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\r' || ch == '\n' {
            while matches!(chars.peek(), Some('\r' | '\n')) { chars.next(); }
            out.push(' ');
        } else if ch.is_whitespace() && chars.peek().is_some_and(|c| c.is_whitespace()) {
            while chars.peek().is_some_and(|c| c.is_whitespace()) { chars.next(); }
            out.push(' ');
        } else {
            out.push(ch);
        }
    }
    out
}

/// Split on the double-space field separator, trimming and dropping empty parts.
pub fn split_segments(s: &str) -> Vec<String> {
    s.split("  ")
        .map(normalize_ws)
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_everything() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
        assert_eq!(normalize_ws("a\u{a0}\u{a0}b"), "a b");
    }

    #[test]
    fn fold_keeps_double_space_after_line_break() {
        // "\n" -> " ", then the two-space indent -> " "
        assert_eq!(fold_cell_text("Crew\n  of the flag"), "Crew  of the flag");
        assert_eq!(fold_cell_text("a\r\n\r\nb"), "a b");
        assert_eq!(fold_cell_text("a    b"), "a b");
    }

    #[test]
    fn fold_preserves_single_nbsp_and_trims() {
        assert_eq!(fold_cell_text("  restocking:\u{a0}Auto  "), "restocking:\u{a0}Auto");
        assert_eq!(fold_cell_text("\u{a0}x\u{a0}"), "x");
    }

    #[test]
    fn split_segments_drops_empties() {
        assert_eq!(
            split_segments("Jack  Officer of the crew    Sea Dogs "),
            vec!["Jack", "Officer of the crew", "Sea Dogs"]
        );
        assert!(split_segments("   ").is_empty());
    }
}
