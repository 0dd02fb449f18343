// src/core/sanitize.rs

/// Collapse whitespace runs to a single space and trim the ends.
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

/// Best-effort numeric read of a cell. Tolerates surrounding whitespace
/// and thousands separators ("1,234.5").
pub fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim().replace(',', "");
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  a \t\n b  "), "a b");
        assert_eq!(normalize_ws("plain"), "plain");
        assert_eq!(normalize_ws(" \n\t "), "");
    }

    #[test]
    fn parse_number_variants() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(" 1,234.5 "), Some(1234.5));
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("n/a"), None);
    }
}
