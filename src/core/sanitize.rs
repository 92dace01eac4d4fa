// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim.
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

/// `Some(normalized)` unless the input is blank.
pub fn non_blank(s: &str) -> Option<String> {
    let t = normalize_ws(s);
    if t.is_empty() { None } else { Some(t) }
}

/// Case folding used by free-text search. Unicode-aware; Arabic is unaffected.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Escape text for an HTML body or a double-quoted attribute.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Keep only characters a dialer understands (`+`, digits incl. Arabic-Indic).
pub fn dialable(number: &str) -> String {
    number
        .chars()
        .filter(|c| *c == '+' || c.is_ascii_digit() || ('\u{0660}'..='\u{0669}').contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_and_blank() {
        assert_eq!(normalize_ws("  a \t b\n"), "a b");
        assert_eq!(non_blank(" \u{00a0} "), None);
        assert_eq!(non_blank(" x "), Some(s!("x")));
    }

    #[test]
    fn escape_covers_markup_chars() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn dialable_strips_formatting() {
        assert_eq!(dialable("+20 (2) 123"), "+202123");
        assert_eq!(dialable("٠١٢٣"), "٠١٢٣");
    }
}
