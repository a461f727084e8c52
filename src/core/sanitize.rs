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

/// Drop characters XML 1.0 cannot carry (C0 controls other than tab/LF/CR,
/// lone surrogates cannot occur in `str`, U+FFFE/U+FFFF).
pub fn xml_safe(s: &str) -> std::borrow::Cow<'_, str> {
    fn allowed(ch: char) -> bool {
        matches!(ch, '\t' | '\n' | '\r') || (ch >= ' ' && ch != '\u{FFFE}' && ch != '\u{FFFF}')
    }
    if s.chars().all(allowed) {
        s.into()
    } else {
        s.chars().filter(|&c| allowed(c)).collect::<String>().into()
    }
}

/// Single-line rendering for table cells and delimited text.
pub fn one_line(s: &str) -> String {
    if s.contains(['\n', '\r']) { normalize_ws(s) } else { s.to_string() }
}
