// src/core/sanitize.rs

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

/// Fold the typographic apostrophes the portal mixes (`’`, `ʼ`, `‘`) into `'`.
pub fn normalize_apostrophes(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{2019}' | '\u{02BC}' | '\u{2018}' | '`' => '\'',
            _ => c,
        })
        .collect()
}

/// Last whitespace-delimited token, if any ("Підгрупа 2" → "2").
pub fn last_token(s: &str) -> Option<&str> {
    s.split_whitespace().next_back()
}
