use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to at most `max_width` display columns and append `suffix`.
/// Strings that already fit are returned unchanged.
pub fn clip(s: &str, max_width: usize, suffix: &str) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push_str(suffix);
    result
}

pub fn kb_to_gb(kb: u64) -> f64 {
    kb as f64 / (1024.0 * 1024.0)
}

pub fn kb_to_mb(kb: u64) -> f64 {
    kb as f64 / 1024.0
}
