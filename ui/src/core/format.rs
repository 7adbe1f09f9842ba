//! Formatting helpers for presenting counters.

/// Group thousands with a thin space, e.g. `12 345`.
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push('\u{2009}');
        }
        out.push(ch);
    }
    out
}

pub fn format_seconds(value: u32) -> String {
    format!("{value}s")
}
