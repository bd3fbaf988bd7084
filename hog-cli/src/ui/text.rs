/// Keep the end of `s` within `max` characters, marking the cut with `...`
pub fn truncate_start(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max {
        return s.to_string();
    }
    if max <= 3 {
        return ".".repeat(max);
    }

    let tail: String = s.chars().skip(len - (max - 3)).collect();
    format!("...{}", tail)
}

/// Keep the start of `s` within `max` characters
pub fn truncate_end(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
