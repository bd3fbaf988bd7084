const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Format bytes into a human-readable string with two decimals.
///
/// The unit is the largest one whose next step up still exceeds the value,
/// so 1023 bytes stays in `B` and 1024 becomes `1.00 KB`. Values past the
/// petabyte range keep the `PB` unit.
pub fn format_size(bytes: u64) -> String {
    let value = bytes as f64;
    let mut scale = 1.0_f64;

    for unit in &UNITS[..UNITS.len() - 1] {
        if value < scale * 1024.0 {
            return format!("{:.2} {}", value / scale, unit);
        }
        scale *= 1024.0;
    }

    format!("{:.2} {}", value / scale, UNITS[UNITS.len() - 1])
}

/// Format a number with thousand separators (e.g., 1,234,567)
pub fn format_count(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }

    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(512), "512.00 B");
        assert_eq!(format_size(1023), "1023.00 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(1_073_741_824), "1.00 GB");
        assert_eq!(format_size(1024_u64.pow(4)), "1.00 TB");
        assert_eq!(format_size(1024_u64.pow(5)), "1.00 PB");
    }

    #[test]
    fn test_format_size_saturates_at_petabytes() {
        assert_eq!(format_size(2048 * 1024_u64.pow(5)), "2048.00 PB");
        assert!(format_size(u64::MAX).ends_with(" PB"));
    }

    #[test]
    fn test_unit_is_largest_that_fits() {
        for (i, unit) in UNITS.iter().enumerate().take(5) {
            let just_below_next = 1024_u64.pow(i as u32 + 1) - 1;
            let formatted = format_size(just_below_next);
            assert!(
                formatted.ends_with(&format!(" {unit}")),
                "{just_below_next} formatted as {formatted}"
            );
        }
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12345), "12,345");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
