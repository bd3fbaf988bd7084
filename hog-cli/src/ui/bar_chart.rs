/// Filled cell of every bar
const FULL: char = '█';

/// Width of the moving segment in the activity bar
const SEGMENT: usize = 3;

/// A bar filled end to end, shown once the scan is over
pub fn full_bar(width: usize) -> String {
    std::iter::repeat_n(FULL, width).collect()
}

/// Render an indeterminate bar: a short segment that slides along with
/// `phase` and wraps around at the end
pub fn render_activity_bar(phase: usize, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let head = phase % width;
    (0..width)
        .map(|i| {
            let distance = (i + width - head) % width;
            if distance < SEGMENT.min(width) {
                FULL
            } else {
                '·'
            }
        })
        .collect()
}

/// Bar width for a given terminal width, between 10 and 50 cells
pub fn activity_width(terminal_width: u16) -> usize {
    (terminal_width as usize).saturating_sub(20).clamp(10, 50)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_bar() {
        assert_eq!(full_bar(4), "████");
        assert_eq!(full_bar(0), "");
    }

    #[test]
    fn test_activity_bar_slides_and_wraps() {
        assert_eq!(render_activity_bar(0, 6), "███···");
        assert_eq!(render_activity_bar(2, 6), "··███·");
        assert_eq!(render_activity_bar(4, 6), "█···██");
        assert_eq!(render_activity_bar(6, 6), render_activity_bar(0, 6));
    }

    #[test]
    fn test_activity_bar_narrower_than_segment() {
        assert_eq!(render_activity_bar(5, 2), "██");
        assert_eq!(render_activity_bar(5, 0), "");
    }

    #[test]
    fn test_activity_width_bounds() {
        assert_eq!(activity_width(5), 10);
        assert_eq!(activity_width(40), 20);
        assert_eq!(activity_width(300), 50);
    }
}
