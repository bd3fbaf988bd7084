use std::io::{self, Write};

use hog_core::{ScanReport, format_count, format_size};

const SIZE_COLUMN: usize = 12;
const RULE_WIDTH: usize = 100;

/// Print the final plain-text report
pub fn write_report<W: Write>(out: &mut W, report: &ScanReport, requested: usize) -> io::Result<()> {
    writeln!(
        out,
        "\n=== Top {} largest files (same volume, occupied space) ===",
        requested
    )?;

    if report.is_empty() {
        writeln!(out, "No results.")?;
        return Ok(());
    }

    writeln!(out, "{:>4}  {:>w$}  Path", "#", "Size", w = SIZE_COLUMN)?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for (i, entry) in report.top.iter().enumerate() {
        writeln!(
            out,
            "{:>4}  {:>w$}  {}",
            i + 1,
            format_size(entry.occupied_bytes),
            entry.path.display(),
            w = SIZE_COLUMN
        )?;
    }

    writeln!(out, "\nSummary:")?;
    writeln!(out, "- Files scanned:   {}", format_count(report.files_scanned))?;
    writeln!(out, "- Occupied total:  {}", format_size(report.bytes_total))?;
    writeln!(out, "- Denied paths:    {}", format_count(report.denied))?;
    writeln!(out, "- Elapsed:         {:.1}s", report.elapsed.as_secs_f64())?;
    if report.cancelled {
        writeln!(out, "(scan interrupted, results are partial)")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hog_core::FileObservation;
    use std::path::PathBuf;
    use std::time::Duration;

    fn render(report: &ScanReport, requested: usize) -> String {
        let mut out = Vec::new();
        write_report(&mut out, report, requested).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn report(top: Vec<FileObservation>) -> ScanReport {
        ScanReport {
            top,
            files_scanned: 1_234_567,
            bytes_total: 3 * 1024 * 1024 * 1024,
            denied: 1_200,
            elapsed: Duration::from_millis(4300),
            cancelled: false,
        }
    }

    #[test]
    fn test_empty_report_says_no_results() {
        let mut empty = report(Vec::new());
        empty.files_scanned = 0;
        empty.bytes_total = 0;
        let text = render(&empty, 10);
        assert!(text.contains("=== Top 10 largest files"));
        assert!(text.trim_end().ends_with("No results."));
        assert!(!text.contains("Summary"));
    }

    #[test]
    fn test_zero_requested_still_prints_summary() {
        let text = render(&report(Vec::new()), 0);
        assert!(text.contains("=== Top 0 largest files"));
        assert!(!text.contains("No results."));
        assert!(text.contains("- Files scanned:   1,234,567"));
        assert!(text.contains("- Occupied total:  3.00 GB"));
        assert!(!text.contains("   1  "));
    }

    #[test]
    fn test_report_table_and_summary() {
        let text = render(
            &report(vec![
                FileObservation {
                    path: PathBuf::from("/big"),
                    occupied_bytes: 200 * 1024,
                },
                FileObservation {
                    path: PathBuf::from("/small"),
                    occupied_bytes: 100,
                },
            ]),
            2,
        );

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.contains(&"   #          Size  Path"));
        assert!(lines.contains(&"   1     200.00 KB  /big"));
        assert!(lines.contains(&"   2      100.00 B  /small"));
        assert!(lines.contains(&"- Files scanned:   1,234,567"));
        assert!(lines.contains(&"- Occupied total:  3.00 GB"));
        assert!(lines.contains(&"- Denied paths:    1,200"));
        assert!(lines.contains(&"- Elapsed:         4.3s"));
        assert!(!text.contains("partial"));
    }

    #[test]
    fn test_cancelled_report_is_flagged() {
        let mut partial = report(vec![FileObservation {
            path: PathBuf::from("/x"),
            occupied_bytes: 1,
        }]);
        partial.cancelled = true;

        assert!(render(&partial, 5).contains("results are partial"));
    }
}
