// Run with: cargo run -p hog-core --example debug_scan -- /path/to/scan [top_n]

use hog_core::{ScanConfig, ScanEngine, ScanMessage, format_count, format_size};
use std::path::PathBuf;
use std::time::{Duration, Instant};

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let top_n = std::env::args()
        .nth(2)
        .and_then(|n| n.parse().ok())
        .unwrap_or(10);

    println!("Scanning: {:?}", path);

    let config = ScanConfig {
        top_n,
        ..ScanConfig::default()
    };
    let (rx, handle) = ScanEngine::new(path, config).spawn();

    let start = Instant::now();
    let mut last_print = Instant::now();
    let mut last_files = 0u64;
    let mut stuck_count = 0;

    for msg in rx {
        match msg {
            ScanMessage::Progress(s) => {
                let now = Instant::now();

                // Same file count across refreshes usually means a slow directory
                if s.files_scanned == last_files {
                    stuck_count += 1;
                } else {
                    stuck_count = 0;
                }
                last_files = s.files_scanned;

                if now.duration_since(last_print) > Duration::from_secs(1) || stuck_count > 5 {
                    println!(
                        "[{:>6.1}s] files={:<8} bytes={:<12} denied={:<4} stuck={} path={:?}",
                        s.elapsed.as_secs_f64(),
                        s.files_scanned,
                        s.bytes_total,
                        s.denied,
                        stuck_count,
                        s.current_path
                            .as_ref()
                            .map(|p| p.to_string_lossy().to_string())
                            .unwrap_or_default()
                    );
                    last_print = now;
                }
            }
            ScanMessage::Completed => {
                println!("[{:>6.1}s] COMPLETED", start.elapsed().as_secs_f64());
            }
            ScanMessage::Cancelled => {
                println!("[{:>6.1}s] CANCELLED", start.elapsed().as_secs_f64());
            }
            ScanMessage::Error(e) => {
                println!("[{:>6.1}s] ERROR: {}", start.elapsed().as_secs_f64(), e);
            }
        }
    }

    let report = match handle.join() {
        Ok(Ok(report)) => report,
        Ok(Err(e)) => {
            eprintln!("scan failed: {e}");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("scan thread panicked");
            std::process::exit(1);
        }
    };

    for (i, entry) in report.top.iter().enumerate() {
        println!("{:>3} {:>12}  {}", i + 1, format_size(entry.occupied_bytes), entry.path.display());
    }
    println!(
        "\nFinal: {} files, {} occupied, {} denied",
        format_count(report.files_scanned),
        format_size(report.bytes_total),
        format_count(report.denied)
    );
}
