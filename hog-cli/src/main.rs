mod app;
mod report;
mod tui;
mod ui;

use std::fs::{self, File};
use std::io::{self, IsTerminal, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hog_core::{CancellationToken, HogError, ScanConfig, ScanEngine, ScanMessage, ScanReport};
use ratatui::{Terminal, backend::CrosstermBackend};

use app::{Action, AppState};
use tui::{AppEvent, EventHandler, handle_key};
use ui::{DashboardView, Theme};

/// How long the finished dashboard stays up before the report is printed
const FINAL_FRAME_HOLD: Duration = Duration::from_millis(200);

/// HOG - find the files eating the most real disk space on one volume
#[derive(Parser, Debug)]
#[command(name = "hog")]
#[command(about = "Find the largest files by occupied disk space, without leaving the volume")]
#[command(version)]
struct Args {
    /// Path to scan (defaults to the filesystem root)
    #[arg(default_value = "/")]
    path: PathBuf,

    /// Number of files to report
    #[arg(short = 'n', default_value_t = 10)]
    top: usize,

    /// Write diagnostic logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        init_logging(log_file)?;
    }

    // Resolve path, keeping symlinks as typed
    let path = std::path::absolute(&args.path).unwrap_or(args.path.clone());

    // Validate path and terminal before touching the screen
    if fs::symlink_metadata(&path).is_err() {
        eprintln!("Error: {}", HogError::PathNotFound(path));
        std::process::exit(1);
    }
    if !io::stdout().is_terminal() {
        eprintln!("Error: {}", HogError::NotATerminal);
        std::process::exit(1);
    }

    // Interrupts only flip the token; the scan winds down on its own
    let cancel_token = CancellationToken::new();
    {
        let token = cancel_token.clone();
        ctrlc::set_handler(move || token.cancel())?;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    terminal.clear()?;

    // Run app
    let result = run_app(&mut terminal, path, args.top, cancel_token);

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let report = result?;
    report::write_report(&mut io::stdout().lock(), &report, args.top)?;

    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    tracing::info!("hog starting");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    path: PathBuf,
    top_n: usize,
    cancel_token: CancellationToken,
) -> Result<ScanReport> {
    let theme = Theme::default();
    let mut state = AppState::new(path.clone());
    let event_handler = EventHandler::new(50); // 50ms tick rate

    let scan_config = ScanConfig {
        top_n,
        ..ScanConfig::default()
    };
    let (progress_rx, scan_handle) = ScanEngine::new(path, scan_config)
        .with_cancellation(cancel_token.clone())
        .spawn();

    while state.is_running() {
        // Keep only what the latest snapshot says
        while let Ok(msg) = progress_rx.try_recv() {
            match msg {
                ScanMessage::Progress(snapshot) => state.update_snapshot(snapshot),
                ScanMessage::Completed | ScanMessage::Cancelled => state.begin_finalizing(),
                ScanMessage::Error(e) => {
                    state.set_error(e);
                    state.begin_finalizing();
                }
            }
        }

        // External interrupt
        if cancel_token.is_cancelled() {
            state.begin_finalizing();
        }

        if !state.is_running() {
            break;
        }

        terminal.draw(|frame| {
            frame.render_widget(DashboardView::new(&state, &theme), frame.area());
        })?;

        match event_handler.next()? {
            AppEvent::Key(key) => match handle_key(key, state.mode) {
                Action::Quit => state.begin_finalizing(),
                Action::Tick => {}
            },
            AppEvent::Tick => state.tick_spinner(),
            AppEvent::Resize => {
                // Terminal will redraw on next loop
            }
        }
    }

    // Finalizing: stop the walker if it is still going and wait for its report.
    // This frame shows "Finishing..." during the join; the Done frame below is
    // the single final render.
    cancel_token.cancel();
    terminal.draw(|frame| {
        frame.render_widget(DashboardView::new(&state, &theme), frame.area());
    })?;
    let report = scan_handle.join().map_err(|_| HogError::ScanPanicked)??;

    for msg in progress_rx.try_iter() {
        if let ScanMessage::Progress(snapshot) = msg {
            state.update_snapshot(snapshot);
        }
    }

    state.finish();
    terminal.draw(|frame| {
        frame.render_widget(DashboardView::new(&state, &theme), frame.area());
    })?;
    std::thread::sleep(FINAL_FRAME_HOLD);

    Ok(report)
}
