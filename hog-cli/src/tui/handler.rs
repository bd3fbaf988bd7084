use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Action, DashboardMode};

/// Map key events to actions based on current mode
pub fn handle_key(key: KeyEvent, mode: DashboardMode) -> Action {
    match mode {
        DashboardMode::Running => handle_key_running(key),
        DashboardMode::Finalizing | DashboardMode::Done => Action::Tick,
    }
}

fn handle_key_running(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        // Raw mode swallows SIGINT, so Ctrl-C arrives as a key
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        _ => Action::Tick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys_while_running() {
        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            assert_eq!(handle_key(key(code), DashboardMode::Running), Action::Quit);
        }
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_c, DashboardMode::Running), Action::Quit);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(
            handle_key(key(KeyCode::Char('c')), DashboardMode::Running),
            Action::Tick
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('q')), DashboardMode::Done),
            Action::Tick
        );
    }
}
