/// Centralized keybindings and help text for the CareerCompass TUI
use crossterm::event::{KeyCode, KeyModifiers};

pub struct KeyMap;

impl KeyMap {
    /// Get help text for all keybindings
    pub fn help_text() -> Vec<(&'static str, &'static str)> {
        vec![
            ("j/↓", "Move down"),
            ("k/↑", "Move up"),
            ("Tab", "Next form field"),
            ("Space", "Toggle interest / milestone"),
            ("Enter", "Confirm / select"),
            ("e", "Edit profile"),
            ("b", "Back to dashboard"),
            ("t", "Toggle high-contrast"),
            ("?", "Show help"),
            ("q/Esc", "Back / quit"),
        ]
    }

    /// Check if key is quit/back
    pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('q') | KeyCode::Esc) || Self::is_ctrl_c(code, modifiers)
    }

    /// Check if key is Ctrl-C (hard quit from any screen)
    pub fn is_ctrl_c(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('c')) && modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Check if key is help
    pub fn is_help(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('?'))
    }

    /// Check if key is down
    pub fn is_down(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('j') | KeyCode::Down)
    }

    /// Check if key is up
    pub fn is_up(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('k') | KeyCode::Up)
    }

    /// Check if key is confirm
    pub fn is_confirm(code: KeyCode) -> bool {
        matches!(code, KeyCode::Enter)
    }

    /// Check if key is space (for toggling checkboxes)
    pub fn is_space(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char(' '))
    }

    /// Check if key is edit profile
    pub fn is_edit_profile(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('e'))
    }

    /// Check if key is back to dashboard
    pub fn is_back(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('b'))
    }

    /// Check if key is toggle theme
    pub fn is_toggle_theme(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('t'))
    }
}
