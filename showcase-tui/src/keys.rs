//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Whether keystrokes drive navigation or go into the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextView,
    PrevView,
    SwitchView(usize),
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    /// Focus the next categorical selector.
    NextSelector,
    PrevSelector,
    NextOption,
    PrevOption,
    ClearFilter,
    OpenSearch,
    OpenHelp,
    Refresh,
    Input(char),
    Backspace,
    Confirm,
    Cancel,
}

pub fn map_key(event: KeyEvent, mode: InputMode) -> Option<Action> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind == KeyEventKind::Release {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    if mode == InputMode::Search {
        return match code {
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char('f') => Some(Action::NextSelector),
        KeyCode::Char('F') => Some(Action::PrevSelector),
        KeyCode::Char('x') => Some(Action::ClearFilter),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextView),
        KeyCode::BackTab => Some(Action::PrevView),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::PageDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevOption),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextOption),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let idx = match c {
                '1' => 0,
                '2' => 1,
                '3' => 2,
                '4' => 3,
                '5' => 4,
                '6' => 5,
                '7' => 6,
                '8' => 7,
                '9' => 8,
                '0' => 9,
                _ => return None,
            };
            Some(Action::SwitchView(idx))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_search_mode_captures_letters() {
        assert_eq!(map_key(key(KeyCode::Char('q')), InputMode::Search), Some(Action::Input('q')));
        assert_eq!(map_key(key(KeyCode::Char('1')), InputMode::Search), Some(Action::Input('1')));
        assert_eq!(map_key(key(KeyCode::Tab), InputMode::Search), None);
    }

    #[test]
    fn test_normal_mode_navigation() {
        assert_eq!(map_key(key(KeyCode::Char('q')), InputMode::Normal), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Char('/')), InputMode::Normal), Some(Action::OpenSearch));
        assert_eq!(map_key(key(KeyCode::Char('l')), InputMode::Normal), Some(Action::NextOption));
    }

    #[test]
    fn test_ctrl_c_quits_in_any_mode() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event, InputMode::Normal), Some(Action::Quit));
        assert_eq!(map_key(event, InputMode::Search), Some(Action::Quit));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut event = key(KeyCode::Char('j'));
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(event, InputMode::Normal), None);
    }
}
