use crossterm::event::KeyEvent;

use crate::app::{App, Mode};
use crate::keymap::Keymap;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    RotateForward,
    RotateBack,
    ToggleHelp,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Help overlay swallows everything except quit; any other key closes it
    if app.mode == Mode::Help {
        return match keymap.resolve(&key) {
            Some(Action::Quit) => Action::Quit,
            _ => Action::ToggleHelp,
        };
    }

    keymap.resolve(&key).unwrap_or(Action::None)
}
