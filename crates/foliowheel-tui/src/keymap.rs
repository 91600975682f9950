use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use foliowheel_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// A key code plus its modifiers, hashable for table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Resolved key-to-action table built from the configuration
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Build the lookup table from the configured key names
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();

        // First binding wins when two actions claim the same key
        let mut add_binding = |key_str: &str, action: Action| {
            if let Some(binding) = parse_key_binding(key_str) {
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action);
                }
            } else {
                warn!("Invalid key binding: '{}'", key_str);
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.help, Action::ToggleHelp);
        add_binding(&config.rotate_forward, Action::RotateForward);
        add_binding(&config.rotate_forward_alt, Action::RotateForward);
        add_binding(&config.rotate_back, Action::RotateBack);
        add_binding(&config.rotate_back_alt, Action::RotateBack);

        // Ctrl+C always quits, regardless of configuration
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);

        Self { bindings }
    }

    /// Get action for an exact key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// Resolve a key event to an action. Terminals attach Shift to
    /// shifted characters like '?', so a miss retries without it.
    pub fn resolve(&self, key: &KeyEvent) -> Option<Action> {
        let binding = KeyBinding::new(key.code, key.modifiers);
        if let Some(action) = self.bindings.get(&binding) {
            return Some(*action);
        }

        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let without_shift =
                KeyBinding::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT));
            return self.bindings.get(&without_shift).copied();
        }

        None
    }
}

/// Parse Vim-style key notation into a binding.
///
/// Bare characters bind directly ("q", "?"), uppercase implies Shift,
/// and `<...>` wraps named keys and modifier prefixes: "<Down>",
/// "<C-c>", "<S-Tab>".
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if s.starts_with('<') && s.ends_with('>') {
        return parse_bracketed(&s[1..s.len() - 1]);
    }

    if s.len() == 1 {
        let c = s.chars().next()?;
        if c.is_ascii_uppercase() {
            return Some(KeyBinding::shift(KeyCode::Char(c)));
        }
        return Some(KeyBinding::simple(KeyCode::Char(c)));
    }

    None
}

fn parse_bracketed(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        return parse_key_name(rest).map(KeyBinding::ctrl);
    }

    if let Some(rest) = inner.strip_prefix("S-") {
        return parse_key_name(rest).map(KeyBinding::shift);
    }

    parse_key_name(inner).map(KeyBinding::simple)
}

fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "enter" | "cr" => Some(KeyCode::Enter),
        "esc" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "space" => Some(KeyCode::Char(' ')),
        "backspace" => Some(KeyCode::Backspace),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" => Some(KeyCode::PageUp),
        "pagedown" => Some(KeyCode::PageDown),
        _ => {
            // Bare letter after a modifier prefix, as in "<C-c>"
            if name.len() == 1 {
                let c = name.chars().next()?;
                Some(KeyCode::Char(c.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(
            parse_key_binding("q"),
            Some(KeyBinding::simple(KeyCode::Char('q')))
        );
        assert_eq!(
            parse_key_binding("?"),
            Some(KeyBinding::simple(KeyCode::Char('?')))
        );
    }

    #[test]
    fn test_parse_uppercase_keys() {
        assert_eq!(
            parse_key_binding("G"),
            Some(KeyBinding::shift(KeyCode::Char('G')))
        );
    }

    #[test]
    fn test_parse_ctrl_keys() {
        assert_eq!(
            parse_key_binding("<C-c>"),
            Some(KeyBinding::ctrl(KeyCode::Char('c')))
        );
    }

    #[test]
    fn test_parse_arrow_keys() {
        assert_eq!(
            parse_key_binding("<Up>"),
            Some(KeyBinding::simple(KeyCode::Up))
        );
        assert_eq!(
            parse_key_binding("<Down>"),
            Some(KeyBinding::simple(KeyCode::Down))
        );
        assert_eq!(
            parse_key_binding("<Left>"),
            Some(KeyBinding::simple(KeyCode::Left))
        );
        assert_eq!(
            parse_key_binding("<Right>"),
            Some(KeyBinding::simple(KeyCode::Right))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_key_binding("updown"), None);
        assert_eq!(parse_key_binding("<X-q>"), None);
        assert_eq!(parse_key_binding(""), None);
    }

    #[test]
    fn test_keymap_from_config() {
        let config = KeymapConfig::default();
        let keymap = Keymap::from_config(&config);

        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Down)),
            Some(&Action::RotateForward)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Left)),
            Some(&Action::RotateForward)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Up)),
            Some(&Action::RotateBack)
        );
        assert_eq!(
            keymap.get(&KeyBinding::ctrl(KeyCode::Char('c'))),
            Some(&Action::Quit)
        );
    }

    #[test]
    fn test_conflicting_bindings_keep_the_first() {
        let config = KeymapConfig {
            quit: "q".to_string(),
            help: "q".to_string(),
            ..KeymapConfig::default()
        };
        let keymap = Keymap::from_config(&config);

        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
    }

    #[test]
    fn test_resolve_tolerates_shifted_chars() {
        let keymap = Keymap::default();

        let key = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(keymap.resolve(&key), Some(Action::ToggleHelp));

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(keymap.resolve(&key), Some(Action::Quit));

        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(keymap.resolve(&key), None);
    }
}
