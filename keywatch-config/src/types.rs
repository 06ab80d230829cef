//! Core configuration types shared across the keywatch crates.

use serde::{Deserialize, Serialize};

/// A keybinding configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key filter string, e.g. `"ctrl+shift+b"`. An empty string matches
    /// every event of the subscribed kind.
    pub keys: String,
    /// Action name, e.g. `"open_palette"`.
    pub action: String,
}

/// Options controlling how compiled key filters evaluate events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Disable the physical-code fallback that lets a single-character
    /// token like `"a"` match code `KeyA`.
    #[serde(default)]
    pub ignore_key: bool,
    /// Reject events flagged as OS auto-repeat.
    #[serde(default)]
    pub ignore_repeat: bool,
}

/// Which keyboard event stream a binding subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEventKind {
    /// Key press events (including auto-repeats).
    #[default]
    Keydown,
    /// Key release events.
    Keyup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_options_default_to_false() {
        let options = FilterOptions::default();
        assert!(!options.ignore_key);
        assert!(!options.ignore_repeat);
    }

    #[test]
    fn event_kind_defaults_to_keydown() {
        assert_eq!(KeyEventKind::default(), KeyEventKind::Keydown);
    }

    #[test]
    fn event_kind_serializes_lowercase() {
        let yaml = serde_yaml_ng::to_string(&KeyEventKind::Keyup).unwrap();
        assert_eq!(yaml.trim(), "keyup");
    }

    #[test]
    fn key_binding_round_trips() {
        let binding = KeyBinding {
            keys: "ctrl+shift+b".to_string(),
            action: "toggle_sidebar".to_string(),
        };
        let yaml = serde_yaml_ng::to_string(&binding).unwrap();
        let back: KeyBinding = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(back, binding);
    }
}
