//! Keyboard event model.
//!
//! [`KeyEvent`] carries the fields the filter compiler matches on: the
//! logical key value, the physical key code, the repeat flag, and the
//! held-modifier state. Events are plain data — build them directly, or
//! convert from winit input with [`KeyEvent::from_winit`].

use winit::keyboard::{Key, NamedKey, PhysicalKey};

use crate::platform::KEYBOARD_MODIFIERS;

/// Held state of the canonical modifier keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    pub alt: bool,
    pub control: bool,
    pub meta: bool,
    /// Legacy "OS" modifier. Some platforms report the OS key here
    /// instead of (or in addition to) Meta.
    pub os: bool,
    pub shift: bool,
}

impl ModifierState {
    /// Query a modifier by its canonical name (`"Alt"`, `"Control"`,
    /// `"Meta"`, `"OS"`, `"Shift"`).
    ///
    /// Names are case-sensitive; unknown names are reported inactive.
    pub fn is_active(&self, name: &str) -> bool {
        match name {
            "Alt" => self.alt,
            "Control" => self.control,
            "Meta" => self.meta,
            "OS" => self.os,
            "Shift" => self.shift,
            _ => false,
        }
    }

    /// Number of currently held modifiers.
    pub fn active_count(&self) -> usize {
        KEYBOARD_MODIFIERS
            .iter()
            .filter(|name| self.is_active(name))
            .count()
    }
}

/// A keyboard event in the shape the filter compiler matches on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// Logical key value: `"a"`, `"Escape"`, `" "`, `"Dead"`, ...
    pub key: String,
    /// Physical key code: `"KeyA"`, `"Digit1"`, ...; empty when the
    /// platform could not identify the key position.
    pub code: String,
    /// True when the event is an OS auto-repeat.
    pub repeat: bool,
    /// Modifier state at the time of the event.
    pub modifiers: ModifierState,
}

impl KeyEvent {
    /// Build a `KeyEvent` from winit input state.
    ///
    /// Logical characters keep their produced text, named keys use their
    /// conventional names (with the space key reported as `" "`), and
    /// dead keys become the `"Dead"` placeholder, which lets the filter's
    /// physical-code fallback cover modifier+letter combinations that
    /// compose to nothing. winit folds the OS key into its Super
    /// modifier, so Super is reported as Meta and `os` stays false.
    pub fn from_winit(
        event: &winit::event::KeyEvent,
        modifiers: &winit::event::Modifiers,
    ) -> Self {
        let key = match &event.logical_key {
            Key::Character(text) => text.to_string(),
            Key::Named(NamedKey::Space) => " ".to_string(),
            Key::Named(named) => format!("{named:?}"),
            Key::Dead(_) => "Dead".to_string(),
            Key::Unidentified(_) => "Unidentified".to_string(),
        };

        let code = match event.physical_key {
            PhysicalKey::Code(code) => format!("{code:?}"),
            PhysicalKey::Unidentified(_) => String::new(),
        };

        let state = modifiers.state();
        Self {
            key,
            code,
            repeat: event.repeat,
            modifiers: ModifierState {
                alt: state.alt_key(),
                control: state.control_key(),
                meta: state.super_key(),
                os: false,
                shift: state.shift_key(),
            },
        }
    }
}

// Note: tests for `from_winit` would require constructing a
// winit::event::KeyEvent, which has a private platform-specific field.
// The translation is exercised at runtime; everything downstream of it is
// covered through directly-built KeyEvents.
