//! Key filter compilation.
//!
//! Compiles compact key specs like `"ctrl+alt+i"` into predicates over
//! [`KeyEvent`]s.
//!
//! Supported combo format: `+`-joined tokens, in any order, at most one
//! of which names a main key.
//!
//! Modifier tokens:
//! - `ctrl`, `control` — Control key
//! - `alt`, `option` — Alt/Option key
//! - `shift` — Shift key
//! - `meta` — Meta/Command key
//! - a canonical name (`Alt`, `Control`, `Meta`, `OS`, `Shift`) is also
//!   accepted verbatim
//!
//! Main-key tokens:
//! - literal key values: `a`, `A`, `1`, `Escape`, `F5`, ...
//! - symbolic aliases: `plus`, `space`, `esc`, `up`, `down`, `left`, `right`
//! - physical codes: `KeyA`, `Digit7`, ...
//!
//! Compilation is total: there is no error channel, and a combo that
//! cannot be satisfied compiles to a predicate that never matches.

use std::fmt;

use keywatch_config::FilterOptions;

use crate::event::KeyEvent;
use crate::platform::{is_modifier_key, key_alias, modifier_alias};

/// A compiled key filter predicate.
pub type KeyFilter = Box<dyn Fn(&KeyEvent) -> bool + Send + Sync>;

/// The filter specification accepted by [`compile`].
pub enum KeySpec {
    /// A single combo string. The empty string matches every event.
    Combo(String),
    /// Alternative combos; an event matches if any alternative matches.
    AnyOf(Vec<String>),
    /// A caller-supplied predicate, returned unchanged by [`compile`].
    /// The caller fully controls matching; [`FilterOptions`] do not apply.
    Predicate(KeyFilter),
}

impl KeySpec {
    /// Wrap a closure as a [`KeySpec::Predicate`].
    pub fn predicate<F>(filter: F) -> Self
    where
        F: Fn(&KeyEvent) -> bool + Send + Sync + 'static,
    {
        KeySpec::Predicate(Box::new(filter))
    }
}

impl fmt::Debug for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySpec::Combo(combo) => f.debug_tuple("Combo").field(combo).finish(),
            KeySpec::AnyOf(combos) => f.debug_tuple("AnyOf").field(combos).finish(),
            KeySpec::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<&str> for KeySpec {
    fn from(combo: &str) -> Self {
        KeySpec::Combo(combo.to_string())
    }
}

impl From<String> for KeySpec {
    fn from(combo: String) -> Self {
        KeySpec::Combo(combo)
    }
}

impl From<Vec<String>> for KeySpec {
    fn from(combos: Vec<String>) -> Self {
        KeySpec::AnyOf(combos)
    }
}

impl From<Vec<&str>> for KeySpec {
    fn from(combos: Vec<&str>) -> Self {
        KeySpec::AnyOf(combos.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for KeySpec {
    fn from(combos: &[&str]) -> Self {
        KeySpec::AnyOf(combos.iter().map(|c| c.to_string()).collect())
    }
}

/// Compile a key spec into a predicate over keyboard events.
///
/// Pure and side-effect-free: the same `(spec, options)` pair always
/// yields an equivalent predicate, so recompiling on a configuration
/// change is cheap and safe.
pub fn compile(spec: KeySpec, options: &FilterOptions) -> KeyFilter {
    match spec {
        KeySpec::Predicate(filter) => filter,
        KeySpec::Combo(combo) => compile_combo(&combo, options),
        KeySpec::AnyOf(combos) => {
            let filters: Vec<KeyFilter> = combos
                .iter()
                .map(|combo| compile_combo(combo, options))
                .collect();
            Box::new(move |event| filters.iter().any(|filter| filter(event)))
        }
    }
}

/// Compile a single combo string.
fn compile_combo(combo: &str, options: &FilterOptions) -> KeyFilter {
    // Convenience form for any key
    if combo.is_empty() {
        return Box::new(|_| true);
    }

    // Stray separators ("ctrl++a") produce empty tokens; drop them.
    let tokens: Vec<String> = combo
        .split('+')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();
    let options = *options;

    Box::new(move |event| {
        if options.ignore_repeat && event.repeat {
            return false;
        }
        // Exact modifier-set matching: the combo must account for every
        // held modifier plus the main key, no more and no fewer. "a"
        // does not match Ctrl+A.
        if tokens.len() != significant_len(event) {
            return false;
        }
        tokens
            .iter()
            .all(|token| token_matches(token, event, &options))
    })
}

/// The event's significant token count: held modifiers, plus one when
/// the key itself is not a modifier.
fn significant_len(event: &KeyEvent) -> usize {
    let mut len = event.modifiers.active_count();
    if !is_modifier_key(&event.key) {
        len += 1;
    }
    len
}

/// Test one combo token against an event. First success wins.
fn token_matches(token: &str, event: &KeyEvent, options: &FilterOptions) -> bool {
    let lower = token.to_lowercase();

    // Modifier token, held on the event. Unaliased tokens are tried
    // verbatim so canonical names pass straight through.
    let modifier = modifier_alias(&lower).unwrap_or(token);
    if event.modifiers.is_active(modifier) {
        return true;
    }

    // Literal key value, or the alias target ("plus" for "+").
    // Single characters compare case-sensitively here.
    if event.key == token || key_alias(&lower) == Some(event.key.as_str()) {
        return true;
    }

    // Named keys (multi-character values) match case-insensitively, so
    // "delete" matches "Delete" without an alias entry.
    if event.key.chars().count() > 1 && event.key.to_lowercase() == lower {
        return true;
    }

    // Physical code, literally or via the "KeyX" fallback. The fallback
    // covers modifier+letter combinations whose logical value is a
    // composition placeholder like "Dead".
    if event.code == token {
        return true;
    }
    if !options.ignore_key && event.code == format!("Key{}", token.to_uppercase()) {
        return true;
    }

    false
}

/// Advisory lint for combo strings.
///
/// Returns a note when a combo names more than one main key; a key event
/// carries a single main key, so such a combo can never match. Purely
/// diagnostic — [`compile`] accepts any string.
pub fn combo_lint(combo: &str) -> Option<String> {
    let main_keys: Vec<&str> = combo
        .split('+')
        .filter(|token| {
            let lower = token.to_lowercase();
            !token.is_empty() && modifier_alias(&lower).is_none() && !is_modifier_key(token)
        })
        .collect();

    if main_keys.len() > 1 {
        Some(format!(
            "combo '{}' names {} main keys ({}); it can never match",
            combo,
            main_keys.len(),
            main_keys.join(", ")
        ))
    } else {
        None
    }
}
