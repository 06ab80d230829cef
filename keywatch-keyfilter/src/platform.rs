//! Alias tables for key filter tokens.
//!
//! Contains:
//! - The canonical modifier set used for significant-token counting
//! - Modifier alias table (lowercase token → canonical modifier name)
//! - Key alias table (lowercase symbolic token → logical key value)

/// Canonical modifier names, as reported by the platform's per-modifier
/// held-state query.
pub const KEYBOARD_MODIFIERS: [&str; 5] = ["Alt", "Control", "Meta", "OS", "Shift"];

/// Resolve a lowercase token to a canonical modifier name.
///
/// Returns `None` for tokens that are not modifier aliases. Canonical
/// names themselves (`"Alt"`, `"OS"`, ...) are not in this table; the
/// filter tries unresolved tokens verbatim against the modifier-state
/// query, which accepts them case-sensitively.
pub fn modifier_alias(token: &str) -> Option<&'static str> {
    match token {
        "alt" | "option" => Some("Alt"),
        "ctrl" | "control" => Some("Control"),
        "shift" => Some("Shift"),
        "meta" => Some("Meta"),
        _ => None,
    }
}

/// Resolve a lowercase symbolic token to the logical key value it
/// abbreviates.
///
/// These cover keys whose logical values are awkward to write in a
/// `+`-joined combo string (`+` itself, the space character) or longer
/// than anyone wants to type (`ArrowUp`). Returns `None` for
/// unrecognised tokens.
pub fn key_alias(token: &str) -> Option<&'static str> {
    match token {
        "plus" => Some("+"),
        "up" => Some("ArrowUp"),
        "down" => Some("ArrowDown"),
        "left" => Some("ArrowLeft"),
        "right" => Some("ArrowRight"),
        "space" => Some(" "),
        "esc" => Some("Escape"),
        _ => None,
    }
}

/// Whether a logical key value is itself one of the canonical modifier
/// names (pressing the Shift key alone reports `key == "Shift"`).
pub fn is_modifier_key(key: &str) -> bool {
    KEYBOARD_MODIFIERS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_aliases_resolve() {
        assert_eq!(modifier_alias("ctrl"), Some("Control"));
        assert_eq!(modifier_alias("control"), Some("Control"));
        assert_eq!(modifier_alias("option"), Some("Alt"));
        assert_eq!(modifier_alias("alt"), Some("Alt"));
        assert_eq!(modifier_alias("shift"), Some("Shift"));
        assert_eq!(modifier_alias("meta"), Some("Meta"));
    }

    #[test]
    fn canonical_names_are_not_aliases() {
        // Uppercase canonical names go straight to the modifier-state query
        assert_eq!(modifier_alias("Alt"), None);
        assert_eq!(modifier_alias("OS"), None);
    }

    #[test]
    fn key_aliases_resolve() {
        assert_eq!(key_alias("plus"), Some("+"));
        assert_eq!(key_alias("space"), Some(" "));
        assert_eq!(key_alias("esc"), Some("Escape"));
        assert_eq!(key_alias("up"), Some("ArrowUp"));
        assert_eq!(key_alias("down"), Some("ArrowDown"));
        assert_eq!(key_alias("left"), Some("ArrowLeft"));
        assert_eq!(key_alias("right"), Some("ArrowRight"));
    }

    #[test]
    fn unknown_tokens_resolve_to_none() {
        assert_eq!(modifier_alias("hyper"), None);
        assert_eq!(key_alias("pgup"), None);
    }

    #[test]
    fn modifier_key_detection() {
        assert!(is_modifier_key("Shift"));
        assert!(is_modifier_key("OS"));
        assert!(!is_modifier_key("a"));
        assert!(!is_modifier_key("shift"));
    }
}
