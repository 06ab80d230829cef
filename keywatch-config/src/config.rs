//! Loading and validation of keywatch configuration files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{FilterOptions, KeyBinding, KeyEventKind};

/// Top-level keywatch configuration.
///
/// Every field is optional in the YAML source; missing fields take their
/// defaults (no bindings, both filter options off, `keydown`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Keybinding entries, in the order they should be consulted.
    #[serde(default)]
    pub bindings: Vec<KeyBinding>,
    /// Filter evaluation options applied to every binding.
    #[serde(default)]
    pub options: FilterOptions,
    /// Which event stream the bindings subscribe to.
    #[serde(default)]
    pub event: KeyEventKind,
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&text)?;
        log::info!(
            "Loaded {} keybindings from {}",
            config.bindings.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse and validate a YAML config document.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field values.
    ///
    /// Filter strings are deliberately not validated here: compiling a
    /// filter is total, and a combo that can never match is a diagnostic
    /// concern for the registry, not a load failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, binding) in self.bindings.iter().enumerate() {
            if binding.action.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "binding {} ('{}') has an empty action",
                    i, binding.keys
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_takes_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert!(config.bindings.is_empty());
        assert_eq!(config.options, FilterOptions::default());
        assert_eq!(config.event, KeyEventKind::Keydown);
    }

    #[test]
    fn parses_bindings_and_options() {
        let yaml = r#"
bindings:
  - keys: ctrl+shift+b
    action: toggle_sidebar
  - keys: esc
    action: close_modal
options:
  ignore_repeat: true
event: keyup
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.bindings.len(), 2);
        assert_eq!(config.bindings[0].action, "toggle_sidebar");
        assert!(config.options.ignore_repeat);
        assert!(!config.options.ignore_key);
        assert_eq!(config.event, KeyEventKind::Keyup);
    }

    #[test]
    fn empty_action_fails_validation() {
        let yaml = r#"
bindings:
  - keys: ctrl+a
    action: ""
"#;
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let err = Config::from_yaml("bindings: [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn empty_keys_string_is_valid() {
        // "" is the documented match-any filter, not a config mistake
        let yaml = r#"
bindings:
  - keys: ""
    action: log_every_key
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.bindings[0].keys, "");
    }
}
