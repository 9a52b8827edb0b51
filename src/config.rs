//! Dropdown configuration.
//!
//! Every field has a default, so a configuration file only needs the keys it
//! changes. Command-line flags are applied on top of a loaded file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fields::{FilterMode, Variant};
use crate::filter::DEFAULT_MAX_TEXT;

/// Behaviour and presentation settings for a [`DropdownInput`](crate::tui::dropdown::DropdownInput).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Initial text of the input.
    pub default_value: Option<String>,
    pub filter: FilterMode,
    /// Maximum number of menu rows, including the overflow row.
    pub max: Option<usize>,
    /// Overflow label template, `#` is replaced by the hidden count.
    pub max_text: String,
    pub variant: Variant,
    /// Report every edit through `on_change` so the owner can feed values back.
    pub parent_controlled: bool,
    /// When false, blurring with free text that matches no option clears it.
    pub custom_values_allowed: bool,
    pub title: Option<String>,
    pub placeholder: Option<String>,
    /// Visible menu rows before the list scrolls.
    pub menu_height: u16,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            default_value: None,
            filter: FilterMode::default(),
            max: None,
            max_text: DEFAULT_MAX_TEXT.to_string(),
            variant: Variant::default(),
            parent_controlled: false,
            custom_values_allowed: true,
            title: None,
            placeholder: None,
            menu_height: 8,
        }
    }
}

impl DropdownConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let mut buf = String::new();
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut buf))
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        serde_json::from_str(&buf).map_err(|source| Error::Json { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DropdownConfig::default();
        assert_eq!(config.max_text, "+# more not shown");
        assert_eq!(config.variant, Variant::Modern);
        assert!(config.custom_values_allowed);
        assert!(!config.parent_controlled);
        assert_eq!(config.max, None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: DropdownConfig =
            serde_json::from_str(r#"{"max": 5, "variant": "classic", "filter": "prefix"}"#).unwrap();
        assert_eq!(config.max, Some(5));
        assert_eq!(config.variant, Variant::Classic);
        assert_eq!(config.filter, FilterMode::Prefix);
        assert_eq!(config.menu_height, 8);
        assert!(config.custom_values_allowed);
    }

    #[test]
    fn test_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"custom_values_allowed": false, "default_value": "Perth"}}"#).unwrap();
        let config = DropdownConfig::load(file.path()).unwrap();
        assert!(!config.custom_values_allowed);
        assert_eq!(config.default_value.as_deref(), Some("Perth"));

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, "{{\"max\": \"many\"}}").unwrap();
        assert!(matches!(DropdownConfig::load(bad.path()), Err(Error::Json { .. })));
    }
}
