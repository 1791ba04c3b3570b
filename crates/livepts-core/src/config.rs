//! Per-attribute list configuration.

use crate::parser::is_item_separator;
use serde::{Deserialize, Serialize};

/// Configuration for one live point-list attribute.
///
/// Deserializes from partial input: missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Text placed between items on write-back. Default: a single space.
    /// Must be comma-whitespace (see [`ListConfig::has_valid_separator`]).
    pub separator: String,

    /// Text used in place of an absent attribute. With `None`, reading an
    /// absent attribute is an error.
    pub default_value: Option<String>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            separator: " ".to_owned(),
            default_value: None,
        }
    }
}

impl ListConfig {
    /// Use `text` when the attribute is absent.
    #[must_use]
    pub fn with_default(mut self, text: impl Into<String>) -> Self {
        self.default_value = Some(text.into());
        self
    }

    /// Join serialized items with `separator`.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Whether text joined with `separator` parses back into the same items.
    /// Any other separator would make write-back produce malformed text.
    pub fn has_valid_separator(&self) -> bool {
        is_item_separator(&self.separator)
    }
}
