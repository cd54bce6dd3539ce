//! Initial view configuration.
//!
//! A `ViewConfig` describes the state a view starts in. It is plain serde data,
//! usually embedded in a larger application config as JSON. Every field is
//! optional; missing fields take the same values as `ViewState::new()`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Starting values for a [`ViewState`](crate::state::ViewState).
///
/// Values are applied through the state's setters, so an unknown `theme` is
/// ignored and `opacity`/`scale` are clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    /// Theme key, e.g. `"light"`
    pub theme: Option<String>,
    pub interactive: bool,
    pub show_labels: bool,
    pub opacity: f32,
    pub scale: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            theme: None,
            interactive: true,
            show_labels: true,
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

impl ViewConfig {
    /// Parses a config from a JSON string.
    ///
    /// # Examples
    /// ```
    /// use roomview::ViewConfig;
    ///
    /// let config = ViewConfig::from_json(r#"{ "theme": "light", "scale": 2.0 }"#).unwrap();
    /// assert_eq!(config.theme.as_deref(), Some("light"));
    /// assert!(config.show_labels);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse view config")
    }

    /// Serializes the config to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize view config")
    }
}
