use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from tasklist.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Heading shown above the input box
    #[serde(default = "default_title")]
    pub title: String,
    /// Shown dimmed while the draft is empty
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides, `name = "#RRGGBB"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            title: default_title(),
            placeholder: default_placeholder(),
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_title() -> String {
    "My Tasks".to_string()
}

fn default_placeholder() -> String {
    "What needs to be done?".to_string()
}

fn default_true() -> bool {
    true
}
