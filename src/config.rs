//! Application Configuration
//!
//! Compiled-in defaults, optionally overridden by a JSON block in
//! `index.html`:
//!
//! ```html
//! <script id="app-config" type="application/json">
//!   { "share_base_url": "https://wa.me/", "log_level": "debug" }
//! </script>
//! ```
//!
//! Missing fields keep their defaults.

use std::str::FromStr;

use serde::Deserialize;

use crate::message::MessageTemplate;

/// Element id of the inline config block
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Local storage keys
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub items: String,
    pub date: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            items: "cultoItems".to_string(),
            date: "cultoDate".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub message: MessageTemplate,
    /// Messaging link; the encoded text is appended as `?text=`
    pub share_base_url: String,
    pub storage: StorageKeys,
    pub date_placeholder: String,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            message: MessageTemplate::default(),
            share_base_url: "https://wa.me/".to_string(),
            storage: StorageKeys::default(),
            date_placeholder: "Selecione a data do culto".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the inline config block, falling back to defaults
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(text) if !text.trim().is_empty() => match Self::from_json(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring invalid #{} block: {}", CONFIG_ELEMENT_ID, e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    /// Unknown level names fall back to `info`
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(self.log_level.trim()).unwrap_or(log::LevelFilter::Info)
    }
}
