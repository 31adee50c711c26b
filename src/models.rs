//! Frontend Models
//!
//! Data structures shared by the editor, formatter and storage.

use serde::{Deserialize, Serialize};

/// A single program entry (matches the stored JSON shape)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub label: String,
    pub content: String,
}

impl Item {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }

    /// True when neither field carries any text
    pub fn is_blank(&self) -> bool {
        self.label.trim().is_empty() && self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_json_shape() {
        let item = Item::new("Abertura", "Hino 1");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"label":"Abertura","content":"Hino 1"}"#);
    }

    #[test]
    fn test_blank_item() {
        assert!(Item::default().is_blank());
        assert!(Item::new("  ", "").is_blank());
        assert!(!Item::new("", "Oração").is_blank());
    }
}
