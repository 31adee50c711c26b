//! Persistence Bridge
//!
//! Mirrors the program into per-browser storage under two fixed keys. There
//! is no version field: data that no longer parses is dropped on load.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::StorageKeys;
use crate::error::{StorageError, StorageResult};
use crate::models::Item;

/// String key-value storage backend
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

// ========================
// Backends
// ========================

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

fn access_error(key: &str, err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Access {
        key: key.to_string(),
        message: format!("{:?}", err),
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| access_error(key, e))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage.set_item(key, value).map_err(|e| access_error(key, e))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.storage.remove_item(key).map_err(|e| access_error(key, e))
    }
}

/// In-memory storage. Lost on reload.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// ========================
// Program storage
// ========================

pub struct ProgramStorage<S> {
    store: S,
    keys: StorageKeys,
}

impl ProgramStorage<Box<dyn KeyValueStore>> {
    /// Local storage when the browser allows it, memory otherwise
    pub fn browser(keys: StorageKeys) -> Self {
        let store: Box<dyn KeyValueStore> = match BrowserStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("falling back to in-memory storage: {}", e);
                Box::new(MemoryStore::default())
            }
        };
        Self::new(store, keys)
    }
}

impl<S: KeyValueStore> ProgramStorage<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Stored items, or an empty list when missing, unreadable or malformed
    pub fn load_items(&self) -> Vec<Item> {
        let raw = match self.store.get(&self.keys.items) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("could not read saved items: {}", e);
                return Vec::new();
            }
        };
        log::debug!("restoring items from {}: {}", self.keys.items, raw);
        match serde_json::from_str::<Vec<Item>>(&raw) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("discarding malformed saved items: {}", e);
                Vec::new()
            }
        }
    }

    /// Stored date, `None` when missing or empty. The value is not validated.
    pub fn load_date(&self) -> Option<String> {
        match self.store.get(&self.keys.date) {
            Ok(date) => date.filter(|d| !d.is_empty()),
            Err(e) => {
                log::warn!("could not read saved date: {}", e);
                None
            }
        }
    }

    pub fn save_items(&self, items: &[Item]) -> StorageResult<()> {
        let json = serde_json::to_string(items)?;
        log::debug!("saving {} items", items.len());
        self.store.set(&self.keys.items, &json)
    }

    /// Writes the date, or removes the entry when the date is cleared
    pub fn save_date(&self, date: Option<&str>) -> StorageResult<()> {
        log::debug!("saving date: {:?}", date);
        match date {
            Some(date) if !date.is_empty() => self.store.set(&self.keys.date, date),
            _ => self.store.remove(&self.keys.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> ProgramStorage<MemoryStore> {
        ProgramStorage::new(MemoryStore::default(), StorageKeys::default())
    }

    #[test]
    fn test_empty_storage_loads_nothing() {
        let storage = storage();
        assert!(storage.load_items().is_empty());
        assert_eq!(storage.load_date(), None);
    }

    #[test]
    fn test_items_and_date_round_trip() {
        let storage = storage();
        let items = vec![Item::new("Abertura", "Hino 1"), Item::new("", "Oração")];
        storage.save_items(&items).unwrap();
        storage.save_date(Some("2024-03-10")).unwrap();

        assert_eq!(storage.load_items(), items);
        assert_eq!(storage.load_date().as_deref(), Some("2024-03-10"));
    }

    #[test]
    fn test_stored_json_shape() {
        let storage = storage();
        storage.save_items(&[Item::new("Abertura", "Hino 1")]).unwrap();
        let raw = storage.store.get("cultoItems").unwrap();
        assert_eq!(raw.as_deref(), Some(r#"[{"label":"Abertura","content":"Hino 1"}]"#));
    }

    #[test]
    fn test_corrupted_items_load_as_empty() {
        let storage = storage();
        storage.store.set("cultoItems", "{not json").unwrap();
        assert!(storage.load_items().is_empty());

        // Valid JSON with an old schema is discarded the same way
        storage.store.set("cultoItems", r#"{"abertura":"Hino 1"}"#).unwrap();
        assert!(storage.load_items().is_empty());
    }

    #[test]
    fn test_clearing_date_removes_entry() {
        let storage = storage();
        storage.save_date(Some("2024-03-10")).unwrap();
        storage.save_date(None).unwrap();
        assert_eq!(storage.store.get("cultoDate").unwrap(), None);
        assert_eq!(storage.load_date(), None);
    }

    #[test]
    fn test_empty_stored_date_is_no_date() {
        let storage = storage();
        storage.store.set("cultoDate", "").unwrap();
        assert_eq!(storage.load_date(), None);
    }

    #[test]
    fn test_custom_keys() {
        let keys = StorageKeys {
            items: "itens".to_string(),
            date: "data".to_string(),
        };
        let storage = ProgramStorage::new(MemoryStore::default(), keys);
        storage.save_date(Some("2024-03-10")).unwrap();
        assert!(storage.store.get("data").unwrap().is_some());
        assert!(storage.store.get("cultoDate").unwrap().is_none());
    }

    #[test]
    fn test_one_boxed_store_serves_load_and_every_save() {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::default());
        let storage = ProgramStorage::new(store, StorageKeys::default());

        storage.save_items(&[Item::new("Abertura", "Hino 1")]).unwrap();
        storage.save_date(Some("2024-03-10")).unwrap();
        storage.save_items(&[Item::new("Abertura", "Hino 2")]).unwrap();

        // Later saves see the earlier ones
        assert_eq!(storage.load_items(), vec![Item::new("Abertura", "Hino 2")]);
        assert_eq!(storage.load_date().as_deref(), Some("2024-03-10"));
    }
}
