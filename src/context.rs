//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::models::Item;
use crate::store::{self, ProgramStore};

/// Page-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Items and date of the program being assembled
    pub store: ProgramStore,
    /// Configuration read once at startup
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(store: ProgramStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Tracked read of the items
    pub fn items(&self) -> Vec<Item> {
        store::store_items(&self.store)
    }

    /// Tracked read of the canonical date
    pub fn date(&self) -> Option<String> {
        store::store_date(&self.store)
    }

    pub fn items_untracked(&self) -> Vec<Item> {
        self.store.with_untracked(|state| state.items.clone())
    }

    pub fn date_untracked(&self) -> Option<String> {
        self.store.with_untracked(|state| state.date.clone())
    }

    pub fn set_items(&self, items: Vec<Item>) {
        store::store_set_items(&self.store, items);
    }

    pub fn set_date(&self, date: Option<String>) {
        store::store_set_date(&self.store, date);
    }

    /// Message text for the current program
    pub fn message(&self) -> String {
        let date = self.date();
        self.config
            .with_value(|config| config.message.render(&self.items(), date.as_deref()))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
