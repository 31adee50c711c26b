//! Program State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: the preview and
//! the storage effects subscribe to `items` and `date` separately.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;

/// The program as the rest of the page sees it
#[derive(Clone, Debug, Default, Store)]
pub struct ProgramState {
    /// Items in program order, without editor ids
    pub items: Vec<Item>,
    /// Canonical `yyyy-mm-dd`, `None` when no date is chosen
    pub date: Option<String>,
}

impl ProgramState {
    pub fn new(items: Vec<Item>, date: Option<String>) -> Self {
        Self { items, date }
    }
}

/// Type alias for the store
pub type ProgramStore = Store<ProgramState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_items(store: &ProgramStore) -> Vec<Item> {
    store.items().get()
}

pub fn store_date(store: &ProgramStore) -> Option<String> {
    store.date().get()
}

pub fn store_set_items(store: &ProgramStore, items: Vec<Item>) {
    *store.items().write() = items;
}

pub fn store_set_date(store: &ProgramStore, date: Option<String>) {
    *store.date().write() = date;
}
