//! List Editor
//!
//! Ordered program items with stable per-entry identity and a single
//! in-flight draft. Every successful mutation returns the plain item
//! sequence so the caller can forward it upward; entry ids never leave
//! this module except as drag handles.

use crate::error::{EditorError, EditorResult};
use crate::models::Item;

/// Ephemeral identity of an entry, used only for drag tracking and row keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    id: EntryId,
    item: Item,
}

/// What committing the draft will do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    /// Insert a new item at this position
    Insert(usize),
    /// Replace the fields of this entry
    Edit(EntryId),
}

/// The uncommitted item being created or edited
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub mode: DraftMode,
    pub item: Item,
}

/// A row as the list view renders it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    pub position: usize,
    pub id: EntryId,
    pub item: Item,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEditor {
    entries: Vec<Entry>,
    next_id: u64,
    draft: Option<Draft>,
}

impl ListEditor {
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut editor = Self::default();
        editor.replace_all(items);
        editor
    }

    /// Replace the whole list. Every entry gets a fresh id and any draft is
    /// dropped, since its position or target may no longer mean anything.
    pub fn replace_all(&mut self, items: Vec<Item>) {
        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            entries.push(Entry { id: self.fresh_id(), item });
        }
        self.entries = entries;
        self.draft = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The externally visible sequence
    pub fn items(&self) -> Vec<Item> {
        self.entries.iter().map(|e| e.item.clone()).collect()
    }

    pub fn rows(&self) -> Vec<Row> {
        self.entries
            .iter()
            .enumerate()
            .map(|(position, e)| Row { position, id: e.id, item: e.item.clone() })
            .collect()
    }

    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Position the draft will occupy once committed, for placing the inline form
    pub fn draft_position(&self) -> Option<usize> {
        match self.draft.as_ref()?.mode {
            DraftMode::Insert(position) => Some(position.min(self.len())),
            DraftMode::Edit(id) => self.position_of(id),
        }
    }

    // ========================
    // Committed mutations
    // ========================

    pub fn insert_at(&mut self, position: usize, item: Item) -> EditorResult<Vec<Item>> {
        if position > self.len() {
            return Err(self.out_of_range(position));
        }
        let id = self.fresh_id();
        self.entries.insert(position, Entry { id, item });
        Ok(self.items())
    }

    pub fn edit_at(&mut self, position: usize, item: Item) -> EditorResult<Vec<Item>> {
        let len = self.len();
        let entry = self
            .entries
            .get_mut(position)
            .ok_or(EditorError::OutOfRange { position, len })?;
        entry.item = item;
        Ok(self.items())
    }

    pub fn remove_at(&mut self, position: usize) -> EditorResult<Vec<Item>> {
        if position >= self.len() {
            return Err(self.out_of_range(position));
        }
        let removed = self.entries.remove(position);
        if matches!(self.draft, Some(Draft { mode: DraftMode::Edit(id), .. }) if id == removed.id) {
            self.draft = None;
        }
        Ok(self.items())
    }

    /// Move one item; everything between the two positions shifts by one.
    pub fn reorder(&mut self, from: usize, to: usize) -> EditorResult<Vec<Item>> {
        if from >= self.len() {
            return Err(self.out_of_range(from));
        }
        if to >= self.len() {
            return Err(self.out_of_range(to));
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        Ok(self.items())
    }

    /// Drag-drop entry point. An unresolved target, an unknown entry or a
    /// drop onto the current position changes nothing and emits nothing.
    pub fn move_entry(&mut self, id: EntryId, target: Option<usize>) -> Option<Vec<Item>> {
        let from = self.position_of(id)?;
        let to = target?;
        if from == to {
            return None;
        }
        self.reorder(from, to).ok()
    }

    // ========================
    // Draft management
    // ========================

    /// Start creating an item at `position`. Any pending draft is discarded.
    pub fn begin_insert(&mut self, position: usize) -> EditorResult<()> {
        if position > self.len() {
            return Err(self.out_of_range(position));
        }
        self.draft = Some(Draft {
            mode: DraftMode::Insert(position),
            item: Item::default(),
        });
        Ok(())
    }

    /// Start editing the item at `position`, pre-filled with its fields.
    /// Any pending draft is discarded.
    pub fn begin_edit(&mut self, position: usize) -> EditorResult<()> {
        let entry = self
            .entries
            .get(position)
            .ok_or(EditorError::OutOfRange { position, len: self.entries.len() })?;
        self.draft = Some(Draft {
            mode: DraftMode::Edit(entry.id),
            item: entry.item.clone(),
        });
        Ok(())
    }

    pub fn cancel_draft(&mut self) {
        self.draft = None;
    }

    pub fn set_draft_label(&mut self, label: String) {
        if let Some(draft) = self.draft.as_mut() {
            draft.item.label = label;
        }
    }

    pub fn set_draft_content(&mut self, content: String) {
        if let Some(draft) = self.draft.as_mut() {
            draft.item.content = content;
        }
    }

    /// Apply the draft and clear it. On error the draft is kept, except when
    /// its edit target has disappeared.
    pub fn commit_draft(&mut self) -> EditorResult<Vec<Item>> {
        let draft = self.draft.take().ok_or(EditorError::NoDraft)?;
        match draft.mode {
            DraftMode::Insert(position) => {
                let position = position.min(self.len());
                self.insert_at(position, draft.item)
            }
            DraftMode::Edit(id) => {
                let position = self.position_of(id).ok_or(EditorError::DraftTargetGone)?;
                self.edit_at(position, draft.item)
            }
        }
    }

    fn fresh_id(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }

    fn out_of_range(&self, position: usize) -> EditorError {
        EditorError::OutOfRange { position, len: self.len() }
    }
}
