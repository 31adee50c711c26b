//! Program List Component
//!
//! The reorderable item list: rows with drag handles, drop zones between
//! rows, and the inline draft form. Owns a `ListEditor` and reports the
//! plain item sequence through `on_change` after every mutation.
//! Uses leptos-dragdrop with explicit drop zones between rows, for both
//! mouse and touch drags.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{DraftForm, DropZone, ItemRow};
use crate::editor::{DraftMode, EntryId, ListEditor};
use crate::error::EditorResult;
use crate::models::Item;

/// Run a mutation and forward the emitted sequence
pub(crate) fn mutate<F>(editor: RwSignal<ListEditor>, on_change: Callback<Vec<Item>>, f: F)
where
    F: FnOnce(&mut ListEditor) -> EditorResult<Vec<Item>>,
{
    match editor.try_update(f) {
        Some(Ok(items)) => on_change.run(items),
        Some(Err(e)) => log::warn!("edit rejected: {}", e),
        None => {}
    }
}

/// Final position for a finished drag, `None` when the drop resolves to nothing
fn drop_index(editor: &ListEditor, id: EntryId, target: Option<DropTarget>) -> Option<usize> {
    let from = editor.position_of(id)?;
    match target? {
        DropTarget::Row(row) => editor.position_of(EntryId(row)),
        DropTarget::Slot(slot) => Some(slot_to_index(from, slot.min(editor.len()))),
    }
}

/// Open an insert draft after the last row
fn begin_append(editor: &mut ListEditor) -> EditorResult<()> {
    let end = editor.len();
    editor.begin_insert(end)
}

#[component]
pub fn ProgramList(
    /// Current sequence; a value that differs from the editor's replaces it
    #[prop(into)]
    items: Signal<Vec<Item>>,
    #[prop(into)] on_change: Callback<Vec<Item>>,
) -> impl IntoView {
    let editor = RwSignal::new(ListEditor::from_items(items.get_untracked()));

    // Wholesale replacement from outside. Our own emissions come back equal
    // and leave the entry ids alone.
    Effect::new(move |_| {
        let incoming = items.get();
        if editor.with_untracked(|ed| ed.items() != incoming) {
            log::debug!("list replaced from outside ({} items)", incoming.len());
            editor.update(|ed| ed.replace_all(incoming));
        }
    });

    let dnd = create_dnd_signals();
    let on_drop = move |dragged_id: u64, target: Option<DropTarget>| {
        let id = EntryId(dragged_id);
        let to = editor.with_untracked(|ed| drop_index(ed, id, target));
        log::debug!("drop: entry={}, target={:?}, index={:?}", dragged_id, target, to);
        if let Some(Some(items)) = editor.try_update(|ed| ed.move_entry(id, to)) {
            on_change.run(items);
        }
    };
    bind_global_mouseup(dnd, on_drop);
    bind_global_touchend(dnd, on_drop);

    let rows = Memo::new(move |_| editor.with(|ed| ed.rows()));
    let has_draft = move || editor.with(|ed| ed.draft().is_some());

    view! {
        <div class="program-list">
            <Show when=move || editor.with(|ed| ed.is_empty())>
                <p class="empty-hint">"Nenhum item adicionado ainda."</p>
            </Show>

            <DropZone dnd=dnd slot=0 />

            <For
                each=move || rows.get()
                key=|row| (row.id, row.position, row.item.clone())
                children=move |row| {
                    let position = row.position;
                    let id = row.id;
                    let is_last = move || position + 1 == editor.with(|ed| ed.len());
                    let is_editing = Signal::derive(move || {
                        editor.with(|ed| matches!(ed.draft().map(|d| d.mode), Some(DraftMode::Edit(e)) if e == id))
                    });

                    view! {
                        <ItemRow
                            row=row
                            dnd=dnd
                            is_editing=is_editing
                            is_last=Signal::derive(is_last)
                            on_edit=move |_| {
                                if let Err(e) = editor.try_update(|ed| ed.begin_edit(position)).unwrap_or(Ok(())) {
                                    log::warn!("cannot edit: {}", e);
                                }
                            }
                            on_insert_below=move |_| {
                                if let Err(e) = editor.try_update(|ed| ed.begin_insert(position + 1)).unwrap_or(Ok(())) {
                                    log::warn!("cannot insert: {}", e);
                                }
                            }
                            on_remove=move |_| mutate(editor, on_change, |ed| ed.remove_at(position))
                            on_move_up=move |_| mutate(editor, on_change, |ed| ed.reorder(position, position.saturating_sub(1)))
                            on_move_down=move |_| mutate(editor, on_change, |ed| ed.reorder(position, position + 1))
                        />
                        <DropZone dnd=dnd slot=position + 1 />
                    }
                }
            />

            <div class="list-actions">
                <button
                    type="button"
                    class="add-btn"
                    on:click=move |_| {
                        if let Err(e) = editor.try_update(begin_append).unwrap_or(Ok(())) {
                            log::warn!("cannot insert: {}", e);
                        }
                    }
                >
                    "+ Adicionar item"
                </button>
            </div>

            <Show when=has_draft>
                <DraftForm editor=editor on_change=on_change />
            </Show>
        </div>
    }
}
