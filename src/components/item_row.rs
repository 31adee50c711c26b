//! Item Row Component
//!
//! One program item with its drag handle and row actions.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::editor::Row;

/// A single draggable item row
#[component]
pub fn ItemRow(
    row: Row,
    dnd: DndSignals,
    #[prop(into)] is_editing: Signal<bool>,
    #[prop(into)] is_last: Signal<bool>,
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_insert_below: Callback<()>,
    #[prop(into)] on_remove: Callback<()>,
    #[prop(into)] on_move_up: Callback<()>,
    #[prop(into)] on_move_down: Callback<()>,
) -> impl IntoView {
    let id = row.id.0;
    let is_first = row.position == 0;
    let label = row.item.label;
    let content = row.item.content;
    let has_label = !label.is_empty();
    let has_content = !content.is_empty();

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, id);
    let on_mouseenter = make_on_row_mouseenter(dnd, id);
    let on_mouseleave = make_on_mouseleave(dnd);
    let on_touchstart = make_on_touchstart(dnd, id);

    // Visual state
    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
    let is_drop_target = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Row(tid)) if tid == id)
    };

    let row_class = move || {
        let mut c = String::from("item-row");
        if is_editing.get() { c.push_str(" editing"); }
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=row_class
            data-dnd-row=id.to_string()
            on:mousedown=on_mousedown
            on:touchstart=on_touchstart
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <span class="drag-handle" title="Arraste (ou toque e segure) para reordenar">"⠿"</span>

            <div class="item-text">
                <Show when=move || has_label>
                    <div class="item-label">{label.clone()}</div>
                </Show>
                <Show when=move || has_content>
                    <div class="item-content">{content.clone()}</div>
                </Show>
            </div>

            <div class="item-actions">
                <button
                    type="button"
                    class="move-btn"
                    title="Mover para cima"
                    disabled=is_first
                    on:click=move |_| on_move_up.run(())
                >
                    "↑"
                </button>
                <button
                    type="button"
                    class="move-btn"
                    title="Mover para baixo"
                    disabled=move || is_last.get()
                    on:click=move |_| on_move_down.run(())
                >
                    "↓"
                </button>
                <button type="button" class="action-btn" on:click=move |_| on_edit.run(())>
                    "Editar"
                </button>
                <button type="button" class="action-btn" on:click=move |_| on_insert_below.run(())>
                    "+ Abaixo"
                </button>
                <button type="button" class="remove-btn" on:click=move |_| on_remove.run(())>
                    "Remover"
                </button>
            </div>
        </div>
    }
}
