//! Drop Zone Component
//!
//! A horizontal line drop zone between rows for drag-and-drop reordering.

use leptos::prelude::*;
use leptos_dragdrop::*;

/// Drop zone shown between rows while dragging. `slot` is the gap before
/// row `slot`.
#[component]
pub fn DropZone(
    dnd: DndSignals,
    slot: usize,
) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Slot(s)) if s == slot)
    };

    // Only show when dragging
    let is_dragging = move || dnd.dragging_id_read.get().is_some();

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            data-dnd-slot=slot.to_string()
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
