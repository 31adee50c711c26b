//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for flat, ordered Leptos lists using mouse and touch
//! events. Mouse drags start after a movement threshold, which separates a
//! click from a drag. Touch drags start after a long press; moving earlier
//! is treated as scrolling.
//!
//! Touch events keep firing on the element where the touch began, so touch
//! targets are found by hit-testing. Rows carry `data-dnd-row="<id>"` and
//! slots carry `data-dnd-slot="<n>"`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop on a row (take that row's position)
    Row(u64),
    /// Drop on the gap before row `n` (`n == len` is the end of the list)
    Slot(usize),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u64>>,
    pub dragging_id_write: WriteSignal<Option<u64>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    /// Pending row id (mousedown or touchstart but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u64>>,
    pub pending_id_write: WriteSignal<Option<u64>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Event timestamp of the pending touchstart
    pub touch_start_ms_read: ReadSignal<f64>,
    pub touch_start_ms_write: WriteSignal<f64>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Long-press time before a touch turns into a drag
const TOUCH_DELAY_MS: f64 = 250.0;

pub const ROW_ATTR: &str = "data-dnd-row";
pub const SLOT_ATTR: &str = "data-dnd-slot";

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u64>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (pending_id_read, pending_id_write) = signal(None::<u64>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (touch_start_ms_read, touch_start_ms_write) = signal(0f64);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        touch_start_ms_read,
        touch_start_ms_write,
    }
}

/// Final index of a row dragged from `from` and dropped on `slot`.
///
/// Removing the row first shifts every later slot down by one.
pub fn slot_to_index(from: usize, slot: usize) -> usize {
    if slot > from {
        slot - 1
    } else {
        slot
    }
}

/// Whether the movement from the mousedown point is enough to start a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// What a pending touch becomes on its first move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchGesture {
    Drag,
    Scroll,
}

/// Held long enough it is a drag, otherwise the page is being scrolled.
/// Any movement before the delay counts (no tolerance).
pub fn classify_touch_move(held_ms: f64) -> TouchGesture {
    if held_ms >= TOUCH_DELAY_MS {
        TouchGesture::Drag
    } else {
        TouchGesture::Scroll
    }
}

/// Drop target from the data attributes of the element under the pointer.
/// The row being dragged is never its own target.
pub fn resolve_drop_target(dragging: u64, row_attr: Option<&str>, slot_attr: Option<&str>) -> Option<DropTarget> {
    if let Some(row) = row_attr.and_then(|v| v.parse::<u64>().ok()) {
        return (row != dragging).then_some(DropTarget::Row(row));
    }
    slot_attr
        .and_then(|v| v.parse::<usize>().ok())
        .map(DropTarget::Slot)
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
}

fn is_form_control(target: Option<web_sys::EventTarget>) -> bool {
    target.is_some_and(|t| {
        t.dyn_ref::<web_sys::HtmlInputElement>().is_some()
            || t.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
            || t.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
    })
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, row_id: u64) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            if is_form_control(ev.target()) { return; }
            dnd.pending_id_write.set(Some(row_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create touchstart handler for draggable rows
/// Records pending drag with its start time
pub fn make_on_touchstart(dnd: DndSignals, row_id: u64) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if ev.touches().length() != 1 { return; }
        if is_form_control(ev.target()) { return; }
        dnd.pending_id_write.set(Some(row_id));
        dnd.touch_start_ms_write.set(ev.time_stamp());
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Hit-test the document at a viewport point
fn drop_target_at(dragging: u64, x: i32, y: i32) -> Option<DropTarget> {
    let doc = web_sys::window()?.document()?;
    let hit = doc.element_from_point(x as f32, y as f32)?;
    let row = hit.closest(&format!("[{}]", ROW_ATTR)).ok().flatten();
    let slot = hit.closest(&format!("[{}]", SLOT_ATTR)).ok().flatten();
    resolve_drop_target(
        dragging,
        row.and_then(|el| el.get_attribute(ROW_ATTR)).as_deref(),
        slot.and_then(|el| el.get_attribute(SLOT_ATTR)).as_deref(),
    )
}

/// Create touchmove handler for document - starts a long-press drag and
/// tracks the target under the finger
pub fn bind_global_touchmove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_touchmove = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        if dnd.dragging_id_read.get_untracked().is_none() {
            let Some(pending) = dnd.pending_id_read.get_untracked() else { return; };
            let held = ev.time_stamp() - dnd.touch_start_ms_read.get_untracked();
            match classify_touch_move(held) {
                TouchGesture::Drag => dnd.dragging_id_write.set(Some(pending)),
                TouchGesture::Scroll => {
                    dnd.pending_id_write.set(None);
                    return;
                }
            }
        }

        let Some(dragging) = dnd.dragging_id_read.get_untracked() else { return; };
        // Keep the page from scrolling under the drag
        ev.prevent_default();
        if let Some(touch) = ev.touches().get(0) {
            let target = drop_target_at(dragging, touch.client_x(), touch.client_y());
            if dnd.drop_target_read.get_untracked() != target {
                dnd.drop_target_write.set(target);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                on_touchmove.as_ref().unchecked_ref(),
                &options,
            );
        }
    }
    on_touchmove.forget();
}

/// Create mouseenter handler for rows
pub fn make_on_row_mouseenter(dnd: DndSignals, row_id: u64) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            // Dropping a row on itself resolves to nothing
            if dragging != row_id {
                dnd.drop_target_write.set(Some(DropTarget::Row(row_id)));
            }
        }
    }
}

/// Create mouseenter handler for slots
pub fn make_on_slot_mouseenter(dnd: DndSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Slot(slot)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Finish the gesture and report it when a drag was in progress
fn finish_drag<F>(dnd: &DndSignals, on_drop: &F)
where
    F: Fn(u64, Option<DropTarget>),
{
    let dragging_id = dnd.dragging_id_read.get_untracked();
    let drop_target = dnd.drop_target_read.get_untracked();
    end_drag(dnd);

    if let Some(dragged) = dragging_id {
        on_drop(dragged, drop_target);
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop` fires for every finished drag, with `None` when the row was
/// released outside any row or slot. Plain clicks never reach it.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u64, Option<DropTarget>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        finish_drag(&dnd, &on_drop);
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

/// Bind global touchend handler for drop detection, same contract as
/// [`bind_global_mouseup`]. A cancelled touch ends the drag without a drop.
pub fn bind_global_touchend<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u64, Option<DropTarget>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_touchend = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
        finish_drag(&dnd, &on_drop);
    });
    let on_touchcancel = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
        end_drag(&dnd);
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("touchend", on_touchend.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("touchcancel", on_touchcancel.as_ref().unchecked_ref());
        }
    }
    on_touchend.forget();
    on_touchcancel.forget();

    bind_global_touchmove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_slot_to_index_moving_down() {
        // Row 0 dropped in the gap before row 3 lands at index 2
        assert_eq!(slot_to_index(0, 3), 2);
        assert_eq!(slot_to_index(0, 2), 1);
        assert_eq!(slot_to_index(1, 4), 3);
    }

    #[test]
    fn test_slot_to_index_moving_up() {
        assert_eq!(slot_to_index(2, 0), 0);
        assert_eq!(slot_to_index(2, 1), 1);
    }

    #[test]
    fn test_slot_adjacent_to_self_is_identity() {
        assert_eq!(slot_to_index(1, 1), 1);
        assert_eq!(slot_to_index(1, 2), 1);
    }

    #[test]
    fn test_drag_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 10)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_touch_long_press() {
        assert_eq!(classify_touch_move(0.0), TouchGesture::Scroll);
        assert_eq!(classify_touch_move(249.9), TouchGesture::Scroll);
        assert_eq!(classify_touch_move(250.0), TouchGesture::Drag);
        assert_eq!(classify_touch_move(1200.0), TouchGesture::Drag);
    }

    #[test]
    fn test_resolve_drop_target() {
        assert_eq!(resolve_drop_target(1, Some("4"), None), Some(DropTarget::Row(4)));
        assert_eq!(resolve_drop_target(1, None, Some("0")), Some(DropTarget::Slot(0)));
        // Over itself, or over nothing
        assert_eq!(resolve_drop_target(4, Some("4"), None), None);
        assert_eq!(resolve_drop_target(1, None, None), None);
        assert_eq!(resolve_drop_target(1, Some("x"), Some("y")), None);
    }

    #[test]
    fn test_end_drag_clears_gesture_state() {
        let owner = Owner::new();
        owner.with(|| {
            let dnd = create_dnd_signals();
            dnd.pending_id_write.set(Some(3));
            dnd.dragging_id_write.set(Some(3));
            dnd.drop_target_write.set(Some(DropTarget::Slot(1)));

            end_drag(&dnd);

            assert_eq!(dnd.pending_id_read.get_untracked(), None);
            assert_eq!(dnd.dragging_id_read.get_untracked(), None);
            assert_eq!(dnd.drop_target_read.get_untracked(), None);
        });
    }

    #[test]
    fn test_finish_drag_reports_only_real_drags() {
        let owner = Owner::new();
        owner.with(|| {
            let dnd = create_dnd_signals();
            let dropped = std::cell::RefCell::new(Vec::new());
            let record = |id: u64, target: Option<DropTarget>| dropped.borrow_mut().push((id, target));

            // A click: pending but never dragging
            dnd.pending_id_write.set(Some(2));
            finish_drag(&dnd, &record);
            assert!(dropped.borrow().is_empty());

            dnd.dragging_id_write.set(Some(2));
            dnd.drop_target_write.set(Some(DropTarget::Row(5)));
            finish_drag(&dnd, &record);
            dnd.dragging_id_write.set(Some(2));
            finish_drag(&dnd, &record);

            assert_eq!(*dropped.borrow(), vec![(2, Some(DropTarget::Row(5))), (2, None)]);
            assert_eq!(dnd.dragging_id_read.get_untracked(), None);
        });
    }
}
