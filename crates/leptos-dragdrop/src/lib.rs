//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for sortable lists (kanban columns, sidebars).
//! Uses a movement threshold to distinguish click from drag, and a fixed
//! pixel edge zone on hovered rows to decide before/after insertion.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// What is being dragged: an item id plus where it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSource {
    pub id: u32,
    /// Container (column/list) the item started in
    pub container: u32,
    /// Index within that container
    pub index: usize,
}

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropTarget {
    /// Insertion slot in the container's current (pre-removal) order;
    /// use [`resolve_slot`] to turn it into a splice index.
    Slot { container: u32, index: usize },
    /// Drop into an (empty) container, appended at the end
    Container(u32),
}

/// Which edge of a hovered row the insertion indicator sits on
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Above,
    Below,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Edge zone height in pixels on hovered rows
const EDGE_ZONE_PX: f64 = 10.0;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragSource>>,
    pub dragging_write: WriteSignal<Option<DragSource>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending source (mousedown but not yet past the threshold)
    pub pending_read: ReadSignal<Option<DragSource>>,
    pub pending_write: WriteSignal<Option<DragSource>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragSource>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<DragSource>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Decide which insertion indicator a hovered row should show.
///
/// `cursor_y` is the viewport Y of the pointer, `top`/`bottom` the hovered
/// row's bounding box. Directional: dragging downwards only commits once the
/// cursor crosses into the top edge zone of a lower row, dragging upwards
/// once it crosses into the bottom edge zone of a higher row. Hovering the
/// dragged row itself never yields an indicator.
pub fn indicator_for_hover(
    drag_index: usize,
    hover_index: usize,
    top: f64,
    bottom: f64,
    cursor_y: f64,
) -> Option<Edge> {
    if drag_index == hover_index {
        return None;
    }
    if drag_index < hover_index {
        // Dragging down: commit below the hovered row once past its top zone
        if cursor_y > top + EDGE_ZONE_PX {
            Some(Edge::Below)
        } else {
            Some(Edge::Above)
        }
    } else {
        // Dragging up
        if cursor_y < bottom - EDGE_ZONE_PX {
            Some(Edge::Above)
        } else {
            Some(Edge::Below)
        }
    }
}

/// Insertion index for a drop on `hover_index` with the given edge,
/// accounting for the dragged item leaving `drag_index` first when both
/// live in the same container.
pub fn insertion_index(drag_index: Option<usize>, hover_index: usize, edge: Edge) -> usize {
    let raw = match edge {
        Edge::Above => hover_index,
        Edge::Below => hover_index + 1,
    };
    insertion_index_from_slot(drag_index, raw)
}

/// Turn a raw insertion slot into a splice index, accounting for the
/// dragged item leaving its old position first when it comes from the
/// same container.
pub fn resolve_slot(source: DragSource, container: u32, slot: usize) -> usize {
    let drag_index = (source.container == container).then_some(source.index);
    insertion_index_from_slot(drag_index, slot)
}

fn insertion_index_from_slot(drag_index: Option<usize>, slot: usize) -> usize {
    match drag_index {
        Some(d) if d < slot => slot - 1,
        _ => slot,
    }
}

/// End drag operation. The just-ended flag suppresses the click that the
/// browser dispatches right after a drag's mouseup; a plain click (no drag
/// in progress) must not arm it.
pub fn end_drag(dnd: &DndSignals) {
    let was_dragging = dnd.dragging_read.get_untracked().is_some();
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    if !was_dragging {
        return;
    }
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable items.
/// Records a pending drag with the start position.
pub fn make_on_mousedown(dnd: DndSignals, source: DragSource) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input, textarea or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(source));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start_x = dnd.start_x_read.get_untracked();
            let start_y = dnd.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
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

/// Create mousemove handler for sortable rows: computes the edge indicator
/// from the cursor position and records the resulting slot target.
pub fn make_on_row_mousemove(
    dnd: DndSignals,
    container: u32,
    row_index: usize,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        let Some(dragging) = dnd.dragging_read.get_untracked() else { return };

        let Some(target) = ev.current_target() else { return };
        let Some(el) = target.dyn_ref::<web_sys::HtmlElement>().map(|e| e.clone()) else { return };
        let rect = el.get_bounding_client_rect();

        // Cross-container drags have no "own" index in this list
        let drag_index = if dragging.container == container {
            if dragging.index == row_index {
                dnd.drop_target_write.set(None);
                return;
            }
            Some(dragging.index)
        } else {
            None
        };

        let edge = indicator_for_hover(
            drag_index.unwrap_or(usize::MAX),
            row_index,
            rect.top(),
            rect.bottom(),
            ev.client_y() as f64,
        );
        if let Some(edge) = edge {
            // Raw slot so indicators line up with the rendered rows
            let index = match edge {
                Edge::Above => row_index,
                Edge::Below => row_index + 1,
            };
            dnd.drop_target_write.set(Some(DropTarget::Slot { container, index }));
        }
    }
}

/// Create mouseenter handler for (empty) containers
pub fn make_on_container_mouseenter(dnd: DndSignals, container: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Container(container)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragSource, DropTarget) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_write.set(None);

        if let (Some(source), Some(target)) = (dragging, drop_target) {
            end_drag(&dnd);
            on_drop(source, target);
        } else {
            // Not dragging - just end any pending state.
            // Click event will fire naturally on the element.
            end_drag(&dnd);
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    // A 50px-tall row at y=100..150
    const TOP: f64 = 100.0;
    const BOTTOM: f64 = 150.0;

    #[test]
    fn hovering_own_row_shows_nothing() {
        assert_eq!(indicator_for_hover(2, 2, TOP, BOTTOM, 120.0), None);
    }

    #[test]
    fn dragging_down_commits_after_top_zone() {
        // Cursor still inside the 10px top zone: keep the indicator above
        assert_eq!(indicator_for_hover(0, 2, TOP, BOTTOM, 105.0), Some(Edge::Above));
        // Past the zone: below
        assert_eq!(indicator_for_hover(0, 2, TOP, BOTTOM, 130.0), Some(Edge::Below));
    }

    #[test]
    fn dragging_up_commits_after_bottom_zone() {
        assert_eq!(indicator_for_hover(5, 2, TOP, BOTTOM, 145.0), Some(Edge::Below));
        assert_eq!(indicator_for_hover(5, 2, TOP, BOTTOM, 120.0), Some(Edge::Above));
    }

    #[test]
    fn insertion_index_same_container_adjusts_for_removal() {
        // dragging index 0 below row 2: raw slot 3, minus the vacated slot
        assert_eq!(insertion_index(Some(0), 2, Edge::Below), 2);
        // dragging index 5 above row 2: removal happens after the slot
        assert_eq!(insertion_index(Some(5), 2, Edge::Above), 2);
    }

    #[test]
    fn insertion_index_cross_container_is_raw() {
        assert_eq!(insertion_index(None, 2, Edge::Above), 2);
        assert_eq!(insertion_index(None, 2, Edge::Below), 3);
    }

    #[test]
    fn plain_mouseup_keeps_clicks_enabled() {
        let dnd = create_dnd_signals();
        let source = DragSource { id: 1, container: 0, index: 0 };

        // Mousedown without crossing the threshold: pending, never dragging
        dnd.pending_write.set(Some(source));
        end_drag(&dnd);

        assert_eq!(dnd.pending_read.get_untracked(), None);
        assert!(!dnd.drag_just_ended_read.get_untracked());
    }

    #[test]
    fn resolve_slot_only_adjusts_same_container() {
        let source = DragSource { id: 1, container: 7, index: 0 };
        assert_eq!(resolve_slot(source, 7, 3), 2);
        assert_eq!(resolve_slot(source, 8, 3), 3);

        let below = DragSource { id: 1, container: 7, index: 5 };
        assert_eq!(resolve_slot(below, 7, 3), 3);
    }
}
