use std::collections::HashMap;

use trackline_protocol::{ItemId, LANE_TOKENS, Point, TimelineItem};

use crate::drag::{DragMetrics, DragMode, DragSession};
use crate::geometry::{self, DateRange, ItemBox, LANE_ROW_HEIGHT, Zoom};
use crate::lanes;

/// One positioned item in a layout snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutItem {
    pub item: TimelineItem,
    /// Visual lane index the item is rendered in.
    pub lane: usize,
    pub bbox: ItemBox,
}

/// Read-only per-render view of the timeline: ordered capacity-capped
/// lanes of positioned items plus the scale values frontends display.
#[derive(Debug, Clone)]
pub struct TimelineLayout {
    pub lanes: Vec<Vec<LaidOutItem>>,
    pub range: Option<DateRange>,
    /// Total virtual canvas width in pixels.
    pub width: f64,
    pub pixels_per_day: f64,
    pub zoom_percent: u32,
    /// Items omitted because their lane index fell past the declared
    /// lane-color count. A documented capacity cap, not an error.
    pub dropped: usize,
}

/// The timeline orchestrator.
///
/// Sole owner of the item collection, zoom state, lane overrides, and
/// the active drag session. Pointer events route through the
/// [`DragSession`] state machine; every resulting item mutation is
/// merged back into the collection keyed by id and reported through the
/// update listener. Single-threaded by design: all mutation happens
/// synchronously inside the event handlers.
pub struct Timeline {
    items: Vec<TimelineItem>,
    zoom: Zoom,
    overrides: HashMap<ItemId, usize>,
    drag: Option<DragSession>,
    on_update: Option<Box<dyn FnMut(&TimelineItem)>>,
}

impl Timeline {
    pub fn new(items: Vec<TimelineItem>) -> Self {
        Self {
            items,
            zoom: Zoom::new(),
            overrides: HashMap::new(),
            drag: None,
            on_update: None,
        }
    }

    /// Register the listener invoked whenever an item's dates, name, or
    /// lane change. The environment owns persistence; the core does not.
    pub fn set_on_update(&mut self, listener: impl FnMut(&TimelineItem) + 'static) {
        self.on_update = Some(Box::new(listener));
    }

    pub fn items(&self) -> &[TimelineItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&TimelineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.zoom.zoom_out();
    }

    /// Number of declared visual lanes (the color palette size).
    pub fn lane_count(&self) -> usize {
        LANE_TOKENS.len()
    }

    /// Explicit lane pinning for an item, if the user has dragged it
    /// across a lane boundary.
    pub fn lane_override(&self, id: ItemId) -> Option<usize> {
        self.overrides.get(&id).copied()
    }

    /// The in-progress drag, if any. Frontends read the candidate lane
    /// from here for drop-zone feedback.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Remove an item from the collection. A drag session targeting it
    /// keeps running but degrades to a no-op on every subsequent event.
    pub fn remove_item(&mut self, id: ItemId) {
        self.items.retain(|i| i.id != id);
        self.overrides.remove(&id);
    }

    /// Begin a drag over an item body or one of its edge handles.
    /// Ignored while another session is already active, and when the
    /// item does not exist.
    pub fn pointer_down(&mut self, point: Point, item_id: ItemId, mode: DragMode) {
        if self.drag.is_some() {
            return;
        }
        let lane = self.visual_lane(item_id);
        if let Some(item) = self.item(item_id) {
            self.drag = Some(DragSession::begin(mode, item, point, lane));
        }
    }

    /// Advance the active drag. Emits an item update only when the
    /// computed dates differ from the item's current ones; Move drags
    /// still refresh the candidate lane at zero day delta.
    pub fn pointer_move(&mut self, point: Point) -> Option<TimelineItem> {
        let metrics = self.drag_metrics();
        let session = self.drag.as_mut()?;
        let (start, end) = session.update(point, &metrics)?;
        let id = session.item_id();

        // Target deleted mid-drag: degrade silently.
        let current = self.items.iter().find(|i| i.id == id)?;
        if current.start == start && current.end == end {
            return None;
        }

        let mut updated = current.clone();
        updated.start = start;
        updated.end = end;
        self.apply_update(updated.clone());
        Some(updated)
    }

    /// Finish the active drag: commit the lane override when a Move drag
    /// released in a different lane, then clear the session
    /// unconditionally.
    pub fn pointer_up(&mut self) {
        let Some(session) = self.drag.take() else {
            return;
        };
        if let Some(lane) = session.lane_commit()
            && self.item(session.item_id()).is_some()
        {
            self.overrides.insert(session.item_id(), lane);
            if let Some(item) = self.item(session.item_id()).cloned()
                && let Some(listener) = self.on_update.as_mut()
            {
                listener(&item);
            }
        }
    }

    /// Pointer-cancel finalizes exactly like pointer-up.
    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }

    /// Rename an item. Bypasses the drag machine entirely; the new name
    /// is trimmed and must be non-empty and different from the current
    /// value, otherwise this is a no-op.
    pub fn rename(&mut self, id: ItemId, name: &str) -> Option<TimelineItem> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        let current = self.item(id)?;
        if current.name == trimmed {
            return None;
        }
        let mut updated = current.clone();
        updated.name = trimmed.to_string();
        self.apply_update(updated.clone());
        Some(updated)
    }

    /// Compute the per-render view: recomputed lane assignment with
    /// overrides applied, geometry projection at the current zoom.
    pub fn layout(&self) -> TimelineLayout {
        let range = DateRange::of(&self.items);
        let pixels_per_day = self.zoom.pixels_per_day();
        let width = range
            .as_ref()
            .map(|r| geometry::canvas_width(r, pixels_per_day))
            .unwrap_or(0.0);

        let color_lanes = lanes::color_lanes(&self.items, &self.overrides, self.lane_count());
        let rendered: usize = color_lanes.iter().map(Vec::len).sum();
        let lanes = color_lanes
            .into_iter()
            .enumerate()
            .map(|(lane, members)| {
                members
                    .into_iter()
                    .map(|item| LaidOutItem {
                        item: item.clone(),
                        lane,
                        bbox: range
                            .as_ref()
                            .map(|r| geometry::item_box(item, r.min, pixels_per_day))
                            .unwrap_or(ItemBox {
                                left: 0.0,
                                width: 0.0,
                            }),
                    })
                    .collect()
            })
            .collect();

        TimelineLayout {
            lanes,
            range,
            width,
            pixels_per_day,
            zoom_percent: self.zoom.percent(),
            dropped: self.items.len() - rendered,
        }
    }

    fn drag_metrics(&self) -> DragMetrics {
        DragMetrics {
            pixels_per_day: self.zoom.pixels_per_day(),
            lane_row_height: LANE_ROW_HEIGHT,
            lane_count: self.lane_count(),
        }
    }

    /// Visual lane an item currently renders in: override, else
    /// algorithmic assignment, else 0.
    fn visual_lane(&self, id: ItemId) -> usize {
        self.overrides.get(&id).copied().unwrap_or_else(|| {
            lanes::lane_index_by_id(&self.items)
                .get(&id)
                .copied()
                .unwrap_or(0)
        })
    }

    /// Merge an updated item into the collection keyed by id (replace
    /// matching, preserve others) and notify the listener.
    fn apply_update(&mut self, updated: TimelineItem) {
        if let Some(slot) = self.items.iter_mut().find(|i| i.id == updated.id) {
            *slot = updated.clone();
            if let Some(listener) = self.on_update.as_mut() {
                listener(&updated);
            }
        }
    }
}
