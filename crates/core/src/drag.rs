use chrono::NaiveDate;
use trackline_protocol::{ItemId, Point, TimelineItem};

use crate::date;

/// What a pointer-down started: dragging the item body, or one of its
/// two edge handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Move,
    ResizeStart,
    ResizeEnd,
}

/// Conversion factors the session needs to turn pixel deltas into date
/// and lane deltas. Captured fresh on every pointer-move so zoom changes
/// mid-session stay consistent with what the user sees.
#[derive(Debug, Clone, Copy)]
pub struct DragMetrics {
    pub pixels_per_day: f64,
    pub lane_row_height: f64,
    pub lane_count: usize,
}

/// Ephemeral state of one pointer-down-to-pointer-up interaction.
///
/// Created on pointer-down over an item or handle, updated on every
/// pointer-move, consumed on pointer-up (pointer-cancel finalizes
/// identically). All date math works from the *original* start/end so
/// repeated moves never accumulate rounding error.
#[derive(Debug, Clone)]
pub struct DragSession {
    mode: DragMode,
    item_id: ItemId,
    origin: Point,
    original_start: NaiveDate,
    original_end: NaiveDate,
    original_lane: usize,
    candidate_lane: usize,
}

impl DragSession {
    pub fn begin(mode: DragMode, item: &TimelineItem, origin: Point, lane: usize) -> Self {
        Self {
            mode,
            item_id: item.id,
            origin,
            original_start: item.start,
            original_end: item.end,
            original_lane: lane,
            candidate_lane: lane,
        }
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn original_lane(&self) -> usize {
        self.original_lane
    }

    /// Lane the item would land in if released now. Live drop-zone
    /// feedback for Move drags; equals the original lane otherwise.
    pub fn candidate_lane(&self) -> usize {
        self.candidate_lane
    }

    /// Interpret a pointer position as date mutations.
    ///
    /// Returns the new `(start, end)` pair, or `None` when the movement
    /// is below the one-day threshold in a resize mode (jitter guard).
    /// Move mode always returns dates — the candidate lane updates live
    /// even at zero day delta, and the caller diffs dates against the
    /// item's current values before emitting an update.
    pub fn update(&mut self, pointer: Point, metrics: &DragMetrics) -> Option<(NaiveDate, NaiveDate)> {
        let delta_x = pointer.x - self.origin.x;
        let delta_y = pointer.y - self.origin.y;
        let days_delta = (delta_x / metrics.pixels_per_day).round() as i64;

        if self.mode == DragMode::Move && metrics.lane_count > 0 {
            let lanes_delta = (delta_y / metrics.lane_row_height).round() as i64;
            let max_lane = (metrics.lane_count - 1) as i64;
            self.candidate_lane =
                (self.original_lane as i64 + lanes_delta).clamp(0, max_lane) as usize;
        }

        if days_delta == 0 && self.mode != DragMode::Move {
            return None;
        }

        Some(match self.mode {
            DragMode::Move => (
                date::add_days(self.original_start, days_delta),
                date::add_days(self.original_end, days_delta),
            ),
            DragMode::ResizeStart => {
                let end = self.original_end;
                let mut start = date::add_days(self.original_start, days_delta);
                if start >= end {
                    // One-day minimum duration.
                    start = date::add_days(end, -1);
                }
                (start, end)
            }
            DragMode::ResizeEnd => {
                let start = self.original_start;
                let mut end = date::add_days(self.original_end, days_delta);
                if end <= start {
                    end = date::add_days(start, 1);
                }
                (start, end)
            }
        })
    }

    /// Lane override to commit on release: `Some` only when a Move drag
    /// ends in a different lane than it started.
    pub fn lane_commit(&self) -> Option<usize> {
        (self.mode == DragMode::Move && self.candidate_lane != self.original_lane)
            .then_some(self.candidate_lane)
    }
}
