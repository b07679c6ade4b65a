use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use trackline_protocol::TimelineItem;

use crate::date;

/// Pixels per calendar day at zoom level 1.0.
pub const BASE_PIXELS_PER_DAY: f64 = 20.0;
/// Floor on rendered item width so short items stay visible and clickable.
pub const MIN_ITEM_WIDTH: f64 = 80.0;
/// Vertical extent of one lane row in virtual pixels.
pub const LANE_ROW_HEIGHT: f64 = 80.0;
/// Height of an item bar within its lane row.
pub const ITEM_HEIGHT: f64 = 70.0;

const ZOOM_MIN: f64 = 0.2;
const ZOOM_MAX: f64 = 5.0;
const ZOOM_STEP: f64 = 1.5;

/// Zoom state: a scalar multiplier on pixels-per-day, stepped
/// multiplicatively and clamped to absolute bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zoom {
    level: f64,
}

impl Zoom {
    pub fn new() -> Self {
        Self { level: 1.0 }
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn pixels_per_day(&self) -> f64 {
        BASE_PIXELS_PER_DAY * self.level
    }

    /// Zoom percentage for display, rounded.
    pub fn percent(&self) -> u32 {
        (self.level * 100.0).round() as u32
    }

    pub fn zoom_in(&mut self) {
        self.level = (self.level * ZOOM_STEP).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.level = (self.level / ZOOM_STEP).max(ZOOM_MIN);
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::new()
    }
}

/// Global date range of the timeline: earliest start to latest end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateRange {
    /// Range spanned by an item set, or `None` when the set is empty.
    pub fn of(items: &[TimelineItem]) -> Option<Self> {
        let min = items.iter().map(|i| i.start).min()?;
        let max = items.iter().map(|i| i.end).max()?;
        Some(Self { min, max })
    }

    /// Inclusive day count across the whole range.
    pub fn total_days(&self) -> i64 {
        date::days_between(self.min, self.max)
    }
}

/// Pixel placement of one item on the virtual canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemBox {
    pub left: f64,
    pub width: f64,
}

/// Project an item's date range onto the canvas. Pure function of
/// (item, range start, pixels-per-day).
pub fn item_box(item: &TimelineItem, range_min: NaiveDate, pixels_per_day: f64) -> ItemBox {
    // Zero-based day offset from the range start.
    let days_from_start = date::days_between(range_min, item.start) - 1;
    let duration_days = date::days_between(item.start, item.end);
    ItemBox {
        left: days_from_start as f64 * pixels_per_day,
        width: (duration_days as f64 * pixels_per_day).max(MIN_ITEM_WIDTH),
    }
}

/// Total virtual canvas width for a range at the given scale.
pub fn canvas_width(range: &DateRange, pixels_per_day: f64) -> f64 {
    range.total_days() as f64 * pixels_per_day
}
