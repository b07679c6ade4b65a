use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable identifier for a timeline item.
pub type ItemId = u64;

/// A date-ranged item rendered as one bar on the timeline.
///
/// This is the single IR shared between the engine and every frontend:
/// the engine owns the collection, frontends receive clones through the
/// layout snapshot and hand edits back through the orchestrator.
///
/// Invariant: `start <= end` at all times. Construction and every mutation
/// path (move, resize with one-day-minimum clamping) preserve it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub id: ItemId,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub name: String,
}

impl TimelineItem {
    pub fn new(id: ItemId, start: NaiveDate, end: NaiveDate, name: impl Into<String>) -> Self {
        // Normalize rather than panic on reversed input.
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        Self {
            id,
            start,
            end,
            name: name.into(),
        }
    }
}
