use serde::Deserialize;
use thiserror::Error;
use trackline_protocol::TimelineItem;

use crate::date;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid item JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw item record as it appears on disk: dates are strings.
#[derive(Debug, Deserialize)]
struct RawItem {
    id: u64,
    start: String,
    end: String,
    name: String,
}

/// Result of loading an item file. Records with malformed dates are
/// skipped and counted rather than failing the whole load — one bad
/// record must not block rendering of the rest.
#[derive(Debug)]
pub struct LoadOutcome {
    pub items: Vec<TimelineItem>,
    pub skipped: usize,
}

/// Parse a JSON array of `{ id, start, end, name }` records with
/// `YYYY-MM-DD` date strings.
pub fn parse_items(data: &[u8]) -> Result<LoadOutcome, LoadError> {
    let raw: Vec<RawItem> = serde_json::from_slice(data)?;
    let mut items = Vec::with_capacity(raw.len());
    let mut skipped = 0;
    for record in raw {
        match (date::parse_date(&record.start), date::parse_date(&record.end)) {
            (Some(start), Some(end)) => {
                items.push(TimelineItem::new(record.id, start, end, record.name));
            }
            _ => skipped += 1,
        }
    }
    Ok(LoadOutcome { items, skipped })
}
