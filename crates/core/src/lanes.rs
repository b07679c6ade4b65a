use std::collections::HashMap;

use trackline_protocol::{ItemId, TimelineItem};

/// Greedy first-fit interval partitioning.
///
/// Items are stably sorted by start date, then each item goes into the
/// first lane whose last-placed item ends strictly before the item
/// starts. Touching boundaries (end == start) count as overlap, so an
/// item can never start on the day another in the same lane ends. If no
/// lane fits, a new lane is opened.
///
/// Ties on start date keep input order (stable sort), which makes the
/// assignment reproducible for a given input array.
pub fn assign_lanes(items: &[TimelineItem]) -> Vec<Vec<TimelineItem>> {
    let mut sorted: Vec<TimelineItem> = items.to_vec();
    sorted.sort_by_key(|item| item.start);

    let mut lanes: Vec<Vec<TimelineItem>> = Vec::new();
    for item in sorted {
        let slot = lanes.iter_mut().find(|lane| {
            lane.last()
                .is_some_and(|last| last.end < item.start)
        });
        match slot {
            Some(lane) => lane.push(item),
            None => lanes.push(vec![item]),
        }
    }
    lanes
}

/// Algorithmic lane index per item id, derived from [`assign_lanes`].
pub fn lane_index_by_id(items: &[TimelineItem]) -> HashMap<ItemId, usize> {
    let mut map = HashMap::new();
    for (index, lane) in assign_lanes(items).iter().enumerate() {
        for item in lane {
            map.insert(item.id, index);
        }
    }
    map
}

/// The capacity-capped render view: each item lands in its override lane
/// if one exists, otherwise in its algorithmic lane. Items whose lane
/// index is at or past `lane_count` are dropped from the view — the lane
/// set never grows past the declared color palette.
pub fn color_lanes<'a>(
    items: &'a [TimelineItem],
    overrides: &HashMap<ItemId, usize>,
    lane_count: usize,
) -> Vec<Vec<&'a TimelineItem>> {
    let assigned = lane_index_by_id(items);
    let mut lanes: Vec<Vec<&TimelineItem>> = vec![Vec::new(); lane_count];
    for item in items {
        let index = overrides
            .get(&item.id)
            .copied()
            .or_else(|| assigned.get(&item.id).copied())
            .unwrap_or(0);
        if let Some(lane) = lanes.get_mut(index) {
            lane.push(item);
        }
    }
    lanes
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        crate::date::parse_date(s).expect("valid test date")
    }

    fn item(id: u64, start: &str, end: &str) -> TimelineItem {
        TimelineItem::new(id, d(start), d(end), format!("item {id}"))
    }

    #[test]
    fn non_overlapping_share_a_lane() {
        let items = vec![
            item(1, "2024-01-01", "2024-01-05"),
            item(2, "2024-01-06", "2024-01-10"),
        ];
        let lanes = assign_lanes(&items);
        assert_eq!(lanes.len(), 1);
        assert_eq!(lanes[0].len(), 2);
    }

    #[test]
    fn touching_boundary_counts_as_overlap() {
        // Second item starts the day the first ends: strict "<" fails,
        // so a second lane opens.
        let items = vec![
            item(1, "2024-01-01", "2024-01-05"),
            item(2, "2024-01-05", "2024-01-10"),
        ];
        let lanes = assign_lanes(&items);
        assert_eq!(lanes.len(), 2);
    }

    #[test]
    fn lane_count_equals_max_simultaneous_overlap() {
        // Three items overlap on Jan 03; a fourth fits after the first.
        let items = vec![
            item(1, "2024-01-01", "2024-01-04"),
            item(2, "2024-01-02", "2024-01-06"),
            item(3, "2024-01-03", "2024-01-08"),
            item(4, "2024-01-06", "2024-01-09"),
        ];
        let lanes = assign_lanes(&items);
        assert_eq!(lanes.len(), 3);
    }

    #[test]
    fn no_lane_holds_overlapping_items() {
        let items = vec![
            item(1, "2024-01-01", "2024-01-10"),
            item(2, "2024-01-03", "2024-01-07"),
            item(3, "2024-01-08", "2024-01-15"),
            item(4, "2024-01-11", "2024-01-12"),
            item(5, "2024-01-02", "2024-01-02"),
        ];
        for lane in assign_lanes(&items) {
            for pair in lane.windows(2) {
                assert!(
                    pair[0].end < pair[1].start,
                    "{} must end strictly before {} starts",
                    pair[0].id,
                    pair[1].id
                );
            }
        }
    }

    #[test]
    fn equal_starts_preserve_input_order() {
        let items = vec![
            item(7, "2024-01-01", "2024-01-03"),
            item(3, "2024-01-01", "2024-01-02"),
        ];
        let lanes = assign_lanes(&items);
        // Both overlap, so two lanes; input order decides who gets lane 0.
        assert_eq!(lanes.len(), 2);
        assert_eq!(lanes[0][0].id, 7);
        assert_eq!(lanes[1][0].id, 3);
    }

    #[test]
    fn override_wins_over_assignment() {
        let items = vec![
            item(1, "2024-01-01", "2024-01-05"),
            item(2, "2024-01-06", "2024-01-10"),
        ];
        let mut overrides = HashMap::new();
        overrides.insert(2, 4);
        let lanes = color_lanes(&items, &overrides, 6);
        assert_eq!(lanes[0].len(), 1);
        assert_eq!(lanes[4].len(), 1);
        assert_eq!(lanes[4][0].id, 2);
    }

    #[test]
    fn items_past_capacity_are_dropped() {
        // Seven mutually overlapping items need seven lanes; with six
        // declared, the last-assigned item vanishes from the view.
        let items: Vec<TimelineItem> = (0..7)
            .map(|i| item(i, "2024-01-01", "2024-01-31"))
            .collect();
        let lanes = color_lanes(&items, &HashMap::new(), 6);
        let rendered: usize = lanes.iter().map(Vec::len).sum();
        assert_eq!(lanes.len(), 6);
        assert_eq!(rendered, 6);
    }

    #[test]
    fn empty_input() {
        assert!(assign_lanes(&[]).is_empty());
        let lanes = color_lanes(&[], &HashMap::new(), 6);
        assert!(lanes.iter().all(Vec::is_empty));
    }
}
