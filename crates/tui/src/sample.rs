use chrono::NaiveDate;
use trackline_protocol::TimelineItem;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Built-in demo item set: a small product launch plan with enough
/// overlap to exercise multiple lanes.
pub fn items() -> Vec<TimelineItem> {
    vec![
        TimelineItem::new(1, date(2021, 1, 14), date(2021, 1, 22), "Recruit team"),
        TimelineItem::new(2, date(2021, 1, 18), date(2021, 1, 28), "Draft plan"),
        TimelineItem::new(3, date(2021, 1, 20), date(2021, 1, 20), "Kickoff call"),
        TimelineItem::new(4, date(2021, 1, 29), date(2021, 2, 4), "Design review"),
        TimelineItem::new(5, date(2021, 2, 1), date(2021, 2, 11), "Build prototype"),
        TimelineItem::new(6, date(2021, 2, 3), date(2021, 2, 5), "Vendor quotes"),
        TimelineItem::new(7, date(2021, 2, 12), date(2021, 2, 18), "User testing"),
        TimelineItem::new(8, date(2021, 2, 15), date(2021, 2, 26), "Iterate on feedback"),
        TimelineItem::new(9, date(2021, 3, 1), date(2021, 3, 5), "Launch checklist"),
        TimelineItem::new(10, date(2021, 3, 8), date(2021, 3, 8), "Ship"),
    ]
}
