//! Integration test: drive full pointer interactions through the
//! orchestrator and verify the layout, render commands, and lane
//! overrides stay consistent across recomputes.

use chrono::NaiveDate;
use trackline_core::drag::DragMode;
use trackline_core::timeline::Timeline;
use trackline_core::views::{date_axis, drop_indicator, lane_track};
use trackline_core::{DateRange, items};
use trackline_protocol::{Point, RenderCommand, TimelineItem};

fn d(s: &str) -> NaiveDate {
    trackline_core::date::parse_date(s).expect("valid test date")
}

fn project_plan() -> Vec<TimelineItem> {
    vec![
        TimelineItem::new(1, d("2021-01-14"), d("2021-01-22"), "Recruit team"),
        TimelineItem::new(2, d("2021-01-18"), d("2021-01-28"), "Draft schedule"),
        TimelineItem::new(3, d("2021-01-29"), d("2021-02-04"), "Design review"),
        TimelineItem::new(4, d("2021-02-01"), d("2021-02-11"), "Prototype"),
        TimelineItem::new(5, d("2021-02-12"), d("2021-02-18"), "User testing"),
    ]
}

#[test]
fn move_drag_commits_dates_and_lane() {
    let mut tl = Timeline::new(project_plan());

    // Item 5 sits alone at the end; grab its body and drag it two days
    // right and two lanes down.
    tl.pointer_down(Point::new(500.0, 40.0), 5, DragMode::Move);
    let updated = tl
        .pointer_move(Point::new(540.0, 200.0))
        .expect("dates changed");
    assert_eq!(updated.start, d("2021-02-14"));
    assert_eq!(updated.end, d("2021-02-20"));

    // Live feedback before release: candidate lane visible, nothing
    // committed yet.
    let session = tl.drag_session().expect("active session");
    assert_eq!(session.candidate_lane(), 2);
    assert_eq!(tl.lane_override(5), None);

    tl.pointer_up();
    assert_eq!(tl.lane_override(5), Some(2));

    // The override survives unrelated recomputes.
    tl.zoom_in();
    tl.rename(1, "Recruit translators");
    let layout = tl.layout();
    assert!(layout.lanes[2].iter().any(|l| l.item.id == 5));
}

#[test]
fn resize_then_render_reflects_new_duration() {
    let mut tl = Timeline::new(project_plan());

    tl.pointer_down(Point::new(0.0, 0.0), 3, DragMode::ResizeEnd);
    tl.pointer_move(Point::new(60.0, 0.0));
    tl.pointer_up();

    let item = tl.item(3).expect("exists");
    assert_eq!(item.end, d("2021-02-07"));

    let layout = tl.layout();
    let laid_out = layout
        .lanes
        .iter()
        .flatten()
        .find(|l| l.item.id == 3)
        .expect("rendered");
    // 10 inclusive days at 20 px/day.
    assert!((laid_out.bbox.width - 200.0).abs() < f64::EPSILON);
}

#[test]
fn render_commands_cover_axis_track_and_indicator() {
    let mut tl = Timeline::new(project_plan());
    let layout = tl.layout();
    let range = layout.range.expect("non-empty");

    let mut commands = date_axis::render_date_axis(
        &range,
        layout.pixels_per_day,
        layout.lanes.len() as f64 * 80.0,
    );
    commands.extend(lane_track::render_lane_track(&layout));

    let hit_rects = commands
        .iter()
        .filter(|c| matches!(c, RenderCommand::DrawRect { item_id: Some(_), .. }))
        .count();
    assert_eq!(hit_rects, 5);

    // No indicator while idle; one while a move drag is live.
    assert!(tl.drag_session().is_none());
    tl.pointer_down(Point::new(0.0, 0.0), 1, DragMode::Move);
    tl.pointer_move(Point::new(0.0, 90.0));
    let session = tl.drag_session().expect("active");
    assert!(drop_indicator::render_drop_indicator(session, layout.width).is_some());
    tl.pointer_cancel();
    assert!(tl.drag_session().is_none());
}

#[test]
fn loaded_file_round_trips_through_layout() {
    let data = br#"[
        {"id": 10, "start": "2024-03-01", "end": "2024-03-05", "name": "A"},
        {"id": 11, "start": "2024-03-04", "end": "2024-03-09", "name": "B"},
        {"id": 12, "start": "bogus", "end": "2024-03-09", "name": "C"}
    ]"#;
    let outcome = items::parse_items(data).expect("valid JSON");
    assert_eq!(outcome.skipped, 1);

    let tl = Timeline::new(outcome.items);
    let layout = tl.layout();
    let rendered: usize = layout.lanes.iter().map(Vec::len).sum();
    assert_eq!(rendered, 2);

    let range = layout.range.expect("non-empty");
    assert_eq!(
        range,
        DateRange {
            min: d("2024-03-01"),
            max: d("2024-03-09"),
        }
    );
}
