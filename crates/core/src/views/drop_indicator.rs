use trackline_protocol::{Rect, RenderCommand, ThemeToken};

use crate::drag::{DragMode, DragSession};
use crate::geometry::{ITEM_HEIGHT, LANE_ROW_HEIGHT};

/// Highlight the candidate lane while a move drag is in progress.
///
/// Resize drags never change lanes, so they produce no indicator.
pub fn render_drop_indicator(session: &DragSession, canvas_width: f64) -> Option<RenderCommand> {
    if session.mode() != DragMode::Move || canvas_width <= 0.0 {
        return None;
    }
    let top = session.candidate_lane() as f64 * LANE_ROW_HEIGHT;
    Some(RenderCommand::DrawRect {
        rect: Rect::new(0.0, top, canvas_width, ITEM_HEIGHT),
        color: ThemeToken::DropIndicator,
        border_color: None,
        label: None,
        item_id: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use trackline_protocol::{Point, TimelineItem};

    fn d(s: &str) -> NaiveDate {
        crate::date::parse_date(s).expect("valid test date")
    }

    fn item() -> TimelineItem {
        TimelineItem::new(1, d("2024-01-01"), d("2024-01-05"), "x")
    }

    fn metrics() -> crate::drag::DragMetrics {
        crate::drag::DragMetrics {
            pixels_per_day: 20.0,
            lane_row_height: LANE_ROW_HEIGHT,
            lane_count: 6,
        }
    }

    #[test]
    fn move_drag_highlights_candidate_lane() {
        let it = item();
        let mut session = DragSession::begin(DragMode::Move, &it, Point::new(0.0, 0.0), 0);
        session.update(Point::new(0.0, 170.0), &metrics());
        let cmd = render_drop_indicator(&session, 800.0).expect("indicator");
        if let RenderCommand::DrawRect { rect, .. } = cmd {
            assert!((rect.y - 2.0 * LANE_ROW_HEIGHT).abs() < f64::EPSILON);
            assert!((rect.w - 800.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn resize_drag_has_no_indicator() {
        let it = item();
        let mut session = DragSession::begin(DragMode::ResizeEnd, &it, Point::new(0.0, 0.0), 0);
        session.update(Point::new(40.0, 0.0), &metrics());
        assert!(render_drop_indicator(&session, 800.0).is_none());
    }
}
