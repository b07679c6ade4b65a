use trackline_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::date;
use crate::geometry::{ITEM_HEIGHT, LANE_ROW_HEIGHT};
use crate::timeline::TimelineLayout;

const LABEL_INSET: f64 = 6.0;
const FONT_SIZE: f64 = 11.0;

/// Render the lane rows and their items.
///
/// Each lane becomes a group: a full-width row background, the lane's
/// color name at the left edge, then one rect per item carrying the
/// lane's color token, the item label, and the item id for hit-testing.
pub fn render_lane_track(layout: &TimelineLayout) -> Vec<RenderCommand> {
    if layout.width <= 0.0 {
        return Vec::new();
    }

    let item_count: usize = layout.lanes.iter().map(Vec::len).sum();
    let mut commands = Vec::with_capacity(layout.lanes.len() * 3 + item_count * 2);

    for (index, lane) in layout.lanes.iter().enumerate() {
        let top = index as f64 * LANE_ROW_HEIGHT;
        let name = ThemeToken::lane_name(index).unwrap_or("Lane");

        commands.push(RenderCommand::BeginGroup {
            id: format!("lane-{index}"),
            label: Some(name.to_string()),
        });
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(0.0, top, layout.width, LANE_ROW_HEIGHT),
            color: ThemeToken::LaneBackground,
            border_color: Some(ThemeToken::LaneBorder),
            label: None,
            item_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(LABEL_INSET, top + LABEL_INSET),
            text: name.to_string(),
            color: ThemeToken::LaneLabel,
            font_size: FONT_SIZE,
            align: TextAlign::Left,
        });

        let item_top = top + (LANE_ROW_HEIGHT - ITEM_HEIGHT) / 2.0;
        for laid_out in lane {
            let color = ThemeToken::lane(index).unwrap_or(ThemeToken::LaneBlue);
            commands.push(RenderCommand::DrawRect {
                rect: Rect::new(laid_out.bbox.left, item_top, laid_out.bbox.width, ITEM_HEIGHT),
                color,
                border_color: Some(ThemeToken::Border),
                label: Some(laid_out.item.name.clone()),
                item_id: Some(laid_out.item.id),
            });
            commands.push(RenderCommand::DrawText {
                position: Point::new(laid_out.bbox.left + LABEL_INSET, item_top + ITEM_HEIGHT - 16.0),
                text: format!(
                    "{} - {}",
                    date::format_date(laid_out.item.start),
                    date::format_date(laid_out.item.end)
                ),
                color: ThemeToken::TextMuted,
                font_size: FONT_SIZE - 2.0,
                align: TextAlign::Left,
            });
        }

        commands.push(RenderCommand::EndGroup);
    }

    commands
}
