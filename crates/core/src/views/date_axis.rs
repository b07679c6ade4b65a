use chrono::Datelike;
use trackline_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::date;
use crate::geometry::DateRange;

pub const AXIS_HEIGHT: f64 = 24.0;
const MAJOR_TICK_HEIGHT: f64 = 10.0;
const MINOR_TICK_HEIGHT: f64 = 5.0;
const FONT_SIZE: f64 = 10.0;
const YEAR_LABEL_THRESHOLD_DAYS: i64 = 365;

/// Marker spacing in days for a given scale: sparse when zoomed out,
/// daily when zoomed in.
fn marker_interval(pixels_per_day: f64) -> i64 {
    if pixels_per_day < 15.0 {
        14
    } else if pixels_per_day < 25.0 {
        7
    } else if pixels_per_day < 40.0 {
        3
    } else {
        1
    }
}

/// Render the date ruler: an axis bar with tick marks and date labels at
/// a zoom-dependent interval. First-of-month markers are major (taller
/// tick, gridline extending `grid_height` below the axis). Labels carry
/// the year once the range exceeds a year.
pub fn render_date_axis(
    range: &DateRange,
    pixels_per_day: f64,
    grid_height: f64,
) -> Vec<RenderCommand> {
    let total_days = range.total_days();
    if total_days <= 0 || pixels_per_day <= 0.0 {
        return Vec::new();
    }

    let width = total_days as f64 * pixels_per_day;
    let interval = marker_interval(pixels_per_day);
    let show_year = total_days > YEAR_LABEL_THRESHOLD_DAYS;

    let mut commands = Vec::with_capacity((total_days / interval) as usize * 3 + 1);
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(0.0, 0.0, width, AXIS_HEIGHT),
        color: ThemeToken::AxisBackground,
        border_color: Some(ThemeToken::Border),
        label: None,
        item_id: None,
    });

    let mut offset = 0;
    while offset <= total_days {
        let current = date::add_days(range.min, offset);
        let x = offset as f64 * pixels_per_day;
        let is_major = current.day() == 1;

        let (tick_height, tick_color, tick_width) = if is_major {
            (MAJOR_TICK_HEIGHT, ThemeToken::TickMajor, 1.0)
        } else {
            (MINOR_TICK_HEIGHT, ThemeToken::TickMinor, 0.5)
        };
        commands.push(RenderCommand::DrawLine {
            from: Point::new(x, AXIS_HEIGHT - tick_height),
            to: Point::new(x, AXIS_HEIGHT),
            color: tick_color,
            width: tick_width,
        });

        let label = if show_year {
            date::format_with_year(current)
        } else {
            date::format_short(current)
        };
        commands.push(RenderCommand::DrawText {
            position: Point::new(x + 3.0, 2.0),
            text: label,
            color: ThemeToken::TextSecondary,
            font_size: FONT_SIZE,
            align: TextAlign::Left,
        });

        if is_major && grid_height > 0.0 {
            commands.push(RenderCommand::DrawLine {
                from: Point::new(x, AXIS_HEIGHT),
                to: Point::new(x, AXIS_HEIGHT + grid_height),
                color: ThemeToken::Gridline,
                width: 0.5,
            });
        }

        offset += interval;
    }

    commands
}
