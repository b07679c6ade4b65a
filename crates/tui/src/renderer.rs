use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use trackline_protocol::{RenderCommand, ThemeToken};

/// Virtual pixels represented by one terminal column.
pub const PX_PER_COL: f64 = 10.0;
/// Virtual pixels represented by one terminal row inside the lane area.
pub const PX_PER_ROW: f64 = 20.0;

pub fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::LaneBlue => Color::Blue,
        ThemeToken::LaneGreen => Color::Green,
        ThemeToken::LaneOrange => Color::Rgb(215, 135, 0),
        ThemeToken::LaneRed => Color::Red,
        ThemeToken::LanePurple => Color::Magenta,
        ThemeToken::LaneCyan => Color::Cyan,
        ThemeToken::LaneBackground => Color::Black,
        ThemeToken::LaneBorder => Color::DarkGray,
        ThemeToken::LaneLabel => Color::Gray,
        ThemeToken::AxisBackground => Color::Black,
        ThemeToken::TickMinor => Color::DarkGray,
        ThemeToken::TickMajor => Color::Gray,
        ThemeToken::Gridline => Color::DarkGray,
        ThemeToken::TextPrimary => Color::White,
        ThemeToken::TextSecondary => Color::Gray,
        ThemeToken::TextMuted => Color::DarkGray,
        ThemeToken::DropIndicator => Color::Rgb(40, 60, 90),
        ThemeToken::SelectionHighlight => Color::LightYellow,
        ThemeToken::Background => Color::Black,
        ThemeToken::Border => Color::DarkGray,
    }
}

/// Paint a command list into the buffer.
///
/// Virtual x maps to columns at `PX_PER_COL` after subtracting
/// `scroll_x`; virtual y maps to rows at `px_per_row` relative to the
/// top of `area`. Rect labels are inlined when the bar is wide enough,
/// matching how the bars read in a real canvas renderer.
pub fn draw_commands(
    buf: &mut Buffer,
    area: Rect,
    commands: &[RenderCommand],
    scroll_x: f64,
    px_per_row: f64,
) {
    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                label,
                item_id,
                ..
            } => {
                let col = (rect.x - scroll_x) / PX_PER_COL;
                let width = ((rect.w / PX_PER_COL).round() as i64).max(1);
                let row = (rect.y / px_per_row).floor() as i64;
                let height = ((rect.h / px_per_row).round() as i64).max(1);

                let fill = theme_to_color(*color);
                for dy in 0..height {
                    for dx in 0..width {
                        let Some((x, y)) = cell_at(area, col.floor() as i64 + dx, row + dy) else {
                            continue;
                        };
                        buf[(x, y)].set_char(' ').set_bg(fill);
                    }
                }

                // Item bars carry their name on the first row.
                if item_id.is_some()
                    && let Some(text) = label
                {
                    let fg = Color::White;
                    for (i, ch) in text.chars().take((width as usize).saturating_sub(2)).enumerate()
                    {
                        let Some((x, y)) = cell_at(area, col.floor() as i64 + 1 + i as i64, row)
                        else {
                            break;
                        };
                        buf[(x, y)].set_char(ch).set_fg(fg).set_bg(fill);
                    }
                }
            }

            RenderCommand::DrawText {
                position,
                text,
                color,
                ..
            } => {
                let col = ((position.x - scroll_x) / PX_PER_COL).floor() as i64;
                let row = (position.y / px_per_row).floor() as i64;
                let fg = theme_to_color(*color);
                for (i, ch) in text.chars().enumerate() {
                    let Some((x, y)) = cell_at(area, col + i as i64, row) else {
                        break;
                    };
                    buf[(x, y)].set_char(ch).set_fg(fg);
                }
            }

            RenderCommand::DrawLine {
                from, to, color, ..
            } => {
                // Only vertical lines (ticks, gridlines) occur in these
                // views; anything else is skipped in cell output.
                if (from.x - to.x).abs() > f64::EPSILON {
                    continue;
                }
                let col = ((from.x - scroll_x) / PX_PER_COL).floor() as i64;
                let top = (from.y.min(to.y) / px_per_row).floor() as i64;
                let bottom = (from.y.max(to.y) / px_per_row).ceil() as i64;
                let fg = theme_to_color(*color);
                for r in top..bottom.max(top + 1) {
                    if let Some((x, y)) = cell_at(area, col, r) {
                        buf[(x, y)].set_char('│').set_fg(fg);
                    }
                }
            }

            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {}
        }
    }
}

/// Clip a (col, row) offset to the area, returning absolute buffer
/// coordinates.
fn cell_at(area: Rect, col: i64, row: i64) -> Option<(u16, u16)> {
    if col < 0 || row < 0 {
        return None;
    }
    let (col, row) = (col as u16, row as u16);
    if col >= area.width || row >= area.height {
        return None;
    }
    Some((area.x + col, area.y + row))
}
