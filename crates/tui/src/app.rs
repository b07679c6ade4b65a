use std::cell::Cell;
use std::io::stdout;
use std::rc::Rc;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    widgets::Block,
};
use trackline_core::drag::DragMode;
use trackline_core::geometry::LANE_ROW_HEIGHT;
use trackline_core::timeline::{Timeline, TimelineLayout};
use trackline_core::views::{date_axis, drop_indicator, lane_track};
use trackline_protocol::{ItemId, Point, TimelineItem};

use crate::renderer::{self, PX_PER_COL, PX_PER_ROW};

/// Virtual-pixel band at each end of an item bar that acts as a resize
/// handle instead of the item body.
const EDGE_PX: f64 = 10.0;

const HEADER_ROWS: u16 = 1;
const AXIS_ROWS: u16 = 1;
const STATUS_ROWS: u16 = 1;

struct EditState {
    item_id: ItemId,
    buffer: String,
}

pub fn run(items: Vec<TimelineItem>, skipped: usize) -> Result<()> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let update_count = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&update_count);

    let mut timeline = Timeline::new(items);
    timeline.set_on_update(move |_| counter.set(counter.get() + 1));

    let mut scroll_x: f64 = 0.0;
    let mut selected: Option<ItemId> = None;
    let mut editing: Option<EditState> = None;

    loop {
        let layout = timeline.layout();

        terminal.draw(|frame| {
            let area = frame.area();
            let lanes_top = HEADER_ROWS + AXIS_ROWS;
            let lanes_area = Rect::new(
                0,
                lanes_top,
                area.width,
                area.height
                    .saturating_sub(lanes_top)
                    .saturating_sub(STATUS_ROWS),
            );

            // Header
            let header = Block::default()
                .title(format!(
                    " trackline — {} items | zoom {}% | ←→ scroll | +/- zoom | r rename | q quit ",
                    timeline.items().len(),
                    layout.zoom_percent,
                ))
                .style(Style::default().fg(Color::White).bg(Color::DarkGray));
            frame.render_widget(header, Rect::new(0, 0, area.width, HEADER_ROWS));

            if let Some(range) = &layout.range {
                let axis_cmds = date_axis::render_date_axis(range, layout.pixels_per_day, 0.0);
                let mut lane_cmds = lane_track::render_lane_track(&layout);
                if let Some(session) = timeline.drag_session()
                    && let Some(indicator) =
                        drop_indicator::render_drop_indicator(session, layout.width)
                {
                    lane_cmds.push(indicator);
                }

                let buf = frame.buffer_mut();
                // The whole 24px axis bar collapses into one terminal row.
                let axis_area = Rect::new(0, HEADER_ROWS, area.width, AXIS_ROWS);
                renderer::draw_commands(buf, axis_area, &axis_cmds, scroll_x, date_axis::AXIS_HEIGHT);
                renderer::draw_commands(buf, lanes_area, &lane_cmds, scroll_x, PX_PER_ROW);
            }

            // Status / rename line
            let status_area = Rect::new(0, area.height.saturating_sub(STATUS_ROWS), area.width, STATUS_ROWS);
            let status_text = if let Some(edit) = &editing {
                format!(" Rename: {}▏  (Enter commit, Esc cancel) ", edit.buffer)
            } else {
                let name = selected
                    .and_then(|id| timeline.item(id))
                    .map(|i| i.name.as_str())
                    .unwrap_or("none");
                format!(
                    " selected: {name} | updates: {} | hidden: {} | skipped records: {skipped} ",
                    update_count.get(),
                    layout.dropped,
                )
            };
            let status =
                Block::default()
                    .title(status_text)
                    .style(Style::default().fg(Color::White).bg(Color::DarkGray));
            frame.render_widget(status, status_area);
        })?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(edit) = editing.as_mut() {
                    match key.code {
                        KeyCode::Enter => {
                            timeline.rename(edit.item_id, &edit.buffer);
                            editing = None;
                        }
                        KeyCode::Esc => editing = None,
                        KeyCode::Backspace => {
                            edit.buffer.pop();
                        }
                        KeyCode::Char(c) => edit.buffer.push(c),
                        _ => {}
                    }
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('+') | KeyCode::Char('=') => timeline.zoom_in(),
                    KeyCode::Char('-') => timeline.zoom_out(),
                    KeyCode::Left => scroll_x = (scroll_x - 10.0 * PX_PER_COL).max(0.0),
                    KeyCode::Right => {
                        let max = (timeline.layout().width - PX_PER_COL).max(0.0);
                        scroll_x = (scroll_x + 10.0 * PX_PER_COL).min(max);
                    }
                    KeyCode::Char('r') => {
                        if let Some(item) = selected.and_then(|id| timeline.item(id)) {
                            editing = Some(EditState {
                                item_id: item.id,
                                buffer: item.name.clone(),
                            });
                        }
                    }
                    _ => {}
                }
            }

            Event::Mouse(mouse) => {
                // Clicking anywhere commits an in-progress rename (blur).
                if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                    && let Some(edit) = editing.take()
                {
                    timeline.rename(edit.item_id, &edit.buffer);
                }
                handle_mouse(
                    &mouse,
                    &mut timeline,
                    &layout,
                    &mut selected,
                    &mut scroll_x,
                );
            }

            _ => {}
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_mouse(
    mouse: &MouseEvent,
    timeline: &mut Timeline,
    layout: &TimelineLayout,
    selected: &mut Option<ItemId>,
    scroll_x: &mut f64,
) {
    let lanes_top = HEADER_ROWS + AXIS_ROWS;
    let point = Point::new(
        f64::from(mouse.column) * PX_PER_COL + *scroll_x,
        f64::from(mouse.row.saturating_sub(lanes_top)) * PX_PER_ROW,
    );

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if mouse.row < lanes_top {
                return;
            }
            if let Some((id, mode)) = hit_test(layout, point) {
                *selected = Some(id);
                timeline.pointer_down(point, id, mode);
            } else {
                *selected = None;
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            timeline.pointer_move(point);
        }
        MouseEventKind::Up(MouseButton::Left) => timeline.pointer_up(),
        MouseEventKind::ScrollLeft => *scroll_x = (*scroll_x - 2.0 * PX_PER_COL).max(0.0),
        MouseEventKind::ScrollRight => {
            let max = (layout.width - PX_PER_COL).max(0.0);
            *scroll_x = (*scroll_x + 2.0 * PX_PER_COL).min(max);
        }
        _ => {}
    }
}

/// Find the item under a virtual-pixel position and which part of it was
/// grabbed: an edge band resizes, the body moves.
fn hit_test(layout: &TimelineLayout, point: Point) -> Option<(ItemId, DragMode)> {
    let lane = (point.y / LANE_ROW_HEIGHT).floor();
    if lane < 0.0 {
        return None;
    }
    let members = layout.lanes.get(lane as usize)?;
    let hit = members
        .iter()
        .find(|l| point.x >= l.bbox.left && point.x < l.bbox.left + l.bbox.width)?;

    let mode = if point.x < hit.bbox.left + EDGE_PX {
        DragMode::ResizeStart
    } else if point.x >= hit.bbox.left + hit.bbox.width - EDGE_PX {
        DragMode::ResizeEnd
    } else {
        DragMode::Move
    };
    Some((hit.item.id, mode))
}
