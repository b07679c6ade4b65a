pub mod commands;
pub mod item;
pub mod theme;
pub mod types;

pub use commands::{RenderCommand, TextAlign};
pub use item::{ItemId, TimelineItem};
pub use theme::{LANE_TOKENS, ThemeToken};
pub use types::{Point, Rect};
