pub mod date;
pub mod drag;
pub mod geometry;
pub mod items;
pub mod lanes;
pub mod timeline;
pub mod views;

pub use drag::{DragMetrics, DragMode, DragSession};
pub use geometry::{DateRange, ItemBox, Zoom};
pub use timeline::{LaidOutItem, Timeline, TimelineLayout};
