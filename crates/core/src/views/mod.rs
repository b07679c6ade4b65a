pub mod date_axis;
pub mod drop_indicator;
pub mod lane_track;
