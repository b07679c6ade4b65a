use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    // Thematic lane colors. The number of these tokens is also the lane
    // capacity: items assigned past the last color are not rendered.
    LaneBlue,
    LaneGreen,
    LaneOrange,
    LaneRed,
    LanePurple,
    LaneCyan,

    LaneBackground,
    LaneBorder,
    LaneLabel,

    AxisBackground,
    TickMinor,
    TickMajor,
    Gridline,

    TextPrimary,
    TextSecondary,
    TextMuted,

    DropIndicator,
    SelectionHighlight,

    Background,
    Border,
}

/// The fixed lane palette, in lane-index order. Lane capacity for the
/// whole system is `LANE_TOKENS.len()`.
pub const LANE_TOKENS: [ThemeToken; 6] = [
    ThemeToken::LaneBlue,
    ThemeToken::LaneGreen,
    ThemeToken::LaneOrange,
    ThemeToken::LaneRed,
    ThemeToken::LanePurple,
    ThemeToken::LaneCyan,
];

impl ThemeToken {
    /// Color token for a visual lane index, if within capacity.
    pub fn lane(index: usize) -> Option<ThemeToken> {
        LANE_TOKENS.get(index).copied()
    }

    /// Display name for a lane index ("Blue", "Green", ...).
    pub fn lane_name(index: usize) -> Option<&'static str> {
        match LANE_TOKENS.get(index)? {
            ThemeToken::LaneBlue => Some("Blue"),
            ThemeToken::LaneGreen => Some("Green"),
            ThemeToken::LaneOrange => Some("Orange"),
            ThemeToken::LaneRed => Some("Red"),
            ThemeToken::LanePurple => Some("Purple"),
            ThemeToken::LaneCyan => Some("Cyan"),
            _ => None,
        }
    }
}
