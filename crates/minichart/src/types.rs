// File: crates/minichart/src/types.rs
// Summary: Shared types and layout constants (sizes, margins, marker metrics).

/// Default surface width in logical pixels.
pub const WIDTH: i32 = 640;
/// Default surface height in logical pixels.
pub const HEIGHT: i32 = 320;

/// Gridline step count for the line chart (steps + 1 lines are drawn).
pub const GRID_STEPS: usize = 4;
/// Point marker radius on the line chart.
pub const MARKER_RADIUS: f32 = 2.5;
/// Target number of x-axis labels on the line chart; denser label sets are
/// strided down to at most this many.
pub const LABEL_TARGET: usize = 8;
/// Upper bound on a single bar's height.
pub const BAR_MAX_HEIGHT: f32 = 26.0;
/// Vertical gap between consecutive bars.
pub const BAR_GAP: f32 = 10.0;
/// Left-aligned x position of bar labels.
pub const BAR_LABEL_X: f32 = 8.0;
/// Label/annotation font size.
pub const FONT_SIZE: f32 = 12.0;

/// Screen margins, in logical pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

/// Margins reserved around the line chart's drawable extent.
pub const LINE_INSETS: Insets = Insets::new(30, 10, 10, 30);
/// Margins reserved around the horizontal bar chart's drawable extent.
/// The wide left inset holds the row labels.
pub const HBAR_INSETS: Insets = Insets::new(100, 20, 10, 10);
