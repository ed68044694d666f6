// File: crates/minichart/src/lib.rs
// Summary: Core library entry point; exports public API for chart rendering.

pub mod chart;
pub mod error;
pub mod format;
pub mod scale;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{bar_height, label_stride, ChartRenderer, RenderOptions};
pub use error::RenderError;
pub use format::ValueFormat;
pub use scale::{SlotScale, ValueScale};
pub use series::Series;
pub use surface::Surface;
pub use text::TextShaper;
pub use theme::Theme;
