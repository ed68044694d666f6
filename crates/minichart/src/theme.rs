// File: crates/minichart/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub line_stroke: skia::Color,
    pub marker: skia::Color,
    pub axis_label: skia::Color,
    pub bar_fill: skia::Color,
    pub bar_label: skia::Color,
    pub bar_value: skia::Color,
    pub units_label: skia::Color,
}

impl Theme {
    /// Default palette, matching the dashboard widgets this renderer grew
    /// out of.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 0xee, 0xee, 0xee),
            line_stroke: skia::Color::from_argb(255, 0x3a, 0x7a, 0xfe),
            marker: skia::Color::from_argb(255, 0x3a, 0x7a, 0xfe),
            axis_label: skia::Color::from_argb(255, 0x55, 0x55, 0x55),
            bar_fill: skia::Color::from_argb(255, 0x5a, 0xc7, 0x6d),
            bar_label: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            bar_value: skia::Color::from_argb(255, 0x11, 0x11, 0x11),
            units_label: skia::Color::from_argb(255, 0x77, 0x77, 0x77),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            marker: skia::Color::from_argb(255, 64, 160, 255),
            axis_label: skia::Color::from_argb(255, 150, 150, 160),
            bar_fill: skia::Color::from_argb(255, 40, 200, 120),
            bar_label: skia::Color::from_argb(255, 210, 210, 220),
            bar_value: skia::Color::from_argb(255, 235, 235, 245),
            units_label: skia::Color::from_argb(255, 150, 150, 160),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            line_stroke: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            marker: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            bar_fill: skia::Color::from_argb(255, 0x00, 0xff, 0x00),
            bar_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            bar_value: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            units_label: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
