// File: crates/minichart/src/chart.rs
// Summary: ChartRenderer: line and horizontal-bar charts drawn onto a Surface.

use skia_safe as skia;

use crate::error::RenderError;
use crate::format::ValueFormat;
use crate::scale::{SlotScale, ValueScale};
use crate::series::Series;
use crate::surface::Surface;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{
    BAR_GAP, BAR_LABEL_X, BAR_MAX_HEIGHT, FONT_SIZE, GRID_STEPS, HBAR_INSETS, LABEL_TARGET,
    LINE_INSETS, MARKER_RADIUS,
};

pub struct RenderOptions {
    /// Units annotation drawn near the top-right corner when set.
    pub units: Option<String>,
    /// Disable all text output. Pixel-comparison tests turn this off to
    /// stay deterministic across font installations.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { units: None, draw_labels: true }
    }
}

/// Draws line and horizontal-bar charts from a series of labeled values.
///
/// Each render call is a one-shot draw: the surface is cleared and fully
/// repainted, nothing is retained between invocations.
pub struct ChartRenderer {
    pub theme: Theme,
    pub value_format: ValueFormat,
    text: TextShaper,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self {
            theme: Theme::light(),
            value_format: ValueFormat::default(),
            text: TextShaper::new(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_value_format(mut self, value_format: ValueFormat) -> Self {
        self.value_format = value_format;
        self
    }

    /// Draw a connected polyline with point markers, horizontal gridlines,
    /// strided x-axis labels and an optional units annotation.
    ///
    /// An empty series degrades to a single point at value 0; a single point
    /// is centered across the drawable width.
    pub fn render_line(
        &self,
        surface: &mut Surface,
        series: &Series,
        opts: &RenderOptions,
    ) -> Result<(), RenderError> {
        let w = surface.logical_width() as f32;
        let h = surface.logical_height() as f32;
        let insets = LINE_INSETS;
        let plot_w = w - insets.hsum() as f32;
        let plot_h = h - insets.vsum() as f32;
        if plot_w <= 0.0 || plot_h <= 0.0 {
            return Err(RenderError::SurfaceTooSmall {
                width: surface.logical_width(),
                height: surface.logical_height(),
            });
        }
        let left = insets.left as f32;
        let right = w - insets.right as f32;
        let top = insets.top as f32;
        let bottom = h - insets.bottom as f32;

        let canvas = surface.canvas();
        canvas.clear(self.theme.background);

        // grid
        let grid = stroke_paint(self.theme.grid, 1.0);
        for y in linspace(top, bottom, GRID_STEPS + 1) {
            canvas.draw_line((left, y), (right, y), &grid);
        }

        let zero = [0.0f64];
        let values: &[f64] = if series.is_empty() { &zero } else { series.values() };
        let vscale = ValueScale::from_values(top, bottom, values);
        let slots = SlotScale::new(left, right, values.len());

        // polyline
        let mut path_builder = skia::PathBuilder::new();
        for (i, &v) in values.iter().enumerate() {
            let p = (slots.to_px(i), vscale.to_px(v));
            if i == 0 {
                path_builder.move_to(p);
            } else {
                path_builder.line_to(p);
            }
        }
        let path = path_builder.detach();
        let stroke = stroke_paint(self.theme.line_stroke, 2.0);
        canvas.draw_path(&path, &stroke);

        // point markers
        let marker = fill_paint(self.theme.marker);
        for (i, &v) in values.iter().enumerate() {
            canvas.draw_circle((slots.to_px(i), vscale.to_px(v)), MARKER_RADIUS, &marker);
        }

        // x labels, strided so they don't collide
        if opts.draw_labels && !series.labels().is_empty() {
            let labels = series.labels();
            let label_slots = SlotScale::new(left, right, labels.len());
            let ty = h - insets.bottom as f32 + 22.0;
            for i in (0..labels.len()).step_by(label_stride(labels.len())) {
                let x = label_slots.to_px(i);
                self.text.draw_left(canvas, &labels[i], x - 12.0, ty, FONT_SIZE, self.theme.axis_label, false);
            }
        }

        if opts.draw_labels {
            if let Some(units) = opts.units.as_deref() {
                self.text.draw_left(canvas, units, right - 24.0, top + 12.0, FONT_SIZE, self.theme.units_label, false);
            }
        }

        Ok(())
    }

    /// Draw one horizontal bar per value, top to bottom in series order, with
    /// the row label on the left and the grouped value just past the bar end.
    ///
    /// An empty series clears the surface and draws nothing else.
    pub fn render_hbar(
        &self,
        surface: &mut Surface,
        series: &Series,
        opts: &RenderOptions,
    ) -> Result<(), RenderError> {
        let w = surface.logical_width() as f32;
        let h = surface.logical_height() as f32;
        let insets = HBAR_INSETS;
        let plot_w = w - insets.hsum() as f32;
        let plot_h = h - insets.vsum() as f32;
        if plot_w <= 0.0 || plot_h <= 0.0 {
            return Err(RenderError::SurfaceTooSmall {
                width: surface.logical_width(),
                height: surface.logical_height(),
            });
        }
        let left = insets.left as f32;
        let top = insets.top as f32;

        let canvas = surface.canvas();
        canvas.clear(self.theme.background);

        let n = series.len();
        if n == 0 {
            return Ok(());
        }

        let vscale = ValueScale::from_values(top, h - insets.bottom as f32, series.values());
        let bar_h = bar_height(plot_h, n);
        let bar = fill_paint(self.theme.bar_fill);

        let mut y = top;
        for (i, &v) in series.values().iter().enumerate() {
            let bw = vscale.extent(v, plot_w);

            if opts.draw_labels {
                let label = series.label(i).unwrap_or("");
                self.text.draw_left(canvas, label, BAR_LABEL_X, y + bar_h - 4.0, FONT_SIZE, self.theme.bar_label, false);
            }

            canvas.draw_rect(skia::Rect::from_ltrb(left, y, left + bw, y + bar_h), &bar);

            if opts.draw_labels {
                let text = self.value_format.format(v);
                self.text.draw_left(canvas, &text, left + bw + 6.0, y + bar_h - 4.0, FONT_SIZE, self.theme.bar_value, true);
            }

            y += bar_h + BAR_GAP;
        }

        if opts.draw_labels {
            if let Some(units) = opts.units.as_deref() {
                self.text.draw_left(canvas, units, w - 40.0, 16.0, FONT_SIZE, self.theme.units_label, false);
            }
        }

        Ok(())
    }
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

/// Stride applied to x-axis labels so at most `LABEL_TARGET` of them draw.
/// Never less than 1.
pub fn label_stride(count: usize) -> usize {
    ((count + LABEL_TARGET - 1) / LABEL_TARGET).max(1)
}

/// Uniform bar height: available space split evenly among `count` bars less
/// the fixed spacing, capped at `BAR_MAX_HEIGHT` and floored at 1 px.
/// `count` must be non-zero.
pub fn bar_height(avail: f32, count: usize) -> f32 {
    (avail / count as f32 - 6.0).min(BAR_MAX_HEIGHT).max(1.0)
}

/// Evenly spaced positions across [start, end], inclusive of both ends.
fn linspace(start: f32, end: f32, steps: usize) -> Vec<f32> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f32 - 1.0);
    (0..steps).map(|i| start + step * i as f32).collect()
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}
