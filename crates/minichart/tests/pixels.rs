// File: crates/minichart/tests/pixels.rs
// Purpose: Pixel-level geometry properties verified on the RGBA readback.
// Text is disabled throughout to avoid font variance across platforms.

use minichart::{ChartRenderer, RenderOptions, Series, Surface};

const BG: (u8, u8, u8) = (0xff, 0xff, 0xff);
const BAR: (u8, u8, u8) = (0x5a, 0xc7, 0x6d);
const LINE: (u8, u8, u8) = (0x3a, 0x7a, 0xfe);

fn no_text() -> RenderOptions {
    RenderOptions { units: None, draw_labels: false }
}

fn rgb_at(buf: &[u8], stride: usize, x: i32, y: i32) -> (u8, u8, u8) {
    let i = y as usize * stride + x as usize * 4;
    (buf[i], buf[i + 1], buf[i + 2])
}

fn close(a: (u8, u8, u8), b: (u8, u8, u8)) -> bool {
    let d = |x: u8, y: u8| (x as i32 - y as i32).abs();
    d(a.0, b.0) <= 12 && d(a.1, b.1) <= 12 && d(a.2, b.2) <= 12
}

/// Length of the run of `color` pixels in row `y` starting at `x_start`.
fn run_length(buf: &[u8], stride: usize, y: i32, x_start: i32, width: i32, color: (u8, u8, u8)) -> i32 {
    let mut len = 0;
    for x in x_start..width {
        if close(rgb_at(buf, stride, x, y), color) {
            len += 1;
        } else {
            break;
        }
    }
    len
}

#[test]
fn hbar_widths_are_proportional_and_ordered() {
    let mut surface = Surface::new(400, 240).unwrap();
    let renderer = ChartRenderer::new();
    let series = Series::from_values(vec![10.0, 20.0, 5.0]);
    renderer.render_hbar(&mut surface, &series, &no_text()).unwrap();

    let (buf, _, _, stride) = surface.to_rgba8().unwrap();
    // plot width 280 (left 100, right 20); bar height capped at 26, gap 10.
    // Rows through the middle of each bar, top to bottom in series order.
    let w0 = run_length(&buf, stride, 23, 100, 400, BAR);
    let w1 = run_length(&buf, stride, 59, 100, 400, BAR);
    let w2 = run_length(&buf, stride, 95, 100, 400, BAR);

    // max value spans the full drawable width
    assert!((w1 - 280).abs() <= 2, "max bar width {w1}");
    // second bar twice the first, four times the third
    assert!((w0 - 140).abs() <= 2, "first bar width {w0}");
    assert!((w2 - 70).abs() <= 2, "third bar width {w2}");
    // nothing drawn past the drawable right edge
    assert!(close(rgb_at(&buf, stride, 385, 59), BG));
}

#[test]
fn hbar_empty_series_clears_and_draws_nothing() {
    let mut surface = Surface::new(400, 240).unwrap();
    let renderer = ChartRenderer::new();
    renderer.render_hbar(&mut surface, &Series::default(), &no_text()).unwrap();

    let (buf, w, h, stride) = surface.to_rgba8().unwrap();
    for y in 0..h {
        for x in 0..w {
            assert_eq!(rgb_at(&buf, stride, x, y), BG, "stray pixel at {x},{y}");
        }
    }
}

#[test]
fn rerender_fully_replaces_prior_content() {
    let mut surface = Surface::new(400, 240).unwrap();
    let renderer = ChartRenderer::new();

    renderer
        .render_hbar(&mut surface, &Series::from_values(vec![10.0, 20.0, 5.0]), &no_text())
        .unwrap();
    let (buf, _, _, stride) = surface.to_rgba8().unwrap();
    assert!(close(rgb_at(&buf, stride, 350, 59), BAR));

    // one short bar leaves the old second bar's region blank
    renderer
        .render_hbar(&mut surface, &Series::from_values(vec![3.0]), &no_text())
        .unwrap();
    let (buf, _, _, stride) = surface.to_rgba8().unwrap();
    assert!(close(rgb_at(&buf, stride, 350, 59), BG));
}

#[test]
fn line_single_point_is_horizontally_centered() {
    let mut surface = Surface::new(400, 240).unwrap();
    let renderer = ChartRenderer::new();
    renderer
        .render_line(&mut surface, &Series::from_values(vec![5.0]), &no_text())
        .unwrap();

    let (buf, _, _, stride) = surface.to_rgba8().unwrap();
    // drawable spans x in [30, 390]; the single point centers at 210 and its
    // value is the maximum, so it sits on the top edge of the drawable area.
    assert!(close(rgb_at(&buf, stride, 210, 10), LINE));
    assert!(close(rgb_at(&buf, stride, 100, 10), BG));
}

#[test]
fn line_empty_series_degrades_to_zero_point() {
    let mut surface = Surface::new(400, 240).unwrap();
    let renderer = ChartRenderer::new();
    renderer.render_line(&mut surface, &Series::default(), &no_text()).unwrap();

    let (buf, _, _, stride) = surface.to_rgba8().unwrap();
    // single centered marker on the bottom edge (value 0)
    assert!(close(rgb_at(&buf, stride, 210, 210), LINE));
}

#[test]
fn line_points_map_value_to_height() {
    let mut surface = Surface::new(400, 240).unwrap();
    let renderer = ChartRenderer::new();
    renderer
        .render_line(&mut surface, &Series::from_values(vec![1.0, 5.0, 2.0]), &no_text())
        .unwrap();

    let (buf, _, _, stride) = surface.to_rgba8().unwrap();
    // y = 10 + 200 * (1 - v / 5)
    assert!(close(rgb_at(&buf, stride, 30, 170), LINE));
    assert!(close(rgb_at(&buf, stride, 210, 10), LINE));
    assert!(close(rgb_at(&buf, stride, 390, 130), LINE));
}

#[test]
fn line_all_zero_series_renders_on_bottom_edge() {
    let mut surface = Surface::new(400, 240).unwrap();
    let renderer = ChartRenderer::new();
    renderer
        .render_line(&mut surface, &Series::from_values(vec![0.0, 0.0, 0.0]), &no_text())
        .unwrap();

    let (buf, _, _, stride) = surface.to_rgba8().unwrap();
    assert!(close(rgb_at(&buf, stride, 210, 210), LINE));
}

#[test]
fn pixel_ratio_scales_backing_buffer_not_coordinates() {
    let mut surface = Surface::with_pixel_ratio(200, 120, 2.0).unwrap();
    assert_eq!(surface.physical_width(), 400);
    assert_eq!(surface.physical_height(), 240);

    let renderer = ChartRenderer::new();
    renderer
        .render_hbar(&mut surface, &Series::from_values(vec![10.0, 20.0, 5.0]), &no_text())
        .unwrap();

    let (buf, _, _, stride) = surface.to_rgba8().unwrap();
    // logical bar geometry (left 100, width 40 for the first bar) lands at
    // doubled physical coordinates
    let w0 = run_length(&buf, stride, 40, 200, 400, BAR);
    assert!((w0 - 80).abs() <= 3, "first bar physical width {w0}");
    assert!(close(rgb_at(&buf, stride, 150, 40), BG));
}

#[test]
fn surface_too_small_is_reported() {
    let mut surface = Surface::new(30, 30).unwrap();
    let renderer = ChartRenderer::new();
    let err = renderer
        .render_line(&mut surface, &Series::from_values(vec![1.0]), &no_text())
        .unwrap_err();
    assert!(matches!(err, minichart::RenderError::SurfaceTooSmall { .. }));

    let err = renderer
        .render_hbar(&mut surface, &Series::from_values(vec![1.0]), &no_text())
        .unwrap_err();
    assert!(matches!(err, minichart::RenderError::SurfaceTooSmall { .. }));
}
