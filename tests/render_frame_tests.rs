use ecg_plot::api::{AXIS_COLOR, EcgPlot, EcgPlotSettings};
use ecg_plot::core::{Viewport, ZoomLevelRange};
use ecg_plot::render::{Color, NullRenderer, TextHAlign};

fn settings() -> EcgPlotSettings {
    // 2017-07-14T02:40:00Z
    let start = 1_500_000_000_000_i64;
    let data: Vec<(i64, f64)> = (0..=200_i64)
        .map(|i| (start + i * 10, if i % 40 == 0 { 1.2 } else { 0.0 }))
        .collect();
    EcgPlotSettings::from_pairs(&data)
}

#[test]
fn frame_contains_markings_trace_and_labels() {
    let plot = EcgPlot::new(NullRenderer::default(), Viewport::new(800, 300), settings())
        .expect("plot init");
    let frame = plot.build_render_frame();
    frame.validate().expect("valid frame");

    let red_lines = frame
        .lines
        .iter()
        .filter(|line| line.color == Color::ECG_RED)
        .count();
    assert_eq!(red_lines, plot.options().grid.markings.len());

    let trace_lines = frame
        .lines
        .iter()
        .filter(|line| line.color == Color::BLACK)
        .count();
    assert_eq!(trace_lines, plot.series().len() - 1);

    assert!(frame.texts.iter().any(|text| text.text == "02:40:00"));
    assert!(
        frame
            .texts
            .iter()
            .filter(|text| text.h_align == TextHAlign::Right)
            .all(|text| text.text.split('.').nth(1).map(str::len) == Some(2))
    );
}

#[test]
fn bold_markings_are_drawn_after_normal_ones() {
    let plot = EcgPlot::new(NullRenderer::default(), Viewport::new(800, 300), settings())
        .expect("plot init");
    let frame = plot.build_render_frame();
    let widths: Vec<f64> = frame
        .lines
        .iter()
        .filter(|line| line.color == Color::ECG_RED)
        .map(|line| line.stroke_width)
        .collect();
    let first_bold = widths.iter().position(|width| *width == 1.5).expect("bold line");
    assert!(widths[first_bold..].iter().all(|width| *width == 1.5));
}

#[test]
fn zoomed_frame_clips_trace_to_plot_area() {
    let mut plot = EcgPlot::new(
        NullRenderer::default(),
        Viewport::new(800, 300),
        settings().with_interactive(ZoomLevelRange::new(0.0, 4.0)),
    )
    .expect("plot init");
    plot.zoom(3.0, None).expect("zoom");

    let layout = plot.layout();
    let frame = plot.build_render_frame();
    for line in frame.lines.iter().filter(|line| line.color == Color::BLACK) {
        for (x, y) in [(line.x1, line.y1), (line.x2, line.y2)] {
            assert!(x >= layout.left - 1e-9 && x <= layout.right() + 1e-9);
            assert!(y >= layout.top - 1e-9 && y <= layout.bottom() + 1e-9);
        }
    }
    assert!(frame.lines.iter().filter(|line| line.color == Color::BLACK).count() < plot.series().len() - 1);
}

#[test]
fn tiny_container_renders_without_labels() {
    let mut plot = EcgPlot::new(NullRenderer::default(), Viewport::new(80, 40), settings())
        .expect("plot init");
    plot.render().expect("render");
    let renderer = plot.into_renderer();
    assert_eq!(renderer.last_text_count, 0);
    let frame = renderer.last_frame.expect("frame");
    assert!(frame.lines.iter().any(|line| line.color == AXIS_COLOR));
}
