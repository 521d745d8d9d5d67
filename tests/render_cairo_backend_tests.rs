#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use ecg_plot::PlotError;
use ecg_plot::api::{EcgPlot, EcgPlotSettings};
use ecg_plot::core::Viewport;
use ecg_plot::render::{CairoRenderer, Color};

fn settings() -> EcgPlotSettings {
    let data: Vec<(i64, f64)> = (0..=250_i64)
        .map(|i| (i * 4, ((i as f64) * 0.15).sin() * 0.6))
        .collect();
    EcgPlotSettings::from_pairs(&data)
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, PlotError::InvalidDimensions { .. }));
}

#[test]
fn cairo_renderer_draws_grid_trace_and_labels() {
    let renderer = CairoRenderer::new(900, 300).expect("renderer");
    let mut plot = EcgPlot::new(renderer, Viewport::new(900, 300), settings()).expect("plot init");
    let frame = plot.build_render_frame();

    plot.render().expect("render");
    let stats = plot.into_renderer().last_stats();
    assert_eq!(stats.lines_drawn, frame.lines.len());
    assert_eq!(stats.texts_drawn, frame.texts.len());
    assert!(stats.texts_drawn > 0);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(600, 320).expect("renderer");
    let mut plot = EcgPlot::new(renderer, Viewport::new(600, 320), settings()).expect("plot init");

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    plot.render_on_cairo_context(&context).expect("render on context");
    assert!(plot.renderer().last_stats().lines_drawn > 0);
}

#[test]
fn cairo_renderer_writes_png() {
    let mut renderer = CairoRenderer::new(400, 200).expect("renderer");
    renderer
        .set_clear_color(Color::from_hex("#FFF8F0").expect("color"))
        .expect("clear color");
    let mut plot = EcgPlot::new(renderer, Viewport::new(400, 200), settings()).expect("plot init");
    plot.render().expect("render");

    let path = std::env::temp_dir()
        .join("ecg_plot_tests")
        .join(format!("render_{}.png", std::process::id()));
    plot.into_renderer().write_png(&path).expect("png");
    let bytes = std::fs::read(&path).expect("read png");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let _ = std::fs::remove_file(&path);
}
