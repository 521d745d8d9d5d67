use ecg_plot::api::{EcgPlot, EcgPlotSettings};
use ecg_plot::core::{PixelPoint, Viewport, ZoomLevelRange};
use ecg_plot::interaction::InteractionMode;
use ecg_plot::render::NullRenderer;

fn sine_settings() -> EcgPlotSettings {
    let data = (0..=250)
        .map(|i| {
            let t = i64::from(i) * 4;
            let amplitude = (f64::from(i) * 0.1).sin() * 0.8;
            (t, amplitude)
        })
        .collect::<Vec<_>>();
    EcgPlotSettings::from_pairs(&data)
}

#[test]
fn static_plot_smoke_flow() {
    let mut plot = EcgPlot::new(
        NullRenderer::default(),
        Viewport::new(900, 300),
        sine_settings(),
    )
    .expect("plot init");

    assert!(!plot.is_interactive());
    assert_eq!(plot.zoom_bounds(), None);
    assert_eq!(plot.axis_bounds(), plot.grid_spec().bounds);

    plot.render().expect("render should succeed");
    let renderer = plot.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert!(renderer.last_line_count > 0);
    assert!(renderer.last_text_count > 0);
}

#[test]
fn interactive_plot_smoke_flow() {
    let settings = sine_settings().with_interactive(ZoomLevelRange::new(0.0, 4.0));
    let mut plot = EcgPlot::new(NullRenderer::default(), Viewport::new(900, 300), settings)
        .expect("plot init");
    let default_bounds = plot.axis_bounds();

    plot.zoom(2.0, None).expect("zoom");
    assert!(plot.axis_bounds().time_span() < default_bounds.time_span());

    plot.pan_start(PixelPoint::new(300.0, 100.0)).expect("pan start");
    assert_eq!(plot.interaction_mode(), InteractionMode::Panning);
    assert!(plot.pan_move(PixelPoint::new(250.0, 100.0)).expect("pan move"));
    plot.pan_end();
    assert_eq!(plot.interaction_mode(), InteractionMode::Idle);

    plot.render().expect("render should succeed");
    plot.reset_view();
    assert_eq!(plot.axis_bounds(), default_bounds);
}

#[test]
fn settings_file_drives_initialization() {
    let json = r#"{
        "data": [[0, 1.0], [40, 1.0], [80, 1.0], [120, 1.0]],
        "options": { "rectangleRatio": 1.0, "axes": { "timeformat": "%S" } }
    }"#;
    let settings = EcgPlotSettings::from_json_str(json).expect("settings");
    let plot = EcgPlot::new(NullRenderer::default(), Viewport::new(400, 100), settings)
        .expect("plot init");

    assert_eq!(plot.grid_spec().vertical_line_count, 3.0);
    assert_eq!(plot.options().x_axis.time_format, "%S");
}
