//! Host-facing plot API: settings, option resolution and the [`EcgPlot`]
//! handle.

mod axis_ticks;
mod engine;
mod engine_accessors;
mod engine_init;
mod interaction_controller;
mod observer_registry;
mod plot_layout;
mod plot_options;
mod render_frame_builder;
mod settings;
mod settings_resolver;

pub use axis_ticks::{
    AMPLITUDE_LABEL_MIN_SPACING_PX, AxisTick, TIME_LABEL_MIN_SPACING_PX, amplitude_axis_ticks,
    time_axis_ticks,
};
pub use engine::EcgPlot;
pub use plot_layout::{AMPLITUDE_AXIS_GUTTER_PX, PLOT_PADDING_PX, PlotLayout, TIME_AXIS_GUTTER_PX};
pub use plot_options::{
    AMPLITUDE_TICK_DECIMALS, AMPLITUDE_TICK_SIZE_MV, AmplitudeAxisOptions, GridMarking,
    GridOptions, PlotOptions, SERIES_LINE_WIDTH, SeriesStyle, TIME_TICK_LENGTH_PX,
    TimeAxisOptions,
};
pub use render_frame_builder::{AXIS_COLOR, AXIS_LINE_WIDTH, LABEL_FONT_SIZE_PX, build_render_frame};
pub use settings::{
    AxesOptions, EcgLineWidthOptions, EcgPlotOptions, EcgPlotSettings, InteractiveOptions,
};
pub use settings_resolver::{
    DEFAULT_BOLD_LINE_WIDTH, DEFAULT_NORMAL_LINE_WIDTH, DEFAULT_TIME_FORMAT, Interactivity,
    LineWidths, ResolvedSettings, resolve_settings,
};
