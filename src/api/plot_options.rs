use serde::{Deserialize, Serialize};

use crate::core::{AxisZoomRange, GridLine, GridSpec, ZoomBounds};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

use super::ResolvedSettings;

pub const SERIES_LINE_WIDTH: f64 = 2.0;
pub const TIME_TICK_LENGTH_PX: f64 = 20.0;
pub const AMPLITUDE_TICK_SIZE_MV: f64 = 0.1;
pub const AMPLITUDE_TICK_DECIMALS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub color: Color,
    pub line_width: f64,
    pub show_lines: bool,
    pub show_points: bool,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_width: SERIES_LINE_WIDTH,
            show_lines: true,
            show_points: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAxisOptions {
    pub time_format: String,
    pub min: f64,
    pub max: f64,
    pub pan_range: (f64, f64),
    pub zoom_range: Option<AxisZoomRange>,
    pub tick_length_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmplitudeAxisOptions {
    pub min: f64,
    pub max: f64,
    pub pan_range: (f64, f64),
    pub zoom_range: Option<AxisZoomRange>,
    pub tick_size: f64,
    pub min_tick_size: f64,
    pub tick_decimals: u32,
}

/// One gridline drawn as a grid marking.
///
/// `line_width` is only set for bold lines; the rest fall back to
/// [`GridOptions::markings_line_width`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMarking {
    pub line: GridLine,
    pub color: Color,
    pub line_width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridOptions {
    pub markings: Vec<GridMarking>,
    pub markings_line_width: f64,
    pub hoverable: bool,
    pub clickable: bool,
}

impl GridOptions {
    #[must_use]
    pub fn stroke_width(&self, marking: &GridMarking) -> f64 {
        marking.line_width.unwrap_or(self.markings_line_width)
    }
}

/// Complete configuration handed to the drawing side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotOptions {
    pub series: SeriesStyle,
    pub show_legend: bool,
    pub x_axis: TimeAxisOptions,
    pub y_axis: AmplitudeAxisOptions,
    pub grid: GridOptions,
    pub pan_enabled: bool,
    pub zoom_enabled: bool,
}

impl PlotOptions {
    /// Maps a computed grid and resolved settings onto plot options.
    ///
    /// `zoom_bounds` is only meaningful for interactive plots and is ignored
    /// otherwise.
    #[must_use]
    pub fn build(
        grid: &GridSpec,
        settings: &ResolvedSettings,
        zoom_bounds: Option<ZoomBounds>,
    ) -> Self {
        let interactive = settings.interactivity.is_interactive();
        let zoom_bounds = zoom_bounds.filter(|_| interactive);
        let bounds = grid.bounds;

        let markings = grid
            .lines
            .iter()
            .map(|line| GridMarking {
                line: *line,
                color: Color::ECG_RED,
                line_width: line.is_bold().then_some(settings.line_widths.bold),
            })
            .collect();

        Self {
            series: SeriesStyle::default(),
            show_legend: true,
            x_axis: TimeAxisOptions {
                time_format: settings.time_format.clone(),
                min: bounds.time_min,
                max: bounds.time_max,
                pan_range: (bounds.time_min, bounds.time_max),
                zoom_range: zoom_bounds.map(|zoom| zoom.time),
                tick_length_px: TIME_TICK_LENGTH_PX,
            },
            y_axis: AmplitudeAxisOptions {
                min: bounds.amplitude_min,
                max: bounds.amplitude_max,
                pan_range: (bounds.amplitude_min, bounds.amplitude_max),
                zoom_range: zoom_bounds.map(|zoom| zoom.amplitude),
                tick_size: AMPLITUDE_TICK_SIZE_MV,
                min_tick_size: AMPLITUDE_TICK_SIZE_MV,
                tick_decimals: AMPLITUDE_TICK_DECIMALS,
            },
            grid: GridOptions {
                markings,
                markings_line_width: settings.line_widths.normal,
                hoverable: false,
                clickable: false,
            },
            pan_enabled: interactive,
            zoom_enabled: interactive,
        }
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.pan_enabled || self.zoom_enabled
    }

    /// Serializes options to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlotError::InvalidConfig(format!("failed to serialize plot options: {e}"))
        })
    }
}
