use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_RECTANGLE_RATIO, EcgSeries, ZoomLevelRange};
use crate::error::{PlotError, PlotResult};

use super::EcgPlotSettings;

pub const DEFAULT_BOLD_LINE_WIDTH: f64 = 1.5;
pub const DEFAULT_NORMAL_LINE_WIDTH: f64 = 0.3;
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Gridline stroke widths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineWidths {
    pub bold: f64,
    pub normal: f64,
}

impl Default for LineWidths {
    fn default() -> Self {
        Self {
            bold: DEFAULT_BOLD_LINE_WIDTH,
            normal: DEFAULT_NORMAL_LINE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Interactivity {
    Static,
    Interactive(ZoomLevelRange),
}

impl Interactivity {
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Interactive(_))
    }

    #[must_use]
    pub fn level_range(self) -> Option<ZoomLevelRange> {
        match self {
            Self::Static => None,
            Self::Interactive(levels) => Some(levels),
        }
    }
}

/// Validated settings with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    pub series: EcgSeries,
    pub rectangle_ratio: f64,
    pub line_widths: LineWidths,
    pub time_format: String,
    pub interactivity: Interactivity,
}

/// Applies defaults field by field, then validates.
///
/// Partial nested options keep the defaults of their unset siblings, so
/// `ecgLineWidth: { bold: 2 }` still gets the default normal width.
pub fn resolve_settings(settings: &EcgPlotSettings) -> PlotResult<ResolvedSettings> {
    let series = EcgSeries::new(settings.data.clone())?;
    let options = &settings.options;

    let rectangle_ratio = options
        .rectangle_ratio
        .unwrap_or(DEFAULT_RECTANGLE_RATIO);
    validate_positive("rectangleRatio", rectangle_ratio)?;

    let line_widths = LineWidths {
        bold: options
            .ecg_line_width
            .bold
            .unwrap_or(DEFAULT_BOLD_LINE_WIDTH),
        normal: options
            .ecg_line_width
            .normal
            .unwrap_or(DEFAULT_NORMAL_LINE_WIDTH),
    };
    validate_positive("ecgLineWidth.bold", line_widths.bold)?;
    validate_positive("ecgLineWidth.normal", line_widths.normal)?;

    let time_format = options
        .axes
        .timeformat
        .clone()
        .unwrap_or_else(|| DEFAULT_TIME_FORMAT.to_owned());
    validate_time_format(&time_format)?;

    let interactivity = if options.interactive.enable.unwrap_or(false) {
        let levels = options
            .interactive
            .level_range
            .ok_or(PlotError::MissingLevelRange)?;
        Interactivity::Interactive(levels.validate()?)
    } else {
        Interactivity::Static
    };

    Ok(ResolvedSettings {
        series,
        rectangle_ratio,
        line_widths,
        time_format,
        interactivity,
    })
}

fn validate_positive(name: &str, value: f64) -> PlotResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PlotError::InvalidConfig(format!(
            "`{name}` must be finite and > 0, got {value}"
        )));
    }
    Ok(())
}

fn validate_time_format(format: &str) -> PlotResult<()> {
    if format.is_empty() {
        return Err(PlotError::InvalidConfig(
            "`axes.timeformat` must not be empty".to_owned(),
        ));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(PlotError::InvalidConfig(format!(
            "`axes.timeformat` is not a valid strftime format: `{format}`"
        )));
    }
    Ok(())
}
