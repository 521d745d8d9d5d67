use serde::{Deserialize, Serialize};

use crate::core::{Sample, ZoomLevelRange};
use crate::error::{PlotError, PlotResult};

/// Host-facing plot setup: the ECG samples plus user options.
///
/// Every option is optional; [`resolve_settings`](super::resolve_settings)
/// fills gaps field by field from the documented defaults. The JSON form uses
/// the camelCase option names (`rectangleRatio`, `ecgLineWidth.bold`,
/// `axes.timeformat`, `interactive.levelRange.lower`, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcgPlotSettings {
    #[serde(default)]
    pub data: Vec<Sample>,
    #[serde(default)]
    pub options: EcgPlotOptions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcgPlotOptions {
    /// Width/height ratio of the minor grid cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rectangle_ratio: Option<f64>,
    #[serde(default)]
    pub ecg_line_width: EcgLineWidthOptions,
    #[serde(default)]
    pub axes: AxesOptions,
    #[serde(default)]
    pub interactive: InteractiveOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcgLineWidthOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxesOptions {
    /// strftime-style time axis format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeformat: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_range: Option<ZoomLevelRange>,
}

impl EcgPlotSettings {
    #[must_use]
    pub fn new(data: Vec<Sample>) -> Self {
        Self {
            data,
            options: EcgPlotOptions::default(),
        }
    }

    #[must_use]
    pub fn from_pairs(pairs: &[(i64, f64)]) -> Self {
        Self::new(pairs.iter().copied().map(Sample::from).collect())
    }

    /// Sets the minor-cell width/height ratio.
    #[must_use]
    pub fn with_rectangle_ratio(mut self, ratio: f64) -> Self {
        self.options.rectangle_ratio = Some(ratio);
        self
    }

    /// Sets stroke widths for bold (major) and normal (minor) gridlines.
    #[must_use]
    pub fn with_line_widths(mut self, bold: f64, normal: f64) -> Self {
        self.options.ecg_line_width = EcgLineWidthOptions {
            bold: Some(bold),
            normal: Some(normal),
        };
        self
    }

    /// Sets the time axis label format.
    #[must_use]
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.options.axes.timeformat = Some(format.into());
        self
    }

    /// Enables pan/zoom bounded by the given zoom levels.
    #[must_use]
    pub fn with_interactive(mut self, levels: ZoomLevelRange) -> Self {
        self.options.interactive = InteractiveOptions {
            enable: Some(true),
            level_range: Some(levels),
        };
        self
    }

    #[must_use]
    pub fn with_interactive_enabled(mut self, enable: bool) -> Self {
        self.options.interactive.enable = Some(enable);
        self
    }

    /// Replaces the samples, keeping every option.
    #[must_use]
    pub fn with_data(mut self, data: Vec<Sample>) -> Self {
        self.data = data;
        self
    }

    /// Serializes settings to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidConfig(format!("failed to serialize settings: {e}")))
    }

    /// Deserializes settings from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidConfig(format!("failed to parse settings: {e}")))
    }
}
