use serde::{Deserialize, Serialize};

use crate::core::{AxisBounds, AxisZoomRange};
use crate::error::{PlotError, PlotResult};

/// Pixel-space point relative to the plot area's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the data-drawing area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(self) -> PixelPoint {
        PixelPoint::new(self.width / 2.0, self.height / 2.0)
    }

    fn validate(self) -> PlotResult<Self> {
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0
        {
            return Err(PlotError::InvalidConfig(
                "plot area must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Visible range of one axis plus its navigation limits.
///
/// `pan_range` bounds where the window may go; `zoom_range`, when set, bounds
/// how wide the window may be.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisView {
    pub min: f64,
    pub max: f64,
    pub pan_range: (f64, f64),
    pub zoom_range: Option<AxisZoomRange>,
}

impl AxisView {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            pan_range: (min, max),
            zoom_range: None,
        }
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Scales the span by `1 / amount`, keeping the value at `anchor_fraction`
    /// (0 = min edge, 1 = max edge) fixed.
    ///
    /// The zoom range clamps the target span but never reverses the gesture: a
    /// zoom-out from a window already wider than `max_span` keeps its span, and
    /// a zoom-in never widens the window.
    fn zoom_about(&mut self, anchor_fraction: f64, amount: f64) {
        let span = self.span();
        let anchor = self.min + anchor_fraction * span;
        let mut target_span = span / amount;
        if let Some(range) = self.zoom_range {
            target_span = if amount < 1.0 {
                target_span.min(range.max_span).max(span)
            } else {
                target_span.max(range.min_span).min(span)
            };
        }

        let start = anchor - anchor_fraction * target_span;
        self.place_window(start, target_span);
    }

    fn pan_by(&mut self, delta: f64) {
        let span = self.span();
        self.place_window(self.min + delta, span);
    }

    fn place_window(&mut self, start: f64, span: f64) {
        let (pan_min, pan_max) = self.pan_range;
        if span >= pan_max - pan_min {
            self.min = pan_min;
            self.max = pan_max;
            return;
        }

        if start >= pan_max - span {
            self.min = pan_max - span;
            self.max = pan_max;
            return;
        }
        self.min = start.max(pan_min);
        self.max = self.min + span;
    }
}

/// Current time/amplitude window of a plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotView {
    pub time: AxisView,
    pub amplitude: AxisView,
}

impl PlotView {
    /// Default view: the window equals the bounds, which are also the pan range.
    #[must_use]
    pub fn from_bounds(bounds: AxisBounds) -> Self {
        Self {
            time: AxisView::new(bounds.time_min, bounds.time_max),
            amplitude: AxisView::new(bounds.amplitude_min, bounds.amplitude_max),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> AxisBounds {
        AxisBounds {
            time_min: self.time.min,
            time_max: self.time.max,
            amplitude_min: self.amplitude.min,
            amplitude_max: self.amplitude.max,
        }
    }

    pub fn set_zoom_ranges(&mut self, time: AxisZoomRange, amplitude: AxisZoomRange) {
        self.time.zoom_range = Some(time);
        self.amplitude.zoom_range = Some(amplitude);
    }

    pub fn clear_zoom_ranges(&mut self) {
        self.time.zoom_range = None;
        self.amplitude.zoom_range = None;
    }

    /// Magnifies by `amount` (> 1 zooms in, < 1 zooms out) around `center`.
    pub fn zoom(&mut self, amount: f64, center: PixelPoint, area: PlotArea) -> PlotResult<()> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(PlotError::InvalidConfig(
                "zoom amount must be finite and > 0".to_owned(),
            ));
        }
        let area = area.validate()?;
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(PlotError::InvalidConfig(
                "zoom center must be finite".to_owned(),
            ));
        }

        let time_fraction = (center.x / area.width).clamp(0.0, 1.0);
        // Pixel rows grow downward while amplitude grows upward.
        let amplitude_fraction = 1.0 - (center.y / area.height).clamp(0.0, 1.0);
        self.time.zoom_about(time_fraction, amount);
        self.amplitude.zoom_about(amplitude_fraction, amount);
        Ok(())
    }

    /// Shifts the window by a pixel offset: positive `dx_px` moves toward later
    /// times, positive `dy_px` toward lower amplitudes.
    pub fn pan(&mut self, dx_px: f64, dy_px: f64, area: PlotArea) -> PlotResult<()> {
        let area = area.validate()?;
        if !dx_px.is_finite() || !dy_px.is_finite() {
            return Err(PlotError::InvalidConfig(
                "pan delta must be finite".to_owned(),
            ));
        }

        self.time.pan_by(dx_px / area.width * self.time.span());
        self.amplitude
            .pan_by(-dy_px / area.height * self.amplitude.span());
        Ok(())
    }
}
