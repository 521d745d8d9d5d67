use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PlotArea, PlotView};
use crate::error::{PlotError, PlotResult};

/// Magnification applied per zoom level.
pub const ZOOM_FACTOR_PER_LEVEL: f64 = 1.5;

/// Configured zoom levels; each level is an exponent of [`ZOOM_FACTOR_PER_LEVEL`].
///
/// `lower` bounds how far out the view may zoom, `upper` how far in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLevelRange {
    pub lower: f64,
    pub upper: f64,
}

impl ZoomLevelRange {
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn validate(self) -> PlotResult<Self> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(PlotError::InvalidConfig(
                "zoom levels must be finite".to_owned(),
            ));
        }
        if self.lower > self.upper {
            return Err(PlotError::InvalidConfig(
                "zoom level `lower` must be <= `upper`".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn lower_amount(self) -> f64 {
        ZOOM_FACTOR_PER_LEVEL.powf(self.lower)
    }

    #[must_use]
    pub fn upper_amount(self) -> f64 {
        ZOOM_FACTOR_PER_LEVEL.powf(self.upper - self.lower)
    }
}

/// Permitted visible span of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisZoomRange {
    /// Narrowest window (deepest zoom).
    pub min_span: f64,
    /// Widest window.
    pub max_span: f64,
}

impl AxisZoomRange {
    #[must_use]
    pub fn contains(self, span: f64) -> bool {
        span >= self.min_span && span <= self.max_span
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBounds {
    pub time: AxisZoomRange,
    pub amplitude: AxisZoomRange,
}

/// Derives per-axis zoom ranges by replaying two centered zooms on a scratch
/// copy of `view`.
///
/// The first zoom (`1.5^lower`) yields the widest allowed spans, the second
/// (`1.5^(upper - lower)`, applied on top) the narrowest. Both are clamped to the
/// pan range like any other zoom. `view` itself is left untouched.
pub fn resolve_zoom_bounds(
    view: &PlotView,
    area: PlotArea,
    levels: ZoomLevelRange,
) -> PlotResult<ZoomBounds> {
    let levels = levels.validate()?;

    let mut scratch = *view;
    scratch.clear_zoom_ranges();
    let center = area.center();

    scratch.zoom(levels.lower_amount(), center, area)?;
    let widest = (scratch.time.span(), scratch.amplitude.span());
    debug!(
        time_span = widest.0,
        amplitude_span = widest.1,
        "widest zoom span"
    );

    scratch.zoom(levels.upper_amount(), center, area)?;
    let narrowest = (scratch.time.span(), scratch.amplitude.span());
    debug!(
        time_span = narrowest.0,
        amplitude_span = narrowest.1,
        "narrowest zoom span"
    );

    Ok(ZoomBounds {
        time: AxisZoomRange {
            min_span: narrowest.0,
            max_span: widest.0,
        },
        amplitude: AxisZoomRange {
            min_span: narrowest.1,
            max_span: widest.1,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::{ZoomLevelRange, resolve_zoom_bounds};
    use crate::core::{AxisBounds, PlotArea, PlotView};

    fn view() -> PlotView {
        PlotView::from_bounds(AxisBounds {
            time_min: 0.0,
            time_max: 900.0,
            amplitude_min: 0.0,
            amplitude_max: 2.25,
        })
    }

    #[test]
    fn positive_levels_shrink_spans() {
        let original = view();
        let bounds = resolve_zoom_bounds(
            &original,
            PlotArea::new(400.0, 100.0),
            ZoomLevelRange::new(2.0, 5.0),
        )
        .expect("bounds");
        assert!((bounds.time.max_span - 400.0).abs() <= 1e-9);
        assert!((bounds.time.min_span - 900.0 / 1.5_f64.powi(5)).abs() <= 1e-9);
        assert!((bounds.amplitude.max_span - 1.0).abs() <= 1e-12);
        assert!(bounds.amplitude.min_span < bounds.amplitude.max_span);
        assert_eq!(original, view());
    }

    #[test]
    fn negative_lower_level_is_clamped_to_full_range() {
        let bounds = resolve_zoom_bounds(
            &view(),
            PlotArea::new(400.0, 100.0),
            ZoomLevelRange::new(-3.0, 1.0),
        )
        .expect("bounds");
        // zooming out stops at the pan range, so the second zoom starts from the
        // full span
        assert_eq!(bounds.time.max_span, 900.0);
        assert!((bounds.time.min_span - 900.0 / 1.5_f64.powi(4)).abs() <= 1e-9);
    }

    #[test]
    fn inverted_or_non_finite_levels_are_rejected() {
        let area = PlotArea::new(400.0, 100.0);
        assert!(resolve_zoom_bounds(&view(), area, ZoomLevelRange::new(5.0, 2.0)).is_err());
        assert!(resolve_zoom_bounds(&view(), area, ZoomLevelRange::new(f64::NAN, 2.0)).is_err());
    }
}
