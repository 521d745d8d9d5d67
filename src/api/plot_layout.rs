use serde::{Deserialize, Serialize};

use crate::core::{AxisView, PixelPoint, PlotArea, Viewport};

/// Left gutter reserved for amplitude labels.
pub const AMPLITUDE_AXIS_GUTTER_PX: f64 = 44.0;
/// Bottom gutter reserved for time labels.
pub const TIME_AXIS_GUTTER_PX: f64 = 22.0;
pub const PLOT_PADDING_PX: f64 = 6.0;

/// Placement of the plot area inside the container.
///
/// Containers too small to hold the label gutters use the whole surface and
/// draw no labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub labels_visible: bool,
}

impl PlotLayout {
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let horizontal = AMPLITUDE_AXIS_GUTTER_PX + PLOT_PADDING_PX;
        let vertical = TIME_AXIS_GUTTER_PX + PLOT_PADDING_PX;

        if width > 2.0 * horizontal && height > 2.0 * vertical {
            Self {
                left: AMPLITUDE_AXIS_GUTTER_PX,
                top: PLOT_PADDING_PX,
                width: width - horizontal,
                height: height - vertical,
                labels_visible: true,
            }
        } else {
            Self {
                left: 0.0,
                top: 0.0,
                width,
                height,
                labels_visible: false,
            }
        }
    }

    #[must_use]
    pub fn area(self) -> PlotArea {
        PlotArea::new(self.width, self.height)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Converts a container pixel position to plot-area coordinates.
    #[must_use]
    pub fn to_plot_point(self, container: PixelPoint) -> PixelPoint {
        PixelPoint::new(container.x - self.left, container.y - self.top)
    }

    #[must_use]
    pub fn time_to_x(self, time: f64, axis: &AxisView) -> f64 {
        self.left + (time - axis.min) / axis.span() * self.width
    }

    #[must_use]
    pub fn amplitude_to_y(self, amplitude: f64, axis: &AxisView) -> f64 {
        self.bottom() - (amplitude - axis.min) / axis.span() * self.height
    }
}
