pub mod grid;
pub mod primitives;
pub mod series;
pub mod types;
pub mod view;
pub mod zoom;

pub use grid::{
    AMPLITUDE_STEP_MV, AxisBounds, BOLD_LINE_CADENCE, DEFAULT_RECTANGLE_RATIO, GridAxis, GridLine,
    GridRangeCalculator, GridSpec, LineWeight, TIME_STEP_MS, build_gridlines,
};
pub use primitives::{datetime_to_unix_millis, decimal_to_f64, format_fixed, round_to_tenths};
pub use series::EcgSeries;
pub use types::{Sample, Viewport};
pub use view::{AxisView, PixelPoint, PlotArea, PlotView};
pub use zoom::{
    AxisZoomRange, ZOOM_FACTOR_PER_LEVEL, ZoomBounds, ZoomLevelRange, resolve_zoom_bounds,
};
