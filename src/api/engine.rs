use crate::core::{EcgSeries, GridSpec, PlotView, Viewport, ZoomBounds};
use crate::error::PlotResult;
use crate::extensions::ObserverRegistry;
use crate::interaction::InteractionState;
use crate::render::Renderer;
use crate::telemetry::PlotLogger;

use super::{EcgPlotSettings, PlotLayout, PlotOptions, ResolvedSettings};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Everything derived from one initialization pass.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct PlotState {
    pub(super) resolved: ResolvedSettings,
    pub(super) grid: GridSpec,
    pub(super) layout: PlotLayout,
    pub(super) options: PlotOptions,
    pub(super) zoom_bounds: Option<ZoomBounds>,
    pub(super) view: PlotView,
}

/// Handle to an initialized ECG plot.
///
/// Owns the renderer, the computed ECG paper grid, the resolved plot options
/// and the current view. Pan/zoom gestures update the view; `render` turns it
/// into a frame for the renderer.
pub struct EcgPlot<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) settings: EcgPlotSettings,
    pub(super) state: PlotState,
    pub(super) interaction: InteractionState,
    pub(super) observers: ObserverRegistry,
    pub(super) logger: Box<dyn PlotLogger>,
}

impl<R: Renderer> EcgPlot<R> {
    pub fn render(&mut self) -> PlotResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Used by toolkit draw callbacks that own the target surface.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> PlotResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn series(&self) -> &EcgSeries {
        &self.state.resolved.series
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
