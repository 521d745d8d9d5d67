use crate::core::{AxisBounds, GridSpec, PlotView, Viewport, ZoomBounds};
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::{EcgPlot, EcgPlotSettings, PlotLayout, PlotOptions, ResolvedSettings};

impl<R: Renderer> EcgPlot<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn settings(&self) -> &EcgPlotSettings {
        &self.settings
    }

    #[must_use]
    pub fn resolved_settings(&self) -> &ResolvedSettings {
        &self.state.resolved
    }

    #[must_use]
    pub fn grid_spec(&self) -> &GridSpec {
        &self.state.grid
    }

    #[must_use]
    pub fn options(&self) -> &PlotOptions {
        &self.state.options
    }

    /// Per-axis zoom limits; `None` for static plots.
    #[must_use]
    pub fn zoom_bounds(&self) -> Option<ZoomBounds> {
        self.state.zoom_bounds
    }

    /// Currently displayed window.
    #[must_use]
    pub fn axis_bounds(&self) -> AxisBounds {
        self.state.view.bounds()
    }

    #[must_use]
    pub fn view(&self) -> &PlotView {
        &self.state.view
    }

    #[must_use]
    pub fn layout(&self) -> PlotLayout {
        self.state.layout
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.state.resolved.interactivity.is_interactive()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
