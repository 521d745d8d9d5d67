use tracing::trace;

use crate::core::{PixelPoint, PlotView};
use crate::error::{PlotError, PlotResult};
use crate::extensions::PlotEvent;
use crate::interaction::resolve_wheel_zoom_amount;
use crate::render::Renderer;

use super::EcgPlot;

/// Gesture entry points. Pixel positions are container coordinates.
impl<R: Renderer> EcgPlot<R> {
    /// Magnifies the view by `amount` (> 1 zooms in) around `center`, or around
    /// the plot-area center when `None`.
    pub fn zoom(&mut self, amount: f64, center: Option<PixelPoint>) -> PlotResult<()> {
        self.ensure_interactive()?;
        let layout = self.state.layout;
        let anchor = center
            .map(|point| layout.to_plot_point(point))
            .unwrap_or_else(|| layout.area().center());

        self.state.view.zoom(amount, anchor, layout.area())?;
        let bounds = self.state.view.bounds();
        trace!(amount, time_span = bounds.time_span(), "zoomed");
        self.observers.dispatch(PlotEvent::Zoomed { bounds, amount });
        Ok(())
    }

    /// Shifts the view by a pixel offset; positive `dx_px` moves toward later
    /// times, positive `dy_px` toward lower amplitudes.
    pub fn pan(&mut self, dx_px: f64, dy_px: f64) -> PlotResult<()> {
        self.ensure_interactive()?;
        let area = self.state.layout.area();
        self.state.view.pan(dx_px, dy_px, area)?;
        let bounds = self.state.view.bounds();
        trace!(dx_px, dy_px, time_min = bounds.time_min, "panned");
        self.observers.dispatch(PlotEvent::Panned { bounds });
        Ok(())
    }

    pub fn pan_start(&mut self, pointer: PixelPoint) -> PlotResult<()> {
        self.ensure_interactive()?;
        self.interaction.on_pan_start(pointer);
        Ok(())
    }

    /// Applies one drag step. Returns `false` when no pan is in progress.
    pub fn pan_move(&mut self, pointer: PixelPoint) -> PlotResult<bool> {
        self.ensure_interactive()?;
        match self.interaction.on_pan_move(pointer) {
            Some((dx, dy)) => {
                self.pan(dx, dy)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn pan_end(&mut self) {
        self.interaction.on_pan_end();
    }

    /// Zooms by one level per wheel notch at `pointer`. Returns `false` for a
    /// zero delta.
    pub fn wheel_zoom(&mut self, wheel_delta_y: f64, pointer: PixelPoint) -> PlotResult<bool> {
        self.ensure_interactive()?;
        match resolve_wheel_zoom_amount(wheel_delta_y)? {
            Some(amount) => {
                self.zoom(amount, Some(pointer))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Restores the default window computed at initialization.
    pub fn reset_view(&mut self) {
        let mut view = PlotView::from_bounds(self.state.grid.bounds);
        if let Some(zoom) = self.state.zoom_bounds {
            view.set_zoom_ranges(zoom.time, zoom.amplitude);
        }
        self.state.view = view;
        self.interaction.on_pan_end();
        self.observers.dispatch(PlotEvent::ViewReset {
            bounds: view.bounds(),
        });
    }

    fn ensure_interactive(&self) -> PlotResult<()> {
        if self.is_interactive() {
            Ok(())
        } else {
            Err(PlotError::InteractionDisabled)
        }
    }
}
