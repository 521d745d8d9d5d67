use std::time::Instant;

use tracing::debug;

use crate::core::{GridRangeCalculator, PlotView, Sample, Viewport, resolve_zoom_bounds};
use crate::error::PlotResult;
use crate::extensions::ObserverRegistry;
use crate::interaction::InteractionState;
use crate::render::Renderer;
use crate::telemetry::{NoopLogger, PlotLogger, PlotTrace};

use super::engine::PlotState;
use super::{EcgPlot, EcgPlotSettings, Interactivity, PlotLayout, PlotOptions, resolve_settings};

impl<R: Renderer> EcgPlot<R> {
    /// Initializes a plot on a `viewport`-sized surface.
    ///
    /// Fails without side effects on invalid data, options or dimensions.
    pub fn new(renderer: R, viewport: Viewport, settings: EcgPlotSettings) -> PlotResult<Self> {
        Self::with_logger(renderer, viewport, settings, Box::new(NoopLogger))
    }

    /// Same as [`EcgPlot::new`], reporting initialization traces to `logger`.
    pub fn with_logger(
        renderer: R,
        viewport: Viewport,
        settings: EcgPlotSettings,
        logger: Box<dyn PlotLogger>,
    ) -> PlotResult<Self> {
        let state = initialize(viewport, &settings, logger.as_ref())?;
        Ok(Self {
            renderer,
            viewport,
            settings,
            state,
            interaction: InteractionState::default(),
            observers: ObserverRegistry::default(),
            logger,
        })
    }

    /// Re-runs initialization with new samples, keeping every other option.
    ///
    /// On error the plot keeps its previous state. Interactive plots drop their
    /// observers before the new configuration takes effect.
    pub fn rebuild(&mut self, data: Vec<Sample>) -> PlotResult<()> {
        let settings = self.settings.clone().with_data(data);
        let state = initialize(self.viewport, &settings, self.logger.as_ref())?;

        if state.resolved.interactivity.is_interactive() {
            self.observers.clear();
        }
        self.interaction.on_pan_end();
        self.settings = settings;
        self.state = state;
        Ok(())
    }
}

fn initialize(
    viewport: Viewport,
    settings: &EcgPlotSettings,
    logger: &dyn PlotLogger,
) -> PlotResult<PlotState> {
    let started = Instant::now();

    let resolved = resolve_settings(settings)?;
    let calculator = GridRangeCalculator::new(viewport, resolved.rectangle_ratio)?;
    let grid = calculator.compute(&resolved.series);
    logger.log(&PlotTrace::GridComputed {
        bounds: grid.bounds,
        vertical_line_count: grid.vertical_line_count,
        horizontal_line_count: grid.horizontal_line_count,
        gridline_count: grid.lines.len(),
    });

    let layout = PlotLayout::for_viewport(viewport);
    let mut view = PlotView::from_bounds(grid.bounds);

    let zoom_bounds = match resolved.interactivity {
        Interactivity::Static => None,
        Interactivity::Interactive(levels) => {
            let bounds = resolve_zoom_bounds(&view, layout.area(), levels)?;
            view.set_zoom_ranges(bounds.time, bounds.amplitude);
            logger.log(&PlotTrace::ZoomBoundsResolved { bounds });
            Some(bounds)
        }
    };

    let options = PlotOptions::build(&grid, &resolved, zoom_bounds);
    let interactive = resolved.interactivity.is_interactive();
    debug!(
        samples = resolved.series.len(),
        gridlines = grid.lines.len(),
        interactive,
        "plot state initialized"
    );
    logger.log(&PlotTrace::InitCompleted {
        elapsed: started.elapsed(),
        interactive,
    });

    Ok(PlotState {
        resolved,
        grid,
        layout,
        options,
        zoom_bounds,
        view,
    })
}
