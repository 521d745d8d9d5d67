//! Telemetry helpers for applications embedding `ecg-plot`.
//!
//! Two layers are available:
//! - every plot reports structured [`PlotTrace`] records to an injectable
//!   [`PlotLogger`] (no-op by default, [`TracingLogger`] forwards to `tracing`);
//! - `init_default_tracing` installs a stock `tracing` subscriber for hosts that
//!   do not wire their own.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{AxisBounds, ZoomBounds};

/// Structured record emitted while a plot initializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlotTrace {
    GridComputed {
        bounds: AxisBounds,
        vertical_line_count: f64,
        horizontal_line_count: f64,
        gridline_count: usize,
    },
    ZoomBoundsResolved {
        bounds: ZoomBounds,
    },
    InitCompleted {
        elapsed: Duration,
        interactive: bool,
    },
}

/// Sink for plot initialization traces.
///
/// Implementations must not fail: a logger has no way to abort plot
/// construction.
pub trait PlotLogger {
    fn log(&self, trace: &PlotTrace);
}

/// Logger that drops every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl PlotLogger for NoopLogger {
    fn log(&self, _trace: &PlotTrace) {}
}

/// Logger forwarding records to `tracing` under the `ecg_plot::trace` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl PlotLogger for TracingLogger {
    fn log(&self, trace: &PlotTrace) {
        match trace {
            PlotTrace::GridComputed {
                bounds,
                vertical_line_count,
                horizontal_line_count,
                gridline_count,
            } => tracing::debug!(
                target: "ecg_plot::trace",
                time_min = bounds.time_min,
                time_max = bounds.time_max,
                amplitude_min = bounds.amplitude_min,
                amplitude_max = bounds.amplitude_max,
                vertical_line_count,
                horizontal_line_count,
                gridline_count,
                "grid computed"
            ),
            PlotTrace::ZoomBoundsResolved { bounds } => tracing::debug!(
                target: "ecg_plot::trace",
                time_min_span = bounds.time.min_span,
                time_max_span = bounds.time.max_span,
                amplitude_min_span = bounds.amplitude.min_span,
                amplitude_max_span = bounds.amplitude.max_span,
                "zoom bounds resolved"
            ),
            PlotTrace::InitCompleted {
                elapsed,
                interactive,
            } => tracing::info!(
                target: "ecg_plot::trace",
                elapsed_ms = elapsed.as_secs_f64() * 1_000.0,
                interactive,
                "plot initialized"
            ),
        }
    }
}

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
