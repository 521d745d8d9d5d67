//! ecg-plot: ECG paper plotting engine.
//!
//! Turns a sampled ECG trace into a standard ECG paper grid (40 ms x 0.1 mV
//! minor cells, every fifth line bold), resolved plot options and
//! backend-agnostic render frames, with optional bounded pan/zoom.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{EcgPlot, EcgPlotSettings};
pub use error::{PlotError, PlotResult};
