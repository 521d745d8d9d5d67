//! Host-facing hooks that sit beside the plot without touching its internals.

pub mod observers;

pub use observers::{ObserverId, ObserverRegistry, PlotEvent, PlotObserver};
