use crate::extensions::{ObserverId, PlotObserver};
use crate::render::Renderer;

use super::EcgPlot;

impl<R: Renderer> EcgPlot<R> {
    /// Registers an observer for pan/zoom/reset events.
    pub fn subscribe(&mut self, observer: Box<dyn PlotObserver>) -> ObserverId {
        self.observers.subscribe(observer)
    }

    /// Removes an observer. Returns `true` when it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
