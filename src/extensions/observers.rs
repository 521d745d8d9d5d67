use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::AxisBounds;

/// View change notification delivered to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlotEvent {
    Panned { bounds: AxisBounds },
    Zoomed { bounds: AxisBounds, amount: f64 },
    ViewReset { bounds: AxisBounds },
}

impl PlotEvent {
    #[must_use]
    pub fn bounds(self) -> AxisBounds {
        match self {
            Self::Panned { bounds } | Self::Zoomed { bounds, .. } | Self::ViewReset { bounds } => {
                bounds
            }
        }
    }
}

/// Hook for host code reacting to pan/zoom.
///
/// Observers see events after the view has changed and cannot veto them.
pub trait PlotObserver {
    fn on_event(&mut self, event: PlotEvent);
}

impl<F> PlotObserver for F
where
    F: FnMut(PlotEvent),
{
    fn on_event(&mut self, event: PlotEvent) {
        self(event);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObserverId(u64);

/// Ordered observer set; dispatch follows subscription order.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    observers: IndexMap<ObserverId, Box<dyn PlotObserver>>,
}

impl ObserverRegistry {
    pub fn subscribe(&mut self, observer: Box<dyn PlotObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.insert(id, observer);
        id
    }

    /// Returns `true` when `id` was subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.shift_remove(&id).is_some()
    }

    pub fn clear(&mut self) {
        self.observers.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ObserverId) -> bool {
        self.observers.contains_key(&id)
    }

    pub fn dispatch(&mut self, event: PlotEvent) {
        for observer in self.observers.values_mut() {
            observer.on_event(event);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("next_id", &self.next_id)
            .field("ids", &self.observers.keys().collect::<Vec<_>>())
            .finish()
    }
}
