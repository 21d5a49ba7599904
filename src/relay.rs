//! Resize relay
//!
//! Event filter installed on a parent surface that re-broadcasts its resize
//! notifications to connected listeners. The original event is never
//! consumed, so the parent's other receivers still see it.

use egui::Vec2;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::trace;

use crate::surface::{EventFilter, EventFlow, Surface, SurfaceEvent};

/// Callback invoked with the parent's new size
pub type ResizeListener = Arc<dyn Fn(Vec2) + Send + Sync>;

#[derive(Default)]
pub struct ResizeRelay {
    listeners: RwLock<Vec<ResizeListener>>,
}

impl ResizeRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a relay and install it as an event filter on `parent`
    pub fn install(parent: &Surface) -> Arc<ResizeRelay> {
        let relay = Arc::new(ResizeRelay::new());
        parent.install_event_filter(relay.clone());
        relay
    }

    /// Register a listener for resize notifications
    pub fn connect<F>(&self, listener: F)
    where
        F: Fn(Vec2) + Send + Sync + 'static,
    {
        self.listeners.write().push(Arc::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }

    /// Call every listener. The list is copied first so listeners may
    /// connect further listeners.
    fn emit(&self, size: Vec2) {
        let listeners = self.listeners.read().clone();
        for listener in &listeners {
            listener(size);
        }
    }
}

impl EventFilter for ResizeRelay {
    fn event_filter(&self, surface: &Surface, event: &SurfaceEvent) -> EventFlow {
        if let SurfaceEvent::Resized { new, .. } = event {
            trace!("Relaying resize of {:?} to {:?}", surface.name(), new);
            self.emit(*new);
        }
        EventFlow::Propagate
    }
}
