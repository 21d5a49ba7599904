//! Retained host surfaces
//!
//! egui redraws everything every frame, so the pieces of state that a
//! retained toolkit keeps per widget (size, visibility, event filters) live
//! here. A `Surface` is a cheap handle; clones refer to the same surface.

use egui::Vec2;
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::trace;

/// Notifications delivered by a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// The surface changed size
    Resized { old: Vec2, new: Vec2 },
    /// The surface became visible
    Shown,
    /// The surface became invisible
    Hidden,
}

/// Whether an event filter lets an event continue to later receivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    Propagate,
    Consume,
}

/// Intercepts events before the surface's own subscribers see them
pub trait EventFilter: Send + Sync {
    fn event_filter(&self, surface: &Surface, event: &SurfaceEvent) -> EventFlow;
}

/// Plain subscriber callback
pub type SurfaceListener = Arc<dyn Fn(&Surface, &SurfaceEvent) + Send + Sync>;

struct SurfaceInner {
    name: String,
    size: Vec2,
    visible: bool,
    filters: Vec<Arc<dyn EventFilter>>,
    listeners: Vec<SurfaceListener>,
}

/// Handle to a retained surface
#[derive(Clone)]
pub struct Surface {
    inner: Arc<RwLock<SurfaceInner>>,
}

/// Non-owning reference to a surface
#[derive(Clone)]
pub struct WeakSurface {
    inner: Weak<RwLock<SurfaceInner>>,
}

impl Surface {
    /// Create a visible surface of the given size
    pub fn new(name: impl Into<String>, size: Vec2) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SurfaceInner {
                name: name.into(),
                size,
                visible: true,
                filters: Vec::new(),
                listeners: Vec::new(),
            })),
        }
    }

    pub fn name(&self) -> String {
        self.inner.read().name.clone()
    }

    pub fn size(&self) -> Vec2 {
        self.inner.read().size
    }

    pub fn is_visible(&self) -> bool {
        self.inner.read().visible
    }

    /// Resize the surface and notify filters and subscribers.
    ///
    /// Returns `false` if the size did not change.
    pub fn resize(&self, size: Vec2) -> bool {
        let old = {
            let mut inner = self.inner.write();
            if inner.size == size {
                return false;
            }
            std::mem::replace(&mut inner.size, size)
        };
        trace!("Surface {:?} resized {:?} -> {:?}", self.name(), old, size);
        self.dispatch(&SurfaceEvent::Resized { old, new: size });
        true
    }

    /// Show or hide the surface, notifying receivers on change
    pub fn set_visible(&self, visible: bool) -> bool {
        {
            let mut inner = self.inner.write();
            if inner.visible == visible {
                return false;
            }
            inner.visible = visible;
        }
        let event = if visible {
            SurfaceEvent::Shown
        } else {
            SurfaceEvent::Hidden
        };
        self.dispatch(&event);
        true
    }

    /// Install a filter. Filters run in install order, before subscribers.
    pub fn install_event_filter(&self, filter: Arc<dyn EventFilter>) {
        self.inner.write().filters.push(filter);
    }

    /// Remove a previously installed filter, comparing by identity
    pub fn remove_event_filter(&self, filter: &Arc<dyn EventFilter>) -> bool {
        let mut inner = self.inner.write();
        let before = inner.filters.len();
        inner.filters.retain(|f| !same_filter(f, filter));
        inner.filters.len() != before
    }

    pub fn event_filter_count(&self) -> usize {
        self.inner.read().filters.len()
    }

    /// Subscribe to events that no filter consumed
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Surface, &SurfaceEvent) + Send + Sync + 'static,
    {
        self.inner.write().listeners.push(Arc::new(listener));
    }

    pub fn downgrade(&self) -> WeakSurface {
        WeakSurface {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver an event. Returns `false` when a filter consumed it.
    ///
    /// The lock is released before any receiver runs so receivers may read
    /// or modify the surface.
    fn dispatch(&self, event: &SurfaceEvent) -> bool {
        let (filters, listeners) = {
            let inner = self.inner.read();
            (inner.filters.clone(), inner.listeners.clone())
        };

        for filter in &filters {
            if filter.event_filter(self, event) == EventFlow::Consume {
                trace!("Surface event {:?} consumed by filter", event);
                return false;
            }
        }
        for listener in &listeners {
            listener(self, event);
        }
        true
    }
}

impl WeakSurface {
    pub fn upgrade(&self) -> Option<Surface> {
        self.inner.upgrade().map(|inner| Surface { inner })
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Surface")
            .field("name", &inner.name)
            .field("size", &inner.size)
            .field("visible", &inner.visible)
            .field("filters", &inner.filters.len())
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl fmt::Debug for WeakSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakSurface")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

// Compare data pointers only; vtable pointers are not guaranteed unique.
fn same_filter(a: &Arc<dyn EventFilter>, b: &Arc<dyn EventFilter>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}
