//! Channel between a data source and the overlay
//!
//! Loaders run on worker threads; the overlay lives on the UI thread. Workers
//! send `LoadEvent`s and the UI drains them once per frame.

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::trace;

use super::LoadingOverlay;
use crate::message_image::MessageImage;

/// Progress reported by a data source
#[derive(Debug, Clone)]
pub enum LoadEvent {
    /// Fetching started
    Started,
    /// Data arrived and the view can be shown
    Finished,
    /// Nothing to show, with an explanation
    Empty(String),
    /// Fetching failed
    Failed(String),
    /// Show an image instead of data
    Placeholder(MessageImage),
}

pub struct OverlayDriver {
    sender: Sender<LoadEvent>,
    receiver: Receiver<LoadEvent>,
}

impl Default for OverlayDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayDriver {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Get a sender for reporting from other threads
    pub fn sender(&self) -> Sender<LoadEvent> {
        self.sender.clone()
    }

    /// Apply every pending event in order. Returns how many were applied.
    pub fn drain(&self, overlay: &mut LoadingOverlay) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.receiver.try_recv() {
            trace!("Applying {:?}", event);
            overlay.apply(event);
            applied += 1;
        }
        applied
    }

    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}
