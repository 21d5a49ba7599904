//! Loading overlay for egui views
//!
//! Layers a busy spinner, an info or error message, or a placeholder image
//! over a view while the data behind it loads.
//!
//! ```no_run
//! use loading_overlay::{LoadingOverlay, OverlaySettings, Surface};
//!
//! let view = Surface::new("results", egui::vec2(640.0, 480.0));
//! let mut overlay = LoadingOverlay::new(&view, &OverlaySettings::default())?;
//! overlay.start_spin();
//! // ... later
//! overlay.show_message("No results");
//! # Ok::<(), loading_overlay::OverlayError>(())
//! ```

pub mod canvas;
pub mod config;
pub mod error;
pub mod logging;
pub mod message_image;
pub mod overlay;
pub mod relay;
pub mod surface;
pub mod timer;

pub use config::{AppConfig, OverlaySettings};
pub use error::OverlayError;
pub use message_image::MessageImage;
pub use overlay::driver::{LoadEvent, OverlayDriver};
pub use overlay::{LoadingOverlay, OverlayMode, RepaintSink};
pub use relay::ResizeRelay;
pub use surface::Surface;
