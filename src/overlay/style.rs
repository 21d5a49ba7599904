//! Resolved overlay style

use egui::{Color32, Stroke};
use tracing::warn;

use crate::config::{to_color32, OverlaySettings};
use crate::message_image::MessageImage;

/// Degrees the arc start moves per spin step
pub const DEGREES_PER_STEP: f32 = 4.0;
/// Spin angle wraps back to zero at this value
pub const SPIN_STEPS: u32 = 90;
/// Arc span; the remaining 20 degrees are the gap that shows rotation
pub const ARC_SPAN_DEG: f32 = 340.0;

/// Colors, sizes and icon the overlay paints with
#[derive(Debug, Clone)]
pub struct OverlayStyle {
    pub backdrop: Color32,
    pub spinner: Stroke,
    pub arc_diameter: f32,
    pub info_color: Color32,
    pub error_color: Color32,
    pub font_size: f32,
    pub icon: MessageImage,
}

impl OverlayStyle {
    /// Resolve settings. An icon that fails to load falls back to the built-in one.
    pub fn from_settings(settings: &OverlaySettings) -> Self {
        let icon = match &settings.icon_path {
            Some(path) => MessageImage::load(path).unwrap_or_else(|e| {
                warn!("Using built-in spinner icon: {}", e);
                MessageImage::default_icon()
            }),
            None => MessageImage::default_icon(),
        };

        Self {
            backdrop: to_color32(settings.backdrop),
            spinner: Stroke::new(settings.arc_width, to_color32(settings.spinner_color)),
            arc_diameter: settings.arc_diameter,
            info_color: to_color32(settings.info_color),
            error_color: to_color32(settings.error_color),
            font_size: settings.font_size,
            icon,
        }
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::from_settings(&OverlaySettings::default())
    }
}
