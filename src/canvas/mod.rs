//! Rendering contexts
//!
//! The overlay paints in its own local coordinates (origin at its top-left
//! corner) through the `Canvas` trait. `EguiCanvas` draws for real,
//! `DisplayList` records what would have been drawn.

mod egui_canvas;

pub use egui_canvas::{EguiCanvas, TextureCache};

use egui::{Color32, Pos2, Rect, Stroke};

use crate::message_image::MessageImage;

pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color32);

    /// Draw an image at its natural size with its top-left corner at `pos`
    fn draw_image(&mut self, pos: Pos2, image: &MessageImage);

    /// Stroke an elliptical arc inscribed in `bounds`.
    ///
    /// Angles are degrees, 0 at three o'clock, positive counter-clockwise.
    fn stroke_arc(&mut self, bounds: Rect, start_deg: f32, span_deg: f32, stroke: Stroke);

    /// Draw text centered in `rect`, word-wrapped to its width
    fn draw_text(&mut self, rect: Rect, text: &str, font_size: f32, color: Color32);
}

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color32,
    },
    Image {
        pos: Pos2,
        image_id: u64,
        size: [usize; 2],
    },
    Arc {
        bounds: Rect,
        start_deg: f32,
        span_deg: f32,
        stroke: Stroke,
    },
    Text {
        rect: Rect,
        text: String,
        font_size: f32,
        color: Color32,
    },
}

/// Canvas that records commands instead of drawing
#[derive(Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_image(&mut self, pos: Pos2, image: &MessageImage) {
        self.commands.push(DrawCommand::Image {
            pos,
            image_id: image.id(),
            size: [image.width(), image.height()],
        });
    }

    fn stroke_arc(&mut self, bounds: Rect, start_deg: f32, span_deg: f32, stroke: Stroke) {
        self.commands.push(DrawCommand::Arc {
            bounds,
            start_deg,
            span_deg,
            stroke,
        });
    }

    fn draw_text(&mut self, rect: Rect, text: &str, font_size: f32, color: Color32) {
        self.commands.push(DrawCommand::Text {
            rect,
            text: text.to_owned(),
            font_size,
            color,
        });
    }
}

/// Points along an arc, for backends without a native arc primitive
pub fn arc_points(bounds: Rect, start_deg: f32, span_deg: f32, segments: usize) -> Vec<Pos2> {
    let segments = segments.max(1);
    let center = bounds.center();
    let (rx, ry) = (bounds.width() / 2.0, bounds.height() / 2.0);
    (0..=segments)
        .map(|i| {
            let deg = start_deg + span_deg * i as f32 / segments as f32;
            let rad = deg.to_radians();
            // Screen y grows downwards, so counter-clockwise means -sin
            Pos2::new(center.x + rx * rad.cos(), center.y - ry * rad.sin())
        })
        .collect()
}
