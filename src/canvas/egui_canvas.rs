//! `Canvas` implementation on top of an egui painter

use egui::text::LayoutJob;
use egui::{Align, Color32, FontId, Pos2, Rect, Shape, Stroke, TextureHandle, TextureOptions};
use std::collections::HashMap;
use tracing::debug;

use super::{arc_points, Canvas};
use crate::message_image::MessageImage;

const ARC_SEGMENTS: usize = 48;
const MAX_CACHED_TEXTURES: usize = 16;

/// GPU textures for `MessageImage`s, keyed by image id
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<u64, TextureHandle>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    fn texture(&mut self, ctx: &egui::Context, image: &MessageImage) -> &TextureHandle {
        if !self.textures.contains_key(&image.id()) && self.textures.len() >= MAX_CACHED_TEXTURES {
            debug!("Texture cache full, dropping {} textures", self.textures.len());
            self.textures.clear();
        }
        self.textures.entry(image.id()).or_insert_with(|| {
            ctx.load_texture(
                format!("overlay_image_{}", image.id()),
                image.color_image().clone(),
                TextureOptions::LINEAR,
            )
        })
    }
}

/// Paints overlay-local coordinates onto an egui painter at `origin`
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
    textures: &'a mut TextureCache,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2, textures: &'a mut TextureCache) -> Self {
        Self {
            painter,
            origin,
            textures,
        }
    }

    fn to_screen(&self, rect: Rect) -> Rect {
        rect.translate(self.origin.to_vec2())
    }
}

impl Canvas for EguiCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.painter.rect_filled(self.to_screen(rect), 0.0, color);
    }

    fn draw_image(&mut self, pos: Pos2, image: &MessageImage) {
        let rect = self.to_screen(Rect::from_min_size(pos, image.size()));
        let texture = self.textures.texture(self.painter.ctx(), image);
        self.painter.image(
            texture.id(),
            rect,
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    fn stroke_arc(&mut self, bounds: Rect, start_deg: f32, span_deg: f32, stroke: Stroke) {
        let points = arc_points(self.to_screen(bounds), start_deg, span_deg, ARC_SEGMENTS);
        self.painter.add(Shape::line(points, stroke));
    }

    fn draw_text(&mut self, rect: Rect, text: &str, font_size: f32, color: Color32) {
        let rect = self.to_screen(rect);
        let mut job = LayoutJob::simple(
            text.to_owned(),
            FontId::proportional(font_size),
            color,
            rect.width(),
        );
        job.halign = Align::Center;
        let galley = self.painter.layout_job(job);
        // Centered galleys are laid out around x = 0
        let pos = Pos2::new(rect.center().x, rect.center().y - galley.size().y / 2.0);
        self.painter.galley(pos, galley, color);
    }
}
