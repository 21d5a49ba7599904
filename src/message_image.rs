//! Images shown by the overlay
//!
//! `MessageImage` is immutable and cheap to clone. Each image gets a unique
//! id that GPU-side texture caches key on.

use egui::{Color32, ColorImage, Vec2};
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::{OverlayError, Result};

static NEXT_IMAGE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone)]
pub struct MessageImage {
    id: u64,
    image: Arc<ColorImage>,
}

impl MessageImage {
    /// Build from unmultiplied RGBA bytes
    pub fn from_rgba(size: [usize; 2], rgba: &[u8]) -> Result<Self> {
        let [width, height] = size;
        if width == 0 || height == 0 {
            return Err(OverlayError::EmptyImage { width, height });
        }
        let expected = width * height * 4;
        if rgba.len() != expected {
            return Err(OverlayError::ImageDataMismatch {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self::wrap(ColorImage::from_rgba_unmultiplied(size, rgba)))
    }

    pub fn from_color_image(image: ColorImage) -> Result<Self> {
        let [width, height] = image.size;
        if width == 0 || height == 0 {
            return Err(OverlayError::EmptyImage { width, height });
        }
        if image.pixels.len() != width * height {
            return Err(OverlayError::ImageDataMismatch {
                width,
                height,
                expected: width * height * 4,
                actual: image.pixels.len() * 4,
            });
        }
        Ok(Self::wrap(image))
    }

    /// Decode an image file (any format the `image` crate supports)
    pub fn load(path: &Path) -> Result<Self> {
        let decoded = image::open(path).map_err(|source| OverlayError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = decoded.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        Self::from_rgba(size, rgba.as_raw())
    }

    /// Built-in 64x32 busy glyph drawn inside the spinner: three dots
    pub fn default_icon() -> Self {
        const WIDTH: usize = 64;
        const HEIGHT: usize = 32;
        const RADIUS: f32 = 6.0;
        let color = Color32::from_rgb(0x88, 0x88, 0x88);
        let centers = [(14.0, 16.0), (32.0, 16.0), (50.0, 16.0)];

        let mut pixels = vec![Color32::TRANSPARENT; WIDTH * HEIGHT];
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
                let inside = centers.iter().any(|(cx, cy)| {
                    let (dx, dy) = (px - cx, py - cy);
                    dx * dx + dy * dy <= RADIUS * RADIUS
                });
                if inside {
                    pixels[y * WIDTH + x] = color;
                }
            }
        }
        Self::wrap(ColorImage {
            size: [WIDTH, HEIGHT],
            pixels,
        })
    }

    fn wrap(image: ColorImage) -> Self {
        Self {
            id: NEXT_IMAGE_ID.fetch_add(1, Ordering::Relaxed),
            image: Arc::new(image),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn width(&self) -> usize {
        self.image.size[0]
    }

    pub fn height(&self) -> usize {
        self.image.size[1]
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    pub fn color_image(&self) -> &ColorImage {
        &self.image
    }
}

impl PartialEq for MessageImage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for MessageImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageImage")
            .field("id", &self.id)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
