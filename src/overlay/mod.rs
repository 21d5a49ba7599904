//! Loading Overlay
//!
//! A surface layered on top of a parent view that shows what the data
//! behind the view is doing: a spinner while loading, an info or error
//! message, or a placeholder image. The overlay follows the parent's size
//! through a `ResizeRelay` installed on the parent.

pub mod driver;
pub mod style;

use egui::{vec2, Pos2, Rect, Vec2};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::canvas::{Canvas, EguiCanvas, TextureCache};
use crate::config::OverlaySettings;
use crate::error::Result;
use crate::message_image::MessageImage;
use crate::relay::ResizeRelay;
use crate::surface::{EventFilter, Surface, WeakSurface};
use crate::timer::RepaintTimer;
use driver::LoadEvent;
use style::{OverlayStyle, ARC_SPAN_DEG, DEGREES_PER_STEP, SPIN_STEPS};

/// What the overlay is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMode {
    Off,
    Spinning,
    Error,
    InfoText,
    InfoPixmap,
}

/// Receives redraw requests from the overlay
pub trait RepaintSink: Send + Sync {
    fn request_repaint(&self);
}

impl RepaintSink for egui::Context {
    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

/// Mode together with the payload only that mode may read
#[derive(Debug, Clone)]
enum Content {
    Off,
    Spinning { angle: u32 },
    Error(String),
    InfoText(String),
    InfoPixmap(MessageImage),
}

impl Content {
    fn mode(&self) -> OverlayMode {
        match self {
            Content::Off => OverlayMode::Off,
            Content::Spinning { .. } => OverlayMode::Spinning,
            Content::Error(_) => OverlayMode::Error,
            Content::InfoText(_) => OverlayMode::InfoText,
            Content::InfoPixmap(_) => OverlayMode::InfoPixmap,
        }
    }
}

pub struct LoadingOverlay {
    surface: Surface,
    parent: WeakSurface,
    relay: Arc<ResizeRelay>,
    content: Content,
    timer: RepaintTimer,
    style: OverlayStyle,
    repaint_sink: Option<Arc<dyn RepaintSink>>,
    repaint_requests: u64,
}

impl LoadingOverlay {
    /// Create a hidden overlay on top of `parent` and start tracking its size
    pub fn new(parent: &Surface, settings: &OverlaySettings) -> Result<Self> {
        settings.validate()?;

        let surface = Surface::new(format!("{}/overlay", parent.name()), parent.size());
        surface.set_visible(false);

        let relay = ResizeRelay::install(parent);
        let overlay_surface = surface.downgrade();
        let parent_surface = parent.downgrade();
        relay.connect(move |_| {
            if let (Some(overlay), Some(parent)) =
                (overlay_surface.upgrade(), parent_surface.upgrade())
            {
                let size = parent.size();
                if overlay.resize(size) {
                    debug!("Overlay resized to {:?}", size);
                }
            }
        });

        Ok(Self {
            surface,
            parent: parent.downgrade(),
            relay,
            content: Content::Off,
            timer: RepaintTimer::new(settings.timer_interval()),
            style: OverlayStyle::from_settings(settings),
            repaint_sink: None,
            repaint_requests: 0,
        })
    }

    /// Forward redraw requests to the host, e.g. an `egui::Context`
    pub fn set_repaint_sink(&mut self, sink: Arc<dyn RepaintSink>) {
        self.repaint_sink = Some(sink);
    }

    pub fn set_style(&mut self, style: OverlayStyle) {
        self.style = style;
        self.request_repaint();
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    // ------------------------------------------------------------------
    // Mode changes

    /// Show the busy spinner
    pub fn start_spin(&mut self) {
        self.start_spin_at(Instant::now());
    }

    /// Show the busy spinner, with the animation timer anchored at `now`
    pub fn start_spin_at(&mut self, now: Instant) {
        self.enter(Content::Spinning { angle: 0 });
        self.timer.start(now);
    }

    /// Show an error message produced by the data source
    pub fn show_error_message(&mut self, message: impl Into<String>) {
        self.enter(Content::Error(message.into()));
    }

    /// Show an informational message
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.enter(Content::InfoText(message.into()));
    }

    /// Show an image in the middle of the overlay
    pub fn show_message_pixmap(&mut self, image: MessageImage) {
        debug_assert!(image.width() > 0 && image.height() > 0);
        self.enter(Content::InfoPixmap(image));
    }

    /// Hide the overlay. Does nothing if it is already off.
    pub fn hide(&mut self) {
        if matches!(self.content, Content::Off) {
            return;
        }
        self.enter(Content::Off);
    }

    /// Drive the overlay from a data-model event
    pub fn apply(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Started => self.start_spin(),
            LoadEvent::Finished => self.hide(),
            LoadEvent::Empty(message) => self.show_message(message),
            LoadEvent::Failed(message) => self.show_error_message(message),
            LoadEvent::Placeholder(image) => self.show_message_pixmap(image),
        }
    }

    fn enter(&mut self, content: Content) {
        let from = self.content.mode();
        let to = content.mode();
        debug!("Overlay {:?}: {:?} -> {:?}", self.surface.name(), from, to);

        // Only the spinner animates; callers restart the timer when needed
        self.timer.stop();
        self.content = content;
        self.surface.set_visible(to != OverlayMode::Off);
        self.request_repaint();
    }

    // ------------------------------------------------------------------
    // Timer

    /// Apply any animation ticks due at `now`. Returns the number applied.
    ///
    /// Ticks that fell due together advance the angle in one step and
    /// request a single repaint.
    pub fn poll_timer(&mut self, now: Instant) -> u64 {
        let ticks = self.timer.poll(now);
        if ticks > 0 {
            self.advance_spin(ticks);
        }
        ticks
    }

    /// How long the host may wait before the next animation frame
    pub fn next_frame_in(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_next(now)
    }

    fn advance_spin(&mut self, ticks: u64) {
        let Content::Spinning { angle } = &mut self.content else {
            return;
        };
        let steps = (ticks % u64::from(SPIN_STEPS)) as u32;
        *angle = (*angle + steps) % SPIN_STEPS;
        self.request_repaint();
    }

    fn request_repaint(&mut self) {
        self.repaint_requests += 1;
        if let Some(sink) = &self.repaint_sink {
            sink.request_repaint();
        }
    }

    // ------------------------------------------------------------------
    // Queries

    pub fn mode(&self) -> OverlayMode {
        self.content.mode()
    }

    /// Animation phase in `0..90`; zero when not spinning
    pub fn spin_angle(&self) -> u32 {
        match self.content {
            Content::Spinning { angle } => angle,
            _ => 0,
        }
    }

    /// The message shown in `Error` or `InfoText` mode
    pub fn message(&self) -> Option<&str> {
        match &self.content {
            Content::Error(message) | Content::InfoText(message) => Some(message),
            _ => None,
        }
    }

    /// The image shown in `InfoPixmap` mode
    pub fn message_image(&self) -> Option<&MessageImage> {
        match &self.content {
            Content::InfoPixmap(image) => Some(image),
            _ => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.surface.is_visible()
    }

    pub fn is_timer_active(&self) -> bool {
        self.timer.is_active()
    }

    pub fn size(&self) -> Vec2 {
        self.surface.size()
    }

    /// The overlay's own surface
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Total redraw requests made so far
    pub fn repaint_requests(&self) -> u64 {
        self.repaint_requests
    }

    // ------------------------------------------------------------------
    // Rendering

    /// Paint the current mode. Reads state only.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        if matches!(self.content, Content::Off) || !self.surface.is_visible() {
            return;
        }

        let rect = Rect::from_min_size(Pos2::ZERO, self.surface.size());
        let center = rect.center();
        canvas.fill_rect(rect, self.style.backdrop);

        match &self.content {
            Content::Off => {}
            Content::Spinning { angle } => {
                let icon = &self.style.icon;
                canvas.draw_image(center - icon.size() / 2.0, icon);

                let diameter = self.style.arc_diameter;
                let bounds = Rect::from_center_size(center, vec2(diameter, diameter));
                let start = *angle as f32 * DEGREES_PER_STEP;
                canvas.stroke_arc(bounds, start, ARC_SPAN_DEG, self.style.spinner);
            }
            Content::InfoText(message) => {
                canvas.draw_text(rect, message, self.style.font_size, self.style.info_color);
            }
            Content::Error(message) => {
                canvas.draw_text(rect, message, self.style.font_size, self.style.error_color);
            }
            Content::InfoPixmap(image) => {
                canvas.draw_image(center - image.size() / 2.0, image);
            }
        }
    }

    /// Paint onto an egui painter with the overlay's top-left corner at `origin`.
    ///
    /// The overlay is click-through: it only paints and never allocates
    /// widgets or senses input, so the view underneath keeps receiving
    /// pointer and keyboard events. Paint it through a layer painter
    /// (`Context::layer_painter`), not an interactable `Area`.
    pub fn paint_egui(&self, painter: &egui::Painter, origin: Pos2, textures: &mut TextureCache) {
        let mut canvas = EguiCanvas::new(painter, origin, textures);
        self.paint(&mut canvas);
    }
}

impl Drop for LoadingOverlay {
    fn drop(&mut self) {
        self.timer.stop();
        if let Some(parent) = self.parent.upgrade() {
            let relay: Arc<dyn EventFilter> = self.relay.clone();
            parent.remove_event_filter(&relay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawCommand};
    use crate::surface::SurfaceEvent;
    use egui::pos2;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const INTERVAL: Duration = Duration::from_millis(40);

    fn setup() -> (Surface, LoadingOverlay) {
        let parent = Surface::new("list", vec2(400.0, 300.0));
        let overlay = LoadingOverlay::new(&parent, &OverlaySettings::default()).unwrap();
        (parent, overlay)
    }

    fn render(overlay: &LoadingOverlay) -> DisplayList {
        let mut list = DisplayList::new();
        overlay.paint(&mut list);
        list
    }

    fn assert_timer_matches_mode(overlay: &LoadingOverlay) {
        assert_eq!(
            overlay.is_timer_active(),
            overlay.mode() == OverlayMode::Spinning,
            "timer state out of sync in {:?}",
            overlay.mode()
        );
    }

    #[test]
    fn test_new_overlay_is_hidden_and_parent_sized() {
        let (parent, overlay) = setup();
        assert_eq!(overlay.mode(), OverlayMode::Off);
        assert!(!overlay.is_visible());
        assert!(!overlay.is_timer_active());
        assert_eq!(overlay.size(), parent.size());
        assert!(render(&overlay).is_empty());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let parent = Surface::new("list", vec2(1.0, 1.0));
        let settings = OverlaySettings {
            timer_interval_ms: 0,
            ..Default::default()
        };
        assert!(LoadingOverlay::new(&parent, &settings).is_err());
        // A rejected overlay leaves nothing behind on the parent
        assert_eq!(parent.event_filter_count(), 0);
    }

    #[test]
    fn test_timer_runs_only_while_spinning() {
        let (_parent, mut overlay) = setup();
        let image = MessageImage::default_icon();

        overlay.start_spin();
        assert_timer_matches_mode(&overlay);
        overlay.show_message("no data");
        assert_timer_matches_mode(&overlay);
        overlay.start_spin();
        overlay.show_error_message("boom");
        assert_timer_matches_mode(&overlay);
        overlay.start_spin();
        overlay.show_message_pixmap(image);
        assert_timer_matches_mode(&overlay);
        overlay.start_spin();
        assert_timer_matches_mode(&overlay);
        overlay.hide();
        assert_timer_matches_mode(&overlay);
    }

    #[test]
    fn test_mode_entry_shows_overlay() {
        let (_parent, mut overlay) = setup();

        overlay.start_spin();
        assert_eq!(overlay.mode(), OverlayMode::Spinning);
        assert!(overlay.is_visible());

        overlay.show_error_message("failed");
        assert_eq!(overlay.mode(), OverlayMode::Error);
        assert_eq!(overlay.message(), Some("failed"));

        overlay.show_message("empty");
        assert_eq!(overlay.mode(), OverlayMode::InfoText);
        assert_eq!(overlay.message(), Some("empty"));

        let image = MessageImage::default_icon();
        overlay.show_message_pixmap(image.clone());
        assert_eq!(overlay.mode(), OverlayMode::InfoPixmap);
        assert_eq!(overlay.message_image(), Some(&image));
        assert_eq!(overlay.message(), None);
        assert!(overlay.is_visible());
    }

    #[test]
    fn test_spin_angle_after_ticks() {
        let (_parent, mut overlay) = setup();
        let start = Instant::now();
        overlay.start_spin_at(start);

        assert_eq!(overlay.poll_timer(start + INTERVAL * 7), 7);
        assert_eq!(overlay.spin_angle(), 7);

        // 100 ticks in total
        assert_eq!(overlay.poll_timer(start + INTERVAL * 100), 93);
        assert_eq!(overlay.spin_angle(), 100 % 90);
    }

    #[test]
    fn test_spin_angle_wraps_at_90() {
        let (_parent, mut overlay) = setup();
        let start = Instant::now();
        overlay.start_spin_at(start);

        overlay.poll_timer(start + INTERVAL * 89);
        assert_eq!(overlay.spin_angle(), 89);
        overlay.poll_timer(start + INTERVAL * 90);
        assert_eq!(overlay.spin_angle(), 0);
    }

    #[test]
    fn test_start_spin_resets_angle() {
        let (_parent, mut overlay) = setup();
        let start = Instant::now();
        overlay.start_spin_at(start);
        overlay.poll_timer(start + INTERVAL * 10);

        overlay.start_spin_at(start + INTERVAL * 10);
        assert_eq!(overlay.spin_angle(), 0);
        overlay.poll_timer(start + INTERVAL * 13);
        assert_eq!(overlay.spin_angle(), 3);
    }

    #[test]
    fn test_ticks_ignored_when_not_spinning() {
        let (_parent, mut overlay) = setup();
        let start = Instant::now();
        overlay.start_spin_at(start);
        overlay.show_message("done");

        assert_eq!(overlay.poll_timer(start + INTERVAL * 50), 0);
        assert_eq!(overlay.spin_angle(), 0);
        assert_eq!(overlay.next_frame_in(start), None);
    }

    #[test]
    fn test_due_ticks_request_one_repaint() {
        let (_parent, mut overlay) = setup();
        let start = Instant::now();
        overlay.start_spin_at(start);
        let before = overlay.repaint_requests();

        overlay.poll_timer(start + INTERVAL * 4);
        assert_eq!(overlay.repaint_requests(), before + 1);
        overlay.poll_timer(start + INTERVAL * 5);
        assert_eq!(overlay.repaint_requests(), before + 2);
        // Nothing due, nothing requested
        overlay.poll_timer(start + INTERVAL * 5);
        assert_eq!(overlay.repaint_requests(), before + 2);
    }

    #[test]
    fn test_wake_after_long_sleep() {
        let (_parent, mut overlay) = setup();
        let start = Instant::now();
        overlay.start_spin_at(start);
        let before = overlay.repaint_requests();

        let ticks: u64 = (1 << 32) + 4;
        let wake = start + INTERVAL * 4 + Duration::from_millis(40 << 32);
        assert_eq!(overlay.poll_timer(wake), ticks);
        assert_eq!(overlay.spin_angle(), (ticks % 90) as u32);
        assert_eq!(overlay.repaint_requests(), before + 1);
        assert_eq!(overlay.next_frame_in(wake), Some(INTERVAL));
    }

    #[test]
    fn test_show_then_hide_from_any_mode() {
        let starts: [fn(&mut LoadingOverlay); 4] = [
            |o| o.start_spin(),
            |o| o.show_error_message("e"),
            |o| o.show_message_pixmap(MessageImage::default_icon()),
            |_| {},
        ];
        for start in starts {
            let (_parent, mut overlay) = setup();
            start(&mut overlay);
            overlay.show_message("text");
            overlay.hide();
            assert_eq!(overlay.mode(), OverlayMode::Off);
            assert!(!overlay.is_visible());
            assert!(!overlay.is_timer_active());
            assert!(render(&overlay).is_empty());
        }
    }

    #[test]
    fn test_hide_when_off_is_noop() {
        let (_parent, mut overlay) = setup();
        let requests = overlay.repaint_requests();

        overlay.hide();
        overlay.hide();
        assert_eq!(overlay.mode(), OverlayMode::Off);
        assert!(!overlay.is_timer_active());
        assert!(!overlay.is_visible());
        assert_eq!(overlay.repaint_requests(), requests);
    }

    #[test]
    fn test_mode_changes_request_repaint() {
        struct Counter(AtomicUsize);
        impl RepaintSink for Counter {
            fn request_repaint(&self) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let (_parent, mut overlay) = setup();
        let sink = Arc::new(Counter(AtomicUsize::new(0)));
        overlay.set_repaint_sink(sink.clone());

        overlay.show_error_message("a");
        overlay.show_message("b");
        overlay.show_message_pixmap(MessageImage::default_icon());
        overlay.start_spin();
        overlay.hide();
        assert_eq!(sink.0.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_render_references_only_active_message() {
        let (_parent, mut overlay) = setup();
        let style = overlay.style().clone();

        overlay.show_error_message("x");
        let list = render(&overlay);
        assert_eq!(list.texts(), vec!["x"]);
        assert!(list.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Text { color, .. } if *color == style.error_color
        )));

        overlay.show_message("y");
        let list = render(&overlay);
        assert_eq!(list.texts(), vec!["y"]);
        assert!(list.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Text { color, .. } if *color == style.info_color
        )));
    }

    #[test]
    fn test_render_backdrop_covers_surface() {
        let (_parent, mut overlay) = setup();
        overlay.show_message("hello");

        let list = render(&overlay);
        assert_eq!(
            list.commands()[0],
            DrawCommand::FillRect {
                rect: Rect::from_min_size(Pos2::ZERO, vec2(400.0, 300.0)),
                color: overlay.style().backdrop,
            }
        );
        match &list.commands()[1] {
            DrawCommand::Text { rect, .. } => assert_eq!(rect.size(), vec2(400.0, 300.0)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_render_spinner() {
        let (_parent, mut overlay) = setup();
        let start = Instant::now();
        overlay.start_spin_at(start);
        overlay.poll_timer(start + INTERVAL * 5);

        let list = render(&overlay);
        assert_eq!(list.commands().len(), 3);
        assert!(list.texts().is_empty());

        // 64x32 icon centered in a 400x300 surface
        match &list.commands()[1] {
            DrawCommand::Image { pos, size, .. } => {
                assert_eq!(*pos, pos2(168.0, 134.0));
                assert_eq!(*size, [64, 32]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        match &list.commands()[2] {
            DrawCommand::Arc {
                bounds,
                start_deg,
                span_deg,
                stroke,
            } => {
                assert_eq!(*bounds, Rect::from_min_size(pos2(160.0, 110.0), vec2(80.0, 80.0)));
                assert_eq!(*start_deg, 20.0);
                assert_eq!(*span_deg, 340.0);
                assert_eq!(*stroke, overlay.style().spinner);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_render_pixmap_centered() {
        let (_parent, mut overlay) = setup();
        let image = MessageImage::from_rgba([100, 50], &vec![0; 100 * 50 * 4]).unwrap();
        overlay.show_message_pixmap(image.clone());

        let list = render(&overlay);
        assert_eq!(
            list.commands()[1],
            DrawCommand::Image {
                pos: pos2(150.0, 125.0),
                image_id: image.id(),
                size: [100, 50],
            }
        );
    }

    #[test]
    fn test_render_does_not_change_state() {
        let (_parent, mut overlay) = setup();
        overlay.start_spin();
        let requests = overlay.repaint_requests();
        let angle = overlay.spin_angle();

        let first = render(&overlay);
        let second = render(&overlay);
        assert_eq!(first.commands(), second.commands());
        assert_eq!(overlay.repaint_requests(), requests);
        assert_eq!(overlay.spin_angle(), angle);
        assert_eq!(overlay.mode(), OverlayMode::Spinning);
    }

    #[test]
    fn test_overlay_tracks_parent_size() {
        let (parent, overlay) = setup();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        parent.subscribe(move |_, event| sink.lock().push(*event));

        parent.resize(vec2(1024.0, 768.0));
        assert_eq!(overlay.size(), vec2(1024.0, 768.0));
        // The parent's own subscribers still get the notification
        assert_eq!(
            seen.lock().as_slice(),
            &[SurfaceEvent::Resized {
                old: vec2(400.0, 300.0),
                new: vec2(1024.0, 768.0)
            }]
        );

        parent.resize(vec2(10.0, 20.0));
        assert_eq!(overlay.size(), vec2(10.0, 20.0));
    }

    #[test]
    fn test_resize_while_visible_rerenders_at_new_size() {
        let (parent, mut overlay) = setup();
        overlay.show_message("hi");
        parent.resize(vec2(200.0, 100.0));

        let list = render(&overlay);
        assert_eq!(
            list.commands()[0],
            DrawCommand::FillRect {
                rect: Rect::from_min_size(Pos2::ZERO, vec2(200.0, 100.0)),
                color: overlay.style().backdrop,
            }
        );
    }

    #[test]
    fn test_set_style_repaints_with_new_colors() {
        let (_parent, mut overlay) = setup();
        overlay.show_message("styled");
        let requests = overlay.repaint_requests();

        let style = OverlayStyle {
            backdrop: egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
            info_color: egui::Color32::WHITE,
            ..overlay.style().clone()
        };
        overlay.set_style(style);
        assert_eq!(overlay.repaint_requests(), requests + 1);

        let list = render(&overlay);
        assert!(matches!(
            list.commands()[0],
            DrawCommand::FillRect { color, .. } if color == egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128)
        ));
        assert!(matches!(
            &list.commands()[1],
            DrawCommand::Text { color, .. } if *color == egui::Color32::WHITE
        ));
    }

    #[test]
    fn test_overlay_surface_follows_mode() {
        let (_parent, mut overlay) = setup();
        let surface = overlay.surface().clone();
        assert_eq!(surface.name(), "list/overlay");

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        surface.subscribe(move |_, event| sink.lock().push(*event));

        overlay.start_spin();
        overlay.show_message("still visible");
        overlay.hide();
        assert_eq!(
            seen.lock().as_slice(),
            &[SurfaceEvent::Shown, SurfaceEvent::Hidden]
        );
    }

    #[test]
    fn test_drop_uninstalls_relay() {
        let (parent, overlay) = setup();
        assert_eq!(parent.event_filter_count(), 1);
        drop(overlay);
        assert_eq!(parent.event_filter_count(), 0);
        // Resizing after the overlay is gone is harmless
        parent.resize(vec2(5.0, 5.0));
    }

    #[test]
    fn test_overlay_outliving_parent() {
        let (parent, mut overlay) = setup();
        drop(parent);
        overlay.show_message("still fine");
        assert_eq!(render(&overlay).texts(), vec!["still fine"]);
    }

    #[test]
    fn test_apply_load_events() {
        let (_parent, mut overlay) = setup();

        overlay.apply(LoadEvent::Started);
        assert_eq!(overlay.mode(), OverlayMode::Spinning);
        overlay.apply(LoadEvent::Failed("timeout".into()));
        assert_eq!(overlay.mode(), OverlayMode::Error);
        assert_eq!(overlay.message(), Some("timeout"));
        overlay.apply(LoadEvent::Empty("no rows".into()));
        assert_eq!(overlay.mode(), OverlayMode::InfoText);
        overlay.apply(LoadEvent::Placeholder(MessageImage::default_icon()));
        assert_eq!(overlay.mode(), OverlayMode::InfoPixmap);
        overlay.apply(LoadEvent::Finished);
        assert_eq!(overlay.mode(), OverlayMode::Off);
    }
}
