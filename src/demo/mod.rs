//! Demo window
//!
//! A fake result list with the loading overlay layered on top. The side
//! panel drives every overlay mode directly or through a simulated loader
//! running on a worker thread.

mod theme;

use egui::{Color32, Id, LayerId, Order, RichText};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::{error, info};

use loading_overlay::canvas::TextureCache;
use loading_overlay::{
    AppConfig, LoadEvent, LoadingOverlay, MessageImage, OverlayDriver, OverlayMode, Surface,
};

use self::theme::ThemeColors;

/// How a simulated load ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadOutcome {
    Success,
    Empty,
    Failure,
}

pub struct DemoApp {
    config: AppConfig,
    /// The list view the overlay sits on
    view: Surface,
    overlay: LoadingOverlay,
    driver: OverlayDriver,
    textures: TextureCache,
    placeholder: MessageImage,
    message: String,
    loader: Option<JoinHandle<()>>,
    loads_started: u32,
    theme_applied: bool,
}

impl DemoApp {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let view = Surface::new("results", egui::vec2(800.0, 600.0));
        let overlay = LoadingOverlay::new(&view, &config.overlay)?;
        Ok(Self {
            config,
            view,
            overlay,
            driver: OverlayDriver::new(),
            textures: TextureCache::new(),
            placeholder: gradient_placeholder(),
            message: "Nothing to show yet".to_string(),
            loader: None,
            loads_started: 0,
            theme_applied: false,
        })
    }

    /// Create eframe options for the demo window
    pub fn options() -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1000.0, 640.0])
                .with_min_inner_size([600.0, 400.0])
                .with_title("Loading Overlay Demo"),
            ..Default::default()
        }
    }

    /// Start a simulated load on a worker thread
    fn simulate_load(&mut self, outcome: LoadOutcome) {
        if self.loader.is_some() {
            return;
        }
        self.loads_started += 1;
        let id = self.loads_started;
        let sender = self.driver.sender();
        let duration = Duration::from_millis(self.config.demo.load_duration_ms);
        info!("Simulated load #{} started ({:?})", id, outcome);

        self.loader = Some(std::thread::spawn(move || {
            let _ = sender.send(LoadEvent::Started);
            std::thread::sleep(duration);
            let event = match outcome {
                LoadOutcome::Success => LoadEvent::Finished,
                LoadOutcome::Empty => LoadEvent::Empty(format!("Load #{} returned no items", id)),
                LoadOutcome::Failure => {
                    LoadEvent::Failed(format!("Load #{} failed: connection refused", id))
                }
            };
            let _ = sender.send(event);
        }));
    }

    fn reap_loader(&mut self) {
        if self.loader.as_ref().is_some_and(|h| h.is_finished()) {
            if let Some(handle) = self.loader.take() {
                if handle.join().is_err() {
                    error!("Simulated loader panicked");
                }
            }
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Overlay");
        ui.label(
            RichText::new(format!("Mode: {:?}", self.overlay.mode()))
                .color(ThemeColors::TEXT_DIM),
        );
        if self.overlay.mode() == OverlayMode::Spinning {
            ui.label(
                RichText::new(format!("Angle: {}", self.overlay.spin_angle()))
                    .color(ThemeColors::TEXT_FAINT),
            );
        }
        ui.separator();

        if ui.button("Start spin").clicked() {
            self.overlay.start_spin();
        }
        ui.text_edit_singleline(&mut self.message);
        if ui.button("Show message").clicked() {
            self.overlay.show_message(self.message.clone());
        }
        if ui.button("Show error").clicked() {
            self.overlay.show_error_message(self.message.clone());
        }
        if ui.button("Show image").clicked() {
            self.overlay.show_message_pixmap(self.placeholder.clone());
        }
        if ui.button("Hide").clicked() {
            self.overlay.hide();
        }

        ui.separator();
        ui.label(RichText::new("Simulated loader").color(ThemeColors::TEXT_DIM));
        let idle = self.loader.is_none();
        ui.add_enabled_ui(idle, |ui| {
            if ui.button("Load").clicked() {
                self.simulate_load(LoadOutcome::Success);
            }
            if ui.button("Load (empty)").clicked() {
                self.simulate_load(LoadOutcome::Empty);
            }
            if ui.button("Load (failure)").clicked() {
                self.simulate_load(LoadOutcome::Failure);
            }
        });
    }

    fn render_results(&mut self, ui: &mut egui::Ui) {
        let rect = ui.available_rect_before_wrap();
        // Keeps the overlay in step with the panel through the relay
        self.view.resize(rect.size());

        egui::ScrollArea::vertical().show(ui, |ui| {
            for row in 0..self.config.demo.rows {
                let fill = if row % 2 == 0 {
                    ThemeColors::ROW_EVEN
                } else {
                    ThemeColors::ROW_ODD
                };
                egui::Frame::none()
                    .fill(fill)
                    .inner_margin(6.0)
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.label(
                            RichText::new(format!("Result row {}", row + 1))
                                .color(ThemeColors::TEXT),
                        );
                    });
            }
        });

        let painter = ui
            .ctx()
            .layer_painter(LayerId::new(Order::Foreground, Id::new("loading_overlay")))
            .with_clip_rect(rect);
        self.overlay.paint_egui(&painter, rect.min, &mut self.textures);
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.overlay.set_repaint_sink(Arc::new(ctx.clone()));
            self.theme_applied = true;
        }

        self.driver.drain(&mut self.overlay);
        self.reap_loader();

        let now = Instant::now();
        self.overlay.poll_timer(now);

        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| self.render_controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.render_results(ui));

        if let Some(delay) = self.overlay.next_frame_in(now) {
            ctx.request_repaint_after(delay);
        }
        if self.loader.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

/// 128x128 diagonal gradient used by "Show image"
fn gradient_placeholder() -> MessageImage {
    const SIZE: usize = 128;
    let pixels = (0..SIZE * SIZE)
        .map(|i| {
            let (x, y) = (i % SIZE, i / SIZE);
            let t = ((x + y) * 255 / (2 * SIZE - 2)) as u8;
            Color32::from_rgb(t, 96, 255 - t)
        })
        .collect();
    MessageImage::from_color_image(egui::ColorImage {
        size: [SIZE, SIZE],
        pixels,
    })
    .unwrap_or_else(|_| MessageImage::default_icon())
}

/// Run the demo window (blocking)
pub fn run_demo(config: AppConfig) -> anyhow::Result<()> {
    let app = DemoApp::new(config)?;
    eframe::run_native(
        "Loading Overlay Demo",
        DemoApp::options(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Demo window error: {}", e))
}
