//! Demo window theme, built from the overlay's greys

use egui::{Color32, Stroke, Visuals};

pub struct ThemeColors;

impl ThemeColors {
    /// Same grey as the overlay backdrop
    pub const BG: Color32 = Color32::from_rgb(0x1B, 0x1B, 0x1B);
    pub const ROW_EVEN: Color32 = Color32::from_rgb(0x24, 0x24, 0x24);
    pub const ROW_ODD: Color32 = Color32::from_rgb(0x2C, 0x2C, 0x2C);

    pub const TEXT: Color32 = Color32::from_rgb(0xDD, 0xDD, 0xDD);
    /// Info message grey
    pub const TEXT_DIM: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);
    /// Spinner arc grey
    pub const TEXT_FAINT: Color32 = Color32::from_rgb(0x42, 0x41, 0x41);

    /// Error message red
    pub const ACCENT: Color32 = Color32::from_rgb(0xC8, 0x53, 0x4A);
}

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = ThemeColors::BG;
    visuals.window_fill = ThemeColors::BG;
    visuals.extreme_bg_color = ThemeColors::ROW_EVEN;
    visuals.override_text_color = Some(ThemeColors::TEXT);
    visuals.selection.bg_fill = ThemeColors::ACCENT;
    visuals.selection.stroke = Stroke::new(1.0, ThemeColors::TEXT);
    visuals.widgets.active.bg_fill = ThemeColors::ACCENT;
    ctx.set_visuals(visuals);
}
