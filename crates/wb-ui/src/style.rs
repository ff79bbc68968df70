//! Overlay styling — the stylesheet-injection analog, applied once at
//! mount.

use egui::Color32;

pub const ICON_FILL: Color32 = Color32::from_rgb(60, 60, 80);
pub const ICON_FILL_HOVER: Color32 = Color32::from_rgb(80, 80, 110);
pub const ICON_STROKE: Color32 = Color32::from_rgb(134, 160, 239);
pub const ICON_GLYPH: &str = "📖";

pub const PLACEHOLDER_TEXT: Color32 = Color32::GRAY;

/// Install the overlay's visuals on the egui context.
pub fn install(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.window_rounding = egui::Rounding::same(6.0);
    ctx.set_visuals(visuals);
}
