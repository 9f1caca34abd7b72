mod menu;
mod navbar;
mod sections;

use bevy_egui::egui;

pub use menu::{menu_plugin, MOBILE_BREAKPOINT};
pub use navbar::navbar_plugin;
pub use sections::{sections_plugin, ContactDraft};

pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(255, 150, 80);
pub(crate) const TEXT: egui::Color32 = egui::Color32::from_rgb(220, 220, 228);
pub(crate) const DIM: egui::Color32 = egui::Color32::from_rgb(150, 150, 165);

pub(crate) fn overlay_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(egui::Color32::from_rgba_premultiplied(15, 15, 22, 220))
        .inner_margin(egui::Margin::same(12))
}

pub(crate) fn apply_overlay_style(ui: &mut egui::Ui) {
    ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
    ui.visuals_mut().override_text_color = Some(TEXT);
}
