//! Mobile menu: hamburger toggle plus a vertical section list on narrow
//! windows.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::data::PortfolioContent;
use crate::navigation::{MenuToggle, NavSource, NavigateTo, NavigationState, SectionId};
use crate::ui::{apply_overlay_style, overlay_frame, ACCENT};

/// Window width, px, below which the nav bar gives way to this menu.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

pub fn menu_plugin(app: &mut App) {
    app.add_systems(Update, mobile_menu_system);
}

fn mobile_menu_system(
    mut contexts: EguiContexts,
    windows: Query<&Window>,
    content: Res<PortfolioContent>,
    state: Res<NavigationState>,
    mut requests: EventWriter<NavigateTo>,
    mut toggles: EventWriter<MenuToggle>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    if window.width() >= MOBILE_BREAKPOINT {
        return;
    }

    egui::TopBottomPanel::top("mobile_menu")
        .frame(overlay_frame())
        .show(contexts.ctx_mut(), |ui| {
            apply_overlay_style(ui);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&content.0.name)
                        .size(18.0)
                        .strong()
                        .color(ACCENT),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if state.menu_open { "✕" } else { "☰" };
                    if ui.button(icon).clicked() {
                        toggles.send(MenuToggle);
                    }
                });
            });
            if state.menu_open {
                ui.separator();
                for section in SectionId::ALL {
                    let active = state.current == section;
                    if ui.selectable_label(active, section.title()).clicked() {
                        // The state machine closes the menu for this source.
                        requests.send(NavigateTo {
                            section,
                            source: NavSource::MobileMenu,
                        });
                    }
                }
            }
        });
}
