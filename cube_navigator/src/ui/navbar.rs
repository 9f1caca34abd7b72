//! Desktop nav bar: brand on the left, the five sections on the right.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::data::PortfolioContent;
use crate::navigation::{NavSource, NavigateTo, NavigationState, SectionId};
use crate::ui::{apply_overlay_style, overlay_frame, ACCENT, MOBILE_BREAKPOINT};

pub fn navbar_plugin(app: &mut App) {
    app.add_systems(Update, navbar_system);
}

fn navbar_system(
    mut contexts: EguiContexts,
    windows: Query<&Window>,
    content: Res<PortfolioContent>,
    state: Res<NavigationState>,
    mut requests: EventWriter<NavigateTo>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    if window.width() < MOBILE_BREAKPOINT {
        return;
    }

    egui::TopBottomPanel::top("navbar")
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
                    // Laid out from the right edge, so iterate reversed to
                    // keep Home..Contact reading order.
                    for section in SectionId::ALL.iter().rev() {
                        let active = state.current == *section;
                        if ui.selectable_label(active, section.title()).clicked() {
                            requests.send(NavigateTo {
                                section: *section,
                                source: NavSource::NavBar,
                            });
                        }
                    }
                });
            });
        });
}
