//! Section views. Immediate mode keeps exactly one section mounted per
//! frame: only the current section's widgets are built, the rest do not
//! exist until navigated to.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::data::{Portfolio, PortfolioContent, ProjectEntry};
use crate::navigation::{NavSource, NavigateTo, NavigationState, SectionId};
use crate::ui::{apply_overlay_style, overlay_frame, ACCENT, DIM, TEXT};

/// Contact form draft. Lives outside the section switch so navigating away
/// and back keeps a half-typed message.
#[derive(Resource, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
    pub sent: bool,
}

impl ContactDraft {
    /// Hands the draft off and resets the form.
    pub fn submit(&mut self) -> (String, String, String) {
        self.sent = true;
        (
            std::mem::take(&mut self.name),
            std::mem::take(&mut self.email),
            std::mem::take(&mut self.message),
        )
    }
}

pub fn sections_plugin(app: &mut App) {
    app.init_resource::<ContactDraft>()
        .add_systems(Update, section_panel_system);
}

fn section_panel_system(
    mut contexts: EguiContexts,
    windows: Query<&Window>,
    content: Res<PortfolioContent>,
    state: Res<NavigationState>,
    mut draft: ResMut<ContactDraft>,
    mut requests: EventWriter<NavigateTo>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    // Content on the left, cube visible on the right.
    let width = (window.width() * 0.45).clamp(280.0, 560.0);

    egui::SidePanel::left("section")
        .exact_width(width)
        .resizable(false)
        .frame(overlay_frame())
        .show(contexts.ctx_mut(), |ui| {
            apply_overlay_style(ui);
            egui::ScrollArea::vertical().show(ui, |ui| {
                match state.current {
                    SectionId::Home => home_view(ui, &content.0, &mut requests),
                    SectionId::About => about_view(ui, &content.0),
                    SectionId::Projects => projects_view(ui, &content.0),
                    SectionId::Skills => skills_view(ui, &content.0),
                    SectionId::Contact => contact_view(ui, &content.0, &mut draft),
                }
            });
        });
}

fn home_view(ui: &mut egui::Ui, portfolio: &Portfolio, requests: &mut EventWriter<NavigateTo>) {
    ui.add_space(24.0);
    ui.label(egui::RichText::new("Hi, I'm").size(14.0).color(DIM));
    ui.label(
        egui::RichText::new(&portfolio.name)
            .size(30.0)
            .strong()
            .color(ACCENT),
    );
    ui.label(egui::RichText::new(&portfolio.role).size(16.0));
    ui.add_space(10.0);
    ui.label(&portfolio.tagline);
    ui.add_space(16.0);

    ui.horizontal(|ui| {
        if ui.button("View Projects").clicked() {
            requests.send(NavigateTo {
                section: SectionId::Projects,
                source: NavSource::CallToAction,
            });
        }
        if ui.button("Contact Me").clicked() {
            requests.send(NavigateTo {
                section: SectionId::Contact,
                source: NavSource::CallToAction,
            });
        }
    });

    ui.add_space(16.0);
    ui.label(
        egui::RichText::new("Tip: click a cube face to jump to its section.")
            .size(12.0)
            .color(DIM),
    );
}

fn about_view(ui: &mut egui::Ui, portfolio: &Portfolio) {
    heading(ui, "About Me");
    for paragraph in &portfolio.about {
        ui.label(paragraph);
        ui.add_space(8.0);
    }

    ui.separator();
    ui.label(
        egui::RichText::new("Education & Experience")
            .size(16.0)
            .strong(),
    );
    ui.add_space(6.0);
    for entry in &portfolio.experience {
        ui.label(egui::RichText::new(&entry.title).strong());
        ui.label(&entry.organization);
        ui.label(egui::RichText::new(&entry.period).size(11.0).color(DIM));
        ui.add_space(8.0);
    }
}

fn projects_view(ui: &mut egui::Ui, portfolio: &Portfolio) {
    heading(ui, "Projects");
    for project in &portfolio.projects {
        project_card(ui, project);
        ui.add_space(10.0);
    }
}

fn project_card(ui: &mut egui::Ui, project: &ProjectEntry) {
    ui.group(|ui| {
        ui.label(
            egui::RichText::new(&project.title)
                .size(16.0)
                .strong()
                .color(ACCENT),
        );
        ui.add_space(4.0);
        ui.label(&project.description);
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            for tag in &project.tags {
                chip(ui, tag);
            }
        });
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.hyperlink_to("Demo", project.demo_url.as_str());
            ui.hyperlink_to("Code", project.repo_url.as_str());
            if let Some(image) = &project.image_url {
                ui.hyperlink_to("Preview", image.as_str());
            }
        });
    });
}

fn skills_view(ui: &mut egui::Ui, portfolio: &Portfolio) {
    heading(ui, "Skills");
    for group in &portfolio.skills {
        ui.label(egui::RichText::new(&group.category).size(15.0).strong());
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            for item in &group.items {
                chip(ui, item);
            }
        });
        ui.add_space(12.0);
    }

    if !portfolio.learning.is_empty() {
        ui.separator();
        ui.label(egui::RichText::new("Currently learning").size(15.0).strong());
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            for item in &portfolio.learning {
                chip(ui, item);
            }
        });
    }
}

fn contact_view(ui: &mut egui::Ui, portfolio: &Portfolio, draft: &mut ContactDraft) {
    heading(ui, "Get In Touch");
    ui.label(&portfolio.contact.pitch);
    ui.add_space(8.0);

    ui.hyperlink_to(
        portfolio.contact.email.as_str(),
        format!("mailto:{}", portfolio.contact.email),
    );
    ui.hyperlink_to("GitHub", portfolio.contact.github.as_str());
    ui.hyperlink_to("LinkedIn", portfolio.contact.linkedin.as_str());

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(6.0);

    ui.label("Name");
    ui.text_edit_singleline(&mut draft.name);
    ui.label("Email");
    ui.text_edit_singleline(&mut draft.email);
    ui.label("Message");
    ui.text_edit_multiline(&mut draft.message);
    ui.add_space(8.0);

    if ui.button("Send Message").clicked() {
        let (name, email, _) = draft.submit();
        // No backend; the submission is reported locally.
        eprintln!("cubefolio: message sent by {name} <{email}>");
    }
    if draft.sent {
        ui.label(egui::RichText::new("Message sent!").color(ACCENT));
    }
}

fn heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(18.0);
    ui.label(egui::RichText::new(text).size(24.0).strong().color(ACCENT));
    ui.add_space(10.0);
}

fn chip(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(11.0)
            .color(TEXT)
            .background_color(egui::Color32::from_rgb(45, 45, 58)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_starts_empty_and_unsent() {
        let draft = ContactDraft::default();
        assert!(draft.name.is_empty());
        assert!(draft.email.is_empty());
        assert!(draft.message.is_empty());
        assert!(!draft.sent);
    }

    #[test]
    fn submit_clears_the_form_and_marks_it_sent() {
        let mut draft = ContactDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello!".to_string(),
            sent: false,
        };
        let (name, email, message) = draft.submit();
        assert_eq!(name, "Ada");
        assert_eq!(email, "ada@example.com");
        assert_eq!(message, "Hello!");
        assert!(draft.name.is_empty());
        assert!(draft.message.is_empty());
        assert!(draft.sent);
    }
}
