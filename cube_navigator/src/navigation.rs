//! Section navigation: face → section mapping and the navigation state machine.

use bevy::prelude::*;

use crate::data::{NavUpdate, NavigationSink};
use crate::faces::FaceId;
use crate::picking::FaceClicked;

/// One of the five content sections the application can display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// Name shown in the nav bar and mobile menu.
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }
}

/// Face → section lookup. `Left` and `Bottom` both route to `Home`.
pub fn section_for_face(face: FaceId) -> SectionId {
    match face {
        FaceId::Front => SectionId::About,
        FaceId::Back => SectionId::Contact,
        FaceId::Left => SectionId::Home,
        FaceId::Right => SectionId::Projects,
        FaceId::Top => SectionId::Skills,
        FaceId::Bottom => SectionId::Home,
    }
}

/// Where a navigation request came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSource {
    NavBar,
    MobileMenu,
    CallToAction,
    CubeFace,
}

/// Request to show a section.
#[derive(Event, Clone, Copy, Debug)]
pub struct NavigateTo {
    pub section: SectionId,
    pub source: NavSource,
}

/// Open or close the mobile menu.
#[derive(Event, Clone, Copy, Debug)]
pub struct MenuToggle;

/// Fired once per applied transition; the view layer reacts to this
/// instead of polling the state.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionChanged(pub SectionId);

/// Current section and mobile-menu flag. `apply_navigation` is the sole
/// writer; every other system reads.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub current: SectionId,
    pub menu_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current: SectionId::Home,
            menu_open: false,
        }
    }
}

impl NavigationState {
    /// Applies one navigation event. A request raised from the mobile menu
    /// closes the menu in the same transition.
    fn navigate(&mut self, event: &NavigateTo) {
        self.current = event.section;
        if event.source == NavSource::MobileMenu {
            self.menu_open = false;
        }
    }
}

pub fn navigation_plugin(app: &mut App) {
    app.init_resource::<NavigationState>()
        .add_event::<FaceClicked>()
        .add_event::<NavigateTo>()
        .add_event::<MenuToggle>()
        .add_event::<SectionChanged>()
        .add_systems(Update, (route_face_clicks, apply_navigation).chain());
}

/// Routes resolved cube-face clicks into navigation requests.
pub fn route_face_clicks(
    mut clicks: EventReader<FaceClicked>,
    mut requests: EventWriter<NavigateTo>,
) {
    for FaceClicked(face) in clicks.read() {
        requests.send(NavigateTo {
            section: section_for_face(*face),
            source: NavSource::CubeFace,
        });
    }
}

/// Drains this frame's events in arrival order and emits one
/// `SectionChanged` per applied transition.
fn apply_navigation(
    mut state: ResMut<NavigationState>,
    mut toggles: EventReader<MenuToggle>,
    mut requests: EventReader<NavigateTo>,
    mut changed: EventWriter<SectionChanged>,
    sink: Option<Res<NavigationSink>>,
) {
    for MenuToggle in toggles.read() {
        state.menu_open = !state.menu_open;
    }
    for request in requests.read() {
        state.navigate(request);
        changed.send(SectionChanged(request.section));
        if let Some(sink) = &sink {
            sink.send(NavUpdate::SectionChanged(request.section));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_table_is_total_with_home_duplicated() {
        assert_eq!(section_for_face(FaceId::Front), SectionId::About);
        assert_eq!(section_for_face(FaceId::Back), SectionId::Contact);
        assert_eq!(section_for_face(FaceId::Left), SectionId::Home);
        assert_eq!(section_for_face(FaceId::Right), SectionId::Projects);
        assert_eq!(section_for_face(FaceId::Top), SectionId::Skills);
        assert_eq!(section_for_face(FaceId::Bottom), SectionId::Home);
    }

    #[test]
    fn defaults_to_home_with_menu_closed() {
        let state = NavigationState::default();
        assert_eq!(state.current, SectionId::Home);
        assert!(!state.menu_open);
    }

    #[test]
    fn navigating_from_the_mobile_menu_closes_it() {
        let mut state = NavigationState {
            current: SectionId::Home,
            menu_open: true,
        };
        state.navigate(&NavigateTo {
            section: SectionId::Skills,
            source: NavSource::MobileMenu,
        });
        assert_eq!(state.current, SectionId::Skills);
        assert!(!state.menu_open);
    }

    #[test]
    fn other_sources_leave_the_menu_alone() {
        for source in [NavSource::NavBar, NavSource::CallToAction, NavSource::CubeFace] {
            let mut state = NavigationState {
                current: SectionId::Home,
                menu_open: true,
            };
            state.navigate(&NavigateTo {
                section: SectionId::Projects,
                source,
            });
            assert_eq!(state.current, SectionId::Projects);
            assert!(state.menu_open, "source {source:?} should not close the menu");
        }
    }
}
