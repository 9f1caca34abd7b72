//! SDK entry points and builder for composing the cube navigator app.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::camera::orbit_camera_plugin;
use crate::config;
use crate::data::{NavigationSink, Portfolio, PortfolioContent};
use crate::navigation::navigation_plugin;
use crate::picking::cube_picking_plugin;
use crate::scene::{setup_scene, spawn_face_labels, spin_plugin};
use crate::ui::{menu_plugin, navbar_plugin, sections_plugin};

/// Builder for constructing a Cubefolio app with customizable plugins.
///
/// The navigation core (state machine, face picking, scene) is always on;
/// the cosmetic and overlay layers can be disabled individually.
pub struct CubeNavigatorBuilder {
    content: Option<Portfolio>,
    sink: Option<NavigationSink>,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_orbit_camera: bool,
    enable_nav_bar: bool,
    enable_mobile_menu: bool,
    enable_sections: bool,
    enable_labels: bool,
    enable_spin: bool,
}

impl Default for CubeNavigatorBuilder {
    fn default() -> Self {
        Self {
            content: None,
            sink: None,
            window_title: "Cubefolio".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb(0.07, 0.07, 0.10),
            enable_orbit_camera: true,
            enable_nav_bar: true,
            enable_mobile_menu: true,
            enable_sections: true,
            enable_labels: true,
            enable_spin: true,
        }
    }
}

impl CubeNavigatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use explicit portfolio content instead of the env-driven default.
    pub fn portfolio(mut self, content: Portfolio) -> Self {
        self.content = Some(content);
        self
    }

    /// Feed navigation updates to host code outside the app.
    pub fn navigation_sink(mut self, sink: NavigationSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_orbit_camera(mut self) -> Self {
        self.enable_orbit_camera = false;
        self
    }

    pub fn disable_nav_bar(mut self) -> Self {
        self.enable_nav_bar = false;
        self
    }

    pub fn disable_mobile_menu(mut self) -> Self {
        self.enable_mobile_menu = false;
        self
    }

    pub fn disable_sections(mut self) -> Self {
        self.enable_sections = false;
        self
    }

    pub fn disable_labels(mut self) -> Self {
        self.enable_labels = false;
        self
    }

    pub fn disable_spin(mut self) -> Self {
        self.enable_spin = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let content = self.content.unwrap_or_else(config::portfolio);

        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .insert_resource(ClearColor(self.clear_color))
        .insert_resource(PortfolioContent(content))
        .add_plugins(navigation_plugin)
        .add_plugins(cube_picking_plugin)
        .add_systems(Startup, setup_scene);

        if let Some(sink) = self.sink {
            app.insert_resource(sink);
        }
        if self.enable_labels {
            app.add_systems(Startup, spawn_face_labels.after(setup_scene));
        }
        if self.enable_spin {
            app.add_plugins(spin_plugin);
        }
        if self.enable_orbit_camera {
            app.add_plugins(orbit_camera_plugin);
        }
        if self.enable_nav_bar {
            app.add_plugins(navbar_plugin);
        }
        if self.enable_mobile_menu {
            app.add_plugins(menu_plugin);
        }
        if self.enable_sections {
            app.add_plugins(sections_plugin);
        }

        app
    }
}
