//! Cube navigator — an interactive 3×3×3 cube whose faces drive section
//! navigation for a five-section portfolio.
//!
//! Library root: grid, face, navigation, and scene modules plus the SDK
//! builder.

mod camera;
pub mod config;
pub mod data;
pub mod faces;
pub mod grid;
pub mod navigation;
pub mod picking;
mod scene;
mod ui;

pub mod prelude;
pub mod sdk;

pub use camera::{OrbitCamera, MAX_POLAR, MIN_POLAR};
pub use faces::{face_color, FaceId};
pub use grid::{build_grid, Cell, CellCoordinate};
pub use navigation::{section_for_face, NavSource, NavigateTo, NavigationState, SectionId};
pub use picking::{resolve_face, FaceClicked};
