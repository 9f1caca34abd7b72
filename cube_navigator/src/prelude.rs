//! Minimal prelude for SDK consumers.

pub use crate::data::{init_navigation_channel, NavUpdate, NavigationSink, Portfolio};
pub use crate::faces::FaceId;
pub use crate::navigation::{NavSource, NavigateTo, NavigationState, SectionId};
pub use crate::sdk::CubeNavigatorBuilder;
