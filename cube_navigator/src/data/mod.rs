mod channel;
pub(crate) mod content;
mod model;

use bevy::prelude::Resource;

pub use channel::{init_navigation_channel, NavUpdate, NavigationSink};
pub use content::{default_portfolio, load_portfolio, ContentError};
pub use model::{ContactInfo, ExperienceEntry, Portfolio, ProjectEntry, SkillGroup};

/// The content the section views render.
#[derive(Resource, Clone)]
pub struct PortfolioContent(pub Portfolio);
