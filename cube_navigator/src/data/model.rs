// Portfolio content shown by the section views. Serde-friendly so a whole
// portfolio can be swapped in from a JSON file.

use serde::{Deserialize, Serialize};
use url::Url;

/// Everything the five sections display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<SkillGroup>,
    pub learning: Vec<String>,
    pub contact: ContactInfo,
}

/// One education or work entry on the about timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub organization: String,
    pub period: String,
}

/// A project card: static descriptor rendered by the projects section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image_url: Option<Url>,
    pub demo_url: Url,
    pub repo_url: Url,
}

/// A named group of skills shown as chips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub github: Url,
    pub linkedin: Url,
    pub pitch: String,
}
