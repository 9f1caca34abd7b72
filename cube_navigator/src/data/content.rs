//! Built-in portfolio content and JSON file loading.

use std::path::{Path, PathBuf};

use url::Url;

use crate::data::model::{
    ContactInfo, ExperienceEntry, Portfolio, ProjectEntry, SkillGroup,
};

/// Content file loading failures; callers fall back to the built-in content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads a whole portfolio from a JSON file.
pub fn load_portfolio(path: &Path) -> Result<Portfolio, ContentError> {
    let json = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn link(raw: &str) -> Url {
    raw.parse()
        .unwrap_or_else(|err| panic!("cubefolio: invalid built-in url {raw:?}: {err}"))
}

/// The content shipped with the binary.
pub fn default_portfolio() -> Portfolio {
    Portfolio {
        name: "Avery Quinn".to_string(),
        role: "Software Engineer & Graphics Tinkerer".to_string(),
        tagline: "I build interactive tools with a focus on clean code and \
                  user experience. Explore this portfolio by clicking the cube!"
            .to_string(),
        about: vec![
            "I'm a software engineer who enjoys the seam between systems \
             programming and visual interfaces: renderers, editors, and the \
             tooling that makes them pleasant to work in."
                .to_string(),
            "I picked up programming by building small games, and the habit \
             stuck. Most of my projects start as a weekend experiment that \
             refuses to stay small."
                .to_string(),
            "Outside of work I speedcube, take photographs, and walk long \
             loops around the city."
                .to_string(),
        ],
        experience: vec![
            ExperienceEntry {
                title: "BSc in Computer Science".to_string(),
                organization: "Aalto University".to_string(),
                period: "2021 – 2024".to_string(),
            },
            ExperienceEntry {
                title: "Graphics Engineer".to_string(),
                organization: "Fieldline Studio".to_string(),
                period: "2024 – present".to_string(),
            },
            ExperienceEntry {
                title: "Tooling Intern".to_string(),
                organization: "Northbeam Robotics".to_string(),
                period: "Summer 2023".to_string(),
            },
        ],
        projects: vec![
            ProjectEntry {
                title: "Waymark".to_string(),
                description: "Route planner that scores footpaths by light, \
                              noise, and elevation, then renders the trade-offs \
                              as an interactive overlay."
                    .to_string(),
                tags: vec![
                    "Rust".to_string(),
                    "Bevy".to_string(),
                    "OpenStreetMap".to_string(),
                ],
                image_url: Some(link("https://waymark.example.com/preview.png")),
                demo_url: link("https://waymark.example.com"),
                repo_url: link("https://github.com/averyquinn/waymark"),
            },
            ProjectEntry {
                title: "Slipnote".to_string(),
                description: "Local-first note tool with a wiki-style link \
                              graph and instant full-text search."
                    .to_string(),
                tags: vec![
                    "Rust".to_string(),
                    "egui".to_string(),
                    "SQLite".to_string(),
                ],
                image_url: None,
                demo_url: link("https://slipnote.example.com"),
                repo_url: link("https://github.com/averyquinn/slipnote"),
            },
            ProjectEntry {
                title: "Voxel Garden".to_string(),
                description: "A tiny procedural terrarium: plants grow, decay, \
                              and reseed across a voxel grid you can sculpt."
                    .to_string(),
                tags: vec![
                    "Rust".to_string(),
                    "wgpu".to_string(),
                    "Procedural".to_string(),
                ],
                image_url: Some(link("https://voxelgarden.example.com/shot.png")),
                demo_url: link("https://voxelgarden.example.com"),
                repo_url: link("https://github.com/averyquinn/voxel-garden"),
            },
            ProjectEntry {
                title: "Cubefolio".to_string(),
                description: "This site: a spinning cube whose faces navigate \
                              the portfolio you are reading."
                    .to_string(),
                tags: vec!["Rust".to_string(), "Bevy".to_string(), "egui".to_string()],
                image_url: None,
                demo_url: link("https://cubefolio.example.com"),
                repo_url: link("https://github.com/averyquinn/cubefolio"),
            },
        ],
        skills: vec![
            SkillGroup {
                category: "Languages".to_string(),
                items: vec![
                    "Rust".to_string(),
                    "TypeScript".to_string(),
                    "Python".to_string(),
                    "GLSL".to_string(),
                ],
            },
            SkillGroup {
                category: "Graphics & Engines".to_string(),
                items: vec![
                    "Bevy".to_string(),
                    "wgpu".to_string(),
                    "egui".to_string(),
                    "three.js".to_string(),
                ],
            },
            SkillGroup {
                category: "Tools & Practices".to_string(),
                items: vec![
                    "Git".to_string(),
                    "Linux".to_string(),
                    "CI/CD".to_string(),
                    "Profiling".to_string(),
                ],
            },
        ],
        learning: vec!["Compute shaders".to_string(), "Typst".to_string()],
        contact: ContactInfo {
            email: "avery@example.com".to_string(),
            github: link("https://github.com/averyquinn"),
            linkedin: link("https://linkedin.com/in/avery-quinn"),
            pitch: "I'm open to freelance work and interesting collaborations. \
                    Reach out if you'd like to build something together, or \
                    just to say hello!"
                .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_content_is_complete() {
        let portfolio = default_portfolio();
        assert!(!portfolio.name.is_empty());
        assert!(!portfolio.about.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.skills.is_empty());
        assert!(portfolio
            .projects
            .iter()
            .all(|project| !project.tags.is_empty()));
    }

    #[test]
    fn portfolio_survives_a_json_trip() {
        let portfolio = default_portfolio();
        let json = serde_json::to_string(&portfolio).unwrap();
        let parsed: Portfolio = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, portfolio);
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        let missing = Path::new("/nonexistent/portfolio.json");
        assert!(matches!(
            load_portfolio(missing),
            Err(ContentError::Read { .. })
        ));

        let path = std::env::temp_dir().join("cube_navigator_malformed_content.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load_portfolio(&path),
            Err(ContentError::Parse { .. })
        ));
        std::fs::remove_file(&path).ok();
    }
}
