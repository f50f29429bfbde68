use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

/// The whole site configuration. Built once at startup and never mutated.
pub static CONTENT: LazyLock<Profile> = LazyLock::new(default_content);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub email: String,
    pub socials: Vec<SocialLink>,
    pub resume_url: String,
    pub metrics: Vec<Metric>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: String,
    /// None means "not shown" - never an empty string
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub cover: String,
    pub hover_video: Option<String>,
    pub tags: Vec<String>,
    pub role: String,
    pub problem: String,
    pub approach: String,
    pub result: String,
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub live: Option<String>,
    pub repo: Option<String>,
    pub artifacts: Vec<String>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("duplicate project id: {0}")]
    DuplicateProjectId(String),
    #[error("empty url in {field} of {entry}")]
    EmptyUrl { entry: String, field: &'static str },
}

impl Profile {
    /// Checks the invariants the render code relies on: project ids are
    /// unique, and optional references are either absent or non-empty.
    pub fn validate(&self) -> Result<(), ContentError> {
        let empty = |entry: &str, field: &'static str, url: &Option<String>| {
            if url.as_deref() == Some("") {
                Err(ContentError::EmptyUrl {
                    entry: entry.to_string(),
                    field,
                })
            } else {
                Ok(())
            }
        };

        for social in &self.socials {
            empty(&social.network, "url", &social.url)?;
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProjectId(project.id.clone()));
            }
            empty(&project.id, "hover_video", &project.hover_video)?;
            empty(&project.id, "live", &project.links.live)?;
            empty(&project.id, "repo", &project.links.repo)?;
        }
        Ok(())
    }

    pub fn social_url(&self, network: &str) -> Option<&str> {
        self.socials
            .iter()
            .find(|s| s.network == network)
            .and_then(|s| s.url.as_deref())
    }
}

/// Case-insensitive substring match against project names, preserving the
/// original display order. An empty query matches every project.
pub fn search_projects<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
    let needle = query.to_lowercase();
    projects
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

fn default_content() -> Profile {
    Profile {
        name: "Nouman Akram".to_string(),
        title: "I animate & edit standout content.".to_string(),
        blurb: "Motion designer & video editor delivering high-impact promos, ads, and social content."
            .to_string(),
        email: "realnoumanakram@gmail.com".to_string(),
        socials: vec![
            SocialLink {
                network: "upwork".to_string(),
                url: Some("https://www.upwork.com/freelancers/noumana98".to_string()),
            },
            SocialLink {
                network: "linkedin".to_string(),
                url: Some("https://www.linkedin.com/in/realnoumanakram".to_string()),
            },
            SocialLink {
                network: "youtube".to_string(),
                url: Some("https://www.youtube.com/@realnoumanakram".to_string()),
            },
        ],
        resume_url: "/Nouman_Akram_Resume.pdf".to_string(),
        metrics: vec![
            Metric {
                label: "projects delivered".to_string(),
                value: "120+".to_string(),
            },
            Metric {
                label: "on-time rate".to_string(),
                value: "99%".to_string(),
            },
            Metric {
                label: "avg turnaround".to_string(),
                value: "48h".to_string(),
            },
        ],
        skills: [
            "After Effects",
            "Premiere Pro",
            "Photoshop",
            "Illustrator",
            "Figma",
            "Notion",
            "Google Drive",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        projects: vec![
            Project {
                id: "p1".to_string(),
                name: "Product Launch Teaser".to_string(),
                tagline: "30-sec kinetic type spot that increased sign-ups week-over-week."
                    .to_string(),
                cover:
                    "https://images.unsplash.com/photo-1556157382-97eda2d62296?q=80&w=1600&auto=format&fit=crop"
                        .to_string(),
                hover_video: Some(
                    "https://cdn.coverr.co/videos/coverr-typing-on-a-laptop-1422/1080p.mp4"
                        .to_string(),
                ),
                tags: ["After Effects", "Kinetic Type", "Sound Design"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                role: "Motion Designer & Editor".to_string(),
                problem: "Client needed a hype teaser with minimal assets and a 48h deadline."
                    .to_string(),
                approach:
                    "Storyboarded 6 beats, animated type with graph-editor easing, added SFX hits and whooshes."
                        .to_string(),
                result: "+41% landing CTR in first 72h; used across paid + organic.".to_string(),
                links: ProjectLinks {
                    live: Some("#".to_string()),
                    repo: None,
                    artifacts: vec![
                        "https://images.unsplash.com/photo-1551281044-8b89a8b0f630?q=80&w=1600&auto=format&fit=crop"
                            .to_string(),
                        "https://images.unsplash.com/photo-1529333166437-7750a6dd5a70?q=80&w=1600&auto=format&fit=crop"
                            .to_string(),
                    ],
                },
            },
            Project {
                id: "p2".to_string(),
                name: "YouTube Shorts Pack".to_string(),
                tagline: "20 snackable edits with bold captions and auto-cut beats.".to_string(),
                cover:
                    "https://images.unsplash.com/photo-1556761175-4b46a572b786?q=80&w=1600&auto=format&fit=crop"
                        .to_string(),
                hover_video: Some(
                    "https://cdn.coverr.co/videos/coverr-keyboard-7049/1080p.mp4".to_string(),
                ),
                tags: ["Premiere Pro", "Auto Captions", "Reframing"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                role: "Editor".to_string(),
                problem: "Creator needed a scalable template to turn podcasts into Shorts."
                    .to_string(),
                approach:
                    "Built motion template (MOGRT), beat-synced cuts, added dynamic subtitles and brand colors."
                        .to_string(),
                result: "Watch time +2.3x; 3 clips crossed 1M views.".to_string(),
                links: ProjectLinks {
                    live: None,
                    repo: None,
                    artifacts: vec![],
                },
            },
            Project {
                id: "p3".to_string(),
                name: "Logo Animation Reel".to_string(),
                tagline: "Clean idents with logo reveals and particle accents.".to_string(),
                cover:
                    "https://images.unsplash.com/photo-1545239351-1141bd82e8a6?q=80&w=1400&auto=format&fit=crop"
                        .to_string(),
                hover_video: Some(
                    "https://cdn.coverr.co/videos/coverr-hacker-typing-on-computer-4011/1080p.mp4"
                        .to_string(),
                ),
                tags: ["After Effects", "Trapcode", "Brand"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                role: "Motion Designer".to_string(),
                problem: "Multiple brands needed quick but distinctive animated idents.".to_string(),
                approach:
                    "Crafted 6 reveal styles (wipe, particles, liquid), exported alpha-channeled MOVs."
                        .to_string(),
                result: "Used in intros/outros across 5 channels; bounce rate down on hero pages."
                    .to_string(),
                links: ProjectLinks {
                    live: None,
                    repo: None,
                    artifacts: vec![],
                },
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_names(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_default_content_is_valid() {
        let content = default_content();
        assert!(content.validate().is_ok());

        // Display order is significant and fixed
        assert_eq!(
            content
                .projects
                .iter()
                .map(|p| p.id.as_str())
                .collect::<Vec<_>>(),
            vec!["p1", "p2", "p3"]
        );
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let mut content = default_content();
        content.projects[2].id = "p1".to_string();

        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateProjectId("p1".to_string()))
        );
    }

    #[test]
    fn test_empty_string_urls_rejected() {
        // Empty means "absent" and must be modeled as None, not Some("")
        let mut content = default_content();
        content.projects[0].links.live = Some(String::new());
        assert!(matches!(
            content.validate(),
            Err(ContentError::EmptyUrl { field: "live", .. })
        ));

        let mut content = default_content();
        content.socials[1].url = Some(String::new());
        assert!(matches!(
            content.validate(),
            Err(ContentError::EmptyUrl { field: "url", .. })
        ));
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        let content = default_content();
        let matches = search_projects(&content.projects, "");
        assert_eq!(matches.len(), content.projects.len());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let content = default_content();

        let matches = search_projects(&content.projects, "logo");
        assert_eq!(project_names(&matches), vec!["Logo Animation Reel"]);

        let matches = search_projects(&content.projects, "LOGO");
        assert_eq!(project_names(&matches), vec!["Logo Animation Reel"]);

        let matches = search_projects(&content.projects, "ouTube");
        assert_eq!(project_names(&matches), vec!["YouTube Shorts Pack"]);
    }

    #[test]
    fn test_search_preserves_display_order() {
        // "o" appears in every project name
        let content = default_content();
        let matches = search_projects(&content.projects, "o");
        assert_eq!(
            project_names(&matches),
            vec![
                "Product Launch Teaser",
                "YouTube Shorts Pack",
                "Logo Animation Reel"
            ]
        );
    }

    #[test]
    fn test_search_miss_yields_empty_set() {
        let content = default_content();
        let matches = search_projects(&content.projects, "does-not-exist");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_optional_links_absent_on_shorts_pack() {
        let content = default_content();
        let p2 = &content.projects[1];
        assert_eq!(p2.id, "p2");
        assert!(p2.links.live.is_none());
        assert!(p2.links.repo.is_none());
        assert!(p2.links.artifacts.is_empty());
    }

    #[test]
    fn test_social_url_lookup() {
        let mut content = default_content();
        assert!(content.social_url("upwork").is_some());
        assert!(content.social_url("mastodon").is_none());

        // None entries are filtered, not treated as broken links
        content.socials[0].url = None;
        assert!(content.social_url("upwork").is_none());
    }
}
