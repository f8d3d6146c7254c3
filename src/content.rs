use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const OWNER: &str = "Harsh Mehta";
pub const EMAIL: &str = "hdmehta406@gmail.com";
pub const RESUME_PATH: &str = "/assets/resume/resume.pdf";
pub const TESTIMONIALS_PATH: &str = "/data/testimonials.json";
pub const TESTIMONIALS_FILE: &str = "testimonials.json";

/// JSON documents served under `/data`.
#[derive(Embed)]
#[folder = "public/data"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct DataAssets;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub quote: String,
    pub author: String,
    #[serde(rename = "position")]
    pub role: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("couldn't parse testimonials: {0}")]
    Parse(String),
}

/// How a testimonial fetch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(Vec<Testimonial>),
    Failed(ContentError),
    /// Aborted by teardown. Not an error.
    Cancelled,
}

pub fn parse_testimonials(body: &str) -> Result<Vec<Testimonial>, ContentError> {
    serde_json::from_str(body).map_err(|e| ContentError::Parse(e.to_string()))
}

/// Maps a non-success HTTP status to an error.
pub fn check_status(status: u16) -> Result<(), ContentError> {
    match http::StatusCode::from_u16(status) {
        Ok(code) if code.is_success() => Ok(()),
        _ => Err(ContentError::Status(status)),
    }
}

/// Resolves an outcome to the list to display. Failures are reported through
/// `log_error` exactly once; cancellation is silent.
pub fn settle(outcome: FetchOutcome, log_error: impl FnOnce(&ContentError)) -> Vec<Testimonial> {
    match outcome {
        FetchOutcome::Loaded(testimonials) => testimonials,
        FetchOutcome::Failed(err) => {
            log_error(&err);
            Vec::new()
        }
        FetchOutcome::Cancelled => {
            log::debug!("testimonial fetch cancelled");
            Vec::new()
        }
    }
}

/// Whether a rejected request's `DOMException` name means it was aborted.
pub fn is_abort(name: &str) -> bool {
    name == "AbortError"
}

/// The testimonials shipped with the binary.
#[cfg(test)]
fn embedded_testimonials() -> Result<Vec<Testimonial>, ContentError> {
    let file = DataAssets::get(TESTIMONIALS_FILE)
        .ok_or_else(|| ContentError::Network(format!("{TESTIMONIALS_FILE} not embedded")))?;
    let body = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
    parse_testimonials(body)
}

pub type ProjectId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// Card image sits on a gradient instead of a flat background.
    pub gradient: bool,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "APE (Audio Personality Emulator)",
        subtitle: "Natural Language Processing & Generative ML Model",
        description: "Developing a voice emulation system using Random Forest Regression to predict audio sequences, with plans for GAN integration for realistic voice synthesis.\n\
            • Worked on MFCC feature extraction, data preprocessing, and initial model training, showcasing expertise in machine learning pipelines and audio processing.\n\
            • Aiming to enable users to set personalized voice profiles for devices like Alexa or Siri, addressing the demand for custom AI-driven solutions.",
        image: "/assets/projects/ape.png",
        gradient: true,
    },
    Project {
        id: 2,
        title: "Sociabuzz",
        subtitle: "REST API & REACT.Js",
        description: "Constructed a robust REST API for a social media platform, providing comprehensive CRUD functionality to users, utilizing Node.js and MongoDB. Developed a scalable and efficient backend system.\n\
            • Developed the frontend of the application using React.js; users experienced a 30% improvement in navigation and responsiveness, enhancing their overall experience.\n\
            • Leveraged the capabilities of Node.js and MongoDB to ensure efficient data access, resulting in improved platform performance and usability. Data retrieval times were reduced by 40%.",
        image: "/assets/projects/sociabuzz.png",
        gradient: false,
    },
    Project {
        id: 3,
        title: "Carbon Footprint Analysis",
        subtitle: "EDA & DataAnalysis",
        description: "Analyzed 3 datasets and processed 100,000+ data points to calculate carbon intensities for 15 industries. Developed visualizations using Python libraries to present analysis findings and enable data-driven decisions. Implemented data normalization techniques for accurate comparison of carbon emissions across commodities. Planned future expansion with machine learning integration and real-time carbon footprint tracking web application.",
        image: "/assets/projects/carbon.png",
        gradient: true,
    },
];

pub fn project(id: ProjectId) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineItem {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub date: &'static str,
    pub gpa: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineSection {
    pub number: &'static str,
    pub title: &'static str,
    pub items: &'static [TimelineItem],
}

pub static TIMELINE: [TimelineSection; 2] = [
    TimelineSection {
        number: "01",
        title: "Education",
        items: &[TimelineItem {
            title: "Bachelor of Technology in Computer Science",
            subtitle: Some("Indian Institute of Information Technology, Vadodara"),
            date: "2020 - 2024",
            gpa: Some("GPA: 8.37/10.0"),
        }],
    },
    TimelineSection {
        number: "02",
        title: "Work Experience",
        items: &[
            TimelineItem {
                title: "Software Engineer",
                subtitle: Some("Searce India Pvt. Ltd."),
                date: "July, 2024 - Present",
                gpa: None,
            },
            TimelineItem {
                title: "Software Engineer Analyst",
                subtitle: Some("Searce India Pvt. Ltd."),
                date: "Jan, 2024 - Jul, 2024",
                gpa: None,
            },
            TimelineItem {
                title: "Data Science Intern",
                subtitle: Some("Arcelor Mittal Nippon Steel India Pvt. Ltd."),
                date: "May, 2023 - Jul, 2023",
                gpa: None,
            },
            TimelineItem {
                title: "Research Intern",
                subtitle: Some("International Institute of Information Technology, Hyderabad"),
                date: "May, 2023 - Jul, 2023",
                gpa: None,
            },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechItem {
    pub name: &'static str,
    /// Devicon class stem; `-plain` is the monochrome icon and `-plain colored`
    /// the hover variant.
    pub icon: &'static str,
}

impl TechItem {
    pub fn plain_class(&self) -> String {
        format!("{}-plain", self.icon)
    }

    pub fn colored_class(&self) -> String {
        format!("{}-plain colored", self.icon)
    }
}

pub static TECH: [TechItem; 8] = [
    TechItem { name: "JavaScript", icon: "devicon-javascript" },
    TechItem { name: "React", icon: "devicon-react" },
    TechItem { name: "Flutter", icon: "devicon-flutter" },
    TechItem { name: "Node.js", icon: "devicon-nodejs" },
    TechItem { name: "Google Cloud", icon: "devicon-googlecloud" },
    TechItem { name: "Firebase", icon: "devicon-firebase" },
    TechItem { name: "Python", icon: "devicon-python" },
    TechItem { name: "Pandas", icon: "devicon-pandas" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Github",
        href: "https://github.com/harsh-2O",
    },
    SocialLink {
        label: "LeetCode",
        href: "https://leetcode.com/u/JamesHiding",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/harsh2o",
    },
];

/// Year the site was built, shown in the copyright line.
pub fn build_year() -> &'static str {
    env!("BUILD_YEAR")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn sample() -> Vec<Testimonial> {
        vec![Testimonial {
            id: 1,
            quote: "Great work".to_string(),
            author: "A. Person".to_string(),
            role: "Lead".to_string(),
        }]
    }

    #[test]
    fn test_parse_uses_position_field() {
        let body = r#"[{"id": 7, "quote": "q", "author": "a", "position": "CTO"}]"#;
        let parsed = parse_testimonials(body).expect("valid testimonials");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, 7);
        assert_eq!(parsed[0].role, "CTO");
    }

    #[test]
    fn test_parse_empty_and_malformed() {
        assert_eq!(parse_testimonials("[]"), Ok(Vec::new()));
        assert!(matches!(parse_testimonials("{"), Err(ContentError::Parse(_))));
        assert!(matches!(
            parse_testimonials(r#"[{"id": 1}]"#),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(404), Err(ContentError::Status(404)));
        assert_eq!(check_status(500), Err(ContentError::Status(500)));
        assert_eq!(check_status(1000), Err(ContentError::Status(1000)));
    }

    #[test]
    fn test_settle_loaded() {
        let logged = Cell::new(0);
        let list = settle(FetchOutcome::Loaded(sample()), |_| logged.set(logged.get() + 1));
        assert_eq!(list, sample());
        assert_eq!(logged.get(), 0);
    }

    #[test]
    fn test_settle_cancelled_is_not_logged() {
        let logged = Cell::new(0);
        let list = settle(FetchOutcome::Cancelled, |_| logged.set(logged.get() + 1));
        assert!(list.is_empty());
        assert_eq!(logged.get(), 0);
    }

    #[test]
    fn test_settle_failure_logged_once() {
        for err in [
            ContentError::Network("offline".to_string()),
            ContentError::Status(503),
            ContentError::Parse("eof".to_string()),
        ] {
            let logged = Cell::new(0);
            let list = settle(FetchOutcome::Failed(err), |_| logged.set(logged.get() + 1));
            assert!(list.is_empty());
            assert_eq!(logged.get(), 1);
        }
    }

    #[test]
    fn test_abort_name() {
        assert!(is_abort("AbortError"));
        assert!(!is_abort("TimeoutError"));
        assert!(!is_abort("NetworkError"));
        assert!(!is_abort("aborterror"));
    }

    #[test]
    fn test_embedded_testimonials_parse() {
        let testimonials = embedded_testimonials().expect("embedded testimonials parse");
        assert!(!testimonials.is_empty());
        let mut ids = testimonials.iter().map(|t| t.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), testimonials.len());
    }

    #[test]
    fn test_project_lookup() {
        assert_eq!(project(2).map(|p| p.title), Some("Sociabuzz"));
        assert!(project(42).is_none());
    }

    #[test]
    fn test_tech_classes() {
        assert_eq!(TECH[0].plain_class(), "devicon-javascript-plain");
        assert_eq!(TECH[0].colored_class(), "devicon-javascript-plain colored");
    }

    #[test]
    fn test_build_year_is_numeric() {
        assert_eq!(build_year().len(), 4);
        assert!(build_year().chars().all(|c| c.is_ascii_digit()));
    }
}
