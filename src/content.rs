//! Portfolio Content
//!
//! Static page data: profile, skills, experience, projects and contact links.
//! The built-in content is the default; a JSON file with the same shape can
//! replace it at startup (see `ServerConfig::content_path`).

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Display name in the navigation bar
    pub short_name: String,
    pub initials: String,
    pub greeting: String,
    pub summary: String,
    /// Labels shown under the hero call-to-action buttons
    pub focus_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLinks {
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
}

impl ContactLinks {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with whitespace stripped from the number
    pub fn tel(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{}", digits)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub skills: Vec<SkillGroup>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub contact: ContactLinks,
}

impl PortfolioContent {
    /// Load content from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ContentError::Parse { path: display, source })
    }

    /// Built-in content, or the JSON override when a path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(p) => Self::from_json_file(p),
            None => Ok(Self::default()),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Jonathan Ato Markin".to_string(),
                short_name: "Jonathan Markin".to_string(),
                initials: "JM".to_string(),
                greeting: "Hi, I'm Jonathan 👋".to_string(),
                summary: "IT Architect specializing in high-performance computing, distributed systems, \
                          and cloud-native architectures. Passionate about building robust, scalable solutions."
                    .to_string(),
                focus_areas: strings(&[
                    "Microservices",
                    "Cloud Native",
                    "HPC",
                    "Distributed Systems",
                    "Big Data",
                ]),
            },
            skills: vec![
                SkillGroup {
                    category: "Languages".to_string(),
                    items: strings(&["Java", "Python", "JavaScript", "TypeScript", "Golang", "SQL"]),
                },
                SkillGroup {
                    category: "Frameworks".to_string(),
                    items: strings(&["Spring Boot", "React", "Vue", "Flutter", "Node.js", "PyTorch"]),
                },
                SkillGroup {
                    category: "Cloud & DevOps".to_string(),
                    items: strings(&["AWS", "GCP", "Docker", "Kubernetes", "CI/CD", "Apache Kafka"]),
                },
                SkillGroup {
                    category: "Databases".to_string(),
                    items: strings(&["PostgreSQL", "MongoDB", "Redis", "Oracle", "Firebase"]),
                },
            ],
            experiences: vec![
                Experience {
                    title: "HPC-Cloud Researcher & Engineer".to_string(),
                    company: "University of Pisa".to_string(),
                    period: "Oct 2024 - Present".to_string(),
                    highlights: strings(&[
                        "Architected distributed computing systems on 32-node HPC clusters",
                        "Achieved 85% parallel efficiency in multi-node environments",
                        "Reduced inter-node latency by 40% and improved throughput by 60%",
                    ]),
                },
                Experience {
                    title: "Software Engineer".to_string(),
                    company: "Union Systems Global".to_string(),
                    period: "Jun 2019 - Dec 2023".to_string(),
                    highlights: strings(&[
                        "Built secure mobile banking platform handling 1000+ users/month",
                        "Implemented AES encryption reducing security breaches by 50%",
                        "Optimized backend services improving processing time by 20%",
                    ]),
                },
            ],
            projects: vec![
                Project {
                    title: "Feature Flag System".to_string(),
                    description: "Production-grade feature flag system using Clean Architecture and DDD principles"
                        .to_string(),
                    tech: strings(&["Java Spring Boot", "PostgreSQL", "Redis", "Docker"]),
                    highlights: strings(&[
                        "Sub-10ms flag evaluation",
                        "10,000+ requests/second",
                        "95%+ test coverage",
                    ]),
                },
                Project {
                    title: "Event-Driven Microservices".to_string(),
                    description: "Scalable microservices ecosystem with service discovery and API gateway patterns"
                        .to_string(),
                    tech: strings(&["Java Spring Boot", "RabbitMQ", "TestContainers"]),
                    highlights: strings(&[
                        "99.9% service availability",
                        "Circuit breaker patterns",
                        "Fault tolerance",
                    ]),
                },
            ],
            contact: ContactLinks {
                email: "jonamarkin@gmail.com".to_string(),
                phone: "+39 328 687 0969".to_string(),
                github: "https://github.com/jonamarkin".to_string(),
                linkedin: "https://linkedin.com/in/jonamarkin".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_content_shape() {
        let content = PortfolioContent::default();
        assert_eq!(content.skills.len(), 4);
        assert_eq!(content.experiences.len(), 2);
        assert_eq!(content.projects.len(), 2);
        assert_eq!(content.profile.focus_areas.len(), 5);
    }

    #[test]
    fn test_contact_links() {
        let contact = PortfolioContent::default().contact;
        assert_eq!(contact.mailto(), "mailto:jonamarkin@gmail.com");
        assert_eq!(contact.tel(), "tel:+393286870969");
    }

    #[test]
    fn test_json_override_round_trip() {
        let mut content = PortfolioContent::default();
        content.profile.short_name = "Someone Else".to_string();
        content.projects.truncate(1);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&content).unwrap().as_bytes()).unwrap();

        let loaded = PortfolioContent::load(Some(file.path())).unwrap();
        assert_eq!(loaded, content);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PortfolioContent::from_json_file("/nonexistent/portfolio.json").unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"profile\": 3}").unwrap();
        let err = PortfolioContent::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }
}
