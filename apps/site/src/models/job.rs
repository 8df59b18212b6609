use serde::{Deserialize, Serialize};

/// One position in the work-history document (`/data/{locale}.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobEntry {
    pub title: String,
    pub sector: String,
    pub location: String,
    pub dates: String,
    #[serde(default)]
    pub sections: Vec<JobSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub bullets: Vec<JobBullet>,
}

/// A bullet is either a bare string or text followed by inline links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobBullet {
    Plain(String),
    Linked { text: String, links: Vec<JobLink> },
}

impl JobBullet {
    pub fn text(&self) -> &str {
        match self {
            JobBullet::Plain(text) => text,
            JobBullet::Linked { text, .. } => text,
        }
    }

    pub fn links(&self) -> &[JobLink] {
        match self {
            JobBullet::Plain(_) => &[],
            JobBullet::Linked { links, .. } => links,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobData {
    pub jobs: Vec<JobEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bullets_accept_both_shapes() {
        let doc = json!({
            "jobs": [{
                "title": "Engineer",
                "sector": "Telecom",
                "location": "Moscow",
                "dates": "2019 - 2024",
                "sections": [{
                    "heading": "Projects",
                    "bullets": [
                        "Plain bullet",
                        { "text": "Open source:", "links": [
                            { "label": "repo", "href": "https://example.com/repo" }
                        ]}
                    ]
                }, {
                    "bullets": ["No heading"]
                }]
            }]
        });

        let data: JobData = serde_json::from_value(doc).unwrap();
        let job = &data.jobs[0];
        assert_eq!(job.sections.len(), 2);
        assert_eq!(job.sections[0].heading.as_deref(), Some("Projects"));
        assert!(job.sections[1].heading.is_none());

        let bullets = &job.sections[0].bullets;
        assert_eq!(bullets[0], JobBullet::Plain("Plain bullet".to_string()));
        assert_eq!(bullets[1].text(), "Open source:");
        assert_eq!(bullets[1].links()[0].label, "repo");
        assert!(bullets[0].links().is_empty());
    }

    #[test]
    fn test_missing_jobs_key_is_an_error() {
        assert!(serde_json::from_str::<JobData>(r#"{"positions": []}"#).is_err());
    }
}
