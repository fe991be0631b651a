//! Canonical content types for the site.
//!
//! Live rows and the bundled fallback datasets decode into the same shapes.
//! Earlier backend revisions used camelCase column names; those spellings are
//! accepted as serde aliases here, at the boundary, so nothing downstream
//! ever branches on field naming.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A practice area offered by the firm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    #[serde(default, alias = "headerImage")]
    pub header_image: Option<String>,
    #[serde(default, alias = "displayOrder")]
    pub display_order: Option<i32>,
}

/// A member of the firm, bucketed by `category` in the team directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub category: String,
    #[serde(default, alias = "photoUrl", alias = "photo_url")]
    pub photo: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, alias = "displayOrder")]
    pub display_order: Option<i32>,
}

/// A team directory section, ordered by `display_order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "displayOrder")]
    pub display_order: Option<i32>,
}

/// An open position listed on the careers page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosition {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub department: Option<String>,
    pub location: String,
    #[serde(alias = "employmentType")]
    pub employment_type: String,
    pub summary: String,
    #[serde(default, alias = "applyEmail")]
    pub apply_email: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

/// Which publishing platform a blog post came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogSource {
    Newsroom,
    Column,
}

impl BlogSource {
    pub fn label(&self) -> &'static str {
        match self {
            BlogSource::Newsroom => "Firm Newsroom",
            BlogSource::Column => "Advocates' Column",
        }
    }
}

/// A blog post, normalised from either publishing platform's feed shape.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub url: String,
    pub author: Option<String>,
    pub published_at: DateTime<Utc>,
    pub source: BlogSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_and_camel_rows_decode_to_one_shape() {
        let snake: Service = serde_json::from_str(
            r#"{
                "id": "svc-1",
                "title": "Conveyancing",
                "summary": "Property transfers",
                "description": "Full conveyancing support.",
                "header_image": "/img/conveyancing.jpg",
                "display_order": 3
            }"#,
        )
        .unwrap();

        let camel: Service = serde_json::from_str(
            r#"{
                "id": "svc-1",
                "title": "Conveyancing",
                "summary": "Property transfers",
                "description": "Full conveyancing support.",
                "headerImage": "/img/conveyancing.jpg",
                "displayOrder": 3
            }"#,
        )
        .unwrap();

        assert_eq!(snake, camel);
        assert_eq!(snake.header_image.as_deref(), Some("/img/conveyancing.jpg"));
    }

    #[test]
    fn optional_member_fields_default() {
        let member: TeamMember = serde_json::from_str(
            r#"{
                "id": "tm-1",
                "name": "Grace Mwangi",
                "role": "Managing Partner",
                "category": "Partners"
            }"#,
        )
        .unwrap();

        assert_eq!(member.photo, None);
        assert_eq!(member.email, None);
        assert_eq!(member.display_order, None);
    }

    #[test]
    fn job_deadline_parses_as_date() {
        let job: JobPosition = serde_json::from_str(
            r#"{
                "id": "job-1",
                "title": "Senior Associate",
                "location": "Nairobi",
                "employmentType": "Full-time",
                "summary": "Dispute resolution practice.",
                "deadline": "2026-09-30"
            }"#,
        )
        .unwrap();

        assert_eq!(job.employment_type, "Full-time");
        assert_eq!(
            job.deadline,
            Some(NaiveDate::from_ymd_opt(2026, 9, 30).unwrap())
        );
    }
}
