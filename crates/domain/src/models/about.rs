//! About-page content domain models.
//!
//! A small fixed-key document store: one row per section, written with
//! upsert-by-section semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// The fixed set of about-page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AboutSection {
    Mission,
    Vision,
    History,
}

impl AboutSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            AboutSection::Mission => "mission",
            AboutSection::Vision => "vision",
            AboutSection::History => "history",
        }
    }
}

impl FromStr for AboutSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mission" => Ok(AboutSection::Mission),
            "vision" => Ok(AboutSection::Vision),
            "history" => Ok(AboutSection::History),
            _ => Err(format!("Invalid about section: {}", s)),
        }
    }
}

impl fmt::Display for AboutSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One section of the about page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub id: Uuid,
    pub section: AboutSection,
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for writing a section (insert or replace).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAboutContentRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_section_round_trip() {
        for section in [
            AboutSection::Mission,
            AboutSection::Vision,
            AboutSection::History,
        ] {
            assert_eq!(AboutSection::from_str(section.as_str()).unwrap(), section);
        }
        assert!(AboutSection::from_str("sponsors").is_err());
    }

    #[test]
    fn test_about_section_from_str_case_insensitive() {
        assert_eq!(
            AboutSection::from_str("Mission").unwrap(),
            AboutSection::Mission
        );
    }

    #[test]
    fn test_update_request_validation() {
        let valid = UpdateAboutContentRequest {
            title: "Our Mission".to_string(),
            content: "Grassroots football for everyone.".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = UpdateAboutContentRequest {
            title: String::new(),
            content: String::new(),
        };
        assert!(empty.validate().is_err());
    }
}
