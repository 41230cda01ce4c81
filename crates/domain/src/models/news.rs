//! News article domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// News category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Matches,
    Transfers,
    Events,
    Youth,
    Announcements,
}

impl NewsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::Matches => "matches",
            NewsCategory::Transfers => "transfers",
            NewsCategory::Events => "events",
            NewsCategory::Youth => "youth",
            NewsCategory::Announcements => "announcements",
        }
    }
}

impl FromStr for NewsCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "matches" => Ok(NewsCategory::Matches),
            "transfers" => Ok(NewsCategory::Transfers),
            "events" => Ok(NewsCategory::Events),
            "youth" => Ok(NewsCategory::Youth),
            "announcements" => Ok(NewsCategory::Announcements),
            _ => Err(format!("Invalid news category: {}", s)),
        }
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A news article. `published` gates public visibility; `featured` marks a
/// promotional slot and is not exclusivity-enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: NewsCategory,
    pub author: String,
    pub image_url: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a news article.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsArticleRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 500,
        message = "Excerpt must be between 1 and 500 characters"
    ))]
    pub excerpt: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    pub category: NewsCategory,

    #[validate(length(min = 1, max = 100, message = "Author must be between 1 and 100 characters"))]
    pub author: String,

    #[validate(custom(function = "validate_image_url"))]
    pub image_url: Option<String>,

    pub featured: Option<bool>,

    pub published: Option<bool>,
}

/// Request payload for updating a news article.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsArticleRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 500,
        message = "Excerpt must be between 1 and 500 characters"
    ))]
    pub excerpt: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    pub category: NewsCategory,

    #[validate(length(min = 1, max = 100, message = "Author must be between 1 and 100 characters"))]
    pub author: String,

    #[validate(custom(function = "validate_image_url"))]
    pub image_url: Option<String>,

    pub featured: Option<bool>,

    pub published: Option<bool>,
}

/// Query parameters for news listings. Unpublished drafts are only
/// included on the admin surface.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct ListNewsQuery {
    pub include_unpublished: Option<bool>,
}

/// Response for news listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNewsResponse {
    pub data: Vec<NewsArticle>,
    pub count: usize,
}

fn validate_image_url(url: &str) -> Result<(), validator::ValidationError> {
    shared::validation::validate_image_url(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_category_round_trip() {
        for category in [
            NewsCategory::Matches,
            NewsCategory::Transfers,
            NewsCategory::Events,
            NewsCategory::Youth,
            NewsCategory::Announcements,
        ] {
            assert_eq!(NewsCategory::from_str(category.as_str()).unwrap(), category);
        }
        assert!(NewsCategory::from_str("gossip").is_err());
    }

    #[test]
    fn test_create_news_request_validation() {
        let valid = CreateNewsArticleRequest {
            title: "Season opener".to_string(),
            excerpt: "The league kicks off this Saturday.".to_string(),
            content: "Full preview of the opening fixtures...".to_string(),
            category: NewsCategory::Matches,
            author: "Media Office".to_string(),
            image_url: None,
            featured: None,
            published: Some(true),
        };
        assert!(valid.validate().is_ok());

        let empty_title = CreateNewsArticleRequest {
            title: String::new(),
            ..valid.clone()
        };
        assert!(empty_title.validate().is_err());

        let bad_image = CreateNewsArticleRequest {
            image_url: Some("banner.jpg".to_string()),
            ..valid
        };
        assert!(bad_image.validate().is_err());
    }

    #[test]
    fn test_article_serializes_camel_case() {
        let article = NewsArticle {
            id: Uuid::new_v4(),
            title: "Season opener".to_string(),
            excerpt: "Kickoff Saturday.".to_string(),
            content: "...".to_string(),
            category: NewsCategory::Announcements,
            author: "Media Office".to_string(),
            image_url: None,
            featured: true,
            published: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&article).unwrap();
        assert!(json.contains("\"category\":\"announcements\""));
        assert!(json.contains("\"imageUrl\":null"));
        assert!(json.contains("\"featured\":true"));
    }
}
