//! Gallery image domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Gallery category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Matches,
    Training,
    Events,
    Awards,
    Youth,
}

impl GalleryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Matches => "matches",
            GalleryCategory::Training => "training",
            GalleryCategory::Events => "events",
            GalleryCategory::Awards => "awards",
            GalleryCategory::Youth => "youth",
        }
    }
}

impl FromStr for GalleryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "matches" => Ok(GalleryCategory::Matches),
            "training" => Ok(GalleryCategory::Training),
            "events" => Ok(GalleryCategory::Events),
            "awards" => Ok(GalleryCategory::Awards),
            "youth" => Ok(GalleryCategory::Youth),
            _ => Err(format!("Invalid gallery category: {}", s)),
        }
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A gallery image. `order_index` is a manually assigned display sort key;
/// duplicates and gaps are allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: GalleryCategory,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for adding a gallery image.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGalleryImageRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_image_url"))]
    pub image_url: String,

    pub category: GalleryCategory,

    #[validate(range(min = 0, message = "Order index must be non-negative"))]
    pub order_index: Option<i32>,
}

/// Request payload for editing a gallery image.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGalleryImageRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_image_url"))]
    pub image_url: String,

    pub category: GalleryCategory,

    #[validate(range(min = 0, message = "Order index must be non-negative"))]
    pub order_index: Option<i32>,
}

/// Response for gallery listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListGalleryResponse {
    pub data: Vec<GalleryImage>,
    pub count: usize,
}

fn validate_image_url(url: &str) -> Result<(), validator::ValidationError> {
    shared::validation::validate_image_url(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_category_round_trip() {
        for category in [
            GalleryCategory::Matches,
            GalleryCategory::Training,
            GalleryCategory::Events,
            GalleryCategory::Awards,
            GalleryCategory::Youth,
        ] {
            assert_eq!(
                GalleryCategory::from_str(category.as_str()).unwrap(),
                category
            );
        }
        assert!(GalleryCategory::from_str("candid").is_err());
    }

    #[test]
    fn test_create_gallery_request_validation() {
        let valid = CreateGalleryImageRequest {
            title: "Cup final".to_string(),
            description: Some("Trophy presentation.".to_string()),
            image_url: "https://example.com/final.jpg".to_string(),
            category: GalleryCategory::Awards,
            order_index: Some(3),
        };
        assert!(valid.validate().is_ok());

        let missing_url = CreateGalleryImageRequest {
            image_url: "final.jpg".to_string(),
            ..valid.clone()
        };
        assert!(missing_url.validate().is_err());

        let negative_order = CreateGalleryImageRequest {
            order_index: Some(-1),
            ..valid
        };
        assert!(negative_order.validate().is_err());
    }

    #[test]
    fn test_gallery_image_serializes_camel_case() {
        let image = GalleryImage {
            id: Uuid::new_v4(),
            title: "Cup final".to_string(),
            description: None,
            image_url: "https://example.com/final.jpg".to_string(),
            category: GalleryCategory::Matches,
            order_index: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&image).unwrap();
        assert!(json.contains("\"imageUrl\""));
        assert!(json.contains("\"orderIndex\":0"));
    }
}
