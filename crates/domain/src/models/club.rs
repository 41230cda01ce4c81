//! Club domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Placeholder crest used when a club has no logo on file.
pub const DEFAULT_CLUB_LOGO_URL: &str =
    "https://images.pexels.com/photos/274506/pexels-photo-274506.jpeg?auto=compress&cs=tinysrgb&w=400";

/// A club, including the derived count of players registered to it.
///
/// `player_count` is computed from the players table at read time; it is
/// never stored on the club row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub founded_year: i32,
    pub logo: String,
    pub player_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a club.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClubRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Location must be between 1 and 100 characters"
    ))]
    pub location: String,

    #[validate(custom(function = "validate_founded_year"))]
    pub founded_year: i32,

    #[validate(custom(function = "validate_logo_url"))]
    pub logo: Option<String>,
}

/// Request payload for updating a club.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClubRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Location must be between 1 and 100 characters"
    ))]
    pub location: String,

    #[validate(custom(function = "validate_founded_year"))]
    pub founded_year: i32,

    #[validate(custom(function = "validate_logo_url"))]
    pub logo: Option<String>,
}

/// Response for club listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClubsResponse {
    pub data: Vec<Club>,
    pub count: usize,
}

fn validate_founded_year(year: i32) -> Result<(), validator::ValidationError> {
    shared::validation::validate_founded_year(year)
}

fn validate_logo_url(url: &str) -> Result<(), validator::ValidationError> {
    shared::validation::validate_image_url(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn club_request(founded_year: i32) -> CreateClubRequest {
        CreateClubRequest {
            name: "Aldai United".to_string(),
            location: "Kaptumo".to_string(),
            founded_year,
            logo: None,
        }
    }

    #[test]
    fn test_create_club_request_valid() {
        assert!(club_request(1995).validate().is_ok());
    }

    #[test]
    fn test_create_club_request_founded_year_bounds() {
        assert!(club_request(1800).validate().is_ok());
        assert!(club_request(Utc::now().year()).validate().is_ok());
        assert!(club_request(1799).validate().is_err());
        assert!(club_request(Utc::now().year() + 1).validate().is_err());
    }

    #[test]
    fn test_create_club_request_empty_name() {
        let mut request = club_request(1995);
        request.name = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_club_request_bad_logo() {
        let mut request = club_request(1995);
        request.logo = Some("crest.png".to_string());
        assert!(request.validate().is_err());

        request.logo = Some("https://example.com/crest.png".to_string());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_club_serializes_camel_case() {
        let club = Club {
            id: Uuid::new_v4(),
            name: "Aldai United".to_string(),
            location: "Kaptumo".to_string(),
            founded_year: 1995,
            logo: DEFAULT_CLUB_LOGO_URL.to_string(),
            player_count: 3,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&club).unwrap();
        assert!(json.contains("\"foundedYear\":1995"));
        assert!(json.contains("\"playerCount\":3"));
    }
}
