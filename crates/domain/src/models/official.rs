//! League official domain models.
//!
//! Officials authenticate through the portal signup/login flow; their
//! profile row shares the ID of the credential identity it belongs to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Fixed set of league office titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfficialPosition {
    #[serde(rename = "League Secretary")]
    LeagueSecretary,
    #[serde(rename = "League Chairman")]
    LeagueChairman,
    #[serde(rename = "Technical Director")]
    TechnicalDirector,
    #[serde(rename = "Referee Coordinator")]
    RefereeCoordinator,
    #[serde(rename = "Youth Development Officer")]
    YouthDevelopmentOfficer,
    #[serde(rename = "Competition Manager")]
    CompetitionManager,
    #[serde(rename = "Media Officer")]
    MediaOfficer,
}

impl OfficialPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfficialPosition::LeagueSecretary => "League Secretary",
            OfficialPosition::LeagueChairman => "League Chairman",
            OfficialPosition::TechnicalDirector => "Technical Director",
            OfficialPosition::RefereeCoordinator => "Referee Coordinator",
            OfficialPosition::YouthDevelopmentOfficer => "Youth Development Officer",
            OfficialPosition::CompetitionManager => "Competition Manager",
            OfficialPosition::MediaOfficer => "Media Officer",
        }
    }

    /// All known titles, in display order.
    pub fn all() -> &'static [OfficialPosition] {
        &[
            OfficialPosition::LeagueSecretary,
            OfficialPosition::LeagueChairman,
            OfficialPosition::TechnicalDirector,
            OfficialPosition::RefereeCoordinator,
            OfficialPosition::YouthDevelopmentOfficer,
            OfficialPosition::CompetitionManager,
            OfficialPosition::MediaOfficer,
        ]
    }
}

impl FromStr for OfficialPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OfficialPosition::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Invalid official position: {}", s))
    }
}

impl fmt::Display for OfficialPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A league official's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueOfficial {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub position: OfficialPosition,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for the official signup flow.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OfficialSignupRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    pub position: OfficialPosition,

    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,
}

/// Request payload for the official login flow.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OfficialLoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_official_position_round_trip() {
        for position in OfficialPosition::all() {
            assert_eq!(
                OfficialPosition::from_str(position.as_str()).unwrap(),
                *position
            );
        }
    }

    #[test]
    fn test_official_position_from_str_invalid() {
        assert!(OfficialPosition::from_str("Groundskeeper").is_err());
        assert!(OfficialPosition::from_str("league secretary").is_err());
    }

    #[test]
    fn test_official_position_serde_uses_display_titles() {
        let json = serde_json::to_string(&OfficialPosition::RefereeCoordinator).unwrap();
        assert_eq!(json, "\"Referee Coordinator\"");

        let parsed: OfficialPosition = serde_json::from_str("\"Media Officer\"").unwrap();
        assert_eq!(parsed, OfficialPosition::MediaOfficer);
    }

    #[test]
    fn test_signup_request_validation() {
        let valid = OfficialSignupRequest {
            email: "secretary@aldaileague.org".to_string(),
            password: "Secure1pass".to_string(),
            name: "John Kiptoo".to_string(),
            position: OfficialPosition::LeagueSecretary,
            phone: Some("+254700000000".to_string()),
        };
        assert!(valid.validate().is_ok());

        let bad_email = OfficialSignupRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let empty_password = OfficialSignupRequest {
            password: String::new(),
            ..valid
        };
        assert!(empty_password.validate().is_err());
    }
}
