//! Player domain models.
//!
//! Players carry a system-generated league ID (`ALD` + zero-padded counter)
//! assigned once at registration and never editable afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Placeholder portrait used when a player has no photo on file.
pub const DEFAULT_PLAYER_PHOTO_URL: &str =
    "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=400";

/// Formats a league ID from the sequential counter value.
pub fn format_league_id(counter: i64) -> String {
    format!("ALD{:03}", counter)
}

/// Playing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Goalkeeper" => Ok(Position::Goalkeeper),
            "Defender" => Ok(Position::Defender),
            "Midfielder" => Ok(Position::Midfielder),
            "Forward" => Ok(Position::Forward),
            _ => Err(format!("Invalid position: {}", s)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registration status. Disabled players stay visible to the admin console
/// but are excluded from every public surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Active,
    Disabled,
}

impl PlayerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerStatus::Active => "active",
            PlayerStatus::Disabled => "disabled",
        }
    }

    /// Returns the opposite status.
    pub fn toggled(&self) -> Self {
        match self {
            PlayerStatus::Active => PlayerStatus::Disabled,
            PlayerStatus::Disabled => PlayerStatus::Active,
        }
    }
}

impl FromStr for PlayerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PlayerStatus::Active),
            "disabled" => Ok(PlayerStatus::Disabled),
            _ => Err(format!("Invalid player status: {}", s)),
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered player.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub league_id: String,
    pub date_of_birth: NaiveDate,
    pub position: Position,
    pub club_id: Option<Uuid>,
    pub verified: bool,
    pub photo_url: String,
    pub status: PlayerStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for registering a player.
///
/// The league ID is not accepted here; it is assigned by the server.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    pub date_of_birth: NaiveDate,

    pub position: Position,

    pub club_id: Option<Uuid>,

    pub verified: Option<bool>,

    #[validate(custom(function = "validate_photo_url"))]
    pub photo_url: Option<String>,
}

/// Request payload for editing a player. The league ID is deliberately
/// absent; it cannot be changed after registration.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    pub date_of_birth: NaiveDate,

    pub position: Position,

    pub club_id: Option<Uuid>,

    pub verified: Option<bool>,

    #[validate(custom(function = "validate_photo_url"))]
    pub photo_url: Option<String>,
}

/// Request payload for the status toggle. Either status may be set from
/// either status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPlayerStatusRequest {
    pub status: PlayerStatus,
}

/// Query parameters for the public player search.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchPlayersQuery {
    pub q: Option<String>,
}

/// Response for player listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPlayersResponse {
    pub data: Vec<Player>,
    pub count: usize,
}

fn validate_photo_url(url: &str) -> Result<(), validator::ValidationError> {
    shared::validation::validate_image_url(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_as_str() {
        assert_eq!(Position::Goalkeeper.as_str(), "Goalkeeper");
        assert_eq!(Position::Defender.as_str(), "Defender");
        assert_eq!(Position::Midfielder.as_str(), "Midfielder");
        assert_eq!(Position::Forward.as_str(), "Forward");
    }

    #[test]
    fn test_position_from_str() {
        assert_eq!(Position::from_str("Goalkeeper").unwrap(), Position::Goalkeeper);
        assert_eq!(Position::from_str("Forward").unwrap(), Position::Forward);
        assert!(Position::from_str("Striker").is_err());
        // Positions are stored capitalized; lowercase input is rejected.
        assert!(Position::from_str("goalkeeper").is_err());
    }

    #[test]
    fn test_player_status_round_trip() {
        for status in [PlayerStatus::Active, PlayerStatus::Disabled] {
            assert_eq!(PlayerStatus::from_str(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn test_player_status_toggled() {
        assert_eq!(PlayerStatus::Active.toggled(), PlayerStatus::Disabled);
        assert_eq!(PlayerStatus::Disabled.toggled(), PlayerStatus::Active);
        // Toggling twice restores the original status.
        assert_eq!(PlayerStatus::Active.toggled().toggled(), PlayerStatus::Active);
    }

    #[test]
    fn test_format_league_id() {
        assert_eq!(format_league_id(1), "ALD001");
        assert_eq!(format_league_id(42), "ALD042");
        assert_eq!(format_league_id(999), "ALD999");
        assert!(shared::validation::is_league_id(&format_league_id(7)));
    }

    #[test]
    fn test_player_serializes_camel_case() {
        let player = Player {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            league_id: "ALD001".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            position: Position::Midfielder,
            club_id: None,
            verified: false,
            photo_url: DEFAULT_PLAYER_PHOTO_URL.to_string(),
            status: PlayerStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&player).unwrap();
        assert!(json.contains("\"leagueId\":\"ALD001\""));
        assert!(json.contains("\"dateOfBirth\":\"2000-01-01\""));
        assert!(json.contains("\"position\":\"Midfielder\""));
        assert!(json.contains("\"status\":\"active\""));
    }

    #[test]
    fn test_create_player_request_validation() {
        let valid: CreatePlayerRequest = serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "dateOfBirth": "2000-01-01",
            "position": "Midfielder",
            "clubId": null
        }))
        .unwrap();
        assert!(valid.validate().is_ok());

        let empty_name: CreatePlayerRequest = serde_json::from_value(serde_json::json!({
            "name": "",
            "dateOfBirth": "2000-01-01",
            "position": "Forward"
        }))
        .unwrap();
        assert!(empty_name.validate().is_err());

        let bad_photo: CreatePlayerRequest = serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "dateOfBirth": "2000-01-01",
            "position": "Forward",
            "photoUrl": "not-a-url"
        }))
        .unwrap();
        assert!(bad_photo.validate().is_err());
    }

    #[test]
    fn test_create_player_request_rejects_unknown_position() {
        let result: Result<CreatePlayerRequest, _> = serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "dateOfBirth": "2000-01-01",
            "position": "Sweeper"
        }));
        assert!(result.is_err());
    }
}
