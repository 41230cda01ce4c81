//! Common validation utilities.

use chrono::{Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

/// Earliest founding year a club may claim.
const MIN_FOUNDED_YEAR: i32 = 1800;

lazy_static! {
    /// League IDs are `ALD` followed by a zero-padded three-digit counter.
    pub static ref LEAGUE_ID_PATTERN: Regex = Regex::new(r"^ALD\d{3}$").unwrap();
}

/// Validates that a club founding year is within 1800..=current year.
pub fn validate_founded_year(year: i32) -> Result<(), ValidationError> {
    let current_year = Utc::now().year();
    if (MIN_FOUNDED_YEAR..=current_year).contains(&year) {
        Ok(())
    } else {
        let mut err = ValidationError::new("founded_year_range");
        err.message = Some(
            format!(
                "Founded year must be between {} and {}",
                MIN_FOUNDED_YEAR, current_year
            )
            .into(),
        );
        Err(err)
    }
}

/// Validates that an image reference is an http(s) URL.
pub fn validate_image_url(url: &str) -> Result<(), ValidationError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        let mut err = ValidationError::new("image_url_scheme");
        err.message = Some("Image URL must start with http:// or https://".into());
        Err(err)
    }
}

/// Returns true if the value is a well-formed league ID.
pub fn is_league_id(value: &str) -> bool {
    LEAGUE_ID_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_founded_year_accepts_range() {
        assert!(validate_founded_year(1800).is_ok());
        assert!(validate_founded_year(1995).is_ok());
        assert!(validate_founded_year(Utc::now().year()).is_ok());
    }

    #[test]
    fn test_validate_founded_year_rejects_out_of_range() {
        assert!(validate_founded_year(1799).is_err());
        assert!(validate_founded_year(Utc::now().year() + 1).is_err());
    }

    #[test]
    fn test_validate_image_url() {
        assert!(validate_image_url("https://example.com/logo.png").is_ok());
        assert!(validate_image_url("http://example.com/logo.png").is_ok());
        assert!(validate_image_url("ftp://example.com/logo.png").is_err());
        assert!(validate_image_url("logo.png").is_err());
    }

    #[test]
    fn test_is_league_id() {
        assert!(is_league_id("ALD001"));
        assert!(is_league_id("ALD999"));
        assert!(!is_league_id("ALD1"));
        assert!(!is_league_id("ALD1234"));
        assert!(!is_league_id("XYZ001"));
        assert!(!is_league_id("ald001"));
    }
}
