//! Domain layer for the Aldai League backend.
//!
//! This crate contains:
//! - Domain models (Player, Club, LeagueOfficial, NewsArticle, AboutContent, GalleryImage)
//! - Request/response DTOs with validation rules
//! - Domain enums and their string mappings

pub mod models;
