//! HTTP route handlers.

pub mod about;
pub mod admin_auth;
pub mod clubs;
pub mod gallery;
pub mod health;
pub mod news;
pub mod official_auth;
pub mod players;
