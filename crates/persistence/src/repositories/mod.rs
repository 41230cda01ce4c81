//! Repository implementations for database operations.

pub mod about;
pub mod admin_user;
pub mod auth_session;
pub mod club;
pub mod gallery;
pub mod news;
pub mod official;
pub mod player;

pub use about::AboutContentRepository;
pub use admin_user::AdminUserRepository;
pub use auth_session::AuthSessionRepository;
pub use club::{ClubDeleteError, ClubRepository};
pub use gallery::GalleryRepository;
pub use news::NewsRepository;
pub use official::OfficialRepository;
pub use player::{NewPlayer, PlayerRepository, PlayerUpdate};
