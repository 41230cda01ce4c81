//! Database entity definitions.
//!
//! Entities are direct mappings to database rows. Conversions into the
//! domain models live here; this boundary is where snake_case rows become
//! the camelCase wire shapes.

pub mod about;
pub mod admin_user;
pub mod auth_session;
pub mod club;
pub mod gallery;
pub mod news;
pub mod official;
pub mod player;

pub use about::{AboutContentEntity, AboutSectionDb};
pub use admin_user::AdminUserEntity;
pub use auth_session::AuthSessionEntity;
pub use club::{ClubEntity, ClubWithPlayerCountEntity};
pub use gallery::{GalleryCategoryDb, GalleryImageEntity};
pub use news::{NewsArticleEntity, NewsCategoryDb};
pub use official::{LeagueOfficialEntity, OfficialAccountEntity, OfficialPositionDb};
pub use player::{PlayerEntity, PlayerStatusDb, PositionDb};
