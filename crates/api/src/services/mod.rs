//! Application services.

pub mod admin_auth;
pub mod bootstrap;
pub mod official_auth;
pub mod session_events;

pub use admin_auth::{AdminAuthError, AdminAuthService};
pub use official_auth::{OfficialAuthError, OfficialAuthService};
pub use session_events::{SessionEvent, SessionEvents, SessionSubscription};
