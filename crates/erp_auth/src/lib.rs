pub mod auth;
pub mod permission;
pub mod schema;

pub use auth::SessionStore;
pub use permission::{allowed_actions, has_access, has_license, has_permission};
pub use schema::{StoredUser, UserDirectory};
