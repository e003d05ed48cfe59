//! Data models for the application.

mod role;
mod user;

pub use role::{Role, UnknownRole};
pub use user::UserInfo;
