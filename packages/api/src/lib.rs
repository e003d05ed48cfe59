//! # API crate — client-side domain types and the sign-in collaborator
//!
//! Everything the frontends need to talk about accounts without depending on
//! Dioxus lives here, so the login flow can be exercised from plain async tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | The [`Authenticator`] trait, its HTTP and in-memory implementations, and [`AuthError`] |
//! | [`config`] | [`ClientConfig`], the TOML file embedded into each frontend binary |
//! | [`models`] | [`Role`] and [`UserInfo`] |

pub mod auth;
pub mod config;
pub mod models;

pub use auth::{AuthClient, AuthError, Authenticator, HttpAuthenticator, MemoryAuthenticator};
pub use config::ClientConfig;
pub use models::{Role, UnknownRole, UserInfo};
