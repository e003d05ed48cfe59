//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_auth, use_auth_client, AuthProvider, AuthState, LogoutButton};

pub mod login_form;
pub use login_form::{LoginForm, MountGuard, Navigate, Submission};

pub mod views;
