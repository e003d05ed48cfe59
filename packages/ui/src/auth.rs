//! Authentication context and hooks for the UI.

use api::config::AuthConfig;
use api::{AuthClient, UserInfo};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::login_form::Navigate;

/// Who is signed in, shared by every view under [`AuthProvider`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the authenticator the app was configured with.
pub fn use_auth_client() -> AuthClient {
    use_context::<AuthClient>()
}

/// Provider component that owns the session state and the authenticator.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: AuthConfig, children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);

    use_context_provider(|| auth_state);
    use_context_provider(|| AuthClient::from_config(&config));

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let nav = use_navigator();

    let onclick = move |_: MouseEvent| {
        if let Some(user) = auth_state.write().user.take() {
            tracing::info!(role = %user.role, "signed out");
        }
        nav.navigate("/login");
    };

    rsx! {
        Button {
            variant: ButtonVariant::Secondary,
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
