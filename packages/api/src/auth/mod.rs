//! # Authentication collaborator
//!
//! The sign-in screen only knows the [`Authenticator`] trait: hand over an
//! email, a password and a [`Role`], get back a [`UserInfo`] or an
//! [`AuthError`] whose message can be shown to the user as-is.
//!
//! | Type | Backing |
//! |------|---------|
//! | [`HttpAuthenticator`] | JSON `POST {base_url}/api/auth/login` via `reqwest` |
//! | [`MemoryAuthenticator`] | A fixed account list, for demos and tests |
//! | [`AuthClient`] | Either of the above, picked from [`AuthConfig`] and shared through UI context |

mod error;
mod http;
mod memory;

pub use error::AuthError;
pub use http::HttpAuthenticator;
pub use memory::MemoryAuthenticator;

use crate::config::{AuthBackend, AuthConfig};
use crate::models::{Role, UserInfo};

/// Async interface to whatever verifies credentials and opens a session.
pub trait Authenticator {
    fn login(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> impl std::future::Future<Output = Result<UserInfo, AuthError>>;
}

/// The authenticator a frontend was configured with.
#[derive(Clone, Debug)]
pub enum AuthClient {
    Http(HttpAuthenticator),
    Memory(MemoryAuthenticator),
}

impl AuthClient {
    pub fn from_config(config: &AuthConfig) -> Self {
        match config.backend {
            AuthBackend::Http => AuthClient::Http(HttpAuthenticator::new(&config.base_url)),
            AuthBackend::Memory => {
                AuthClient::Memory(MemoryAuthenticator::new(config.accounts.clone()))
            }
        }
    }
}

impl Authenticator for AuthClient {
    async fn login(&self, email: &str, password: &str, role: Role) -> Result<UserInfo, AuthError> {
        match self {
            AuthClient::Http(http) => http.login(email, password, role).await,
            AuthClient::Memory(memory) => memory.login(email, password, role).await,
        }
    }
}
