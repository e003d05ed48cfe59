use thiserror::Error;

/// Why a login attempt did not produce a session.
///
/// `Display` is what the sign-in screen shows, so [`AuthError::Rejected`]
/// renders the backend's message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0}")]
    Rejected(String),
    #[error("Unable to reach the sign-in service: {0}")]
    Network(String),
    #[error("Unexpected response from the sign-in service: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    pub fn rejected(message: impl Into<String>) -> Self {
        AuthError::Rejected(message.into())
    }
}
