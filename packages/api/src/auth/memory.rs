use std::sync::Arc;

use super::{AuthError, Authenticator};
use crate::config::DemoAccount;
use crate::models::{Role, UserInfo};

/// In-memory Authenticator for demos and testing.
#[derive(Clone, Debug, Default)]
pub struct MemoryAuthenticator {
    accounts: Arc<Vec<DemoAccount>>,
}

impl MemoryAuthenticator {
    pub fn new(accounts: Vec<DemoAccount>) -> Self {
        Self {
            accounts: Arc::new(accounts),
        }
    }
}

impl Authenticator for MemoryAuthenticator {
    async fn login(&self, email: &str, password: &str, role: Role) -> Result<UserInfo, AuthError> {
        let Some((index, account)) = self
            .accounts
            .iter()
            .enumerate()
            .find(|(_, a)| a.email.eq_ignore_ascii_case(email.trim()))
        else {
            return Err(AuthError::rejected("Invalid credentials"));
        };

        if account.password != password {
            return Err(AuthError::rejected("Invalid credentials"));
        }
        if account.role != role {
            return Err(AuthError::rejected(format!(
                "This account is not registered for {role}"
            )));
        }
        if account.suspended {
            return Err(AuthError::rejected("Account suspended"));
        }

        Ok(UserInfo {
            id: format!("demo-{}", index + 1),
            email: account.email.clone(),
            name: account.name.clone(),
            role: account.role,
        })
    }
}
