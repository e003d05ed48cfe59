//! # Account roles
//!
//! The application serves three kinds of account. The role picks which tab of
//! the sign-in screen is active, which copy it shows, and is forwarded to the
//! authentication backend and the registration page.
//!
//! Roles arrive from untrusted places (the `?role=` query parameter), so the
//! only way in from a string is [`FromStr`], which accepts the exact lowercase
//! names and nothing else. [`Role::from_search`] layers the screen's fallback
//! on top of that: anything unrecognised becomes [`Role::Customer`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of account a user signs in as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Restaurant,
    Delivery,
}

/// A string that does not name one of the three roles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl Role {
    /// Every role, in tab order.
    pub const ALL: [Role; 3] = [Role::Customer, Role::Restaurant, Role::Delivery];

    /// The lowercase wire name, as used in URLs and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Restaurant => "restaurant",
            Role::Delivery => "delivery",
        }
    }

    /// Read the `role` parameter out of a URL query string.
    ///
    /// Accepts the string with or without its leading `?`. The first `role`
    /// pair wins; a missing key or an unrecognised value yields
    /// [`Role::Customer`].
    pub fn from_search(search: &str) -> Role {
        let query = search.strip_prefix('?').unwrap_or(search);
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "role")
            .and_then(|(_, value)| value.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "restaurant" => Ok(Role::Restaurant),
            "delivery" => Ok(Role::Delivery),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
