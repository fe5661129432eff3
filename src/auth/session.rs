use actix_session::Session;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

const AUTH_KEY: &str = "auth";

/// Role as reported by the auth provider. Anything that is neither
/// `admin` nor `user` is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    User,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Other(name) => name,
        }
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        match name.as_str() {
            "admin" => Role::Admin,
            "user" => Role::User,
            _ => Role::Other(name),
        }
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Role::from(name.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// The authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub speaker_id: Option<String>,
}

/// Principal plus the signed access credential it was issued with.
/// Passed explicitly into every action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: SessionUser,
    pub access_token: String,
}

pub fn get_auth_session(session: &Session) -> Option<AuthSession> {
    session.get::<AuthSession>(AUTH_KEY).unwrap_or_else(|e| {
        log::warn!("Discarding unreadable auth session: {e}");
        None
    })
}

pub fn store_auth_session(session: &Session, auth: &AuthSession) -> Result<(), AppError> {
    session.renew();
    session.insert(AUTH_KEY, auth)?;
    Ok(())
}

pub fn clear_auth_session(session: &Session) {
    session.purge();
}
