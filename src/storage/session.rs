use log::info;
use std::sync::Arc;

use crate::errors::AppError;
use crate::storage::KeyValueStore;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const SESSION_SENTINEL: &str = "my-secret-token";

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Credentials {
            username: "user@example.com".to_string(),
            password: "password123".to_string(),
        }
    }
}

// Mock sign-in: a fixed credential pair, remembered by writing the sentinel
// token. Any other stored value counts as signed out.
pub struct SessionStore {
    kv: Arc<dyn KeyValueStore>,
    credentials: Credentials,
}

impl SessionStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, credentials: Credentials) -> Self {
        SessionStore { kv, credentials }
    }

    pub fn is_signed_in(&self) -> bool {
        self.kv.get(AUTH_TOKEN_KEY).as_deref() == Some(SESSION_SENTINEL)
    }

    pub fn login(&self, username: &str, password: &str) -> Result<bool, AppError> {
        if username != self.credentials.username || password != self.credentials.password {
            info!("Rejected sign-in for {}", username);
            return Ok(false);
        }
        self.kv.set(AUTH_TOKEN_KEY, SESSION_SENTINEL)?;
        info!("Signed in as {}", username);
        Ok(true)
    }

    pub fn logout(&self) -> Result<(), AppError> {
        self.kv.remove(AUTH_TOKEN_KEY)
    }
}
