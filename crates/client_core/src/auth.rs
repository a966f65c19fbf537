use async_trait::async_trait;
use chrono::Utc;

use shared::{domain::Identity, error::AuthError};

/// Seam for credential verification. The shipped implementation is a
/// stand-in, not security machinery; a real backend would slot in here.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError>;
}

/// Accepts any non-empty username/password pair and mints an identity
/// whose id is the login instant in unix milliseconds.
pub struct AcceptAnyCredentials;

#[async_trait]
impl IdentityVerifier for AcceptAnyCredentials {
    async fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(Identity {
            id: Utc::now().timestamp_millis().to_string(),
            username: username.to_string(),
        })
    }
}
