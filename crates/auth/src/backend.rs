//! Concrete authentication backend
//!
//! Token issuing lives outside this service; the backend only verifies
//! bearer tokens against the shared secret.

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;

/// Authentication backend shared by the route layer and extractors.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthBackend {
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Validate a bearer token and build the caller's identity
    pub fn authenticate_jwt(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = crate::jwt::validate_jwt_token(token, &self.config)?;

        if claims.sub.trim().is_empty() {
            return Err(AuthError::InvalidUserId);
        }

        Ok(AuthContext::from(claims))
    }
}
