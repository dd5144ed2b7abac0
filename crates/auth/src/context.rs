//! Identity of the authenticated caller

use crate::claims::Claims;

/// Represents an authenticated caller.
///
/// Inserted into request extensions by [`crate::require_bearer`] and read
/// back by [`crate::AuthUser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl AuthContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: None,
            email: None,
        }
    }
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            name: claims.name,
            email: claims.email,
        }
    }
}
