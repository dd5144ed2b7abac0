//! Route layer enforcing bearer authentication

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::backend::AuthBackend;
use crate::error::AuthError;
use crate::jwt::extract_bearer_token;

/// Reject requests without a valid bearer token.
///
/// Runs before any handler extractor, so body parsing and lookups never
/// happen for unauthenticated callers. On success the caller's
/// [`crate::AuthContext`] is stored in the request extensions.
///
/// ```ignore
/// get(handler).route_layer(axum::middleware::from_fn_with_state(backend, require_bearer))
/// ```
pub async fn require_bearer(
    State(backend): State<AuthBackend>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;
        extract_bearer_token(header)?
    };

    let ctx = backend.authenticate_jwt(&token).map_err(|e| {
        tracing::debug!(code = e.code(), path = %req.uri().path(), "Rejected bearer token");
        e
    })?;

    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}
