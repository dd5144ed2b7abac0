//! Bearer token verification settings

/// How incoming bearer tokens are verified.
///
/// Tokens are HS256 JWTs signed with `jwt_secret`. The `iss` and `aud`
/// claims are only checked when the matching option is set.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}
