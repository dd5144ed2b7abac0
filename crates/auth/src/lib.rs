//! Bearer authentication for the Jobs API
//!
//! Provides JWT validation, a route layer that rejects unauthenticated
//! requests before they reach a handler, and an axum extractor that works
//! with any state implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;
mod middleware;

pub use backend::AuthBackend;
pub use claims::Claims;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::AuthUser;
pub use middleware::require_bearer;
