//! Jobs domain: job applications, their storage, and the `/jobs` API

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use api::{api_descriptor, route_table, routes, JobsOperation, JobsState};
pub use domain::entities::*;
pub use repository::{InMemoryJobRepository, JobRepository, PgJobRepository};
