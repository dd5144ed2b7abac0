//! API layer for the Jobs domain
//!
//! Contains HTTP handlers, the route table, its API descriptor, and the
//! domain state definition.

pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use docs::api_descriptor;
pub use middleware::JobsState;
pub use routes::{route_table, routes, JobsOperation};
