//! Documentation and infrastructure endpoint integration tests

mod common;
mod docs;
