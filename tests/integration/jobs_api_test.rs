//! Jobs API integration tests
//!
//! Drives the fully composed application over `/api/v1/jobs`.

mod common;
mod jobs;
