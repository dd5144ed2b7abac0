//! Descriptor generation errors

use thiserror::Error;

/// A route or schema declaration that cannot be published.
///
/// These are configuration errors raised while the descriptor is built,
/// never while serving requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("Invalid path pattern '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Route {method} {path} is declared more than once")]
    DuplicateRoute { method: String, path: String },

    #[error("Operation id '{0}' is used by more than one route")]
    DuplicateOperationId(String),

    #[error("Route {method} {path} has no summary")]
    MissingSummary { method: String, path: String },

    #[error("Route {method} {path} declares no responses")]
    MissingResponses { method: String, path: String },

    #[error("Route {method} {path} declares invalid status code {status}")]
    InvalidStatus {
        method: String,
        path: String,
        status: u16,
    },

    #[error("Route {method} {path} declares status code {status} twice")]
    DuplicateResponse {
        method: String,
        path: String,
        status: u16,
    },

    #[error("Schema '{schema}' could not be serialized: {reason}")]
    InvalidSchema { schema: String, reason: String },

    #[error("Schema '{schema}' references unregistered '{reference}'")]
    DanglingReference { schema: String, reference: String },

    #[error("Route {method} {path} references unknown schema '{schema}'")]
    UnknownSchema {
        method: String,
        path: String,
        schema: String,
    },
}
