//! Route declarations and OpenAPI descriptor generation
//!
//! Routes are modelled as plain data ([`RouteEntry`] inside a
//! [`RouteTable`]). The same table drives HTTP dispatch in the domain
//! crates and the OpenAPI 3.0 document produced by [`DescriptorBuilder`],
//! so the published contract cannot drift from the wired routes. Component
//! schemas are derived from the wire types with `utoipa::ToSchema`.

pub mod error;
pub mod generator;
pub mod route;
pub mod spec;
pub mod swagger;

pub use error::DescriptorError;
pub use generator::{ApiMetadata, DescriptorBuilder, BEARER_SCHEME};
pub use route::{
    AuthRequirement, HandlerRef, HttpMethod, ResponseDecl, RouteEntry, RouteMatch, RouteTable,
};
pub use spec::OpenApiDocument;
pub use swagger::swagger_ui_html;
