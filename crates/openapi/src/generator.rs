//! API Descriptor Generator
//!
//! Turns global metadata, component schemas derived with `utoipa` and a
//! [`RouteTable`] into an [`OpenApiDocument`]. Generation is a pure
//! function of its inputs: no clocks, no randomness, ordered maps only.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;
use utoipa::ToSchema;

use crate::error::DescriptorError;
use crate::route::{AuthRequirement, HandlerRef, RouteEntry, RouteTable};
use crate::spec::{
    Components, Info, OpenApiDocument, Operation, Parameter, RequestBody, ResponseSpec,
    SecurityRequirement, SecurityScheme, Server, Tag, COMPONENT_SCHEMA_PREFIX, OPENAPI_VERSION,
};

/// Name under which the bearer security scheme is registered
pub const BEARER_SCHEME: &str = "bearerAuth";

/// Fixed, process-wide descriptor metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiMetadata {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    pub server_url: String,
}

/// Builds API descriptors from route tables
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    metadata: ApiMetadata,
    tags: Vec<Tag>,
    schemas: BTreeMap<String, Value>,
    /// Registration failures, reported by `build`
    errors: Vec<DescriptorError>,
}

impl DescriptorBuilder {
    pub fn new(metadata: ApiMetadata) -> Self {
        Self {
            metadata,
            tags: Vec::new(),
            schemas: BTreeMap::new(),
            errors: Vec::new(),
        }
    }

    /// Declare a document-level tag
    pub fn tag(mut self, name: &str, description: &str) -> Self {
        self.tags.push(Tag {
            name: name.to_string(),
            description: Some(description.to_string()),
        });
        self
    }

    /// Register the component schema derived for `T`, under its type name
    pub fn register<T: for<'a> ToSchema<'a>>(mut self) -> Self {
        let (name, schema) = T::schema();
        match serde_json::to_value(schema) {
            Ok(value) => {
                self.schemas.insert(name.to_string(), value);
            }
            Err(e) => self.errors.push(DescriptorError::InvalidSchema {
                schema: name.to_string(),
                reason: e.to_string(),
            }),
        }
        self
    }

    /// Generate the descriptor for `table`.
    ///
    /// Any malformed declaration fails the whole generation; a partial
    /// contract is never returned.
    pub fn build<H: HandlerRef>(
        &self,
        table: &RouteTable<H>,
    ) -> Result<OpenApiDocument, DescriptorError> {
        if let Some(err) = self.errors.first() {
            return Err(err.clone());
        }
        self.check_schema_references()?;

        let mut paths: BTreeMap<String, BTreeMap<String, Operation>> = BTreeMap::new();
        let mut operation_ids = BTreeSet::new();

        for entry in table.entries() {
            let operation = self.operation(entry, table.effective_auth(entry))?;

            if !operation_ids.insert(operation.operation_id.clone()) {
                return Err(DescriptorError::DuplicateOperationId(
                    operation.operation_id,
                ));
            }

            let item = paths.entry(entry.path.to_string()).or_default();
            if item.contains_key(entry.method.openapi_key()) {
                return Err(DescriptorError::DuplicateRoute {
                    method: entry.method.to_string(),
                    path: entry.path.to_string(),
                });
            }
            item.insert(entry.method.openapi_key().to_string(), operation);
        }

        tracing::debug!(
            operations = table.entries().len(),
            schemas = self.schemas.len(),
            "Generated API descriptor"
        );

        Ok(OpenApiDocument {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info {
                title: self.metadata.title.clone(),
                version: self.metadata.version.clone(),
                description: self.metadata.description.clone(),
            },
            servers: vec![Server {
                url: self.metadata.server_url.clone(),
            }],
            tags: self.tags.clone(),
            security: security_for(table.default_auth()),
            paths,
            components: Components {
                security_schemes: BTreeMap::from([(
                    BEARER_SCHEME.to_string(),
                    SecurityScheme::bearer_jwt(),
                )]),
                schemas: self.schemas.clone(),
            },
        })
    }

    /// Every `$ref` inside a registered schema must name another registered schema
    fn check_schema_references(&self) -> Result<(), DescriptorError> {
        for (name, schema) in &self.schemas {
            let mut references = Vec::new();
            collect_references(schema, &mut references);

            for reference in references {
                let known = reference
                    .strip_prefix(COMPONENT_SCHEMA_PREFIX)
                    .is_some_and(|target| self.schemas.contains_key(target));
                if !known {
                    return Err(DescriptorError::DanglingReference {
                        schema: name.clone(),
                        reference: reference.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn operation<H: HandlerRef>(
        &self,
        entry: &RouteEntry<H>,
        auth: AuthRequirement,
    ) -> Result<Operation, DescriptorError> {
        let method = entry.method.to_string();
        let path = entry.path.to_string();

        let parameters = entry
            .path_params()?
            .into_iter()
            .map(Parameter::path)
            .collect();

        if entry.summary.trim().is_empty() {
            return Err(DescriptorError::MissingSummary { method, path });
        }

        if entry.responses.is_empty() {
            return Err(DescriptorError::MissingResponses { method, path });
        }

        let mut responses = BTreeMap::new();
        for response in &entry.responses {
            if !(100..=599).contains(&response.status) {
                return Err(DescriptorError::InvalidStatus {
                    method,
                    path,
                    status: response.status,
                });
            }
            let previous = responses.insert(
                response.status.to_string(),
                ResponseSpec {
                    description: response.description.to_string(),
                },
            );
            if previous.is_some() {
                return Err(DescriptorError::DuplicateResponse {
                    method,
                    path,
                    status: response.status,
                });
            }
        }

        let request_body = match entry.request_body {
            Some(name) if !self.schemas.contains_key(name) => {
                return Err(DescriptorError::UnknownSchema {
                    method,
                    path,
                    schema: name.to_string(),
                });
            }
            Some(name) => Some(RequestBody::json_ref(name)),
            None => None,
        };

        Ok(Operation {
            summary: entry.summary.to_string(),
            operation_id: entry.handler.operation_id().to_string(),
            tags: entry.tags.iter().map(|t| t.to_string()).collect(),
            security: security_for(auth),
            parameters,
            request_body,
            responses,
        })
    }
}

fn collect_references<'v>(value: &'v Value, out: &mut Vec<&'v str>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                match (key.as_str(), child.as_str()) {
                    ("$ref", Some(reference)) => out.push(reference),
                    _ => collect_references(child, out),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_references(item, out);
            }
        }
        _ => {}
    }
}

fn security_for(auth: AuthRequirement) -> Vec<SecurityRequirement> {
    match auth {
        AuthRequirement::Bearer => vec![BTreeMap::from([(BEARER_SCHEME.to_string(), Vec::new())])],
        AuthRequirement::Public => Vec::new(),
    }
}
