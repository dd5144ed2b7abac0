//! Route Entry and Route Table
//!
//! A route table binds method + path pairs to handler references and
//! carries the metadata needed to document them. It holds no sockets and
//! no mutable state, so "does `GET /jobs/42` reach handler X with auth Y"
//! can be answered with [`RouteTable::resolve`] alone.

use std::fmt;

use crate::error::DescriptorError;

/// HTTP methods a route can be declared for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Key used for this method inside an OpenAPI path item
    pub fn openapi_key(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authentication a route demands before its handler runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    /// A valid `Authorization: Bearer <jwt>` header
    Bearer,
    Public,
}

/// Capability shared by every handler reference stored in a table
pub trait HandlerRef {
    /// Stable identifier, published as the OpenAPI `operationId`
    fn operation_id(&self) -> &'static str;
}

/// One documented response outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseDecl {
    pub status: u16,
    pub description: &'static str,
}

/// A single method + path binding plus its metadata
#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
    pub method: HttpMethod,
    /// Path pattern, placeholders written as `{name}`
    pub path: &'static str,
    pub handler: H,
    pub summary: &'static str,
    pub tags: Vec<&'static str>,
    /// Overrides the table default when set
    pub auth: Option<AuthRequirement>,
    /// Name of the registered schema describing the JSON body
    pub request_body: Option<&'static str>,
    pub responses: Vec<ResponseDecl>,
}

impl<H> RouteEntry<H> {
    pub fn new(method: HttpMethod, path: &'static str, handler: H) -> Self {
        Self {
            method,
            path,
            handler,
            summary: "",
            tags: Vec::new(),
            auth: None,
            request_body: None,
            responses: Vec::new(),
        }
    }

    pub fn summary(mut self, summary: &'static str) -> Self {
        self.summary = summary;
        self
    }

    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn auth(mut self, auth: AuthRequirement) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn request_body(mut self, schema: &'static str) -> Self {
        self.request_body = Some(schema);
        self
    }

    pub fn response(mut self, status: u16, description: &'static str) -> Self {
        self.responses.push(ResponseDecl {
            status,
            description,
        });
        self
    }

    /// Names of the `{placeholders}` in the path, in order
    pub fn path_params(&self) -> Result<Vec<&'static str>, DescriptorError> {
        Ok(parse_pattern(self.path)?
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Param(name) => Some(name),
                Segment::Literal(_) => None,
            })
            .collect())
    }
}

/// Result of resolving a concrete request against a table
#[derive(Debug)]
pub struct RouteMatch<'a, H> {
    pub entry: &'a RouteEntry<H>,
    pub auth: AuthRequirement,
    /// Extracted path parameters, passed through untouched
    pub params: Vec<(&'static str, String)>,
}

impl<H> RouteMatch<'_, H> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Ordered set of route entries with a table-level auth default
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    default_auth: AuthRequirement,
    entries: Vec<RouteEntry<H>>,
}

impl<H> RouteTable<H> {
    pub fn new(default_auth: AuthRequirement) -> Self {
        Self {
            default_auth,
            entries: Vec::new(),
        }
    }

    pub fn route(mut self, entry: RouteEntry<H>) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn default_auth(&self) -> AuthRequirement {
        self.default_auth
    }

    pub fn entries(&self) -> &[RouteEntry<H>] {
        &self.entries
    }

    /// The auth requirement that applies to `entry` in this table
    pub fn effective_auth(&self, entry: &RouteEntry<H>) -> AuthRequirement {
        entry.auth.unwrap_or(self.default_auth)
    }

    /// Find the entry serving `method` on a concrete request path.
    ///
    /// Literal segments must match exactly; a placeholder matches any
    /// non-empty segment. Malformed patterns never match.
    pub fn resolve(&self, method: HttpMethod, path: &str) -> Option<RouteMatch<'_, H>> {
        let request_segments: Vec<&str> = split_path(path)?;

        self.entries
            .iter()
            .filter(|entry| entry.method == method)
            .find_map(|entry| {
                let pattern = parse_pattern(entry.path).ok()?;
                if pattern.len() != request_segments.len() {
                    return None;
                }

                let mut params = Vec::new();
                for (segment, actual) in pattern.iter().zip(&request_segments) {
                    match segment {
                        Segment::Literal(literal) if literal == actual => {}
                        Segment::Param(name) if !actual.is_empty() => {
                            params.push((*name, (*actual).to_string()));
                        }
                        _ => return None,
                    }
                }

                Some(RouteMatch {
                    entry,
                    auth: self.effective_auth(entry),
                    params,
                })
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Literal(&'static str),
    Param(&'static str),
}

fn split_path(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;
    if rest.is_empty() {
        return Some(Vec::new());
    }
    Some(rest.split('/').collect())
}

fn parse_pattern(path: &'static str) -> Result<Vec<Segment>, DescriptorError> {
    let invalid = |reason: &str| DescriptorError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    let segments = split_path(path).ok_or_else(|| invalid("must start with '/'"))?;

    let mut parsed = Vec::with_capacity(segments.len());
    let mut seen = Vec::new();
    for segment in segments {
        if let Some(inner) = segment.strip_prefix('{') {
            let name = inner
                .strip_suffix('}')
                .ok_or_else(|| invalid("unterminated placeholder"))?;
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(invalid("placeholder names must be alphanumeric"));
            }
            if seen.contains(&name) {
                return Err(invalid("placeholder used twice"));
            }
            seen.push(name);
            parsed.push(Segment::Param(name));
        } else if segment.contains('{') || segment.contains('}') {
            return Err(invalid("placeholder must span a whole segment"));
        } else {
            parsed.push(Segment::Literal(segment));
        }
    }

    Ok(parsed)
}
