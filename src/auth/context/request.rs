//! Immutable view of the request fields context resolution reads

use actix_web::HttpRequest;
use actix_web::http::Method;
use actix_web::web::Query;
use bytes::Bytes;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;

/// Project parameters a route declares in its path pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundParams {
    pub project_code: Option<String>,
    pub project_id: Option<String>,
}

/// Method, parameters and raw body of one request
#[derive(Debug, Clone)]
pub struct RequestParts {
    method: Method,
    bound: BoundParams,
    path: HashMap<String, String>,
    query: HashMap<String, String>,
    body: Bytes,
}

impl RequestParts {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            bound: BoundParams::default(),
            path: HashMap::new(),
            query: HashMap::new(),
            body: Bytes::new(),
        }
    }

    /// Capture an actix request together with its buffered body.
    ///
    /// Path segments named `project_code` or `project_id` become bound parameters.
    /// An unparseable query string is treated as empty.
    pub fn from_actix(req: &HttpRequest, body: &Bytes) -> Self {
        let mut parts = Self::new(req.method().clone());

        for (name, value) in req.match_info().iter() {
            match name {
                "project_code" => parts.bound.project_code = Some(value.to_string()),
                "project_id" => parts.bound.project_id = Some(value.to_string()),
                _ => {
                    parts.path.insert(name.to_string(), value.to_string());
                }
            }
        }

        match Query::<HashMap<String, String>>::from_query(req.query_string()) {
            Ok(query) => parts.query = query.into_inner(),
            Err(e) => debug!(error = %e, "Ignoring unparseable query string"),
        }

        parts.body = body.clone();
        parts
    }

    pub fn bound_project_code(mut self, code: impl Into<String>) -> Self {
        self.bound.project_code = Some(code.into());
        self
    }

    pub fn bound_project_id(mut self, id: impl Into<String>) -> Self {
        self.bound.project_id = Some(id.into());
        self
    }

    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path.insert(name.into(), value.into());
        self
    }

    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn json_body(self, body: &Value) -> Self {
        let raw = serde_json::to_vec(body).unwrap_or_default();
        self.body(raw)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn bound(&self) -> &BoundParams {
        &self.bound
    }

    pub fn path_params(&self) -> &HashMap<String, String> {
        &self.path
    }

    pub fn query_params(&self) -> &HashMap<String, String> {
        &self.query
    }

    pub fn raw_body(&self) -> &Bytes {
        &self.body
    }

    /// The body as a JSON object; anything else reads as no body
    pub fn json_object(&self) -> Option<Map<String, Value>> {
        if self.body.is_empty() {
            return None;
        }
        match serde_json::from_slice::<Value>(&self.body) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => None,
            Err(e) => {
                debug!(error = %e, "Treating unparseable request body as empty");
                None
            }
        }
    }
}

/// Scalar JSON values usable as identifiers; empty strings count as absent
pub(super) fn scalar_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
