//! HTTP boundary contract for the tag endpoints, expressed as plain
//! functions.
//!
//! An external router owns sockets, methods, and paths; it hands raw bodies
//! and query parameters here and writes back [`ApiResponse`] status and body
//! verbatim. Responses always use the `{"ok": bool, ...}` envelope:
//! `data` on success, `error` with a human-readable message on failure.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::TagError;
use crate::tags::TagRegistry;

/// Status code plus JSON body, ready for the transport layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok(status: u16, data: Value) -> Self {
        Self {
            status,
            body: json!({ "ok": true, "data": data }),
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "ok": false, "error": message }),
        }
    }

    fn success_no_data() -> Self {
        Self {
            status: 200,
            body: json!({ "ok": true }),
        }
    }
}

/// Validated shape of a `POST /api/tags` body.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTagRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub count: Option<i64>,
}

/// `GET /api/tags` — always succeeds with the sorted tag listing.
pub fn get_tags(registry: &TagRegistry) -> ApiResponse {
    let rows = registry.list();
    ApiResponse::ok(200, json!(rows))
}

/// `POST /api/tags` — parse and validate the raw JSON body, then create or
/// update the named tag. Malformed JSON and missing/empty names both come
/// back as 400.
pub fn post_tag(registry: &mut TagRegistry, raw_body: &str) -> ApiResponse {
    let request: CreateTagRequest = match serde_json::from_str(raw_body) {
        Ok(request) => request,
        Err(_) => return ApiResponse::error(400, &TagError::NameRequired.to_string()),
    };
    let name = request.name.as_deref().unwrap_or("");
    match registry.add_or_update(name, request.count) {
        Ok(row) => ApiResponse::ok(201, json!(row)),
        Err(err) => error_response(err),
    }
}

/// `DELETE /api/tags?name=<string>` — remove the named tag. A missing query
/// parameter is 400, an unknown name 404.
pub fn delete_tag(registry: &mut TagRegistry, name_param: Option<&str>) -> ApiResponse {
    match registry.delete(name_param.unwrap_or("")) {
        Ok(()) => ApiResponse::success_no_data(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: TagError) -> ApiResponse {
    let status = match err {
        TagError::NameRequired => 400,
        TagError::NotFound(_) => 404,
    };
    ApiResponse::error(status, &err.to_string())
}
