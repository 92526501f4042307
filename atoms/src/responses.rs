use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

/// JSON body with the given status
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(body)?.into())
        .map_err(Box::new)?)
}

/// `{"error": message}` with the given status
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Result<Response<Body>, Error> {
    json_response(status, &serde_json::json!({ "error": message.into() }))
}

pub fn not_found() -> Result<Response<Body>, Error> {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

pub fn method_not_allowed() -> Result<Response<Body>, Error> {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Body text of a response, for assertions
#[cfg(test)]
pub(crate) fn body_text(resp: &Response<Body>) -> String {
    match resp.body() {
        Body::Text(text) => text.clone(),
        Body::Binary(bytes) => String::from_utf8_lossy(bytes).to_string(),
        Body::Empty => String::new(),
    }
}
