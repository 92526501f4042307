use lambda_http::http::header::{HeaderValue, VARY};
use lambda_http::{Body, Response};

/// Origin to echo back. A wildcard config allows anyone; otherwise the request
/// origin must be listed, falling back to the first listed origin.
pub fn cors_origin(configured: &str, request_origin: Option<&str>) -> String {
    let allowed: Vec<&str> = configured
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .collect();

    if allowed.is_empty() || allowed.contains(&"*") {
        return "*".to_string();
    }

    match request_origin {
        Some(origin) if allowed.contains(&origin) => origin.to_string(),
        _ => allowed[0].to_string(),
    }
}

pub fn with_cors_headers(mut resp: Response<Body>, configured: &str, request_origin: Option<&str>) -> Response<Body> {
    let origin = cors_origin(configured, request_origin);

    let headers = resp.headers_mut();
    if origin != "*" {
        headers.insert("Access-Control-Allow-Credentials", HeaderValue::from_static("true"));
        headers.append(VARY, HeaderValue::from_static("Origin"));
    }
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_str(&origin).unwrap_or_else(|_| HeaderValue::from_static("*")),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET,POST,PATCH,DELETE,OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type,Authorization,X-User-Id,X-User-Email"),
    );

    resp
}
