use lambda_http::http::HeaderMap;
use lambda_http::{http::StatusCode, Body, Error, Response};
use salon_atoms::responses::error_response;

/// Set by the upstream authorizer once the sign-in token has been verified.
///
/// These headers are trusted as-is. The API Gateway integration must overwrite
/// both from the authorizer context (request parameter mapping), otherwise a
/// client can send `X-User-Email` itself and claim the admin account.
pub const USER_ID_HEADER: &str = "X-User-Id";
pub const USER_EMAIL_HEADER: &str = "X-User-Email";

/// The signed-in account behind a request
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
}

impl Identity {
    pub fn is_admin(&self, admin_email: &str) -> bool {
        self.email.trim().eq_ignore_ascii_case(admin_email.trim())
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

pub fn identity_from_headers(headers: &HeaderMap) -> Option<Identity> {
    Some(Identity {
        user_id: header(headers, USER_ID_HEADER)?.to_string(),
        email: header(headers, USER_EMAIL_HEADER).unwrap_or_default().to_string(),
    })
}

pub fn unauthorized() -> Result<Response<Body>, Error> {
    error_response(StatusCode::UNAUTHORIZED, "Not signed in")
}

pub fn forbidden() -> Result<Response<Body>, Error> {
    error_response(StatusCode::FORBIDDEN, "Admin access required")
}
