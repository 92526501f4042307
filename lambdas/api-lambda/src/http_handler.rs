use dashboard_block::http as dashboard;
use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, RequestExt, Response,
};
use salon_atoms::responses::{method_not_allowed, not_found};
use salon_atoms::stylists::http as stylists;
use salon_shared::{auth, cors::with_cors_headers, AppState};
use std::sync::Arc;

fn finalize_response(
    resp: Result<Response<Body>, Error>,
    cors_origin: &str,
    request_origin: Option<&str>,
) -> Result<Response<Body>, Error> {
    resp.map(|r| with_cors_headers(r, cors_origin, request_origin))
}

/// Main Lambda handler - routes stylist self-service and admin dashboard requests
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    let body: &[u8] = event.body().as_ref();
    let cors_origin = state.config.cors_origin.as_str();
    let request_origin = event.headers().get("Origin").and_then(|v| v.to_str().ok());
    tracing::info!("API Lambda invoked - Method: {} Path: {}", method, path);

    // Handle CORS preflight
    if method == Method::OPTIONS {
        let resp = Response::builder()
            .status(StatusCode::OK)
            .body(Body::Empty)
            .map_err(Box::new)?;
        return Ok(with_cors_headers(resp, cors_origin, request_origin));
    }

    let Some(identity) = auth::identity_from_headers(event.headers()) else {
        tracing::warn!("Rejected unauthenticated {} {}", method, path);
        return finalize_response(auth::unauthorized(), cors_origin, request_origin);
    };

    let store = state.store.as_ref();
    let admin_email = state.config.admin_email.as_str();

    // Stylist self-service
    if path == "/register" || path == "/profile" {
        let resp = match (method, path) {
            (&Method::POST, "/register") => stylists::register_handler(store, &identity.user_id, body).await,
            (&Method::GET, "/profile") => stylists::get_profile_handler(store, &identity.user_id).await,
            (&Method::PATCH, "/profile") => {
                stylists::update_profile_handler(store, &identity.user_id, body).await
            }
            _ => method_not_allowed(),
        };
        return finalize_response(resp, cors_origin, request_origin);
    }

    // Admin dashboard
    if path.starts_with("/dashboard") {
        if !identity.is_admin(admin_email) {
            tracing::warn!("User {} denied dashboard access", identity.user_id);
            return finalize_response(auth::forbidden(), cors_origin, request_origin);
        }

        let params = event.query_string_parameters_ref();
        let city = params.and_then(|p| p.first("city"));
        let gender = params.and_then(|p| p.first("gender"));
        let confirmed = params.and_then(|p| p.first("confirm")) == Some("true");
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let resp = match (method, parts.as_slice()) {
            (&Method::GET, ["dashboard", "summary"]) => dashboard::summary_handler(store, admin_email).await,
            (&Method::GET, ["dashboard", "export"]) => dashboard::export_handler(store, admin_email).await,
            (&Method::GET, ["dashboard", "stylists"]) => {
                dashboard::list_handler(store, admin_email, city, gender).await
            }
            (&Method::GET, ["dashboard", "stylists", id]) => {
                dashboard::get_stylist_handler(store, admin_email, id).await
            }
            (&Method::PATCH, ["dashboard", "stylists", id]) => {
                dashboard::edit_stylist_handler(store, admin_email, id, body).await
            }
            (&Method::DELETE, ["dashboard", "stylists", id]) => {
                dashboard::delete_stylist_handler(store, admin_email, id, confirmed).await
            }
            (&Method::PATCH, ["dashboard", "stylists", id, "status"]) => {
                dashboard::update_status_handler(store, admin_email, id, body).await
            }
            _ => not_found(),
        };
        return finalize_response(resp, cors_origin, request_origin);
    }

    tracing::warn!("No route for {} {}", method, path);
    finalize_response(not_found(), cors_origin, request_origin)
}
