use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::{CreateStylistPayload, UpdateStylistPayload};
use super::service::{self, RegistrationError};
use super::store::{StoreError, StylistStore};
use crate::media::MediaError;
use crate::responses::{error_response, json_response};

/// Status code for a store failure seen by a stylist-facing route
pub fn store_error_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::AlreadyExists(_) => StatusCode::CONFLICT,
        StoreError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// HTTP Handler: POST /register
pub async fn register_handler(
    store: &dyn StylistStore,
    user_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: CreateStylistPayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("Failed to parse registration request: {}", e);
            return error_response(StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e));
        }
    };

    match service::register_stylist(store, user_id, payload).await {
        Ok(record) => json_response(StatusCode::CREATED, &record),
        Err(RegistrationError::MissingFields(fields)) => json_response(
            StatusCode::BAD_REQUEST,
            &serde_json::json!({
                "error": "Missing required fields",
                "missing": fields,
            }),
        ),
        Err(RegistrationError::Media(e @ (MediaError::Upload(_) | MediaError::Decode(_)))) => {
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(RegistrationError::Media(e)) => {
            tracing::error!("Profile image processing failed for {}: {}", user_id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
        Err(RegistrationError::Store(e)) => {
            tracing::error!("Registration failed for {}: {}", user_id, e);
            error_response(store_error_status(&e), e.to_string())
        }
    }
}

/// HTTP Handler: GET /profile
pub async fn get_profile_handler(store: &dyn StylistStore, user_id: &str) -> Result<Response<Body>, Error> {
    match service::get_profile(store, user_id).await {
        Ok(record) => json_response(StatusCode::OK, &record),
        Err(e) => {
            if !matches!(e, StoreError::NotFound(_)) {
                tracing::error!("Failed to load profile {}: {}", user_id, e);
            }
            error_response(store_error_status(&e), e.to_string())
        }
    }
}

/// HTTP Handler: PATCH /profile
pub async fn update_profile_handler(
    store: &dyn StylistStore,
    user_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let patch: UpdateStylistPayload = match serde_json::from_slice(body) {
        Ok(patch) => patch,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e)),
    };

    match service::update_profile(store, user_id, patch).await {
        Ok(record) => json_response(StatusCode::OK, &record),
        Err(e) => {
            tracing::error!("Profile update failed for {}: {}", user_id, e);
            error_response(store_error_status(&e), e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::body_text;
    use crate::stylists::memory::MemoryStylistStore;

    fn registration_body() -> Vec<u8> {
        serde_json::json!({
            "fullName": "Jo Lee",
            "email": "jo@x.com",
            "phone": "0123",
            "location": "1 Main St",
            "city": "Leeds",
            "skills": "Hair, Nails",
            "experience": "5 years",
            "gender": "male"
        })
        .to_string()
        .into_bytes()
    }

    #[tokio::test]
    async fn register_then_fetch_profile() {
        let store = MemoryStylistStore::new();
        let resp = register_handler(&store, "uid-1", &registration_body()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = get_profile_handler(&store, "uid-1").await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(&resp)).unwrap();
        assert_eq!(body["name"], "Jo Lee");
        assert_eq!(body["address"], "1 Main St");
        assert_eq!(body["status"], "active");
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts() {
        let store = MemoryStylistStore::new();
        register_handler(&store, "uid-1", &registration_body()).await.unwrap();
        let resp = register_handler(&store, "uid-1", &registration_body()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn incomplete_registration_lists_missing_fields() {
        let store = MemoryStylistStore::new();
        let body = serde_json::json!({"email": "jo@x.com"}).to_string();
        let resp = register_handler(&store, "uid-1", body.as_bytes()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_str(&body_text(&resp)).unwrap();
        assert_eq!(body["missing"][0], "name");
    }

    #[tokio::test]
    async fn bad_picture_is_a_client_error() {
        let store = MemoryStylistStore::new();
        let mut body: serde_json::Value = serde_json::from_slice(&registration_body()).unwrap();
        body["profile_picture"] = serde_json::json!("aGVsbG8=");
        let resp = register_handler(&store, "uid-1", body.to_string().as_bytes()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn unknown_profile_is_404() {
        let store = MemoryStylistStore::new();
        let resp = get_profile_handler(&store, "nobody").await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn profile_update_failure_reports_backend_error() {
        let store = MemoryStylistStore::new();
        register_handler(&store, "uid-1", &registration_body()).await.unwrap();
        store.fail_writes(true);

        let resp = update_profile_handler(&store, "uid-1", br#"{"city":"York"}"#).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.snapshot()[0].city, "Leeds");
    }
}
