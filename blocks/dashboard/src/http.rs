use lambda_http::{http::StatusCode, Body, Error, Response};
use salon_atoms::responses::{error_response, json_response};
use salon_atoms::stylists::{
    Gender, StatusUpdatePayload, StoreError, StylistRecord, StylistStore, UpdateStylistPayload,
};
use serde::Serialize;

use crate::chart::DonutChart;
use crate::export::{stylists_csv, CSV_FILENAME};
use crate::loader::Roster;
use crate::mutations::{
    self, DeleteRequest, Mutation, MutationError, DELETE_FAILED, EDIT_FAILED, STATUS_FAILED,
};
use crate::stats::compute_stats;
use crate::view::{DashboardView, ViewEvent};

#[derive(Serialize)]
struct StylistRow<'a> {
    #[serde(flatten)]
    stylist: &'a StylistRecord,
    display_name: String,
}

impl<'a> From<&'a StylistRecord> for StylistRow<'a> {
    fn from(stylist: &'a StylistRecord) -> Self {
        Self {
            display_name: stylist.display_name(),
            stylist,
        }
    }
}

fn load_failed(err: &StoreError) -> Result<Response<Body>, Error> {
    tracing::error!("Failed to load stylists: {}", err);
    json_response(
        StatusCode::SERVICE_UNAVAILABLE,
        &serde_json::json!({
            "error": "load failed",
            "detail": err.to_string(),
        }),
    )
}

fn mutation_failed(err: &MutationError, failure: &str) -> Result<Response<Body>, Error> {
    let status = match err {
        MutationError::InvalidStatus(_) | MutationError::EmptyEdit => StatusCode::BAD_REQUEST,
        MutationError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        MutationError::Store(StoreError::AlreadyExists(_)) => StatusCode::CONFLICT,
        MutationError::Store(StoreError::Backend(_)) => {
            tracing::error!("{}: {}", failure, err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    json_response(
        status,
        &serde_json::json!({
            "error": failure,
            "detail": err.to_string(),
        }),
    )
}

/// Hidden records (the admin account, later email duplicates) are not addressable
fn not_displayed(id: &str) -> Result<Response<Body>, Error> {
    tracing::warn!("Stylist {} is not on display, refusing to change it", id);
    error_response(StatusCode::NOT_FOUND, "Stylist not found")
}

/// Commit the accepted change and answer with the message and the fresh row
fn mutation_succeeded(roster: &mut Roster, mutation: &Mutation) -> Result<Response<Body>, Error> {
    if !roster.commit(mutation) {
        tracing::warn!("Stylist {} changed in the store but is not on display", mutation.id());
    }
    json_response(
        StatusCode::OK,
        &serde_json::json!({
            "message": mutation.success_message(),
            "stylist": roster.get(mutation.id()).map(StylistRow::from),
        }),
    )
}

/// HTTP Handler: GET /dashboard/summary
pub async fn summary_handler(store: &dyn StylistStore, admin_email: &str) -> Result<Response<Body>, Error> {
    let roster = match Roster::load(store, admin_email).await {
        Ok(roster) => roster,
        Err(e) => return load_failed(&e),
    };

    let stats = compute_stats(roster.stylists());
    let chart = DonutChart::from_stats(&stats);

    json_response(
        StatusCode::OK,
        &serde_json::json!({
            "total": stats.total,
            "active": stats.active,
            "skills": stats.skills,
            "chart": chart,
            "chart_svg": chart.to_svg(),
        }),
    )
}

/// HTTP Handler: GET /dashboard/stylists?city=..&gender=..
pub async fn list_handler(
    store: &dyn StylistStore,
    admin_email: &str,
    city: Option<&str>,
    gender: Option<&str>,
) -> Result<Response<Body>, Error> {
    let gender = match gender.map(str::trim).filter(|g| !g.is_empty()) {
        Some(raw) => match raw.parse::<Gender>() {
            Ok(gender) => Some(gender),
            Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
        },
        None => None,
    };

    let roster = match Roster::load(store, admin_email).await {
        Ok(roster) => roster,
        Err(e) => return load_failed(&e),
    };

    let view = DashboardView::default()
        .update(ViewEvent::ShowList)
        .update(ViewEvent::SetCityFilter(city.unwrap_or_default().to_string()))
        .update(ViewEvent::SetGenderFilter(gender));

    let rows: Vec<StylistRow> = view.visible(&roster).into_iter().map(StylistRow::from).collect();

    json_response(
        StatusCode::OK,
        &serde_json::json!({
            "count": rows.len(),
            "stylists": rows,
        }),
    )
}

/// HTTP Handler: GET /dashboard/stylists/{id}
pub async fn get_stylist_handler(
    store: &dyn StylistStore,
    admin_email: &str,
    id: &str,
) -> Result<Response<Body>, Error> {
    let roster = match Roster::load(store, admin_email).await {
        Ok(roster) => roster,
        Err(e) => return load_failed(&e),
    };

    match roster.get(id) {
        Some(stylist) => json_response(StatusCode::OK, &StylistRow::from(stylist)),
        None => error_response(StatusCode::NOT_FOUND, "Stylist not found"),
    }
}

/// HTTP Handler: PATCH /dashboard/stylists/{id}/status
pub async fn update_status_handler(
    store: &dyn StylistStore,
    admin_email: &str,
    id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: StatusUpdatePayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e)),
    };

    let mut roster = match Roster::load(store, admin_email).await {
        Ok(roster) => roster,
        Err(e) => return load_failed(&e),
    };

    if roster.get(id).is_none() {
        return not_displayed(id);
    }

    match mutations::update_status(store, id, &payload.status).await {
        Ok(mutation) => mutation_succeeded(&mut roster, &mutation),
        Err(e) => mutation_failed(&e, STATUS_FAILED),
    }
}

/// HTTP Handler: PATCH /dashboard/stylists/{id}
pub async fn edit_stylist_handler(
    store: &dyn StylistStore,
    admin_email: &str,
    id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let patch: UpdateStylistPayload = match serde_json::from_slice(body) {
        Ok(patch) => patch,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e)),
    };

    let mut roster = match Roster::load(store, admin_email).await {
        Ok(roster) => roster,
        Err(e) => return load_failed(&e),
    };

    if roster.get(id).is_none() {
        return not_displayed(id);
    }

    match mutations::edit_stylist(store, id, patch).await {
        Ok(mutation) => mutation_succeeded(&mut roster, &mutation),
        Err(e) => mutation_failed(&e, EDIT_FAILED),
    }
}

/// HTTP Handler: DELETE /dashboard/stylists/{id}?confirm=true
pub async fn delete_stylist_handler(
    store: &dyn StylistStore,
    admin_email: &str,
    id: &str,
    confirmed: bool,
) -> Result<Response<Body>, Error> {
    let request = DeleteRequest::new(id);
    let Some(confirmed) = request.confirm(confirmed) else {
        return json_response(
            StatusCode::PRECONDITION_REQUIRED,
            &serde_json::json!({
                "error": "Are you sure you want to delete this stylist?",
                "confirm": format!("/dashboard/stylists/{}?confirm=true", id),
            }),
        );
    };

    let mut roster = match Roster::load(store, admin_email).await {
        Ok(roster) => roster,
        Err(e) => return load_failed(&e),
    };

    if roster.get(id).is_none() {
        return not_displayed(id);
    }

    match mutations::delete_stylist(store, confirmed).await {
        Ok(mutation) => mutation_succeeded(&mut roster, &mutation),
        Err(e) => mutation_failed(&e, DELETE_FAILED),
    }
}

/// HTTP Handler: GET /dashboard/export
pub async fn export_handler(store: &dyn StylistStore, admin_email: &str) -> Result<Response<Body>, Error> {
    let roster = match Roster::load(store, admin_email).await {
        Ok(roster) => roster,
        Err(e) => return load_failed(&e),
    };

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/csv")
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", CSV_FILENAME),
        )
        .body(stylists_csv(roster.stylists()).into())
        .map_err(Box::new)?)
}
