//! Venue handlers: grouped listing, search, detail, create, edit, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::Form;

use crate::api::dto::{
    DeleteResponse, FormDescriptor, FormField, SearchForm, VenueAreaDto, VenueDetailDto,
    VenueEditForm, VenueForm, VenueMutationResponse, VenueRecordDto, VenueSearchResponse,
};
use crate::app_state::AppState;
use crate::domain::VenueId;
use crate::error::{DirectoryError, ErrorResponse};

/// `GET /venues` — List all venues grouped by (city, state).
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure.
#[utoipa::path(
    get,
    path = "/venues",
    tag = "Venues",
    summary = "Grouped venue listing",
    description = "Returns all venues grouped by the distinct (city, state) pairs present, each venue carrying its upcoming-show count.",
    responses(
        (status = 200, description = "Location groups", body = Vec<VenueAreaDto>),
    )
)]
pub async fn list_venues(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DirectoryError> {
    let groups = state.venue_service.list_grouped().await?;
    let data: Vec<VenueAreaDto> = groups.into_iter().map(Into::into).collect();
    Ok(Json(data))
}

/// `POST /venues/search` — Case-insensitive substring search on venue name.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure.
#[utoipa::path(
    post,
    path = "/venues/search",
    tag = "Venues",
    summary = "Search venues",
    description = "Case-insensitive substring match against venue names; the empty term matches every venue.",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Matches with count", body = VenueSearchResponse),
    )
)]
pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let results = state.venue_service.search(&form.search_term).await?;
    Ok(Json(VenueSearchResponse::new(results)))
}

/// `GET /venues/{id}` — Venue detail with past/upcoming show history.
///
/// # Errors
///
/// Returns [`DirectoryError::VenueNotFound`] if the venue does not exist.
#[utoipa::path(
    get,
    path = "/venues/{id}",
    tag = "Venues",
    summary = "Venue detail",
    description = "Returns the venue record with decoded genres and its shows partitioned into past and upcoming.",
    params(
        ("id" = i64, Path, description = "Venue id"),
    ),
    responses(
        (status = 200, description = "Venue detail", body = VenueDetailDto),
        (status = 404, description = "Venue not found", body = ErrorResponse),
    )
)]
pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<VenueId>,
) -> Result<impl IntoResponse, DirectoryError> {
    let detail = state.venue_service.detail(id).await?;
    Ok(Json(VenueDetailDto::from(detail)))
}

/// `GET /venues/create` — Describe the venue creation form.
#[utoipa::path(
    get,
    path = "/venues/create",
    tag = "Venues",
    summary = "Venue creation form",
    description = "Returns the fields a POST to the same path accepts.",
    responses(
        (status = 200, description = "Form descriptor", body = FormDescriptor),
    )
)]
pub async fn venue_create_form() -> impl IntoResponse {
    Json(FormDescriptor {
        fields: vec![
            FormField::required("name"),
            FormField::required("address"),
            FormField::required("city"),
            FormField::required("state"),
            FormField::required("phone"),
            FormField::repeated("genres"),
            FormField::optional("facebook_link"),
        ],
    })
}

/// `POST /venues/create` — Create a venue.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure; nothing is written.
#[utoipa::path(
    post,
    path = "/venues/create",
    tag = "Venues",
    summary = "Create a venue",
    description = "Creates a venue from the form fields; repeated identical submissions create distinct records.",
    request_body(content = VenueForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Venue created", body = VenueMutationResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_venue(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let name = form.name.clone();
    let id = state.venue_service.create(&form.into_new_venue()).await?;
    Ok((
        StatusCode::CREATED,
        Json(VenueMutationResponse { id, name }),
    ))
}

/// `GET /venues/{id}/edit` — Current record for edit-form prefill.
///
/// # Errors
///
/// Returns [`DirectoryError::VenueNotFound`] if the venue does not exist.
#[utoipa::path(
    get,
    path = "/venues/{id}/edit",
    tag = "Venues",
    summary = "Venue edit form",
    description = "Returns the stored record the edit form is prefilled from.",
    params(
        ("id" = i64, Path, description = "Venue id"),
    ),
    responses(
        (status = 200, description = "Current record", body = VenueRecordDto),
        (status = 404, description = "Venue not found", body = ErrorResponse),
    )
)]
pub async fn venue_edit_form(
    State(state): State<AppState>,
    Path(id): Path<VenueId>,
) -> Result<impl IntoResponse, DirectoryError> {
    let venue = state.venue_service.record(id).await?;
    Ok(Json(VenueRecordDto::from(venue)))
}

/// `POST /venues/{id}/edit` — Partial edit of a venue.
///
/// Overwrites name, city, state, phone, genres, and `facebook_link`;
/// every other stored field is left untouched.
///
/// # Errors
///
/// Returns [`DirectoryError::VenueNotFound`] if the venue does not exist.
#[utoipa::path(
    post,
    path = "/venues/{id}/edit",
    tag = "Venues",
    summary = "Edit a venue",
    description = "Overwrites the editable fields in one transaction; fields outside the edit set keep their stored values.",
    params(
        ("id" = i64, Path, description = "Venue id"),
    ),
    request_body(content = VenueEditForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Venue updated", body = VenueMutationResponse),
        (status = 404, description = "Venue not found", body = ErrorResponse),
    )
)]
pub async fn edit_venue(
    State(state): State<AppState>,
    Path(id): Path<VenueId>,
    Form(form): Form<VenueEditForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let name = form.name.clone();
    state.venue_service.edit(id, &form.into_edit()).await?;
    Ok(Json(VenueMutationResponse { id, name }))
}

/// `DELETE /venues/{id}` — Delete a venue and its shows.
///
/// Always answers with a `{success}` flag; the status code distinguishes
/// not-found from storage failure.
#[utoipa::path(
    delete,
    path = "/venues/{id}",
    tag = "Venues",
    summary = "Delete a venue",
    description = "Deletes the venue and its dependent shows in one transaction.",
    params(
        ("id" = i64, Path, description = "Venue id"),
    ),
    responses(
        (status = 200, description = "Venue deleted", body = DeleteResponse),
        (status = 404, description = "Venue not found", body = DeleteResponse),
        (status = 500, description = "Storage failure", body = DeleteResponse),
    )
)]
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<VenueId>,
) -> impl IntoResponse {
    match state.venue_service.delete(id).await {
        Ok(()) => (StatusCode::OK, Json(DeleteResponse { success: true })),
        Err(e) => {
            let status = e.status_code();
            tracing::warn!(venue_id = %id, error = %e, "venue delete failed");
            (status, Json(DeleteResponse { success: false }))
        }
    }
}

/// Venue routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(venue_create_form).post(create_venue))
        .route("/venues/{id}", get(get_venue).delete(delete_venue))
        .route("/venues/{id}/edit", get(venue_edit_form).post(edit_venue))
}
