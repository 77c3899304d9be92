//! Show handlers: global listing and booking creation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::Form;

use crate::api::dto::{FormDescriptor, FormField, ShowCreatedResponse, ShowDto, ShowForm};
use crate::app_state::AppState;
use crate::domain::{ArtistId, VenueId};
use crate::error::{DirectoryError, ErrorResponse};

/// `GET /shows` — Flat listing of all shows with resolved names.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure.
#[utoipa::path(
    get,
    path = "/shows",
    tag = "Shows",
    summary = "Show listing",
    description = "Returns every show with its venue and artist resolved, ordered by start time.",
    responses(
        (status = 200, description = "Shows", body = Vec<ShowDto>),
    )
)]
pub async fn list_shows(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DirectoryError> {
    let shows = state.show_service.list().await?;
    let data: Vec<ShowDto> = shows.into_iter().map(Into::into).collect();
    Ok(Json(data))
}

/// `GET /shows/create` — Describe the show booking form.
#[utoipa::path(
    get,
    path = "/shows/create",
    tag = "Shows",
    summary = "Show booking form",
    description = "Returns the fields a POST to the same path accepts.",
    responses(
        (status = 200, description = "Form descriptor", body = FormDescriptor),
    )
)]
pub async fn show_create_form() -> impl IntoResponse {
    Json(FormDescriptor {
        fields: vec![
            FormField::required("artist_id"),
            FormField::required("venue_id"),
            FormField::required("start_time"),
        ],
    })
}

/// `POST /shows/create` — Book a show.
///
/// # Errors
///
/// Returns [`DirectoryError::Validation`] when the timestamp does not
/// parse or a referenced entity does not exist; nothing is inserted.
#[utoipa::path(
    post,
    path = "/shows/create",
    tag = "Shows",
    summary = "Create a show",
    description = "Books a show linking an existing artist to an existing venue at the given start time.",
    request_body(content = ShowForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Show created", body = ShowCreatedResponse),
        (status = 400, description = "Unresolvable reference or bad timestamp", body = ErrorResponse),
    )
)]
pub async fn create_show(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let show = state
        .show_service
        .create(
            VenueId::new(form.venue_id),
            ArtistId::new(form.artist_id),
            &form.start_time,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ShowCreatedResponse { id: show.id })))
}

/// Show routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(show_create_form).post(create_show))
}
