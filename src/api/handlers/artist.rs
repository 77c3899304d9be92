//! Artist handlers: flat listing, search, detail, create, edit, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::Form;

use crate::api::dto::{
    ArtistDetailDto, ArtistForm, ArtistItemDto, ArtistMutationResponse, ArtistRecordDto,
    ArtistSearchResponse, DeleteResponse, FormDescriptor, FormField, SearchForm,
};
use crate::app_state::AppState;
use crate::domain::ArtistId;
use crate::error::{DirectoryError, ErrorResponse};

/// `GET /artists` — Flat artist listing.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure.
#[utoipa::path(
    get,
    path = "/artists",
    tag = "Artists",
    summary = "Artist listing",
    description = "Returns all artists as a flat list ordered by id.",
    responses(
        (status = 200, description = "Artists", body = Vec<ArtistItemDto>),
    )
)]
pub async fn list_artists(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DirectoryError> {
    let artists = state.artist_service.list().await?;
    let data: Vec<ArtistItemDto> = artists.into_iter().map(Into::into).collect();
    Ok(Json(data))
}

/// `POST /artists/search` — Case-insensitive substring search on artist name.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure.
#[utoipa::path(
    post,
    path = "/artists/search",
    tag = "Artists",
    summary = "Search artists",
    description = "Case-insensitive substring match against artist names; the empty term matches every artist.",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Matches with count", body = ArtistSearchResponse),
    )
)]
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let results = state.artist_service.search(&form.search_term).await?;
    Ok(Json(ArtistSearchResponse::new(results)))
}

/// `GET /artists/{id}` — Artist detail with past/upcoming show history.
///
/// # Errors
///
/// Returns [`DirectoryError::ArtistNotFound`] if the artist does not exist.
#[utoipa::path(
    get,
    path = "/artists/{id}",
    tag = "Artists",
    summary = "Artist detail",
    description = "Returns the artist record with decoded genres and its shows partitioned into past and upcoming.",
    params(
        ("id" = i64, Path, description = "Artist id"),
    ),
    responses(
        (status = 200, description = "Artist detail", body = ArtistDetailDto),
        (status = 404, description = "Artist not found", body = ErrorResponse),
    )
)]
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<ArtistId>,
) -> Result<impl IntoResponse, DirectoryError> {
    let detail = state.artist_service.detail(id).await?;
    Ok(Json(ArtistDetailDto::from(detail)))
}

/// `GET /artists/create` — Describe the artist creation form.
#[utoipa::path(
    get,
    path = "/artists/create",
    tag = "Artists",
    summary = "Artist creation form",
    description = "Returns the fields a POST to the same path accepts.",
    responses(
        (status = 200, description = "Form descriptor", body = FormDescriptor),
    )
)]
pub async fn artist_create_form() -> impl IntoResponse {
    Json(FormDescriptor {
        fields: vec![
            FormField::required("name"),
            FormField::required("city"),
            FormField::required("state"),
            FormField::required("phone"),
            FormField::repeated("genres"),
            FormField::optional("facebook_link"),
        ],
    })
}

/// `POST /artists/create` — Create an artist.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure; nothing is written.
#[utoipa::path(
    post,
    path = "/artists/create",
    tag = "Artists",
    summary = "Create an artist",
    description = "Creates an artist from the form fields; repeated identical submissions create distinct records.",
    request_body(content = ArtistForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Artist created", body = ArtistMutationResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_artist(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let name = form.name.clone();
    let id = state.artist_service.create(&form.into_new_artist()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ArtistMutationResponse { id, name }),
    ))
}

/// `GET /artists/{id}/edit` — Current record for edit-form prefill.
///
/// # Errors
///
/// Returns [`DirectoryError::ArtistNotFound`] if the artist does not exist.
#[utoipa::path(
    get,
    path = "/artists/{id}/edit",
    tag = "Artists",
    summary = "Artist edit form",
    description = "Returns the stored record the edit form is prefilled from.",
    params(
        ("id" = i64, Path, description = "Artist id"),
    ),
    responses(
        (status = 200, description = "Current record", body = ArtistRecordDto),
        (status = 404, description = "Artist not found", body = ErrorResponse),
    )
)]
pub async fn artist_edit_form(
    State(state): State<AppState>,
    Path(id): Path<ArtistId>,
) -> Result<impl IntoResponse, DirectoryError> {
    let artist = state.artist_service.record(id).await?;
    Ok(Json(ArtistRecordDto::from(artist)))
}

/// `POST /artists/{id}/edit` — Partial edit of an artist.
///
/// # Errors
///
/// Returns [`DirectoryError::ArtistNotFound`] if the artist does not exist.
#[utoipa::path(
    post,
    path = "/artists/{id}/edit",
    tag = "Artists",
    summary = "Edit an artist",
    description = "Overwrites the editable fields in one transaction; fields outside the edit set keep their stored values.",
    params(
        ("id" = i64, Path, description = "Artist id"),
    ),
    request_body(content = ArtistForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Artist updated", body = ArtistMutationResponse),
        (status = 404, description = "Artist not found", body = ErrorResponse),
    )
)]
pub async fn edit_artist(
    State(state): State<AppState>,
    Path(id): Path<ArtistId>,
    Form(form): Form<ArtistForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let name = form.name.clone();
    state.artist_service.edit(id, &form.into_edit()).await?;
    Ok(Json(ArtistMutationResponse { id, name }))
}

/// `DELETE /artists/{id}` — Delete an artist and its shows.
///
/// Symmetric with venue deletion, including the `{success}` flag.
#[utoipa::path(
    delete,
    path = "/artists/{id}",
    tag = "Artists",
    summary = "Delete an artist",
    description = "Deletes the artist and its dependent shows in one transaction.",
    params(
        ("id" = i64, Path, description = "Artist id"),
    ),
    responses(
        (status = 200, description = "Artist deleted", body = DeleteResponse),
        (status = 404, description = "Artist not found", body = DeleteResponse),
        (status = 500, description = "Storage failure", body = DeleteResponse),
    )
)]
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<ArtistId>,
) -> impl IntoResponse {
    match state.artist_service.delete(id).await {
        Ok(()) => (StatusCode::OK, Json(DeleteResponse { success: true })),
        Err(e) => {
            let status = e.status_code();
            tracing::warn!(artist_id = %id, error = %e, "artist delete failed");
            (status, Json(DeleteResponse { success: false }))
        }
    }
}

/// Artist routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route(
            "/artists/create",
            get(artist_create_form).post(create_artist),
        )
        .route("/artists/{id}", get(get_artist).delete(delete_artist))
        .route(
            "/artists/{id}/edit",
            get(artist_edit_form).post(edit_artist),
        )
}
