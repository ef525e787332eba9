//! Author services - CRUD sugli autori (richiede autenticazione)

use crate::core::{AppError, AppState};
use crate::dtos::{AuthorDTO, CreateAuthorDTO, UpdateAuthorDTO};
use crate::entities::User;
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_authors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AuthorDTO>>, AppError> {
    let authors = state.author.list_all().await?;
    debug!("Found {} authors", authors.len());
    Ok(Json(authors.into_iter().map(AuthorDTO::from).collect()))
}

#[instrument(skip(state))]
pub async fn list_distinguished_authors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AuthorDTO>>, AppError> {
    let authors = state.author.find_distinguished().await?;
    Ok(Json(authors.into_iter().map(AuthorDTO::from).collect()))
}

#[instrument(skip(state), fields(author_id = %author_id))]
pub async fn get_author_by_id(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<i64>,
) -> Result<Json<AuthorDTO>, AppError> {
    match state.author.read(&author_id).await? {
        Some(author) => Ok(Json(AuthorDTO::from(author))),
        None => {
            warn!("Author not found");
            Err(AppError::not_found("Author not found"))
        }
    }
}

#[debug_handler]
#[instrument(skip(state, current_user, body), fields(user = %current_user.username))]
pub async fn create_author(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>, // ottenuto dall'autenticazione tramite token jwt
    Json(body): Json<CreateAuthorDTO>,
) -> Result<(StatusCode, Json<AuthorDTO>), AppError> {
    body.validate()?;
    let author = state.author.create(&body).await?;
    info!("Author {} created", author.author_id);
    Ok((StatusCode::CREATED, Json(AuthorDTO::from(author))))
}

#[debug_handler]
#[instrument(skip(state, body), fields(author_id = %author_id))]
pub async fn update_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<i64>,
    Json(body): Json<UpdateAuthorDTO>,
) -> Result<Json<AuthorDTO>, AppError> {
    body.validate()?;
    let author = state.author.update(&author_id, &body).await?;
    Ok(Json(AuthorDTO::from(author)))
}

#[instrument(skip(state), fields(author_id = %author_id))]
pub async fn delete_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.author.delete(&author_id).await?;
    info!("Author deleted");
    Ok(StatusCode::NO_CONTENT)
}
