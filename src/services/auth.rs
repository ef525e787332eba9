//! Auth services - Gestione autenticazione e registrazione utenti

use crate::core::{AppError, AppState, encode_jwt};
use crate::dtos::{CreateUserDTO, LoginDTO, TokenDTO, UserDTO};
use crate::entities::User;
use crate::repositories::Create;
use axum::{
    extract::{Json, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>, // JSON body
) -> Result<impl IntoResponse, AppError> {
    // 1. Cercare l'utente tramite username, UNAUTHORIZED se non esiste
    // 2. Verificare la password contro l'hash bcrypt
    // 3. Generare il token e restituirlo sia nell'header Authorization sia nel body

    let user = match state.user.find_by_username(&body.username).await? {
        Some(user) => user,
        None => {
            warn!("Login attempt for unknown user");
            return Err(AppError::unauthorized("Invalid username or password"));
        }
    };

    if !user.verify_password(&body.password) {
        warn!("Wrong password");
        return Err(AppError::unauthorized("Invalid username or password"));
    }

    let token = encode_jwt(&user.username, user.user_id, &state.jwt_secret)?;

    let mut headers = HeaderMap::new();
    let bearer = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
        AppError::internal_server_error("Error in encoding jwt token")
    })?;
    headers.insert(header::AUTHORIZATION, bearer);

    info!("User logged in");
    Ok((
        StatusCode::OK,
        headers,
        Json(TokenDTO {
            token,
            token_type: "Bearer".to_string(),
        }),
    ))
}

#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUserDTO>, // JSON body
) -> Result<(StatusCode, Json<UserDTO>), AppError> {
    body.validate()?;

    if state.user.find_by_username(&body.username).await?.is_some() {
        warn!("Username already taken");
        return Err(AppError::conflict("Username already exists"));
    }

    let password_hash = User::hash_password(&body.password)
        .map_err(|_| AppError::internal_server_error("Failed to hash password"))?;

    let new_user = CreateUserDTO {
        username: body.username,
        password: password_hash,
    };

    let created_user = state.user.create(&new_user).await?;
    info!("User registered with id {}", created_user.user_id);

    Ok((StatusCode::CREATED, Json(UserDTO::from(created_user))))
}
