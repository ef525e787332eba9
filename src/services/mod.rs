//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod auth;
pub mod author;
pub mod quiz;
pub mod student;

// Re-exports per facilitare l'import
pub use auth::{login_user, register_user};
pub use author::{
    create_author, delete_author, get_author_by_id, list_authors, list_distinguished_authors,
    update_author,
};
pub use quiz::{get_quiz_config, list_questions};
pub use student::student_full_name;

use crate::AppState;
use crate::core::BeanInfo;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Testo restituito da `GET /hello`
pub const HELLO_TEXT: &str = "Hello, Spring!";

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}

pub async fn hello() -> &'static str {
    HELLO_TEXT
}

/// Elenco dei componenti costruiti dal composition root
pub async fn list_beans(State(state): State<Arc<AppState>>) -> Json<Vec<BeanInfo>> {
    Json(state.beans.beans().to_vec())
}
