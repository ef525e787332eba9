//! quizboot - libreria del server, espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod quiz;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config, auth, config};
pub use services::root;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::*;

    Router::new()
        .route("/", get(root))
        .route("/hello", get(hello))
        .route("/beans", get(list_beans))
        .route("/students/full-name", get(student_full_name))
        .nest("/auth", configure_auth_routes())
        .nest("/quiz", configure_quiz_routes())
        .nest("/authors", configure_author_routes(state.clone()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes di autenticazione (login, register)
fn configure_auth_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/login", post(login_user))
        .route("/register", post(register_user))
}

fn configure_quiz_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/config", get(get_quiz_config))
        .route("/questions", get(list_questions))
}

/// Configura le routes per la gestione degli autori
fn configure_author_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", get(list_authors).post(create_author))
        .route("/distinguished", get(list_distinguished_authors))
        .route(
            "/{author_id}",
            get(get_author_by_id).patch(update_author).delete(delete_author),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
