#![allow(dead_code)]

use axum_test::TestServer;
use quizboot::core::AppState;
use quizboot::core::state::connect_pool;
use quizboot::quiz::QuizSourceConfig;
use serde_json::json;
use std::sync::Arc;

pub const JWT_SECRET: &str = "segreto-di-test-da-non-usare-altrove";

/// Crea un AppState per i test su un database sqlite in memoria
///
/// # Arguments
/// * `quiz` - Configurazione della sorgente quiz da usare
pub async fn create_test_state(quiz: QuizSourceConfig) -> Arc<AppState> {
    let pool = connect_pool("sqlite::memory:", 1)
        .await
        .expect("Failed to open test database");
    Arc::new(AppState::new(pool, JWT_SECRET.to_string(), quiz))
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = quizboot::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Server con configurazione quiz di default
pub async fn default_server() -> TestServer {
    create_test_server(create_test_state(QuizSourceConfig::annotated()).await)
}

/// Registra un utente e ne restituisce il token JWT
pub async fn register_and_login(server: &TestServer, username: &str, password: &str) -> String {
    let credentials = json!({ "username": username, "password": password });

    server
        .post("/auth/register")
        .json(&credentials)
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server.post("/auth/login").json(&credentials).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    body["token"]
        .as_str()
        .expect("login should return a token")
        .to_string()
}
