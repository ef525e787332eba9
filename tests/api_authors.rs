//! Integration tests per gli endpoints degli autori
//!
//! - GET/POST /authors
//! - GET/PATCH/DELETE /authors/{author_id}
//! - GET /authors/distinguished

mod common;

#[cfg(test)]
mod author_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    async fn server_with_token() -> (TestServer, String) {
        let server = default_server().await;
        let token = register_and_login(&server, "librarian", "Password123").await;
        (server, token)
    }

    async fn create(server: &TestServer, token: &str, body: Value) -> Value {
        let response = server
            .post("/authors")
            .authorization_bearer(token)
            .json(&body)
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json()
    }

    #[tokio::test]
    async fn test_create_and_get_author() {
        let (server, token) = server_with_token().await;

        let created = create(
            &server,
            &token,
            json!({
                "first_name": "Italo",
                "last_name": "Calvino",
                "birth_date": "1923-10-15",
                "birth_year": 1923,
                "distinguished": true
            }),
        )
        .await;

        let id = created["id"].as_i64().unwrap();
        let response = server
            .get(&format!("/authors/{}", id))
            .authorization_bearer(&token)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["last_name"], "Calvino");
        assert_eq!(body["birth_date"], "1923-10-15");
        assert_eq!(body["distinguished"], true);
    }

    #[tokio::test]
    async fn test_get_missing_author_is_404() {
        let (server, token) = server_with_token().await;

        server
            .get("/authors/12345")
            .authorization_bearer(&token)
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_create_validation_error() {
        let (server, token) = server_with_token().await;

        server
            .post("/authors")
            .authorization_bearer(&token)
            .json(&json!({ "first_name": "", "last_name": "Nobody" }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_list_and_distinguished() {
        let (server, token) = server_with_token().await;
        create(&server, &token, json!({ "first_name": "Elsa", "last_name": "Morante", "distinguished": true })).await;
        create(&server, &token, json!({ "first_name": "Mario", "last_name": "Rossi" })).await;

        let all: Value = server.get("/authors").authorization_bearer(&token).await.json();
        assert_eq!(all.as_array().unwrap().len(), 2);

        let distinguished: Value = server
            .get("/authors/distinguished")
            .authorization_bearer(&token)
            .await
            .json();
        let distinguished = distinguished.as_array().unwrap();
        assert_eq!(distinguished.len(), 1);
        assert_eq!(distinguished[0]["last_name"], "Morante");
    }

    #[tokio::test]
    async fn test_patch_author() {
        let (server, token) = server_with_token().await;
        let created = create(&server, &token, json!({ "first_name": "Primo", "last_name": "Levi" })).await;
        let id = created["id"].as_i64().unwrap();

        let response = server
            .patch(&format!("/authors/{}", id))
            .authorization_bearer(&token)
            .json(&json!({ "birth_year": 1919 }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["birth_year"], 1919);
        assert_eq!(body["first_name"], "Primo");
    }

    #[tokio::test]
    async fn test_patch_missing_author_is_404() {
        let (server, token) = server_with_token().await;

        server
            .patch("/authors/999")
            .authorization_bearer(&token)
            .json(&json!({ "distinguished": true }))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_delete_author() {
        let (server, token) = server_with_token().await;
        let created = create(&server, &token, json!({ "first_name": "Grazia", "last_name": "Deledda" })).await;
        let id = created["id"].as_i64().unwrap();

        server
            .delete(&format!("/authors/{}", id))
            .authorization_bearer(&token)
            .await
            .assert_status(StatusCode::NO_CONTENT);

        server
            .delete(&format!("/authors/{}", id))
            .authorization_bearer(&token)
            .await
            .assert_status_not_found();
    }
}
