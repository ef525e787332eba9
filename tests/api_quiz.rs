//! Integration tests per gli endpoint del quiz
//!
//! - GET /quiz/config
//! - GET /quiz/questions

mod common;

#[cfg(test)]
mod quiz_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use quizboot::quiz::QuizSourceConfig;
    use serde_json::Value;
    use std::io::Write;

    #[tokio::test]
    async fn test_config_is_exposed() {
        let config = QuizSourceConfig::new("quiz.txt", "Q:", "A:", "|", 2);
        let server = create_test_server(create_test_state(config).await);

        let response = server.get("/quiz/config").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["test_file_name"], "quiz.txt");
        assert_eq!(body["question_tag"], "Q:");
        assert_eq!(body["answer_tag"], "A:");
        assert_eq!(body["answer_splitter"], "|");
        assert_eq!(body["skip_lines"], 2);
    }

    #[tokio::test]
    async fn test_questions_are_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "question;answers").unwrap();
        writeln!(file, "Q: Capital of France?").unwrap();
        writeln!(file, "A: Paris | Lyon").unwrap();
        writeln!(file, "Q: 3 * 3?").unwrap();
        writeln!(file, "A: 9").unwrap();

        let config = QuizSourceConfig::annotated()
            .with_test_file_name(file.path().to_string_lossy())
            .with_skip_lines(1);
        let server = create_test_server(create_test_state(config).await);

        let response = server.get("/quiz/questions").await;

        response.assert_status_ok();
        let body: Value = response.json();
        let questions = body.as_array().unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0]["text"], "Capital of France?");
        assert_eq!(questions[0]["answers"][1]["text"], "Lyon");
        assert_eq!(questions[1]["answers"][0]["text"], "9");
    }

    #[tokio::test]
    async fn test_missing_file_is_server_error() {
        let config = QuizSourceConfig::annotated().with_test_file_name("/no/such/quiz.txt");
        let server = create_test_server(create_test_state(config).await);

        let response = server.get("/quiz/questions").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], "Unable to read questions");
        assert!(body["details"].as_str().unwrap().contains("/no/such/quiz.txt"));
    }

    #[tokio::test]
    async fn test_negative_skip_lines_fails_on_use() {
        let config = QuizSourceConfig::annotated().with_skip_lines(-2);
        let server = create_test_server(create_test_state(config).await);

        server
            .get("/quiz/config")
            .await
            .assert_status_ok();
        server
            .get("/quiz/questions")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
