//! Quiz services - configurazione attiva e domande lette dal file

use crate::core::{AppError, AppState};
use crate::quiz::{Question, QuestionReader, QuizSourceConfig};
use axum::extract::{Json, State};
use std::sync::Arc;
use tracing::{error, info, instrument};

pub async fn get_quiz_config(State(state): State<Arc<AppState>>) -> Json<QuizSourceConfig> {
    Json(state.quiz.as_ref().clone())
}

/// Gli errori di lettura non vengono ritentati: diventano un 500 con dettagli
#[instrument(skip(state))]
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Question>>, AppError> {
    // lettura del file bloccante, fuori dai worker del runtime
    let reader = state.questions.clone();
    let questions = tokio::task::spawn_blocking(move || reader.read_all())
        .await
        .map_err(|e| {
            error!("Question reader task failed: {}", e);
            AppError::internal_server_error("Unable to read questions")
        })??;
    info!("Serving {} questions", questions.len());
    Ok(Json(questions))
}
