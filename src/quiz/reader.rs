//! QuestionReader - lettura del file quiz con righe marcate da tag
//!
//! Formato:
//! ```text
//! intestazione ignorata (skip_lines)
//! Q: Qual e' la capitale d'Italia?
//! A: Roma | Milano | Torino
//! ```
//! Le righe non marcate proseguono il testo della domanda corrente.

use super::error::QuestionReadError;
use super::source::QuizSourceConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub answers: Vec<Answer>,
}

/// Sorgente di domande
pub trait QuestionReader {
    fn read_all(&self) -> Result<Vec<Question>, QuestionReadError>;
}

#[derive(Clone)]
pub struct TaggedFileQuestionReader {
    config: Arc<QuizSourceConfig>,
}

impl TaggedFileQuestionReader {
    pub fn new(config: Arc<QuizSourceConfig>) -> Self {
        Self { config }
    }

    /// Controlla che la configurazione sia utilizzabile.
    /// Viene chiamata al primo uso e non alla costruzione.
    fn check_config(&self) -> Result<usize, QuestionReadError> {
        let config = &self.config;
        if config.test_file_name().is_empty() {
            return Err(QuestionReadError::new("Quiz file name is empty"));
        }
        if config.question_tag().is_empty() {
            return Err(QuestionReadError::new("Question tag is empty"));
        }
        if config.answer_tag().is_empty() {
            return Err(QuestionReadError::new("Answer tag is empty"));
        }
        if config.answer_splitter().is_empty() {
            return Err(QuestionReadError::new("Answer splitter is empty"));
        }
        usize::try_from(config.skip_lines()).map_err(|_| {
            QuestionReadError::new(format!(
                "Skip lines must not be negative, got {}",
                config.skip_lines()
            ))
        })
    }

    /// Parsing di un contenuto gia' in memoria
    #[instrument(skip(self, content))]
    pub fn parse(&self, content: &str) -> Result<Vec<Question>, QuestionReadError> {
        let skip = self.check_config()?;
        let question_tag = self.config.question_tag();
        let answer_tag = self.config.answer_tag();
        let splitter = self.config.answer_splitter();

        let mut questions: Vec<Question> = Vec::new();

        for (idx, raw_line) in content.lines().enumerate().skip(skip) {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            // il tag piu' lungo vince quando uno e' prefisso dell'altro
            let (as_question, as_answer) =
                match (line.strip_prefix(question_tag), line.strip_prefix(answer_tag)) {
                    (Some(_), Some(rest)) if answer_tag.len() > question_tag.len() => {
                        (None, Some(rest))
                    }
                    (Some(rest), Some(_)) => (Some(rest), None),
                    other => other,
                };

            if let Some(rest) = as_question {
                questions.push(Question {
                    text: rest.trim().to_string(),
                    answers: Vec::new(),
                });
            } else if let Some(rest) = as_answer {
                let current = questions.last_mut().ok_or_else(|| {
                    warn!("Answer line {} found before any question", line_no);
                    QuestionReadError::new(format!(
                        "Line {}: answer found before any question",
                        line_no
                    ))
                })?;
                current.answers.extend(
                    rest.split(splitter)
                        .map(str::trim)
                        .filter(|piece| !piece.is_empty())
                        .map(|piece| Answer {
                            text: piece.to_string(),
                        }),
                );
            } else {
                let current = questions.last_mut().ok_or_else(|| {
                    warn!("Untagged line {} found before any question", line_no);
                    QuestionReadError::new(format!(
                        "Line {}: text found before any question",
                        line_no
                    ))
                })?;
                if current.text.is_empty() {
                    current.text.push_str(line);
                } else {
                    current.text.push(' ');
                    current.text.push_str(line);
                }
            }
        }

        debug!("Parsed {} questions", questions.len());
        Ok(questions)
    }
}

impl QuestionReader for TaggedFileQuestionReader {
    #[instrument(skip(self), fields(file = %self.config.test_file_name()))]
    fn read_all(&self) -> Result<Vec<Question>, QuestionReadError> {
        self.check_config()?;
        let content = fs::read_to_string(self.config.test_file_name()).map_err(|e| {
            warn!("Unable to read quiz file: {}", e);
            QuestionReadError::with_cause(
                format!("Unable to read quiz file '{}'", self.config.test_file_name()),
                e,
            )
        })?;

        let questions = self.parse(&content)?;
        info!("Loaded {} questions", questions.len());
        Ok(questions)
    }
}
