//! QuizSourceConfig - descrive come leggere un file di domande in formato testo
//!
//! Una sola struct sostituisce le due varianti "annotation" e "XML": i valori
//! arrivano o dai default incorporati ([`QuizSourceConfig::annotated`]) o dalla
//! configurazione esterna ([`QuizSourceConfig::from_env`]).

use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_TEST_FILE_NAME: &str = "questions.txt";
pub const DEFAULT_QUESTION_TAG: &str = "Q:";
pub const DEFAULT_ANSWER_TAG: &str = "A:";
pub const DEFAULT_ANSWER_SPLITTER: &str = "|";
pub const DEFAULT_SKIP_LINES: i32 = 0;

/// Configurazione immutabile del file quiz.
///
/// Costruirla non fallisce mai e non valida nulla: un valore vuoto o
/// `skip_lines` negativo vengono rifiutati solo dal reader al primo utilizzo.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizSourceConfig {
    test_file_name: String,
    question_tag: String,
    answer_tag: String,
    answer_splitter: String,
    skip_lines: i32,
}

impl QuizSourceConfig {
    pub fn new(
        test_file_name: impl Into<String>,
        question_tag: impl Into<String>,
        answer_tag: impl Into<String>,
        answer_splitter: impl Into<String>,
        skip_lines: i32,
    ) -> Self {
        Self {
            test_file_name: test_file_name.into(),
            question_tag: question_tag.into(),
            answer_tag: answer_tag.into(),
            answer_splitter: answer_splitter.into(),
            skip_lines,
        }
    }

    /// Valori incorporati nel codice
    pub fn annotated() -> Self {
        Self::new(
            DEFAULT_TEST_FILE_NAME,
            DEFAULT_QUESTION_TAG,
            DEFAULT_ANSWER_TAG,
            DEFAULT_ANSWER_SPLITTER,
            DEFAULT_SKIP_LINES,
        )
    }

    /// Carica i valori dalle variabili d'ambiente `QUIZ_*`.
    /// Le variabili mancanti ricadono sui valori di [`QuizSourceConfig::annotated`].
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Come `from_env` ma con una sorgente di valori arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::annotated();

        let skip_lines = match lookup("QUIZ_SKIP_LINES") {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|_| format!("Invalid QUIZ_SKIP_LINES: '{}' is not an integer", raw))?,
            None => defaults.skip_lines,
        };

        Ok(Self {
            test_file_name: lookup("QUIZ_FILE_NAME").unwrap_or(defaults.test_file_name),
            question_tag: lookup("QUIZ_QUESTION_TAG").unwrap_or(defaults.question_tag),
            answer_tag: lookup("QUIZ_ANSWER_TAG").unwrap_or(defaults.answer_tag),
            answer_splitter: lookup("QUIZ_ANSWER_SPLITTER").unwrap_or(defaults.answer_splitter),
            skip_lines,
        })
    }

    pub fn with_test_file_name(mut self, test_file_name: impl Into<String>) -> Self {
        self.test_file_name = test_file_name.into();
        self
    }

    pub fn with_question_tag(mut self, question_tag: impl Into<String>) -> Self {
        self.question_tag = question_tag.into();
        self
    }

    pub fn with_answer_tag(mut self, answer_tag: impl Into<String>) -> Self {
        self.answer_tag = answer_tag.into();
        self
    }

    pub fn with_answer_splitter(mut self, answer_splitter: impl Into<String>) -> Self {
        self.answer_splitter = answer_splitter.into();
        self
    }

    pub fn with_skip_lines(mut self, skip_lines: i32) -> Self {
        self.skip_lines = skip_lines;
        self
    }

    pub fn test_file_name(&self) -> &str {
        &self.test_file_name
    }

    pub fn question_tag(&self) -> &str {
        &self.question_tag
    }

    pub fn answer_tag(&self) -> &str {
        &self.answer_tag
    }

    pub fn answer_splitter(&self) -> &str {
        &self.answer_splitter
    }

    pub fn skip_lines(&self) -> i32 {
        self.skip_lines
    }
}

impl Default for QuizSourceConfig {
    fn default() -> Self {
        Self::annotated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_accessors_return_constructed_values() {
        let config = QuizSourceConfig::new("quiz.txt", "Q:", "A:", "|", 2);

        assert_eq!(config.test_file_name(), "quiz.txt");
        assert_eq!(config.question_tag(), "Q:");
        assert_eq!(config.answer_tag(), "A:");
        assert_eq!(config.answer_splitter(), "|");
        assert_eq!(config.skip_lines(), 2);
    }

    #[test]
    fn test_variants_with_same_values_are_equivalent() {
        let explicit = QuizSourceConfig::new("quiz.txt", "Q:", "A:", "|", 2);
        let external = QuizSourceConfig::from_lookup(lookup_from(&[
            ("QUIZ_FILE_NAME", "quiz.txt"),
            ("QUIZ_QUESTION_TAG", "Q:"),
            ("QUIZ_ANSWER_TAG", "A:"),
            ("QUIZ_ANSWER_SPLITTER", "|"),
            ("QUIZ_SKIP_LINES", "2"),
        ]))
        .unwrap();
        let built = QuizSourceConfig::annotated()
            .with_test_file_name("quiz.txt")
            .with_skip_lines(2);

        assert_eq!(explicit, external);
        assert_eq!(explicit, built);
        assert_eq!(external.answer_splitter(), built.answer_splitter());
    }

    #[test]
    fn test_skip_lines_is_not_validated() {
        for value in [0, 7, -3] {
            let config = QuizSourceConfig::annotated().with_skip_lines(value);
            assert_eq!(config.skip_lines(), value);
        }
    }

    #[test]
    fn test_empty_values_are_accepted() {
        let config = QuizSourceConfig::new("", "", "", "", 0);
        assert_eq!(config.test_file_name(), "");
        assert_eq!(config.question_tag(), "");
    }

    #[test]
    fn test_lookup_falls_back_to_defaults() {
        let config = QuizSourceConfig::from_lookup(lookup_from(&[("QUIZ_ANSWER_TAG", "R:")])).unwrap();

        assert_eq!(config.test_file_name(), DEFAULT_TEST_FILE_NAME);
        assert_eq!(config.question_tag(), DEFAULT_QUESTION_TAG);
        assert_eq!(config.answer_tag(), "R:");
        assert_eq!(config.skip_lines(), DEFAULT_SKIP_LINES);
    }

    #[test]
    fn test_lookup_rejects_non_numeric_skip_lines() {
        let err = QuizSourceConfig::from_lookup(lookup_from(&[("QUIZ_SKIP_LINES", "two")])).unwrap_err();
        assert!(err.contains("QUIZ_SKIP_LINES"));
    }

    #[test]
    fn test_lookup_accepts_negative_skip_lines() {
        let config = QuizSourceConfig::from_lookup(lookup_from(&[("QUIZ_SKIP_LINES", "-1")])).unwrap();
        assert_eq!(config.skip_lines(), -1);
    }
}
