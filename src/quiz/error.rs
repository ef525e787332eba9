//! QuestionReadError - errore di lettura/parsing del file quiz

use std::error::Error as StdError;
use thiserror::Error;

type Cause = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Error)]
#[error("{message}")]
pub struct QuestionReadError {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl QuestionReadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}
