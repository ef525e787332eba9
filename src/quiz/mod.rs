//! Quiz module - configurazione della sorgente delle domande e relativo reader

pub mod error;
pub mod reader;
pub mod source;

pub use error::QuestionReadError;
pub use reader::{Answer, Question, QuestionReader, TaggedFileQuestionReader};
pub use source::QuizSourceConfig;
