//! Entities module - Entità del dominio applicativo
//!
//! `Author` e `User` sono persistite nel database (una tabella ciascuna),
//! `Student` è un semplice valore immutabile.

pub mod author;
pub mod student;
pub mod user;

// Re-exports per facilitare l'import
pub use author::Author;
pub use student::Student;
pub use user::User;
