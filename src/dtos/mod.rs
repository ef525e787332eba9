//! DTOs module - Data Transfer Objects
//!
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod author;
pub mod query;
pub mod student;
pub mod user;

// Re-exports per facilitare l'import
pub use author::{AuthorDTO, CreateAuthorDTO, UpdateAuthorDTO};
pub use query::StudentQuery;
pub use student::StudentDTO;
pub use user::{CreateUserDTO, LoginDTO, TokenDTO, UserDTO};
