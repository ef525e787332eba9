//! User DTOs - Data Transfer Objects per utenti

use crate::entities::User;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9_.-]+$").unwrap();
}

// struct per gestire io col client
#[derive(Serialize, Deserialize, Debug)]
pub struct UserDTO {
    pub id: Option<i64>,
    pub username: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            id: Some(value.user_id),
            username: Some(value.username),
            password: None, // mai esposta al client!!!
        }
    }
}

/// DTO per creare un nuovo utente (senza user_id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateUserDTO {
    #[validate(
        length(min = 3, max = 32, message = "Username must be between 3 and 32 characters"),
        regex(path = *USERNAME_RE, message = "Username may only contain letters, digits, '.', '_' and '-'")
    )]
    pub username: String,

    #[validate(length(min = 8, max = 128, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// DTO per il login (solo username e password)
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginDTO {
    pub username: String,
    pub password: String,
}

/// Risposta del login
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenDTO {
    pub token: String,
    pub token_type: String,
}
