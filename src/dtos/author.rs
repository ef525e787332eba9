//! Author DTOs - Data Transfer Objects per autori

use crate::entities::Author;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthorDTO {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub birth_year: Option<i32>,
    pub distinguished: bool,
}

impl From<Author> for AuthorDTO {
    fn from(value: Author) -> Self {
        Self {
            id: value.author_id,
            first_name: value.first_name,
            last_name: value.last_name,
            birth_date: value.birth_date,
            birth_year: value.birth_year,
            distinguished: value.distinguished,
        }
    }
}

/// DTO per creare un nuovo autore (senza author_id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateAuthorDTO {
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: String,

    #[serde(default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(default)]
    pub birth_year: Option<i32>,

    #[serde(default)]
    pub distinguished: bool,
}

/// DTO per aggiornare un autore (solo i campi `Some` vengono modificati)
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateAuthorDTO {
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: Option<String>,

    pub birth_date: Option<NaiveDate>,
    pub birth_year: Option<i32>,
    pub distinguished: Option<bool>,
}
