//! Query DTOs - Data Transfer Objects per query string

use serde::{Deserialize, Serialize};

/// DTO per query parameters di /students/full-name
#[derive(Serialize, Deserialize, Debug)]
pub struct StudentQuery {
    pub first_name: String,
    pub last_name: String,
}
