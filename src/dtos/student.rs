//! Student DTOs

use crate::entities::Student;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct StudentDTO {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

impl From<Student> for StudentDTO {
    fn from(value: Student) -> Self {
        let full_name = value.full_name();
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            full_name,
        }
    }
}
