//! Student services

use crate::dtos::{StudentDTO, StudentQuery};
use crate::entities::Student;
use axum::extract::{Json, Query};

pub async fn student_full_name(Query(params): Query<StudentQuery>) -> Json<StudentDTO> {
    Json(StudentDTO::from(Student::new(params.first_name, params.last_name)))
}
