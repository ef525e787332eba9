//! Student entity - coppia nome/cognome con nome completo derivato

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
}

impl Student {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let student = Student::new("Ada", "Lovelace");
        assert_eq!(student.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_full_name_keeps_empty_parts() {
        let student = Student::new("Ada", "");
        assert_eq!(student.full_name(), "Ada ");
    }
}
