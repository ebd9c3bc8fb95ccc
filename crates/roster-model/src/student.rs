use std::fmt;

use serde::{Deserialize, Serialize};

/// A student record.
///
/// Equality is structural over all four fields. The `id` is a logical key
/// only; nothing enforces its uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub department: String,
}

/// A single field value as handed to the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i32),
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: i32,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            department: department.into(),
        }
    }

    /// Field names and values in declaration order.
    pub fn fields(&self) -> [(&'static str, FieldValue<'_>); 4] {
        [
            ("id", FieldValue::Text(&self.id)),
            ("name", FieldValue::Text(&self.name)),
            ("age", FieldValue::Integer(self.age)),
            ("department", FieldValue::Text(&self.department)),
        ]
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.id, self.name, self.age, self.department
        )
    }
}
