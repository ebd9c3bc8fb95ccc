use serde::{Deserialize, Serialize};

use crate::{ModelError, Result, Student};

/// Unparsed student input, exactly as typed by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentForm {
    pub id: String,
    pub name: String,
    pub age: String,
    pub department: String,
}

impl StudentForm {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: age.into(),
            department: department.into(),
        }
    }

    /// Build a form from exactly four positional fields.
    pub fn from_fields<'a, I>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter();
        let mut next = |name: &'static str| {
            fields
                .next()
                .map(str::to_string)
                .ok_or(ModelError::MissingField(name))
        };
        let form = Self {
            id: next("id")?,
            name: next("name")?,
            age: next("age")?,
            department: next("department")?,
        };
        match fields.next() {
            Some(extra) => Err(ModelError::UnexpectedField(extra.to_string())),
            None => Ok(form),
        }
    }

    /// Parse the form into a [`Student`].
    ///
    /// Only the age is checked. It must be a signed 32-bit integer with no
    /// surrounding whitespace.
    pub fn parse(&self) -> Result<Student> {
        Student::try_from(self.clone())
    }
}

impl TryFrom<StudentForm> for Student {
    type Error = ModelError;

    fn try_from(form: StudentForm) -> Result<Self> {
        let age = form
            .age
            .parse::<i32>()
            .map_err(|source| ModelError::InvalidAge {
                value: form.age.clone(),
                source,
            })?;
        Ok(Student {
            id: form.id,
            name: form.name,
            age,
            department: form.department,
        })
    }
}
