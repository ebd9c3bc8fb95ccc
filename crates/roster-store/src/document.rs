use roster_model::{FieldValue, Student};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A schemaless document, keyed by field name in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::default().append(key, value)
    }

    /// Set a field, replacing any previous value for the same key.
    #[must_use]
    pub fn append(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The `id` field, when it is a string.
    pub fn id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn from_student(student: &Student) -> Self {
        student
            .fields()
            .into_iter()
            .fold(Self::default(), |doc, (name, value)| match value {
                FieldValue::Text(text) => doc.append(name, text),
                FieldValue::Integer(number) => doc.append(name, number),
            })
    }
}

/// Delete key: documents are addressed by student id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentKey {
    pub id: String,
}

impl DocumentKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl From<&Student> for DocumentKey {
    fn from(student: &Student) -> Self {
        Self::new(student.id.clone())
    }
}
