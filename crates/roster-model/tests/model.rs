//! Tests for roster-model types.

use roster_model::{ModelError, Student, StudentForm};

#[test]
fn student_serializes() {
    let student = Student::new("S1", "Ada Lovelace", 20, "Mathematics");
    let json = serde_json::to_string(&student).expect("serialize student");
    assert_eq!(
        json,
        r#"{"id":"S1","name":"Ada Lovelace","age":20,"department":"Mathematics"}"#
    );
    let round: Student = serde_json::from_str(&json).expect("deserialize student");
    assert_eq!(round, student);
}

#[test]
fn form_deserializes_age_as_text() {
    let form: StudentForm =
        serde_json::from_str(r#"{"id":"S9","name":"Eve","age":"abc","department":"CS"}"#)
            .expect("deserialize form");
    assert!(matches!(form.parse(), Err(ModelError::InvalidAge { .. })));
}

#[test]
fn invalid_age_message_names_value() {
    let err = StudentForm::new("S1", "Ada", "x1", "Maths").parse().unwrap_err();
    assert!(err.to_string().starts_with("invalid age 'x1'"));
}
