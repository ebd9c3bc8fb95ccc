//! Tests for the persistence sinks.

use roster_model::Student;
use roster_store::{
    Document, DocumentKey, InMemoryCollection, NoopSink, PersistenceSink, RecordingSink,
    SinkEvent, StoreError,
};

fn ada() -> Student {
    Student::new("S1", "Ada", 20, "Maths")
}

#[test]
fn noop_sink_accepts_everything() {
    let mut sink = NoopSink;
    assert!(sink.create(&Document::from_student(&ada())).is_ok());
    assert!(sink.delete(&DocumentKey::new("S1")).is_ok());
}

#[test]
fn recording_sink_keeps_event_order() {
    let mut sink = RecordingSink::new();
    let doc = Document::from_student(&ada());
    sink.create(&doc).unwrap();
    sink.delete(&DocumentKey::from(&ada())).unwrap();

    assert_eq!(
        sink.events(),
        &[
            SinkEvent::Created(doc),
            SinkEvent::Deleted(DocumentKey::new("S1"))
        ]
    );
    assert_eq!(sink.created().count(), 1);
    assert_eq!(sink.deleted().count(), 1);
}

#[test]
fn failing_sink_still_records() {
    let mut sink = RecordingSink::failing();
    let err = sink.create(&Document::from_student(&ada())).unwrap_err();
    assert!(matches!(err, StoreError::Unavailable { .. }));
    assert_eq!(sink.events().len(), 1);

    sink.set_failing(false);
    assert!(sink.delete(&DocumentKey::new("S1")).is_ok());
}

#[test]
fn boxed_sinks_forward_calls() {
    let mut sink: Box<dyn PersistenceSink> = Box::new(InMemoryCollection::new());
    sink.create(&Document::from_student(&ada())).unwrap();
    sink.delete(&DocumentKey::new("S1")).unwrap();
}

#[test]
fn collection_mirrors_create_and_delete() {
    let mut collection = InMemoryCollection::new();
    collection.create(&Document::from_student(&ada())).unwrap();
    collection
        .create(&Document::from_student(&Student::new("S2", "Bob", 22, "Physics")))
        .unwrap();
    assert_eq!(collection.len(), 2);

    collection.delete(&DocumentKey::new("S2")).unwrap();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.find("S1").count(), 1);
}
