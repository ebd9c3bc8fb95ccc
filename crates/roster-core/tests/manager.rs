//! Integration tests for RecordManager.

use roster_core::RecordManager;
use roster_model::{Student, StudentForm};
use roster_store::{DocumentKey, InMemoryCollection, RecordingSink, SinkEvent};

fn student(id: &str, name: &str) -> Student {
    Student::new(id, name, 19, "Engineering")
}

#[test]
fn view_all_returns_insertion_order() {
    let mut manager = RecordManager::new(RecordingSink::new());
    manager.add(student("S3", "Cleo"));
    manager.add(student("S1", "Ada"));
    manager.add(student("S2", "Bob"));

    let ids: Vec<String> = manager.all_students().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, ["S3", "S1", "S2"]);
}

#[test]
fn processing_is_fifo_then_empty() {
    let mut manager = RecordManager::new(RecordingSink::new());
    let added = [student("S1", "Ada"), student("S2", "Bob"), student("S3", "Cleo")];
    for s in &added {
        manager.add(s.clone());
    }
    for expected in &added {
        assert_eq!(manager.process_next_admission().as_ref(), Some(expected));
    }
    assert_eq!(manager.process_next_admission(), None);
}

#[test]
fn undo_after_add_removes_and_returns_student() {
    let mut manager = RecordManager::new(RecordingSink::new());
    let ada = student("S1", "Ada");
    manager.add(ada.clone());

    assert_eq!(manager.undo_last_add(), Some(ada.clone()));
    assert!(!manager.all_students().contains(&ada));
    assert_eq!(manager.undo_last_add(), None);
}

#[test]
fn undo_does_not_touch_admission_queue() {
    let mut manager = RecordManager::new(RecordingSink::new());
    let a = student("A", "Ann");
    let b = student("B", "Ben");
    manager.add(a.clone());
    manager.add(b.clone());

    assert_eq!(manager.undo_last_add(), Some(b.clone()));
    assert_eq!(manager.all_students(), vec![a.clone()]);
    assert_eq!(manager.process_next_admission(), Some(a));
    // B was undone but its admission is still queued.
    assert_eq!(manager.process_next_admission(), Some(b));
}

#[test]
fn undo_of_duplicate_removes_first_structural_match() {
    let mut manager = RecordManager::new(RecordingSink::new());
    let a = student("A", "Ann");
    let b = student("B", "Ben");
    manager.add(a.clone());
    manager.add(b.clone());
    manager.add(a.clone());

    assert_eq!(manager.undo_last_add(), Some(a.clone()));
    // The earlier equal entry goes; the roster still reads as B then A.
    assert_eq!(manager.all_students(), vec![b.clone(), a.clone()]);

    assert_eq!(manager.undo_last_add(), Some(b));
    assert_eq!(manager.undo_last_add(), Some(a));
    assert!(manager.is_empty());
    assert_eq!(manager.undo_last_add(), None);
}

#[test]
fn snapshot_is_detached_from_manager() {
    let mut manager = RecordManager::new(RecordingSink::new());
    manager.add(student("S1", "Ada"));
    let mut snapshot = manager.all_students();
    snapshot.clear();
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.iter().count(), 1);
}

#[test]
fn sink_sees_one_create_per_add_and_one_delete_per_undo() {
    let mut manager = RecordManager::new(RecordingSink::new());
    manager.add(student("S1", "Ada"));
    manager.add(student("S2", "Bob"));
    manager.undo_last_add();
    manager.undo_last_add();
    manager.undo_last_add();

    let sink = manager.sink();
    let created: Vec<_> = sink.created().filter_map(|doc| doc.id()).collect();
    assert_eq!(created, ["S1", "S2"]);
    let deleted: Vec<_> = sink.deleted().cloned().collect();
    assert_eq!(deleted, [DocumentKey::new("S2"), DocumentKey::new("S1")]);
    assert!(matches!(sink.events().last(), Some(SinkEvent::Deleted(_))));
}

#[test]
fn add_form_parses_before_admitting() {
    let mut manager = RecordManager::new(RecordingSink::new());
    let stored = manager
        .add_form(&StudentForm::new("S1", "Ada", "21", "Maths"))
        .expect("valid form")
        .clone();
    assert_eq!(stored.age, 21);
    assert!(
        manager
            .add_form(&StudentForm::new("S2", "Bob", "x", "Maths"))
            .is_err()
    );
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.sink().events().len(), 1);
}

#[test]
fn in_memory_collection_tracks_live_documents() {
    let mut manager = RecordManager::new(InMemoryCollection::new());
    manager.add(student("S1", "Ada"));
    manager.add(student("S2", "Bob"));
    manager.undo_last_add();

    let collection = manager.into_sink();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.documents()[0].id(), Some("S1"));
}
