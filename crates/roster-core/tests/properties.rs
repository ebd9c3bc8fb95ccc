//! Property tests for the admission views.

use proptest::prelude::*;
use roster_core::RecordManager;
use roster_model::Student;
use roster_store::RecordingSink;

fn student_strategy() -> impl Strategy<Value = Student> {
    ("[A-Z][0-9]{1,2}", "[a-z]{1,8}", 16i32..40, "[A-Z][a-z]{2,6}")
        .prop_map(|(id, name, age, department)| Student::new(id, name, age, department))
}

#[derive(Debug, Clone)]
enum Op {
    Add(Student),
    Process,
    Undo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => student_strategy().prop_map(Op::Add),
        1 => Just(Op::Process),
        1 => Just(Op::Undo),
    ]
}

proptest! {
    #[test]
    fn listing_matches_insertion_order(students in prop::collection::vec(student_strategy(), 0..32)) {
        let mut manager = RecordManager::new(RecordingSink::new());
        for s in &students {
            manager.add(s.clone());
        }
        prop_assert_eq!(manager.all_students(), students);
    }

    #[test]
    fn processing_drains_in_add_order(students in prop::collection::vec(student_strategy(), 0..32)) {
        let mut manager = RecordManager::new(RecordingSink::new());
        for s in &students {
            manager.add(s.clone());
        }
        let mut processed = Vec::new();
        while let Some(s) = manager.process_next_admission() {
            processed.push(s);
        }
        prop_assert_eq!(processed, students);
        prop_assert_eq!(manager.process_next_admission(), None);
    }

    #[test]
    fn matches_reference_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut manager = RecordManager::new(RecordingSink::new());
        let mut records: Vec<Student> = Vec::new();
        let mut queue: std::collections::VecDeque<Student> = Default::default();
        let mut history: Vec<Student> = Vec::new();
        let mut adds = 0usize;
        let mut undos = 0usize;

        for op in ops {
            match op {
                Op::Add(s) => {
                    manager.add(s.clone());
                    records.push(s.clone());
                    queue.push_back(s.clone());
                    history.push(s);
                    adds += 1;
                }
                Op::Process => {
                    prop_assert_eq!(manager.process_next_admission(), queue.pop_front());
                }
                Op::Undo => {
                    let expected = history.pop();
                    if let Some(s) = &expected {
                        if let Some(pos) = records.iter().position(|r| r == s) {
                            records.remove(pos);
                        }
                        undos += 1;
                    }
                    prop_assert_eq!(manager.undo_last_add(), expected);
                }
            }
            prop_assert_eq!(manager.all_students(), records.clone());
            prop_assert_eq!(manager.pending_admissions(), queue.len());
            prop_assert_eq!(manager.undo_depth(), history.len());
        }

        prop_assert_eq!(manager.sink().created().count(), adds);
        prop_assert_eq!(manager.sink().deleted().count(), undos);
    }
}
