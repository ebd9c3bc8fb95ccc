use std::collections::VecDeque;

use roster_model::{ModelError, Student, StudentForm};
use roster_store::{Document, DocumentKey, NoopSink, PersistenceSink};
use serde::Serialize;
use tracing::{debug, warn};

use crate::admission::{AdmissionId, AdmissionLog};

/// Counts describing the manager's current state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ManagerSummary {
    pub records: usize,
    pub pending_admissions: usize,
    pub undo_depth: usize,
}

/// Owns all student data and forwards create/delete events to a sink.
///
/// Each [`add`](Self::add) is one admission event: the student is appended
/// to the roster, queued for admission processing and pushed onto the undo
/// history. Processing only drains the queue; undo only pops the history
/// and removes a matching roster entry. Empty containers are reported as
/// `None`, never as errors.
#[derive(Debug)]
pub struct RecordManager<S = NoopSink> {
    log: AdmissionLog,
    records: Vec<AdmissionId>,
    admission_queue: VecDeque<AdmissionId>,
    history: Vec<AdmissionId>,
    sink: S,
}

impl Default for RecordManager<NoopSink> {
    fn default() -> Self {
        Self::new(NoopSink)
    }
}

impl<S: PersistenceSink> RecordManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            log: AdmissionLog::default(),
            records: Vec::new(),
            admission_queue: VecDeque::new(),
            history: Vec::new(),
            sink,
        }
    }

    /// Admit a student and notify the sink of the creation.
    pub fn add(&mut self, student: Student) -> &Student {
        let document = Document::from_student(&student);
        let id = self.log.admit(student);
        self.records.push(id);
        self.admission_queue.push_back(id);
        self.history.push(id);

        if let Err(error) = self.sink.create(&document) {
            warn!(student_id = %self.log.get(id).id, %error, "create notification failed");
        }
        debug!(
            student_id = %self.log.get(id).id,
            admission = id.index(),
            records = self.records.len(),
            pending = self.admission_queue.len(),
            "student added"
        );
        self.log.get(id)
    }

    /// Parse raw input and admit the result.
    ///
    /// A parse failure leaves the manager and the sink untouched.
    pub fn add_form(&mut self, form: &StudentForm) -> Result<&Student, ModelError> {
        let student = form.parse()?;
        Ok(self.add(student))
    }

    /// Dequeue the oldest admission still waiting to be processed.
    pub fn process_next_admission(&mut self) -> Option<Student> {
        let Some(id) = self.admission_queue.pop_front() else {
            debug!("admission queue empty");
            return None;
        };
        let student = self.log.get(id).clone();
        debug!(
            student_id = %student.id,
            pending = self.admission_queue.len(),
            "admission processed"
        );
        Some(student)
    }

    /// Revert the most recent admission still on the undo history.
    ///
    /// The first roster entry structurally equal to the popped student is
    /// removed. The admission queue is left as it is.
    pub fn undo_last_add(&mut self) -> Option<Student> {
        let Some(id) = self.history.pop() else {
            debug!("nothing to undo");
            return None;
        };
        let student = self.log.get(id).clone();
        let position = self
            .records
            .iter()
            .position(|&record| *self.log.get(record) == student);
        if let Some(position) = position {
            self.records.remove(position);
        }

        if let Err(error) = self.sink.delete(&DocumentKey::from(&student)) {
            warn!(student_id = %student.id, %error, "delete notification failed");
        }
        debug!(
            student_id = %student.id,
            removed = position.is_some(),
            records = self.records.len(),
            undo_depth = self.history.len(),
            "admission undone"
        );
        Some(student)
    }
}

impl<S> RecordManager<S> {
    /// Snapshot of the roster in insertion order.
    pub fn all_students(&self) -> Vec<Student> {
        self.iter().cloned().collect()
    }

    /// Borrowing view of the roster in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.records.iter().map(|&id| self.log.get(id))
    }

    /// The student that the next [`process_next_admission`](Self::process_next_admission) would return.
    pub fn peek_next_admission(&self) -> Option<&Student> {
        self.admission_queue.front().map(|&id| self.log.get(id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn pending_admissions(&self) -> usize {
        self.admission_queue.len()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Total admission events ever recorded, including undone ones.
    pub fn admissions_recorded(&self) -> usize {
        self.log.len()
    }

    pub fn summary(&self) -> ManagerSummary {
        ManagerSummary {
            records: self.len(),
            pending_admissions: self.pending_admissions(),
            undo_depth: self.undo_depth(),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
