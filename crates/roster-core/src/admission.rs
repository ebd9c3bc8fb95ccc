use roster_model::Student;

/// Stable handle to one admission event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AdmissionId(usize);

impl AdmissionId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Append-only arena of admitted students. Handles are never reused.
#[derive(Debug, Clone, Default)]
pub(crate) struct AdmissionLog {
    entries: Vec<Student>,
}

impl AdmissionLog {
    pub(crate) fn admit(&mut self, student: Student) -> AdmissionId {
        let id = AdmissionId(self.entries.len());
        self.entries.push(student);
        id
    }

    /// Handles only come from [`AdmissionLog::admit`] on this log.
    pub(crate) fn get(&self, id: AdmissionId) -> &Student {
        &self.entries[id.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
