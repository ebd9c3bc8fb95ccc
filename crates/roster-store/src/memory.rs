//! Process-local document collection.

use tracing::trace;

use crate::{Document, DocumentKey, PersistenceSink, Result};

/// In-memory stand-in for a document database collection.
///
/// Documents are kept in insertion order. Deleting by key removes every
/// document carrying that id, since ids are not unique.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCollection {
    storage: Vec<Document>,
}

impl InMemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_one(&mut self, document: Document) {
        self.storage.push(document);
    }

    /// Remove all documents whose id matches. Returns how many were removed.
    pub fn delete_many(&mut self, id: &str) -> usize {
        let before = self.storage.len();
        self.storage.retain(|doc| doc.id() != Some(id));
        before - self.storage.len()
    }

    pub fn find(&self, id: &str) -> impl Iterator<Item = &Document> {
        self.storage.iter().filter(move |doc| doc.id() == Some(id))
    }

    pub fn documents(&self) -> &[Document] {
        &self.storage
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl PersistenceSink for InMemoryCollection {
    fn create(&mut self, document: &Document) -> Result<()> {
        self.insert_one(document.clone());
        trace!(documents = self.storage.len(), "document inserted");
        Ok(())
    }

    fn delete(&mut self, key: &DocumentKey) -> Result<()> {
        let removed = self.delete_many(&key.id);
        trace!(removed, documents = self.storage.len(), "documents deleted");
        Ok(())
    }
}
