//! Recording fake for tests.

use crate::{Document, DocumentKey, PersistenceSink, Result, StoreError};

/// A notification received by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Created(Document),
    Deleted(DocumentKey),
}

/// Sink that remembers every notification, optionally failing each call.
///
/// Events are recorded even when the sink is set to fail, so tests can
/// check that the manager still notified it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
    failing: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every call returns [`StoreError::Unavailable`].
    pub fn failing() -> Self {
        Self {
            events: Vec::new(),
            failing: true,
        }
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn created(&self) -> impl Iterator<Item = &Document> {
        self.events.iter().filter_map(|event| match event {
            SinkEvent::Created(doc) => Some(doc),
            SinkEvent::Deleted(_) => None,
        })
    }

    pub fn deleted(&self) -> impl Iterator<Item = &DocumentKey> {
        self.events.iter().filter_map(|event| match event {
            SinkEvent::Deleted(key) => Some(key),
            SinkEvent::Created(_) => None,
        })
    }

    fn outcome(&self) -> Result<()> {
        if self.failing {
            Err(StoreError::unavailable("recording sink set to fail"))
        } else {
            Ok(())
        }
    }
}

impl PersistenceSink for RecordingSink {
    fn create(&mut self, document: &Document) -> Result<()> {
        self.events.push(SinkEvent::Created(document.clone()));
        self.outcome()
    }

    fn delete(&mut self, key: &DocumentKey) -> Result<()> {
        self.events.push(SinkEvent::Deleted(key.clone()));
        self.outcome()
    }
}
