use crate::{Document, DocumentKey, Result};

/// Receives create/delete notifications from the record manager.
///
/// Notifications are fire-and-forget: callers may log a returned error but
/// never act on it.
pub trait PersistenceSink {
    fn create(&mut self, document: &Document) -> Result<()>;

    fn delete(&mut self, key: &DocumentKey) -> Result<()>;
}

/// Sink that accepts and discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl PersistenceSink for NoopSink {
    fn create(&mut self, _document: &Document) -> Result<()> {
        Ok(())
    }

    fn delete(&mut self, _key: &DocumentKey) -> Result<()> {
        Ok(())
    }
}

impl<S: PersistenceSink + ?Sized> PersistenceSink for Box<S> {
    fn create(&mut self, document: &Document) -> Result<()> {
        (**self).create(document)
    }

    fn delete(&mut self, key: &DocumentKey) -> Result<()> {
        (**self).delete(key)
    }
}
