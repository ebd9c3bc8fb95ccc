//! Persistence collaborator for the student roster.
//!
//! The record manager notifies a [`PersistenceSink`] whenever a student is
//! created or deleted. Sinks have no read contract towards the manager; query
//! results never depend on them.
//!
//! # Sinks
//!
//! - [`NoopSink`] discards every notification
//! - [`InMemoryCollection`] keeps documents in a process-local collection
//! - [`RecordingSink`] records notifications in order, for tests

mod document;
mod error;
mod memory;
mod recording;
mod sink;

pub use document::{Document, DocumentKey};
pub use error::{Result, StoreError};
pub use memory::InMemoryCollection;
pub use recording::{RecordingSink, SinkEvent};
pub use sink::{NoopSink, PersistenceSink};
