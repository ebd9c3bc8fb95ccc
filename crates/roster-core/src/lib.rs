//! Student record manager.
//!
//! Every admitted student is stored once in an append-only admission log.
//! The ordered roster, the admission queue and the undo history all hold
//! handles into that log, so the three views can never disagree about a
//! student's fields.

mod admission;
mod manager;

pub use admission::AdmissionId;
pub use manager::{ManagerSummary, RecordManager};
