//! Student record data model.
//!
//! A [`Student`] is a plain value record. Raw caller input arrives as a
//! [`StudentForm`] and must be parsed before it reaches the record manager.

pub mod error;
pub mod form;
pub mod student;

pub use error::{ModelError, Result};
pub use form::StudentForm;
pub use student::{FieldValue, Student};
