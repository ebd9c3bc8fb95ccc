use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid age '{value}': {source}")]
    InvalidAge {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("unexpected field after department: '{0}'")]
    UnexpectedField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
