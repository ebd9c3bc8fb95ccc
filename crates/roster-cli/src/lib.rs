//! CLI library components for the student roster.

pub mod command;
pub mod logging;
pub mod render;
pub mod seed;
pub mod session;
