//! Line-oriented command parsing.
//!
//! Each line maps onto one record manager operation, the same way each
//! button of a form would.

use roster_model::{ModelError, StudentForm};
use thiserror::Error;

/// Usage text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  add <id> <name> <age> <department>   add a student (use '|' between fields for spaces)
  view                                 list all students
  process                              process the next admission (queue)
  undo                                 undo the last add (stack)
  status                               show record, queue and undo counts
  help                                 show this message
  quit                                 leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(StudentForm),
    View,
    Process,
    Undo,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("invalid add arguments: {0}")]
    Add(#[from] ModelError),
}

/// Parse one input line.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "add" => Command::Add(parse_add_fields(rest)?),
        "view" | "list" => Command::View,
        "process" => Command::Process,
        "undo" => Command::Undo,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

fn parse_add_fields(rest: &str) -> Result<StudentForm, ModelError> {
    if rest.contains('|') {
        StudentForm::from_fields(rest.split('|').map(str::trim))
    } else {
        StudentForm::from_fields(rest.split_whitespace())
    }
}
