//! Command session over a record manager.
//!
//! A session plays the role of the form front end: it turns each command
//! into one record manager call and produces the message the user sees.

use std::io::{self, BufRead, Write};

use roster_core::RecordManager;
use roster_store::InMemoryCollection;
use tracing::{debug, info, info_span};

use crate::command::{Command, CommandError, HELP, parse_line};
use crate::logging::redact_value;
use crate::render::{plain_roster, plain_status, roster_table, status_table};

pub const ADDED: &str = "Student Added Successfully";
pub const INVALID_INPUT: &str = "Invalid Input";
pub const QUEUE_EMPTY: &str = "Admission Queue Empty";
pub const NOTHING_TO_UNDO: &str = "Nothing to Undo";
pub const NO_STUDENTS: &str = "No students recorded";

/// How listings and status are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewFormat {
    #[default]
    Plain,
    Table,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub format: ViewFormat,
}

/// Result of executing one line.
///
/// Text carried by `Executed` and `Rejected` is printed when not empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Blank line or comment.
    Skipped,
    /// A command ran against the manager.
    Executed(String),
    /// The line was not a valid command; the manager was not touched.
    Rejected(String),
    Quit,
}

#[derive(Debug)]
pub struct Session {
    manager: RecordManager<InMemoryCollection>,
    options: SessionOptions,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self::with_manager(RecordManager::new(InMemoryCollection::new()), options)
    }

    pub fn with_manager(
        manager: RecordManager<InMemoryCollection>,
        options: SessionOptions,
    ) -> Self {
        Self { manager, options }
    }

    pub fn manager(&self) -> &RecordManager<InMemoryCollection> {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut RecordManager<InMemoryCollection> {
        &mut self.manager
    }

    /// Parse and execute a single line.
    pub fn execute_line(&mut self, line: &str) -> Flow {
        match parse_line(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Flow::Skipped,
            Err(CommandError::Add(error)) => {
                debug!(%error, "rejected add");
                Flow::Rejected(INVALID_INPUT.to_string())
            }
            Err(error @ CommandError::Unknown(_)) => Flow::Rejected(error.to_string()),
        }
    }

    pub fn execute(&mut self, command: Command) -> Flow {
        let text = match command {
            Command::Add(form) => match self.manager.add_form(&form) {
                Ok(student) => {
                    info!(
                        student_id = %student.id,
                        name = redact_value(&student.name),
                        "student added"
                    );
                    ADDED.to_string()
                }
                Err(error) => {
                    debug!(%error, "rejected add");
                    return Flow::Rejected(INVALID_INPUT.to_string());
                }
            },
            Command::View => self.render_roster(),
            Command::Process => match self.manager.process_next_admission() {
                Some(student) => format!("Processed Admission:\n{student}"),
                None => QUEUE_EMPTY.to_string(),
            },
            Command::Undo => match self.manager.undo_last_add() {
                Some(student) => {
                    info!(student_id = %student.id, "add undone");
                    format!("Undo Successful:\n{student}")
                }
                None => NOTHING_TO_UNDO.to_string(),
            },
            Command::Status => self.render_status(),
            Command::Help => HELP.to_string(),
            Command::Quit => return Flow::Quit,
        };
        Flow::Executed(text)
    }

    /// Run commands from `input` until it ends or a `quit` is read.
    ///
    /// Returns the number of commands that ran against the manager; skipped
    /// and rejected lines are not counted. When `prompt` is set it is
    /// written before every line is read.
    pub fn run<R, W>(&mut self, input: R, mut output: W, prompt: Option<&str>) -> io::Result<usize>
    where
        R: BufRead,
        W: Write,
    {
        let span = info_span!("session", format = ?self.options.format);
        let _guard = span.enter();
        info!("session started");

        let mut executed = 0usize;
        let mut rejected = 0usize;
        let mut lines = input.lines();
        loop {
            if let Some(prompt) = prompt {
                write!(output, "{prompt}")?;
                output.flush()?;
            }
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            let text = match self.execute_line(&line) {
                Flow::Quit => break,
                Flow::Skipped => continue,
                Flow::Executed(text) => {
                    executed += 1;
                    text
                }
                Flow::Rejected(text) => {
                    rejected += 1;
                    text
                }
            };
            if !text.is_empty() {
                writeln!(output, "{text}")?;
            }
        }
        output.flush()?;

        let summary = self.manager.summary();
        info!(
            executed,
            rejected,
            records = summary.records,
            pending = summary.pending_admissions,
            "session finished"
        );
        Ok(executed)
    }

    fn render_roster(&self) -> String {
        match self.options.format {
            ViewFormat::Plain => plain_roster(self.manager.iter()),
            ViewFormat::Table if self.manager.is_empty() => NO_STUDENTS.to_string(),
            ViewFormat::Table => roster_table(self.manager.iter()).to_string(),
        }
    }

    fn render_status(&self) -> String {
        let summary = self.manager.summary();
        let stored = self.manager.sink().len();
        match self.options.format {
            ViewFormat::Plain => plain_status(&summary, stored),
            ViewFormat::Table => status_table(&summary, stored).to_string(),
        }
    }
}
