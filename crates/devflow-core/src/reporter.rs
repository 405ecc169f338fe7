//! User-facing status output.
//!
//! Call sites receive a `&dyn Reporter` instead of writing to the console
//! directly. `ConsoleReporter` is the terminal implementation;
//! `RecordingReporter` keeps messages in memory.

use std::cell::RefCell;

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
    Success,
}

impl Level {
    pub fn symbol(self) -> &'static str {
        match self {
            Level::Info => "ℹ",
            Level::Warn => "⚠",
            Level::Error => "✖",
            Level::Success => "✔",
        }
    }
}

pub trait Reporter {
    fn log(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    fn success(&self, message: &str) {
        self.log(Level::Success, message);
    }
}

/// Prints `<symbol> <message>`; errors go to stderr, everything else to
/// stdout unless `stderr_only` is set.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    color: bool,
    stderr_only: bool,
}

impl ConsoleReporter {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            stderr_only: false,
        }
    }

    /// Keep stdout free for machine-readable output.
    pub fn stderr_only(mut self) -> Self {
        self.stderr_only = true;
        self
    }

    pub fn format_line(&self, level: Level, message: &str) -> String {
        let symbol = level.symbol();
        if !self.color {
            return format!("{symbol} {message}");
        }
        let symbol = match level {
            Level::Info => symbol.blue(),
            Level::Warn => symbol.yellow(),
            Level::Error => symbol.red(),
            Level::Success => symbol.green(),
        };
        format!("{symbol} {message}")
    }
}

impl Reporter for ConsoleReporter {
    fn log(&self, level: Level, message: &str) {
        let line = self.format_line(level, message);
        if self.stderr_only || level == Level::Error {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    entries: RefCell<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.borrow().clone()
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn log(&self, level: Level, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}
