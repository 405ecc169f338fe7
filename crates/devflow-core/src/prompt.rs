//! Interactive gathering of a [`BranchConfig`].
//!
//! Line input comes from a [`Prompter`], so the flow can be driven by stdin
//! or by a scripted list of answers.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::branch::{normalize, BranchConfig};
use crate::error::Result;
use crate::reporter::Reporter;
use crate::types::BranchType;

pub trait Prompter {
    /// Show `message` and return one line of input without its terminator.
    /// End of input is `io::ErrorKind::UnexpectedEof`.
    fn prompt_line(&self, message: &str) -> io::Result<String>;
}

/// Reads answers from stdin, writing prompts to stdout (or stderr when
/// stdout carries machine-readable output).
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompter {
    to_stderr: bool,
}

impl StdinPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_stderr() -> Self {
        Self { to_stderr: true }
    }
}

impl Prompter for StdinPrompter {
    fn prompt_line(&self, message: &str) -> io::Result<String> {
        if self.to_stderr {
            let mut err = io::stderr();
            write!(err, "{message}")?;
            err.flush()?;
        } else {
            let mut out = io::stdout();
            write!(out, "{message}")?;
            out.flush()?;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(strip_line_ending(&line).to_string())
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// Answers prompts from a fixed list and records each prompt it was shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    shown: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            shown: RefCell::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.shown.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_line(&self, message: &str) -> io::Result<String> {
        self.shown.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer left")
        })
    }
}

// ---------------------------------------------------------------------------
// Individual questions
// ---------------------------------------------------------------------------

fn type_menu() -> String {
    let mut menu = String::from("Select branch type:\n");
    for (i, t) in BranchType::all().iter().enumerate() {
        menu.push_str(&format!("  {}) {:<7} {}\n", i + 1, t.as_str(), t.description()));
    }
    menu.push_str(&format!("Branch type [{}]: ", BranchType::default()));
    menu
}

/// Accepts a type name or its 1-based menu position. Empty input picks the
/// default.
fn parse_type_answer(answer: &str) -> Option<BranchType> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Some(BranchType::default());
    }
    if let Ok(n) = answer.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| BranchType::all().get(i))
            .copied();
    }
    answer.parse().ok()
}

pub fn prompt_branch_type(prompter: &dyn Prompter, reporter: &dyn Reporter) -> Result<BranchType> {
    let menu = type_menu();
    loop {
        let answer = prompter.prompt_line(&menu)?;
        match parse_type_answer(&answer) {
            Some(t) => return Ok(t),
            None => reporter.warn(&format!(
                "'{}' is not a branch type; choose feat, fix, hotfix or chore",
                answer.trim()
            )),
        }
    }
}

/// Returns the trimmed, unnormalized name.
pub fn prompt_branch_name(prompter: &dyn Prompter, reporter: &dyn Reporter) -> Result<String> {
    loop {
        let answer = prompter.prompt_line("Enter branch name: ")?;
        let trimmed = answer.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
        reporter.warn("Branch name cannot be empty");
    }
}

pub fn prompt_is_breaking(prompter: &dyn Prompter, reporter: &dyn Reporter) -> Result<bool> {
    loop {
        let answer = prompter.prompt_line("Is this a breaking change? [y/N]: ")?;
        match answer.trim().to_ascii_lowercase().as_str() {
            "" | "n" | "no" => return Ok(false),
            "y" | "yes" => return Ok(true),
            _ => reporter.warn("Please answer y or n"),
        }
    }
}

/// Ask for type, name and (for `feat` only) the breaking-change flag.
pub fn gather_branch_config(
    prompter: &dyn Prompter,
    reporter: &dyn Reporter,
) -> Result<BranchConfig> {
    let branch_type = prompt_branch_type(prompter, reporter)?;
    let raw_name = prompt_branch_name(prompter, reporter)?;
    let name = normalize(&raw_name);

    let breaking = if branch_type.allows_breaking() {
        prompt_is_breaking(prompter, reporter)?
    } else {
        false
    };

    Ok(BranchConfig::new(branch_type, name, breaking))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
