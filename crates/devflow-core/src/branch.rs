use crate::error::{DevflowError, Result};
use crate::reporter::Reporter;
use crate::shell::ShellExecutor;
use crate::types::BranchType;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

static SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();
static DISALLOWED_RE: OnceLock<Regex> = OnceLock::new();
static HYPHEN_RUN_RE: OnceLock<Regex> = OnceLock::new();
static SLUG_RE: OnceLock<Regex> = OnceLock::new();

fn separator_re() -> &'static Regex {
    SEPARATOR_RE.get_or_init(|| Regex::new(r"[\s_.]+").unwrap())
}

fn disallowed_re() -> &'static Regex {
    DISALLOWED_RE.get_or_init(|| Regex::new(r"[^a-z0-9-]").unwrap())
}

fn hyphen_run_re() -> &'static Regex {
    HYPHEN_RUN_RE.get_or_init(|| Regex::new(r"-{2,}").unwrap())
}

fn slug_re() -> &'static Regex {
    SLUG_RE.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap())
}

/// Normalize free-form text into a kebab-case slug.
///
/// Steps run in this order:
/// 1. lowercase
/// 2. runs of whitespace, `_` and `.` become a single `-`
/// 3. anything outside `[a-z0-9-]` is deleted
/// 4. runs of `-` collapse to one
/// 5. leading and trailing `-` are stripped
///
/// Punctuation is deleted rather than turned into a separator, so
/// `"Bug#42"` becomes `"bug42"`. Returns an empty string when nothing
/// survives.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let separated = separator_re().replace_all(&lowered, "-");
    let stripped = disallowed_re().replace_all(&separated, "");
    let collapsed = hyphen_run_re().replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// True when `s` is a non-empty slug: lowercase alphanumeric words joined by
/// single hyphens.
pub fn is_slug(s: &str) -> bool {
    slug_re().is_match(s)
}

// ---------------------------------------------------------------------------
// BranchConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchConfig {
    #[serde(rename = "type")]
    pub branch_type: BranchType,
    /// Already-normalized slug.
    pub name: String,
    pub breaking: bool,
}

impl BranchConfig {
    pub fn new(branch_type: BranchType, name: impl Into<String>, breaking: bool) -> Self {
        Self {
            branch_type,
            name: name.into(),
            breaking,
        }
    }

    /// Build a config from unnormalized text. Blank text is rejected; text
    /// that normalizes to nothing is not.
    pub fn from_raw(branch_type: BranchType, raw: &str, breaking: bool) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DevflowError::EmptyBranchName);
        }
        Ok(Self::new(branch_type, normalize(trimmed), breaking))
    }

    pub fn branch_name(&self) -> String {
        compose_branch_name(self)
    }
}

/// `{type}/{name}`, or `{type}/!{name}` for a breaking change. The name is
/// used as given.
pub fn compose_branch_name(config: &BranchConfig) -> String {
    let prefix = if config.breaking { "/!" } else { "/" };
    format!("{}{}{}", config.branch_type, prefix, config.name)
}

// ---------------------------------------------------------------------------
// Branch creation
// ---------------------------------------------------------------------------

pub fn checkout_command(branch_name: &str) -> String {
    format!("git checkout -b {branch_name}")
}

/// Create and switch to the branch described by `config`.
///
/// A non-zero exit from git is returned as `CommandFailed` carrying git's
/// stderr. Nothing is retried.
pub fn create_branch(
    config: &BranchConfig,
    shell: &dyn ShellExecutor,
    reporter: &dyn Reporter,
) -> Result<String> {
    let branch_name = config.branch_name();
    reporter.info(&format!("Creating and switching to branch: {branch_name}"));

    let command = checkout_command(&branch_name);
    let output = shell.exec(&command)?;
    if !output.success {
        return Err(DevflowError::CommandFailed {
            command,
            code: output.code,
            stderr: output.stderr.trim_end().to_string(),
        });
    }

    reporter.success(&format!(
        "Successfully created and switched to branch: {branch_name}"
    ));
    Ok(branch_name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
