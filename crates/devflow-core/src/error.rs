use thiserror::Error;

#[derive(Debug, Error)]
pub enum DevflowError {
    #[error("invalid branch type '{0}': must be one of feat, fix, hotfix, chore")]
    InvalidBranchType(String),

    #[error("branch name is required")]
    EmptyBranchName,

    #[error("command failed ({command}, exit {code}): {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("failed to start shell for '{command}': {reason}")]
    SpawnFailed { command: String, reason: String },

    #[error("interactive input is unavailable: pass <type> <name> as arguments")]
    InteractiveUnavailable,

    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("required tool not found on PATH: {0}")]
    ToolMissing(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DevflowError>;
