//! Shell command invocation.
//!
//! Commands are passed as a single string to the platform shell (`sh -c` or
//! `cmd /C`). Both output streams are captured. A non-zero exit is not an
//! error at this layer; callers inspect `ShellOutput::success`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Serialize;

use crate::error::{DevflowError, Result};
use crate::platform::PlatformInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    /// Exit code, or `-1` when the process was killed by a signal.
    pub code: i32,
}

impl ShellOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
            code: 0,
        }
    }

    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
            code,
        }
    }
}

pub trait ShellExecutor {
    fn exec(&self, command: &str) -> Result<ShellOutput>;
}

/// Runs commands through the host shell.
#[derive(Debug, Clone)]
pub struct SystemShell {
    cwd: Option<PathBuf>,
    windows: bool,
}

impl SystemShell {
    pub fn new() -> Self {
        Self {
            cwd: None,
            windows: PlatformInfo::current().is_windows,
        }
    }

    /// Run every command from `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            cwd: Some(dir.to_path_buf()),
            ..Self::new()
        }
    }

    fn build_command(&self, command: &str) -> Command {
        let mut cmd = if self.windows {
            let mut c = Command::new("cmd");
            c.args(["/C", command]);
            c
        } else {
            let mut c = Command::new("sh");
            c.args(["-c", command]);
            c
        };
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl Default for SystemShell {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellExecutor for SystemShell {
    fn exec(&self, command: &str) -> Result<ShellOutput> {
        tracing::debug!(command, cwd = ?self.cwd, "running shell command");

        let output = self
            .build_command(command)
            .output()
            .map_err(|e| DevflowError::SpawnFailed {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        let code = output.status.code().unwrap_or(-1);
        tracing::debug!(command, code, "shell command finished");

        Ok(ShellOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code,
        })
    }
}
