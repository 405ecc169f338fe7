//! Environment bootstrap: platform check plus tool version probes.

use serde::Serialize;

use crate::error::{DevflowError, Result};
use crate::platform::PlatformInfo;
use crate::reporter::Reporter;
use crate::shell::ShellExecutor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub version_command: &'static str,
    pub required: bool,
}

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "git",
        version_command: "git --version",
        required: true,
    },
    ToolSpec {
        name: "gh",
        version_command: "gh --version",
        required: false,
    },
    ToolSpec {
        name: "kubectl",
        version_command: "kubectl version --client",
        required: false,
    },
    ToolSpec {
        name: "helm",
        version_command: "helm version --short",
        required: false,
    },
    ToolSpec {
        name: "argocd",
        version_command: "argocd version --client --short",
        required: false,
    },
    ToolSpec {
        name: "k3d",
        version_command: "k3d version",
        required: false,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolReport {
    pub name: String,
    pub required: bool,
    /// First line of the version command's output; `None` when the tool is
    /// absent or its version command failed.
    pub version: Option<String>,
}

impl ToolReport {
    pub fn found(&self) -> bool {
        self.version.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentReport {
    pub platform: PlatformInfo,
    pub tools: Vec<ToolReport>,
}

impl EnvironmentReport {
    pub fn missing_required(&self) -> Vec<&str> {
        self.tools
            .iter()
            .filter(|t| t.required && !t.found())
            .map(|t| t.name.as_str())
            .collect()
    }
}

/// True when `name` resolves on PATH.
pub fn tool_on_path(name: &str) -> bool {
    which::which(name).is_ok()
}

/// First non-empty line of stdout, falling back to stderr (some tools print
/// their version there).
fn first_line(stdout: &str, stderr: &str) -> Option<String> {
    [stdout, stderr]
        .into_iter()
        .flat_map(str::lines)
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

pub fn probe_tool<F>(
    spec: &ToolSpec,
    shell: &dyn ShellExecutor,
    is_present: &F,
) -> Result<ToolReport>
where
    F: Fn(&str) -> bool,
{
    let version = if is_present(spec.name) {
        let out = shell.exec(spec.version_command)?;
        if out.success {
            first_line(&out.stdout, &out.stderr)
        } else {
            None
        }
    } else {
        None
    };
    tracing::info!(tool = spec.name, found = version.is_some(), "probed tool");

    Ok(ToolReport {
        name: spec.name.to_string(),
        required: spec.required,
        version,
    })
}

pub fn detect_environment_with<F>(
    platform: PlatformInfo,
    tools: &[ToolSpec],
    shell: &dyn ShellExecutor,
    is_present: F,
) -> Result<EnvironmentReport>
where
    F: Fn(&str) -> bool,
{
    let tools = tools
        .iter()
        .map(|spec| probe_tool(spec, shell, &is_present))
        .collect::<Result<Vec<_>>>()?;
    Ok(EnvironmentReport { platform, tools })
}

/// Check the platform, probe every known tool and report what was found.
///
/// Fails on an unsupported platform or when a required tool is missing.
/// Missing optional tools only produce a warning.
pub fn bootstrap_with<F>(
    platform: PlatformInfo,
    shell: &dyn ShellExecutor,
    reporter: &dyn Reporter,
    is_present: F,
) -> Result<EnvironmentReport>
where
    F: Fn(&str) -> bool,
{
    reporter.info("Starting environment bootstrap...");

    if !platform.is_supported {
        return Err(DevflowError::UnsupportedPlatform(platform.os));
    }

    let report = detect_environment_with(platform, TOOLS, shell, is_present)?;
    for tool in &report.tools {
        match (&tool.version, tool.required) {
            (Some(v), _) => reporter.info(&format!("Detected {}: {v}", tool.name)),
            (None, true) => reporter.error(&format!("{} not found (required)", tool.name)),
            (None, false) => reporter.warn(&format!("{} not found (optional)", tool.name)),
        }
    }

    if let Some(name) = report.missing_required().first() {
        return Err(DevflowError::ToolMissing(name.to_string()));
    }

    reporter.success("Bootstrap complete!");
    Ok(report)
}

pub fn bootstrap(shell: &dyn ShellExecutor, reporter: &dyn Reporter) -> Result<EnvironmentReport> {
    bootstrap_with(PlatformInfo::current(), shell, reporter, tool_on_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::{Level, RecordingReporter};
    use crate::shell::testing::FakeShell;
    use crate::shell::ShellOutput;

    fn only(names: &'static [&'static str]) -> impl Fn(&str) -> bool {
        move |n: &str| names.iter().any(|name| *name == n)
    }

    #[test]
    fn reports_found_and_missing_tools() {
        let shell = FakeShell::new(vec![
            ShellOutput::ok("git version 2.43.0\n"),
            ShellOutput::ok("Client Version: v1.30.1\nKustomize Version: v5.0.4\n"),
        ]);
        let reporter = RecordingReporter::default();

        let report = bootstrap_with(
            PlatformInfo::for_os("linux"),
            &shell,
            &reporter,
            only(&["git", "kubectl"]),
        )
        .unwrap();

        assert_eq!(
            shell.commands(),
            vec!["git --version".to_string(), "kubectl version --client".to_string()]
        );
        let git = &report.tools[0];
        assert_eq!(git.version.as_deref(), Some("git version 2.43.0"));
        let kubectl = report.tools.iter().find(|t| t.name == "kubectl").unwrap();
        assert_eq!(kubectl.version.as_deref(), Some("Client Version: v1.30.1"));
        assert!(report.missing_required().is_empty());

        assert_eq!(reporter.messages(Level::Warn).len(), TOOLS.len() - 2);
        assert_eq!(reporter.messages(Level::Success), vec!["Bootstrap complete!"]);
    }

    #[test]
    fn missing_git_fails() {
        let shell = FakeShell::new(vec![]);
        let reporter = RecordingReporter::default();
        let err = bootstrap_with(PlatformInfo::for_os("macos"), &shell, &reporter, only(&[]))
            .unwrap_err();
        assert!(matches!(err, DevflowError::ToolMissing(ref t) if t == "git"));
        assert!(shell.commands().is_empty());
        assert_eq!(reporter.messages(Level::Error), vec!["git not found (required)"]);
    }

    #[test]
    fn failing_version_command_counts_as_missing() {
        let shell = FakeShell::new(vec![ShellOutput::failed(1, "broken install")]);
        let report = detect_environment_with(
            PlatformInfo::for_os("linux"),
            &TOOLS[..1],
            &shell,
            only(&["git"]),
        )
        .unwrap();
        assert!(!report.tools[0].found());
        assert_eq!(report.missing_required(), vec!["git"]);
    }

    #[test]
    fn unsupported_platform_stops_before_probing() {
        let shell = FakeShell::new(vec![]);
        let reporter = RecordingReporter::default();
        let err = bootstrap_with(PlatformInfo::for_os("haiku"), &shell, &reporter, only(&["git"]))
            .unwrap_err();
        assert!(matches!(err, DevflowError::UnsupportedPlatform(ref os) if os == "haiku"));
        assert!(shell.commands().is_empty());
    }

    #[test]
    fn version_falls_back_to_stderr() {
        assert_eq!(
            first_line("", "\n  v3.14.2\n"),
            Some("v3.14.2".to_string())
        );
        assert_eq!(first_line("\n\n", ""), None);
    }
}
