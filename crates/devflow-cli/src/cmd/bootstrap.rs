use crate::output::print_json;
use devflow_core::{bootstrap::bootstrap, reporter::Reporter, shell::SystemShell};
use std::path::Path;

/// Check the platform and the tools devflow and its sibling scripts call out to.
pub fn run(root: &Path, json: bool, reporter: &dyn Reporter) -> anyhow::Result<()> {
    let shell = SystemShell::in_dir(root);
    let report = bootstrap(&shell, reporter)?;
    if json {
        print_json(&report)?;
    }
    Ok(())
}
