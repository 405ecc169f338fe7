use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use devflow_core::{
    branch::{create_branch, normalize, BranchConfig},
    ci,
    prompt::{gather_branch_config, Prompter, StdinPrompter},
    reporter::Reporter,
    shell::SystemShell,
    types::BranchType,
    DevflowError,
};
use std::path::Path;

#[derive(Subcommand)]
pub enum BranchSubcommand {
    /// Create and switch to a conventional branch (interactive when no arguments are given)
    Create {
        /// Branch type: feat, fix, hotfix or chore
        branch_type: Option<String>,

        /// Branch description; words are joined with spaces before normalizing
        name: Vec<String>,

        /// Print the branch name without running git
        #[arg(long)]
        dry_run: bool,

        /// Never prompt; fail if arguments are missing
        #[arg(long)]
        no_input: bool,
    },

    /// Print the normalized slug for a branch description
    Normalize {
        /// Text to normalize
        text: Vec<String>,
    },
}

pub fn run(
    root: &Path,
    subcmd: BranchSubcommand,
    json: bool,
    reporter: &dyn Reporter,
) -> anyhow::Result<()> {
    match subcmd {
        BranchSubcommand::Create {
            branch_type,
            name,
            dry_run,
            no_input,
        } => {
            let interactive_allowed = !no_input && !ci::is_ci();
            let prompter = if json {
                StdinPrompter::to_stderr()
            } else {
                StdinPrompter::new()
            };
            let config = resolve_config(
                branch_type.as_deref(),
                &name,
                interactive_allowed,
                &prompter,
                reporter,
            )?;
            create(root, &config, dry_run, json, reporter)
        }
        BranchSubcommand::Normalize { text } => normalize_cmd(&text, json),
    }
}

/// Positional arguments win; with none, fall back to prompting.
fn resolve_config(
    branch_type: Option<&str>,
    name: &[String],
    interactive_allowed: bool,
    prompter: &dyn Prompter,
    reporter: &dyn Reporter,
) -> anyhow::Result<BranchConfig> {
    let Some(branch_type) = branch_type else {
        if !interactive_allowed {
            return Err(DevflowError::InteractiveUnavailable.into());
        }
        return gather_branch_config(prompter, reporter).context("interactive input failed");
    };

    let branch_type: BranchType = branch_type.parse()?;
    let config = BranchConfig::from_raw(branch_type, &name.join(" "), false)?;
    Ok(config)
}

fn create(
    root: &Path,
    config: &BranchConfig,
    dry_run: bool,
    json: bool,
    reporter: &dyn Reporter,
) -> anyhow::Result<()> {
    if dry_run {
        let branch_name = config.branch_name();
        if json {
            print_json(&serde_json::json!({
                "branch": branch_name,
                "config": config,
                "dry_run": true,
            }))?;
        } else {
            println!("{branch_name}");
        }
        return Ok(());
    }

    let shell = SystemShell::in_dir(root);
    let branch_name = create_branch(config, &shell, reporter)?;

    if json {
        print_json(&serde_json::json!({
            "branch": branch_name,
            "config": config,
            "dry_run": false,
        }))?;
    }
    Ok(())
}

fn normalize_cmd(text: &[String], json: bool) -> anyhow::Result<()> {
    let input = text.join(" ");
    let input = input.trim();
    if input.is_empty() {
        anyhow::bail!("Usage: devflow branch normalize <branch-name>");
    }

    let slug = normalize(input);
    if json {
        print_json(&serde_json::json!({
            "input": input,
            "slug": slug,
        }))?;
    } else {
        println!("{slug}");
    }
    Ok(())
}
