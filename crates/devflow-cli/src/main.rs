mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::branch::BranchSubcommand;
use devflow_core::reporter::{ConsoleReporter, Reporter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "devflow",
    about = "Developer workflow helpers: conventional branch names and environment checks",
    version,
    propagate_version = true
)]
struct Cli {
    /// Repository root (default: nearest ancestor containing .git/)
    #[arg(long, global = true, env = "DEVFLOW_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Disable colored status output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or normalize conventional branch names
    Branch {
        #[command(subcommand)]
        subcommand: BranchSubcommand,
    },

    /// Check platform support and detect installed tooling
    Bootstrap,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
    let mut reporter = ConsoleReporter::new(color);
    if cli.json {
        reporter = reporter.stderr_only();
    }

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "resolved repository root");

    let result = match cli.command {
        Commands::Branch { subcommand } => cmd::branch::run(&root, subcommand, cli.json, &reporter),
        Commands::Bootstrap => cmd::bootstrap::run(&root, cli.json, &reporter),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        reporter.error(&format!("error: {e:#}"));
        std::process::exit(1);
    }
}
