use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

use versionctl::cli::{VersionArgs, VersionCommand};
use versionctl::{config, provider, ui};

#[derive(clap::Parser)]
#[command(
    name = "versionctl",
    about = "Get the version of the installed tool or the current project (default: installed tool version)"
)]
#[command(group(ArgGroup::new("source").args(["report", "tool", "project", "verbose"])))]
#[command(group(ArgGroup::new("component").args(["major", "minor", "patch"])))]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Get system information for reporting bugs")]
    report: bool,

    #[arg(short, long, help = "Get the version of the installed tool")]
    tool: bool,

    #[arg(short, long, help = "Get the version of the current project")]
    project: bool,

    #[arg(short, long, help = "Get the version of both the installed tool and the current project")]
    verbose: bool,

    #[arg(long, help = "Output only the major version")]
    major: bool,

    #[arg(long, help = "Output only the minor version")]
    minor: bool,

    #[arg(long, help = "Output only the patch version")]
    patch: bool,

    #[arg(
        long,
        value_name = "INCREMENT",
        help = "Output the next version after applying MAJOR, MINOR, PATCH or NONE"
    )]
    next: Option<String>,

    #[arg(
        value_name = "MANUAL_VERSION",
        help = "Use this version instead of the project version"
    )]
    manual_version: Option<String>,
}

impl From<Args> for VersionArgs {
    fn from(args: Args) -> Self {
        VersionArgs {
            report: args.report,
            tool: args.tool,
            project: args.project,
            verbose: args.verbose,
            major: args.major,
            minor: args.minor,
            patch: args.patch,
            next: args.next,
            manual_version: args.manual_version,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("VERSIONCTL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let provider = provider::get_provider(&config);
    let command = VersionCommand::new(args.into());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = command.run(provider.as_ref(), &mut out) {
        out.flush()?;
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    out.flush()?;
    Ok(())
}
