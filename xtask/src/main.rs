use anyhow::Result as AnyResult;
use clap::{Parser, Subcommand};

use duct::{cmd, Expression};

#[derive(Debug, Subcommand)]
pub enum Subcommands {
    /// Builds the workspace.
    Build {
        /// Whether to build with optimizations.
        #[clap(long)]
        release: bool,
    },

    /// Runs tests.
    Test,

    /// Checks the project for errors, including the `no_std` build of the filter library.
    Check,

    /// Builds the documentation.
    Doc {
        /// Whether to open the documentation in a browser.
        #[clap(long)]
        open: bool,
    },

    /// Runs extra checks (rustfmt, clippy).
    ExtraCheck,

    /// Runs the moving average monitor.
    Monitor {
        /// Whether to watch for changes and re-run.
        #[clap(long)]
        watch: bool,

        /// Arguments passed to the monitor.
        #[clap(last = true)]
        args: Vec<String>,
    },
}

#[derive(Debug, Parser)]
#[clap(about, version, propagate_version = true)]
pub struct Cli {
    #[clap(subcommand)]
    pub subcommand: Subcommands,
}

fn cargo(args: &[&str]) -> Expression {
    println!("🛠️  Running command: cargo {}", args.join(" "));

    cmd("cargo", args)
}

fn build(release: bool) -> AnyResult<()> {
    let mut args = vec!["build", "--workspace"];

    if release {
        args.push("--release");
    }

    cargo(&args).run()?;

    Ok(())
}

fn checks() -> AnyResult<()> {
    cargo(&["check", "--workspace", "--all-targets"]).run()?;
    cargo(&[
        "check",
        "-p",
        "sensor-filters",
        "--no-default-features",
        "--features=log",
    ])
    .run()?;

    Ok(())
}

fn docs(open: bool) -> AnyResult<()> {
    let mut args = vec!["doc", "--no-deps", "-p", "sensor-filters", "-p", "logger"];

    if open {
        args.push("--open");
    }

    cargo(&args).run()?;

    Ok(())
}

fn extra_checks() -> AnyResult<()> {
    cargo(&["fmt", "--check"]).run()?;
    cargo(&["clippy", "--workspace", "--all-targets"]).run()?;

    Ok(())
}

fn test() -> AnyResult<()> {
    let packages = ["sensor-filters", "sma-monitor"];

    let mut args = vec!["test"];

    for p in packages {
        args.push("-p");
        args.push(p);
    }

    cargo(&args).run()?;

    Ok(())
}

fn monitor(watch: bool, extra: Vec<String>) -> AnyResult<()> {
    let mut args = vec!["run".to_string(), "-p".to_string(), "sma-monitor".to_string()];

    if !extra.is_empty() {
        args.push("--".to_string());
        args.extend(extra);
    }

    if watch {
        let program = args.join(" ");
        args = vec!["watch".to_string(), "-x".to_string(), program];
    }

    cmd("cargo", &args).run()?;

    Ok(())
}

fn main() -> AnyResult<()> {
    let cli = Cli::parse();

    match cli.subcommand {
        Subcommands::Build { release } => build(release),
        Subcommands::Test => test(),
        Subcommands::Check => checks(),
        Subcommands::Doc { open } => docs(open),
        Subcommands::ExtraCheck => extra_checks(),
        Subcommands::Monitor { watch, args } => monitor(watch, args),
    }
}
