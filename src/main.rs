// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Command-line interface for the branch-preview binary.
//!
//! The CLI exposes subcommands for deriving a single alias or preview URL and
//! for normalizing a YAML document of branches into workflow-ready records.

use std::{io, path::PathBuf, process};

use branch_preview::{
    AliasStrategy, Entropy, Error, OsEntropy, PreviewDocument, SeededEntropy, load_previews,
    preview_url,
};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Command line interface for deriving branch aliases and preview URLs.
#[derive(Debug, Parser,)]
#[command(name = "branch-preview", version, about = "Derive branch aliases and preview URLs")]
struct Cli
{
    #[command(subcommand)]
    command: Command,

    /// Seed for reproducible fallback aliases; omit to use OS entropy.
    #[arg(long = "seed", value_name = "SEED", global = true)]
    seed: Option<u64,>,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Derive a DNS-safe alias for a branch name.
    Alias(AliasArgs,),
    /// Rewrite a deployment URL template for a branch.
    Preview(PreviewArgs,),
    /// Normalize a YAML document of branches into preview records.
    Batch(BatchArgs,),
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `alias` subcommand.
struct AliasArgs
{
    /// Branch name as supplied by version control.
    #[arg(long = "branch", value_name = "NAME", env = "BRANCH_NAME")]
    branch: String,
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `preview` subcommand.
struct PreviewArgs
{
    /// Branch name as supplied by version control.
    #[arg(long = "branch", value_name = "NAME", env = "BRANCH_NAME")]
    branch: String,

    /// Deployment URL whose leftmost label is replaced.
    #[arg(long = "template-url", value_name = "URL", env = "DEPLOYMENT_URL")]
    template_url: String,
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `batch` subcommand.
struct BatchArgs
{
    /// Path to the YAML configuration file describing branches.
    #[arg(long = "config", value_name = "PATH")]
    config: PathBuf,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

/// Alias derivation result printed by the `alias` subcommand.
#[derive(Debug, Serialize,)]
struct AliasOutcome
{
    branch: String,
    alias:  String,
}

/// Preview derivation result printed by the `preview` subcommand.
#[derive(Debug, Serialize,)]
struct PreviewOutcome
{
    branch: String,
    alias:  String,
    url:    Option<String,>,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env(),).init();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from configuration loading and
/// normalization.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    let entropy: Box<dyn Entropy,> = match cli.seed {
        Some(seed,) => Box::new(SeededEntropy::new(seed,),),
        None => Box::new(OsEntropy,),
    };

    match cli.command {
        Command::Alias(args,) => run_alias(&args, entropy.as_ref(),),
        Command::Preview(args,) => run_preview(&args, entropy.as_ref(),),
        Command::Batch(args,) => run_batch(&args, entropy.as_ref(),),
    }
}

fn run_alias(args: &AliasArgs, entropy: &dyn Entropy,) -> Result<(), Error,>
{
    let outcome = AliasOutcome {
        branch: args.branch.clone(),
        alias:  AliasStrategy::builder(&args.branch,).build(entropy,),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer(&mut handle, &outcome,)?;

    Ok((),)
}

fn run_preview(args: &PreviewArgs, entropy: &dyn Entropy,) -> Result<(), Error,>
{
    let outcome = PreviewOutcome {
        branch: args.branch.clone(),
        alias:  AliasStrategy::builder(&args.branch,).build(entropy,),
        url:    preview_url(&args.branch, &args.template_url, entropy,),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer(&mut handle, &outcome,)?;

    Ok((),)
}

fn run_batch(args: &BatchArgs, entropy: &dyn Entropy,) -> Result<(), Error,>
{
    let document = load_previews(&args.config, entropy,)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_preview_document(&mut handle, &document, args.pretty,)
}

fn write_preview_document<W: io::Write,>(
    writer: &mut W,
    document: &PreviewDocument,
    pretty: bool,
) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(writer, document,)?;
    } else {
        serde_json::to_writer(writer, document,)?;
    }

    Ok((),)
}
