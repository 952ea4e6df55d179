//! Terraform CLI wrapper: first-class subcommands plus a composed deploy
//! workflow with fail-fast semantics.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod exec;
mod ops;
mod workflow;

use cli::{Command, RootArgs};

fn main() -> Result<()> {
    // Diagnostics go to stderr so streamed Terraform output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let root = RootArgs::parse();
    match root.command {
        Command::Init => commands::init(),
        Command::Validate => commands::validate(),
        Command::Fmt(args) => commands::fmt(args.recursive, args.check),
        Command::Plan(args) => commands::plan(args.out),
        Command::Apply(args) => commands::apply(args.auto_approve, args.plan_file),
        Command::Destroy(args) => commands::destroy(args.auto_approve),
        Command::Show(args) => commands::show(args.json, args.path),
        Command::StateList => commands::state_list(),
        Command::Output(args) => commands::output(args.json),
        Command::Deploy(args) => workflow::deploy(args.auto_approve),
    }
}
