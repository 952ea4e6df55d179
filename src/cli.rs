//! CLI argument parsing for the Terraform wrapper.
//!
//! The CLI is intentionally thin: every subcommand maps one-to-one onto a
//! wrapped Terraform operation (plus the composed `deploy` workflow), so no
//! policy lives here.

use clap::{Parser, Subcommand};

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "tfctl",
    version,
    about = "Terraform workflow wrapper",
    after_help = "Examples:\n  tfctl init\n  tfctl fmt --recursive --check\n  tfctl plan --out tfplan\n  tfctl apply --auto-approve tfplan\n  tfctl deploy --auto-approve",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands, one per wrapped Terraform operation.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the Terraform working directory
    Init,
    /// Validate Terraform configuration files
    Validate,
    /// Format Terraform configuration files
    Fmt(FmtArgs),
    /// Generate and show an execution plan
    Plan(PlanArgs),
    /// Apply the Terraform configuration
    Apply(ApplyArgs),
    /// Destroy Terraform-managed infrastructure
    Destroy(DestroyArgs),
    /// Show the current state or a saved plan
    Show(ShowArgs),
    /// List resources tracked in state
    StateList,
    /// Read output values from state
    Output(OutputArgs),
    /// Run init, validate, plan, and apply in order
    Deploy(DeployArgs),
}

#[derive(Parser, Debug)]
#[command(about = "Format Terraform configuration files")]
pub struct FmtArgs {
    /// Also format files in subdirectories
    #[arg(long)]
    pub recursive: bool,

    /// Check formatting without modifying files
    #[arg(long)]
    pub check: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Generate and show an execution plan")]
pub struct PlanArgs {
    /// Save the generated plan to this file
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,
}

#[derive(Parser, Debug)]
#[command(about = "Apply the Terraform configuration")]
pub struct ApplyArgs {
    /// Skip the interactive approval prompt
    #[arg(long)]
    pub auto_approve: bool,

    /// Previously saved plan file to apply
    #[arg(value_name = "PLAN_FILE")]
    pub plan_file: Option<String>,
}

#[derive(Parser, Debug)]
#[command(about = "Destroy Terraform-managed infrastructure")]
pub struct DestroyArgs {
    /// Skip the interactive approval prompt
    #[arg(long)]
    pub auto_approve: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Show the current state or a saved plan")]
pub struct ShowArgs {
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,

    /// Plan or state file to show instead of the current state
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}

#[derive(Parser, Debug)]
#[command(about = "Read output values from state")]
pub struct OutputArgs {
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Run the full deployment workflow")]
pub struct DeployArgs {
    /// Skip the interactive approval prompt during the apply step
    #[arg(long)]
    pub auto_approve: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> RootArgs {
        RootArgs::try_parse_from(argv.iter().copied()).unwrap()
    }

    #[test]
    fn apply_accepts_a_positional_plan_file() {
        let root = parse(&["tfctl", "apply", "saved.plan"]);
        let Command::Apply(args) = root.command else {
            panic!("expected apply");
        };
        assert!(!args.auto_approve);
        assert_eq!(args.plan_file.as_deref(), Some("saved.plan"));
    }

    #[test]
    fn state_list_parses_as_a_hyphenated_subcommand() {
        let root = parse(&["tfctl", "state-list"]);
        assert!(matches!(root.command, Command::StateList));
    }

    #[test]
    fn deploy_takes_auto_approve() {
        let root = parse(&["tfctl", "deploy", "--auto-approve"]);
        let Command::Deploy(args) = root.command else {
            panic!("expected deploy");
        };
        assert!(args.auto_approve);
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        assert!(RootArgs::try_parse_from(["tfctl"]).is_err());
    }
}
