//! One thin command per wrapped Terraform subcommand.
//!
//! Every command follows the same shape: print the start banner, build the
//! argument list from the declarative option table, stream the invocation,
//! and print the success banner only when Terraform exited zero. Failures
//! propagate unchanged to the caller.

use anyhow::{anyhow, Result};

use crate::exec;
use crate::ops::{build_args, Operation, OptionValue};

/// External tool invoked for every operation. Resolution happens via PATH at
/// spawn time; this layer owns no configuration for it.
pub const TERRAFORM: &str = "terraform";

pub fn init() -> Result<()> {
    run(Operation::Init, &[])
}

pub fn validate() -> Result<()> {
    run(Operation::Validate, &[])
}

pub fn fmt(recursive: bool, check: bool) -> Result<()> {
    run(
        Operation::Fmt,
        &[
            ("recursive", OptionValue::Flag(recursive)),
            ("check", OptionValue::Flag(check)),
        ],
    )
}

pub fn plan(out: Option<String>) -> Result<()> {
    run(Operation::Plan, &[("out", OptionValue::Text(out))])
}

pub fn apply(auto_approve: bool, plan_file: Option<String>) -> Result<()> {
    run(
        Operation::Apply,
        &[
            ("auto-approve", OptionValue::Flag(auto_approve)),
            ("plan-file", OptionValue::Text(plan_file)),
        ],
    )
}

pub fn destroy(auto_approve: bool) -> Result<()> {
    run(
        Operation::Destroy,
        &[("auto-approve", OptionValue::Flag(auto_approve))],
    )
}

pub fn show(json: bool, path: Option<String>) -> Result<()> {
    run(
        Operation::Show,
        &[
            ("json", OptionValue::Flag(json)),
            ("path", OptionValue::Text(path)),
        ],
    )
}

pub fn state_list() -> Result<()> {
    run(Operation::StateList, &[])
}

pub fn output(json: bool) -> Result<()> {
    run(Operation::Output, &[("json", OptionValue::Flag(json))])
}

/// Run one operation against the Terraform binary with the given option
/// values. Shared by the direct commands and the deploy workflow.
pub fn run(op: Operation, values: &[(&str, OptionValue)]) -> Result<()> {
    run_tool(TERRAFORM, op, values)
}

fn run_tool(program: &str, op: Operation, values: &[(&str, OptionValue)]) -> Result<()> {
    println!("{}", start_banner(op));
    let args = build_args(op, values);
    let result = exec::run_streamed(program, &args)?;
    if !result.success() {
        return Err(anyhow!(
            "{program} {} exited with code {}",
            op.name(),
            result.exit_code
        ));
    }
    println!("{}", success_banner(op));
    Ok(())
}

fn start_banner(op: Operation) -> &'static str {
    match op {
        Operation::Init => "Initializing Terraform...",
        Operation::Validate => "Validating Terraform configuration...",
        Operation::Fmt => "Formatting Terraform files...",
        Operation::Plan => "Generating Terraform plan...",
        Operation::Apply => "Applying Terraform configuration...",
        Operation::Destroy => "Destroying Terraform-managed infrastructure...",
        Operation::Show => "Showing Terraform state...",
        Operation::StateList => "Listing resources in state...",
        Operation::Output => "Reading Terraform outputs...",
    }
}

fn success_banner(op: Operation) -> &'static str {
    match op {
        Operation::Init => "Terraform initialized",
        Operation::Validate => "Configuration is valid",
        Operation::Fmt => "Formatting complete",
        Operation::Plan => "Plan generated",
        Operation::Apply => "Apply complete",
        Operation::Destroy => "Destroy complete",
        Operation::Show => "Show complete",
        Operation::StateList => "State listing complete",
        Operation::Output => "Outputs read",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // `true` and `false` ignore their arguments, which makes them convenient
    // stand-ins for a Terraform binary with a fixed exit code.

    #[test]
    fn zero_exit_succeeds() {
        run_tool("true", Operation::Init, &[]).unwrap();
    }

    #[test]
    fn nonzero_exit_becomes_an_error_naming_the_operation() {
        let err = run_tool("false", Operation::Validate, &[]).unwrap_err();
        assert!(err.to_string().contains("validate"));
    }

    #[test]
    fn launch_failure_propagates_from_the_runner() {
        let err = run_tool("tfctl-no-such-tool-43b1", Operation::Plan, &[]).unwrap_err();
        assert!(format!("{err:#}").contains("not found on PATH"));
    }
}
