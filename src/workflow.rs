//! Composed deploy workflow: init, validate, plan, apply, fail fast.
//!
//! The workflow is an ordered plan of operations with their option bindings,
//! evaluated left to right through a step executor. The first failing step
//! aborts everything after it; already-completed steps are not rolled back
//! (init, validate, and plan have nothing to roll back, and a partial apply
//! is left exactly as Terraform left it).

use anyhow::{Context, Result};

use crate::commands;
use crate::ops::{Operation, OptionValue};

/// Option bindings for one workflow step.
pub type StepBindings = Vec<(&'static str, OptionValue)>;

/// Fixed step order for `deploy`.
const DEPLOY_ORDER: [Operation; 4] = [
    Operation::Init,
    Operation::Validate,
    Operation::Plan,
    Operation::Apply,
];

/// Build the ordered plan for one deploy run. Only the final apply step
/// receives the forwarded auto-approve flag; the preceding steps always run
/// with their defaults.
fn deploy_plan(auto_approve: bool) -> Vec<(Operation, StepBindings)> {
    DEPLOY_ORDER
        .iter()
        .map(|&op| {
            let bindings = match op {
                Operation::Apply => vec![("auto-approve", OptionValue::Flag(auto_approve))],
                _ => Vec::new(),
            };
            (op, bindings)
        })
        .collect()
}

/// Run the full deployment workflow, stopping at the first failing step.
pub fn deploy(auto_approve: bool) -> Result<()> {
    println!("Starting deployment workflow...");
    run_plan(&deploy_plan(auto_approve), commands::run)?;
    println!("Deployment workflow complete");
    Ok(())
}

/// Evaluate `plan` strictly left to right with `run_step`. The first failure
/// terminates evaluation and the returned error names the failing step;
/// subsequent steps never run.
fn run_plan(
    plan: &[(Operation, StepBindings)],
    mut run_step: impl FnMut(Operation, &[(&str, OptionValue)]) -> Result<()>,
) -> Result<()> {
    for (op, bindings) in plan {
        run_step(*op, bindings).with_context(|| format!("deploy step '{}' failed", op.name()))?;
    }
    Ok(())
}
