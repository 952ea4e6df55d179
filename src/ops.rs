//! Declarative mapping from wrapped Terraform operations to argument tokens.
//!
//! Each operation declares its verb tokens and recognized options once; a
//! single generic builder renders caller-supplied values against that table,
//! so no command carries its own flag-assembly logic.

/// One wrapped Terraform action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Init,
    Validate,
    Fmt,
    Plan,
    Apply,
    Destroy,
    Show,
    StateList,
    Output,
}

/// How a declared option renders into the argument list.
#[derive(Debug, Clone, Copy)]
pub enum OptionKind {
    /// Boolean switch emitted as a bare flag token when true.
    Switch(&'static str),
    /// String value embedded into a single `prefix<value>` token.
    Inline(&'static str),
    /// String value appended as its own positional token.
    Positional,
}

/// A recognized option: lookup name plus rendering rule.
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
}

/// Caller-supplied value for a declared option.
#[derive(Debug, Clone)]
pub enum OptionValue {
    Flag(bool),
    Text(Option<String>),
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Init => "init",
            Operation::Validate => "validate",
            Operation::Fmt => "fmt",
            Operation::Plan => "plan",
            Operation::Apply => "apply",
            Operation::Destroy => "destroy",
            Operation::Show => "show",
            Operation::StateList => "state-list",
            Operation::Output => "output",
        }
    }

    /// Leading argument tokens. `state list` is the one two-token verb.
    fn verb(self) -> &'static [&'static str] {
        match self {
            Operation::Init => &["init"],
            Operation::Validate => &["validate"],
            Operation::Fmt => &["fmt"],
            Operation::Plan => &["plan"],
            Operation::Apply => &["apply"],
            Operation::Destroy => &["destroy"],
            Operation::Show => &["show"],
            Operation::StateList => &["state", "list"],
            Operation::Output => &["output"],
        }
    }

    /// Recognized options in their fixed rendering order.
    fn options(self) -> &'static [OptionSpec] {
        match self {
            Operation::Init | Operation::Validate | Operation::StateList => &[],
            Operation::Fmt => &[
                OptionSpec {
                    name: "recursive",
                    kind: OptionKind::Switch("-recursive"),
                },
                OptionSpec {
                    name: "check",
                    kind: OptionKind::Switch("-check"),
                },
            ],
            Operation::Plan => &[OptionSpec {
                name: "out",
                kind: OptionKind::Inline("-out="),
            }],
            Operation::Apply => &[
                OptionSpec {
                    name: "auto-approve",
                    kind: OptionKind::Switch("-auto-approve"),
                },
                OptionSpec {
                    name: "plan-file",
                    kind: OptionKind::Positional,
                },
            ],
            Operation::Destroy => &[OptionSpec {
                name: "auto-approve",
                kind: OptionKind::Switch("-auto-approve"),
            }],
            Operation::Show => &[
                OptionSpec {
                    name: "json",
                    kind: OptionKind::Switch("-json"),
                },
                OptionSpec {
                    name: "path",
                    kind: OptionKind::Positional,
                },
            ],
            Operation::Output => &[OptionSpec {
                name: "json",
                kind: OptionKind::Switch("-json"),
            }],
        }
    }
}

/// Build the full argument list for one invocation of `op`.
///
/// Options render in declared order regardless of the order `values` arrives
/// in. False switches, absent strings, and empty strings are omitted; the
/// result always starts with the operation's verb tokens.
pub fn build_args(op: Operation, values: &[(&str, OptionValue)]) -> Vec<String> {
    let mut args: Vec<String> = op.verb().iter().map(|t| t.to_string()).collect();
    for spec in op.options() {
        let Some(value) = values
            .iter()
            .find(|(name, _)| *name == spec.name)
            .map(|(_, value)| value)
        else {
            continue;
        };
        match (spec.kind, value) {
            (OptionKind::Switch(flag), OptionValue::Flag(true)) => args.push(flag.to_string()),
            (OptionKind::Inline(prefix), OptionValue::Text(Some(text))) if !text.is_empty() => {
                args.push(format!("{prefix}{text}"));
            }
            (OptionKind::Positional, OptionValue::Text(Some(text))) if !text.is_empty() => {
                args.push(text.clone());
            }
            _ => {}
        }
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> OptionValue {
        OptionValue::Text(Some(value.to_string()))
    }

    #[test]
    fn bare_operations_render_verb_only() {
        assert_eq!(build_args(Operation::Init, &[]), ["init"]);
        assert_eq!(build_args(Operation::Validate, &[]), ["validate"]);
        assert_eq!(build_args(Operation::Fmt, &[]), ["fmt"]);
    }

    #[test]
    fn state_list_uses_two_verb_tokens() {
        assert_eq!(build_args(Operation::StateList, &[]), ["state", "list"]);
    }

    #[test]
    fn fmt_flags_render_in_declared_order() {
        // Call-site order is reversed; output order must not change.
        let args = build_args(
            Operation::Fmt,
            &[
                ("check", OptionValue::Flag(true)),
                ("recursive", OptionValue::Flag(true)),
            ],
        );
        assert_eq!(args, ["fmt", "-recursive", "-check"]);
    }

    #[test]
    fn false_switches_are_omitted() {
        let args = build_args(
            Operation::Fmt,
            &[
                ("recursive", OptionValue::Flag(false)),
                ("check", OptionValue::Flag(true)),
            ],
        );
        assert_eq!(args, ["fmt", "-check"]);
    }

    #[test]
    fn plan_out_renders_as_a_single_token() {
        let args = build_args(Operation::Plan, &[("out", text("tfplan"))]);
        assert_eq!(args, ["plan", "-out=tfplan"]);
    }

    #[test]
    fn empty_string_value_is_treated_as_absent() {
        assert_eq!(build_args(Operation::Plan, &[("out", text(""))]), ["plan"]);
        assert_eq!(
            build_args(Operation::Plan, &[("out", OptionValue::Text(None))]),
            ["plan"]
        );
    }

    #[test]
    fn apply_plan_file_is_positional_after_the_verb() {
        let args = build_args(
            Operation::Apply,
            &[
                ("auto-approve", OptionValue::Flag(false)),
                ("plan-file", text("saved.plan")),
            ],
        );
        assert_eq!(args, ["apply", "saved.plan"]);
    }

    #[test]
    fn apply_auto_approve_precedes_the_plan_file() {
        let args = build_args(
            Operation::Apply,
            &[
                ("plan-file", text("saved.plan")),
                ("auto-approve", OptionValue::Flag(true)),
            ],
        );
        assert_eq!(args, ["apply", "-auto-approve", "saved.plan"]);
    }

    #[test]
    fn show_orders_json_before_path() {
        let args = build_args(
            Operation::Show,
            &[("path", text("plan.out")), ("json", OptionValue::Flag(true))],
        );
        assert_eq!(args, ["show", "-json", "plan.out"]);
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let values = [
            ("check", OptionValue::Flag(true)),
            ("recursive", OptionValue::Flag(true)),
        ];
        let first = build_args(Operation::Fmt, &values);
        let second = build_args(Operation::Fmt, &values);
        assert_eq!(first, second);
    }
}
