//! Implementation of the `varpath trace` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;
use varpath::{access, compute_suggestions, PropertyPath, Shape, Value};
use varpath_naming::probed_method_names;

use crate::data::DataArgs;
use crate::output::diagnostic::report_data_error;
use crate::output::table::{format_trace_table, TraceRow};

/// Arguments for the trace command.
#[derive(Debug, Args)]
pub struct TraceArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Path to trace
    pub path: String,

    /// Output the trace as JSON.
    #[arg(long)]
    pub json: bool,
}

/// What happened at one segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepOutcome {
    /// The member exists.
    Found { value: Value },
    /// The member does not exist on the value reached so far. `probed`
    /// lists the accessor methods tried when that value is an object.
    Missing {
        suggestions: Vec<String>,
        probed: Vec<String>,
    },
    /// The member is null but more segments follow.
    NullBeforeEnd,
    /// Not evaluated because an earlier segment ended the walk.
    Skipped,
}

/// One segment of a traced path.
#[derive(Debug, Clone, Serialize)]
pub struct TraceStep {
    /// The segment as written.
    pub segment: String,
    /// The member name after indirection. Empty for skipped steps.
    pub name: String,
    pub outcome: StepOutcome,
}

/// A path walked one segment at a time.
#[derive(Debug, Clone, Serialize)]
pub struct PathTrace {
    pub path: String,
    pub steps: Vec<TraceStep>,
    /// The final value, identical to what `resolve` returns.
    pub value: Option<Value>,
}

/// Walk `path` against `subject`, recording every step.
pub fn trace_path(subject: &Value, path: &str) -> PathTrace {
    let path = PropertyPath::parse(path);
    let last = path.segments().len() - 1;
    let mut steps = Vec::with_capacity(path.segments().len());
    let mut current = Some(subject.clone());

    for (index, segment) in path.segments().iter().enumerate() {
        let Some(value) = current.take() else {
            steps.push(TraceStep {
                segment: segment.to_string(),
                name: String::new(),
                outcome: StepOutcome::Skipped,
            });
            continue;
        };

        let name = segment.name(subject).into_owned();
        let outcome = match access(&value, &name) {
            None => StepOutcome::Missing {
                suggestions: compute_suggestions(&name, &value.keys()),
                probed: probed_members(&value, &name),
            },
            Some(next) if index < last && next.is_null() => StepOutcome::NullBeforeEnd,
            Some(next) => {
                current = Some(next.clone());
                StepOutcome::Found { value: next }
            }
        };
        debug!(segment = %segment, name = %name, ?outcome, "traced segment");
        steps.push(TraceStep {
            segment: segment.to_string(),
            name,
            outcome,
        });
    }

    PathTrace {
        path: path.as_str().to_string(),
        steps,
        value: current,
    }
}

/// Accessor methods and the field an object lookup tried for `name`.
fn probed_members(value: &Value, name: &str) -> Vec<String> {
    if value.shape() != Shape::Object {
        return Vec::new();
    }
    let mut probed: Vec<String> = probed_method_names(name)
        .into_iter()
        .map(|method| format!("{method}()"))
        .collect();
    probed.push(format!("field {name}"));
    probed
}

/// Run the trace command.
pub fn run_trace(args: TraceArgs) -> Result<i32> {
    let subject = args.data.load().map_err(report_data_error)?;
    let trace = trace_path(&subject, &args.path);

    if args.json {
        let json_output = serde_json::to_string_pretty(&trace).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let rows: Vec<TraceRow> = trace
            .steps
            .iter()
            .map(|step| TraceRow {
                segment: step.segment.clone(),
                name: step.name.clone(),
                result: match &step.outcome {
                    StepOutcome::Found { value } => value.to_string(),
                    StepOutcome::Missing { .. } => "(missing)".to_string(),
                    StepOutcome::NullBeforeEnd => "null (stops here)".to_string(),
                    StepOutcome::Skipped => "(skipped)".to_string(),
                },
            })
            .collect();
        println!("{}", format_trace_table(&rows));

        for step in &trace.steps {
            if let StepOutcome::Missing {
                suggestions,
                probed,
            } = &step.outcome
            {
                if !probed.is_empty() {
                    println!("\nTried: {}", probed.join(", "));
                }
                if !suggestions.is_empty() {
                    println!("\nDid you mean: {}?", suggestions.join(", "));
                }
            }
        }

        match &trace.value {
            Some(value) => println!(
                "{}",
                format!("=> {value}").if_supports_color(Stream::Stdout, |s| s.green())
            ),
            None => println!(
                "{}",
                "=> (absent)".if_supports_color(Stream::Stdout, |s| s.red())
            ),
        }
    }

    if trace.value.is_some() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
