//! Implementation of the `varpath get` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;
use varpath::{PropertyPath, Value};

use crate::data::DataArgs;
use crate::output::diagnostic::report_data_error;
use crate::output::table::{format_results_table, Resolution};

/// Arguments for the get command.
#[derive(Debug, Args)]
pub struct GetArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Paths to resolve (e.g. `user.address.city`, `items.{selected}`)
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code if any path does not resolve.
    #[arg(long)]
    pub strict: bool,
}

/// JSON output format for one resolved path.
#[derive(Debug, Serialize)]
struct ResolutionJson<'a> {
    path: &'a str,
    found: bool,
    value: Option<&'a Value>,
}

/// Resolve every path against `subject`, in argument order.
pub fn resolve_all(subject: &Value, paths: &[String]) -> Vec<Resolution> {
    paths
        .iter()
        .map(|path| {
            let value = PropertyPath::parse(path).resolve(subject);
            debug!(path = %path, found = value.is_some(), "resolved path");
            Resolution {
                path: path.clone(),
                value,
            }
        })
        .collect()
}

/// Run the get command.
pub fn run_get(args: GetArgs) -> Result<i32> {
    let subject = args.data.load().map_err(report_data_error)?;
    let results = resolve_all(&subject, &args.paths);
    let missing = results.iter().filter(|r| r.value.is_none()).count();

    if args.json {
        let json_data: Vec<ResolutionJson<'_>> = results
            .iter()
            .map(|r| ResolutionJson {
                path: &r.path,
                found: r.value.is_some(),
                value: r.value.as_ref(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!("{}", format_results_table(&results));

        let summary = format!("{} of {} paths resolved", results.len() - missing, results.len());
        if missing == 0 {
            println!("{}", summary.if_supports_color(Stream::Stdout, |s| s.green()));
        } else {
            println!("{}", summary.if_supports_color(Stream::Stdout, |s| s.red()));
        }
    }

    if args.strict && missing > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
