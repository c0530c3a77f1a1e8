//! `validate-ssot` command.

use std::env;
use std::path::Path;

use serde::Serialize;

use crate::cli::ValidateCli;
use crate::config::DocLayout;
use crate::context::ServiceContext;
use crate::validate::{self, CheckKind, Progress, ValidateError, ValidationReport};

/// Tri-state result of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every check passed.
    Passed,
    /// At least one check found a violation.
    Failed,
    /// The source-of-truth document is missing; no check ran.
    SourceMissing,
}

impl Outcome {
    /// Process exit status for this outcome.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Passed => 0,
            Self::Failed => 1,
            Self::SourceMissing => 2,
        }
    }
}

#[derive(Serialize)]
struct JsonReport {
    status: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    errors: Vec<JsonViolation>,
}

#[derive(Serialize)]
struct JsonViolation {
    check: CheckKind,
    message: String,
}

/// Execute the `validate-ssot` command against the current directory.
///
/// # Errors
///
/// Returns an error string if the current directory cannot be determined
/// or the JSON report cannot be serialized.
pub fn run(cli: &ValidateCli) -> Result<Outcome, String> {
    let root = env::current_dir().map_err(|e| format!("failed to get current directory: {e}"))?;
    let ctx = ServiceContext::live();
    run_in(&ctx, &root, &DocLayout::default(), cli)
}

/// Validate `root` and print the report.
///
/// # Errors
///
/// Returns an error string if the JSON report cannot be serialized.
pub fn run_in(
    ctx: &ServiceContext,
    root: &Path,
    layout: &DocLayout,
    cli: &ValidateCli,
) -> Result<Outcome, String> {
    let verbose = cli.verbose && !cli.json;
    let result = validate::validate(ctx, root, layout, |event| {
        if verbose {
            print_progress(layout, event);
        }
    });

    let outcome = match &result {
        Ok(report) if report.passed() => Outcome::Passed,
        Ok(_) => Outcome::Failed,
        Err(ValidateError::SourceOfTruthMissing { .. }) => Outcome::SourceMissing,
    };

    if cli.json {
        println!("{}", json_report(outcome, &result)?);
    } else {
        match &result {
            Ok(report) if report.passed() => println!("✓ SSOT validation OK"),
            Ok(report) => eprintln!("{}", validate::format_failure(report)),
            Err(err) => eprintln!("✗ {err}"),
        }
    }
    Ok(outcome)
}

fn print_progress(layout: &DocLayout, event: Progress<'_>) {
    match event {
        Progress::Checking(CheckKind::RequiredFiles) => println!("Checking required files..."),
        Progress::Checking(CheckKind::Links) => {
            println!("Checking {} links...", layout.source_of_truth);
        }
        Progress::Checking(CheckKind::PlanPointer) => {
            println!("Checking {} pointer...", layout.plan);
        }
        Progress::LinkResolved(target) => println!("  ✓ {target}"),
    }
}

fn json_report(
    status: Outcome,
    result: &Result<ValidationReport, ValidateError>,
) -> Result<String, String> {
    let report = match result {
        Ok(report) => JsonReport {
            status,
            error: None,
            errors: report
                .violations
                .iter()
                .map(|v| JsonViolation { check: v.check(), message: v.to_string() })
                .collect(),
        },
        Err(err) => JsonReport { status, error: Some(err.to_string()), errors: Vec::new() },
    };
    serde_json::to_string_pretty(&report).map_err(|e| format!("failed to serialize report: {e}"))
}
