// src/lib.rs

pub mod cli;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod request;
pub mod types;

use std::ffi::OsStr;
use std::fmt::Write as _;
use std::io::Read;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::dag::{DependencyGraph, ScheduleReport, resolve_graph};
use crate::request::{ScheduleRequest, ScheduleResponse, load_from_path, load_from_reader, validate_request};
use crate::types::OutputFormat;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - request loading (file or stdin)
/// - optional strict validation
/// - resolution + diagnostics
/// - output rendering
pub fn run(args: CliArgs) -> Result<()> {
    let stdin = std::io::stdin();
    run_with_stdin(args, stdin.lock())
}

/// Same as [`run`], with `--input -` reading from `stdin` instead of the
/// process's standard input.
pub fn run_with_stdin(args: CliArgs, stdin: impl Read) -> Result<()> {
    let request = load_request(&args, stdin)?;
    info!(tasks = request.tasks.len(), "loaded schedule request");

    if args.strict {
        validate_request(&request).context("request rejected by --strict")?;
    }

    let graph = DependencyGraph::from_tasks(&request.tasks);
    let resolution = resolve_graph(&graph);
    let report = ScheduleReport::from_parts(&request.tasks, &graph, &resolution);
    log_report(&report);

    let response = ScheduleResponse {
        recommended_order: resolution.into_order(),
    };
    let rendered = render(&response, args.report.then_some(&report), args.output)?;
    print!("{rendered}");

    debug!("schedule printed");
    Ok(())
}

fn load_request(args: &CliArgs, stdin: impl Read) -> Result<ScheduleRequest> {
    if args.input.as_os_str() == OsStr::new("-") {
        return load_from_reader(stdin, args.format).context("reading request from stdin");
    }

    let path = args.input.as_path();
    load_from_path(path, args.format).with_context(|| format!("loading request from {path:?}"))
}

fn log_report(report: &ScheduleReport) {
    for d in &report.dangling_dependencies {
        warn!(task = %d.task, dependency = %d.dependency, "ignoring unknown dependency");
    }
    for title in &report.duplicate_titles {
        warn!(task = %title, "task title used more than once; entries merged");
    }
    for cycle in &report.cycles {
        warn!(?cycle, "dependency cycle; these tasks are appended unordered");
    }
    if !report.blocked.is_empty() {
        warn!(blocked = ?report.blocked, "tasks blocked behind a dependency cycle");
    }
}

/// JSON output: the response, plus the report when asked for.
#[derive(Serialize)]
struct ScheduleOutput<'a> {
    #[serde(flatten)]
    response: &'a ScheduleResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a ScheduleReport>,
}

/// Render a response (and optionally its report) for printing.
pub fn render(
    response: &ScheduleResponse,
    report: Option<&ScheduleReport>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&ScheduleOutput { response, report })?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => Ok(render_text(response, report)),
    }
}

fn render_text(response: &ScheduleResponse, report: Option<&ScheduleReport>) -> String {
    let mut out = String::new();

    for (i, title) in response.recommended_order.iter().enumerate() {
        let _ = writeln!(out, "{}. {title}", i + 1);
    }

    let Some(report) = report else {
        return out;
    };

    out.push_str("\nreport:\n");
    if report.is_clean() {
        out.push_str("  no problems found\n");
        return out;
    }
    for d in &report.dangling_dependencies {
        let _ = writeln!(out, "  unknown dependency: {} -> {}", d.task, d.dependency);
    }
    for title in &report.self_dependencies {
        let _ = writeln!(out, "  self dependency: {title}");
    }
    for title in &report.duplicate_titles {
        let _ = writeln!(out, "  duplicate title: {title}");
    }
    for cycle in &report.cycles {
        let _ = writeln!(out, "  cycle: {}", cycle.join(", "));
    }
    if !report.blocked.is_empty() {
        let _ = writeln!(out, "  blocked by cycle: {}", report.blocked.join(", "));
    }
    out
}
