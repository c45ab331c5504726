use serde::Serialize;
use std::path::Path;

use crate::directive::Directive;
use crate::types::CheckReport;

#[derive(Serialize)]
struct JsonOutput<'a> {
    files: Vec<JsonFile<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    file: String,
    directives: &'a [Directive],
    error: Option<JsonError>,
}

#[derive(Serialize)]
struct JsonError {
    message: String,
    line: Option<usize>,
}

#[derive(Serialize)]
struct JsonSummary {
    files: usize,
    errors: usize,
    directives: usize,
}

fn build_output<'a>(report: &'a CheckReport, project_root: &Path) -> JsonOutput<'a> {
    let files = report
        .files
        .iter()
        .map(|f| JsonFile {
            file: super::relative_path(&f.path, project_root),
            directives: f.directives(),
            error: f.error().map(|e| JsonError {
                message: e.to_string(),
                line: e.location().map(|l| l.line_number),
            }),
        })
        .collect();

    JsonOutput {
        files,
        summary: JsonSummary {
            files: report.files.len(),
            errors: report.error_count(),
            directives: report.directive_count(),
        },
    }
}

pub fn render(report: &CheckReport, project_root: &Path) {
    let output = build_output(report, project_root);
    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("failed to serialize report: {e}"),
    }
}
