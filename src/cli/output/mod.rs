pub mod github;
pub mod json;
pub mod text;

use std::path::Path;

use crate::cli::OutputFormat;
use crate::types::CheckReport;

pub fn render(report: &CheckReport, project_root: &Path, format: OutputFormat, verbose: bool) {
    match format {
        OutputFormat::Text => text::render(report, project_root, verbose),
        OutputFormat::Json => json::render(report, project_root),
        OutputFormat::Github => github::render(report, project_root),
    }
}

fn relative_path(file: &Path, project_root: &Path) -> String {
    file.strip_prefix(project_root)
        .unwrap_or(file)
        .display()
        .to_string()
}
