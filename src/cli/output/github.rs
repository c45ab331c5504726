use std::path::Path;

use crate::types::CheckReport;

pub fn render(report: &CheckReport, project_root: &Path) {
    for file in &report.files {
        let Some(err) = file.error() else {
            continue;
        };
        let rel = super::relative_path(&file.path, project_root);
        let line = err.location().map_or(1, |l| l.line_number);

        println!("::error file={rel},line={line},title=parse-error::{err}");
    }
}
