use owo_colors::OwoColorize;
use std::path::Path;

use crate::types::CheckReport;

pub fn render(report: &CheckReport, project_root: &Path, verbose: bool) {
    println!();
    for file in &report.files {
        let rel = super::relative_path(&file.path, project_root);

        match &file.outcome {
            Ok(directives) => {
                println!(
                    "  {} {} {}",
                    "\u{2713}".green(),
                    rel,
                    format!("({} directives)", directives.len()).dimmed()
                );
                if verbose {
                    for d in directives {
                        for p in d.patterns() {
                            println!(
                                "      L{:<4} {:<14} {}",
                                p.location.line_number,
                                d.kind().name().cyan(),
                                p.text
                            );
                        }
                    }
                }
            }
            Err(err) => {
                println!("  {} {}", "\u{2717}".red(), rel.red().bold());
                println!("      {err}");
            }
        }
    }

    let errors = report.error_count();
    let total = report.files.len();

    println!();
    println!("  {}", "\u{2501}".repeat(50).dimmed());
    if errors == 0 {
        println!(
            "  {} ({} directives across {} files)",
            "all check files are valid".green(),
            report.directive_count(),
            total.bold()
        );
    } else {
        println!(
            "  {} of {} files",
            format!("{errors} invalid").red().bold(),
            total.bold()
        );
    }
    println!("  {}", "\u{2501}".repeat(50).dimmed());
    println!();
}
