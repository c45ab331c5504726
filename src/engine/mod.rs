pub(crate) mod scanner;

use anyhow::Result;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::warn;

use crate::config::Config;
use crate::parser::{CheckFile, CheckFileParser};
use crate::types::{CheckReport, FileError, FileReport};

/// Parse every check file named by `paths`. Directories are walked using the
/// configured include/ignore globs; files are taken as given. A file that
/// cannot be read is reported as a failed file.
pub fn run(paths: &[PathBuf], config: &Config) -> Result<CheckReport> {
    let files = collect_files(paths, config);
    if files.is_empty() {
        anyhow::bail!("No check files found in {}", display_paths(paths));
    }

    let parser = CheckFileParser::new(&config.check_prefix, &config.comment_prefix)?;

    let mut reports: Vec<FileReport> = files
        .par_iter()
        .map(|p| {
            let outcome = match CheckFile::read(p) {
                Ok(file) => parser.parse(&file).map_err(FileError::from),
                Err(e) => {
                    warn!("failed to read {}: {e}", p.display());
                    Err(FileError::Unreadable {
                        path: p.display().to_string(),
                        message: e.to_string(),
                    })
                }
            };
            FileReport {
                path: p.clone(),
                outcome,
            }
        })
        .collect();

    reports.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(CheckReport { files: reports })
}

fn collect_files(paths: &[PathBuf], config: &Config) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(scanner::scan(path, config));
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    files.dedup();
    files
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::DirectiveKind;
    use crate::parser::ParseError;
    use crate::types::FileError;
    use std::fs;
    use std::path::Path;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_run_parses_directory() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.check", "// CHECK: foo\n// CHECK-NEXT: bar\n");
        write(dir.path(), "b.check", "nothing here\n");

        let report = run(&[dir.path().to_path_buf()], &Config::default()).unwrap();
        assert_eq!(report.files.len(), 2);
        assert!(report.files[0].path.ends_with("a.check"));
        assert_eq!(report.files[0].directives().len(), 2);
        assert!(matches!(
            report.files[1].error(),
            Some(FileError::Parse(ParseError::NoDirectives { .. }))
        ));
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_run_accepts_explicit_file_outside_include() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "prog.py", "# CHECK-L: x\n");

        let mut config = Config::default();
        config.comment_prefix = "#".to_string();
        let report = run(&[path], &config).unwrap();
        assert_eq!(report.files.len(), 1);
        assert_eq!(
            report.files[0].directives()[0].kind(),
            DirectiveKind::CheckLiteral
        );
    }

    #[test]
    fn test_run_deduplicates_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "a.check", "// CHECK: foo\n");

        let paths = [path.clone(), dir.path().to_path_buf(), path];
        let report = run(&paths, &Config::default()).unwrap();
        assert_eq!(report.files.len(), 1);
    }

    #[test]
    fn test_run_empty_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&[dir.path().to_path_buf()], &Config::default());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No check files found"));
    }

    #[test]
    fn test_run_invalid_prefix_fails_before_parsing() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.check", "// CHECK: foo\n");

        let mut config = Config::default();
        config.comment_prefix = "(".to_string();
        let result = run(&[dir.path().to_path_buf()], &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_reports_unreadable_file_as_error() {
        let dir = tempfile::tempdir().unwrap();
        let good = write(dir.path(), "a.check", "// CHECK: foo\n");
        let missing = dir.path().join("missing.check");

        let report = run(&[good, missing], &Config::default()).unwrap();
        assert_eq!(report.files.len(), 2);
        assert_eq!(report.error_count(), 1);
        assert!(report.files[0].error().is_none());
        assert!(matches!(
            report.files[1].error(),
            Some(FileError::Unreadable { .. })
        ));
    }

    #[test]
    fn test_run_only_missing_file_has_errors() {
        let report = run(
            &[PathBuf::from("/nonexistent/typo.check")],
            &Config::default(),
        )
        .unwrap();
        assert_eq!(report.files.len(), 1);
        assert!(report.has_errors());
        assert_eq!(report.directive_count(), 0);
    }
}
