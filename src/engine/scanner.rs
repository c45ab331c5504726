use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Recursively collect check files under `root` that match the configured
/// include globs and none of the ignore globs.
pub fn scan(root: &Path, config: &Config) -> Vec<PathBuf> {
    let ignore_set = build_glob_set(&config.ignore);
    let include_set = build_glob_set(&config.include);
    let mut files = Vec::new();
    walk_dir(root, root, &ignore_set, &include_set, &mut files);
    files.sort();
    files
}

pub(crate) fn build_glob_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    patterns
        .iter()
        .filter_map(|p| GlobBuilder::new(p).case_insensitive(true).build().ok())
        .for_each(|glob| {
            builder.add(glob);
        });
    builder.build().unwrap_or_default()
}

pub(crate) fn matches_glob(path: &Path, root: &Path, set: &GlobSet) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| set.is_match(name))
        || path.strip_prefix(root).is_ok_and(|rel| set.is_match(rel))
}

fn walk_dir(
    dir: &Path,
    root: &Path,
    ignore: &GlobSet,
    include: &GlobSet,
    files: &mut Vec<PathBuf>,
) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if matches_glob(&path, root, ignore) {
            continue;
        }

        // Symlinks are not followed, so a link cycle cannot recurse forever.
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            walk_dir(&path, root, ignore, include, files);
        } else if file_type.is_file() && matches_glob(&path, root, include) {
            files.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_finds_check_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.check"), "// CHECK: a").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a check file").unwrap();
        fs::write(dir.path().join("b.test"), "// CHECK: b").unwrap();

        let files = scan(dir.path(), &Config::default());
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.check"));
        assert!(files[1].ends_with("b.test"));
    }

    #[test]
    fn test_scan_recurses_and_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/deep.check"), "// CHECK: a").unwrap();
        fs::create_dir(dir.path().join("target")).unwrap();
        fs::write(dir.path().join("target/stale.check"), "// CHECK: a").unwrap();

        let files = scan(dir.path(), &Config::default());
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("nested/deep.check"));
    }

    #[test]
    fn test_scan_include_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("UPPER.CHECK"), "// CHECK: a").unwrap();

        let files = scan(dir.path(), &Config::default());
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_scan_custom_include() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("prog.py"), "# CHECK: a").unwrap();
        fs::write(dir.path().join("a.check"), "// CHECK: a").unwrap();

        let mut config = Config::default();
        config.include = vec!["*.py".to_string()];
        let files = scan(dir.path(), &config);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("prog.py"));
    }

    #[test]
    fn test_scan_include_empty_scans_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.check"), "// CHECK: a").unwrap();

        let mut config = Config::default();
        config.include = vec![];
        assert!(scan(dir.path(), &config).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_does_not_follow_symlink_cycle() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/a.check"), "// CHECK: a").unwrap();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("sub/loop")).unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("sub/a.check"),
            dir.path().join("link.check"),
        )
        .unwrap();

        let files = scan(dir.path(), &Config::default());
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("sub/a.check"));
    }

    #[test]
    fn test_invalid_glob_is_skipped() {
        let set = build_glob_set(&["[".to_string(), "*.check".to_string()]);
        assert!(set.is_match("x.check"));
    }
}
