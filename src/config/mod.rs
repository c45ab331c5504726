use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

use crate::cli::OutputFormat;

pub const CONFIG_FILE_NAME: &str = ".outputcheckrc.toml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub format: OutputFormat,
    pub check_prefix: String,
    pub comment_prefix: String,
    pub include: Vec<String>,
    pub ignore: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            check_prefix: "CHECK".into(),
            comment_prefix: "//".into(),
            include: vec!["*.check".into(), "*.test".into()],
            ignore: vec![".git".into(), "target".into()],
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let path = config_path.map(Path::to_path_buf).or_else(|| {
            let default = project_root.join(CONFIG_FILE_NAME);
            default.exists().then_some(default)
        });

        match path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content).map_err(|e| anyhow::anyhow!("Config parse error: {e}"))
            }
            None => Ok(Config::default()),
        }
    }

    /// Command-line values take precedence over the file.
    pub fn with_overrides(
        mut self,
        check_prefix: Option<String>,
        comment_prefix: Option<String>,
    ) -> Self {
        if let Some(prefix) = check_prefix {
            self.check_prefix = prefix;
        }
        if let Some(prefix) = comment_prefix {
            self.comment_prefix = prefix;
        }
        self
    }

    pub const fn default_toml() -> &'static str {
        r#"# outputcheck configuration

# Prefix that starts every directive, e.g. CHECK in `// CHECK-NEXT: foo`.
check_prefix = "CHECK"

# Line comment prefix of the host language. Interpreted as a regex
# fragment, so "(#|//)" accepts both styles.
comment_prefix = "//"

# Which files to parse when a directory is given (glob patterns,
# case-insensitive). Files named explicitly are always parsed.
include = ["*.check", "*.test"]

# Directories and files to skip while walking
ignore = [".git", "target"]
"#
    }
}
