mod error;
pub(crate) mod types;
mod validate;

use regex::Regex;
use tracing::debug;

use crate::directive::{Directive, DirectiveKind};
use crate::types::FileLocation;

pub use error::{DiscoveryError, ParseError};
pub use types::CheckFile;

/// One row of the recognition table: a compiled line pattern and the kind
/// of directive it produces.
#[derive(Debug)]
struct DirectiveSpec {
    regex: Regex,
    kind: DirectiveKind,
}

/// Turns check files into validated directive sequences.
///
/// The recognition table is built once in [`CheckFileParser::new`] and never
/// changes afterwards, so a parser can be shared between threads and reused
/// for any number of files.
#[derive(Debug)]
pub struct CheckFileParser {
    check_prefix: String,
    specs: Vec<DirectiveSpec>,
}

impl CheckFileParser {
    /// `check_prefix` and `comment_prefix` are regex fragments, so a comment
    /// prefix such as `(#|//)` accepts either comment style. A fragment that
    /// does not compile is reported before any input is read.
    pub fn new(check_prefix: &str, comment_prefix: &str) -> Result<Self, DiscoveryError> {
        let specs = build_specs(
            DirectiveKind::ALL.map(|kind| (kind, kind.token())),
            check_prefix,
            comment_prefix,
        )?;

        debug!(
            directives = ?specs.iter().map(|s| (s.kind, s.regex.as_str())).collect::<Vec<_>>(),
            "Found directives"
        );

        Ok(Self {
            check_prefix: check_prefix.to_string(),
            specs,
        })
    }

    pub fn check_prefix(&self) -> &str {
        &self.check_prefix
    }

    pub fn parse_str(&self, name: &str, content: &str) -> Result<Vec<Directive>, ParseError> {
        self.parse(&CheckFile::new(name, content))
    }

    pub fn parse(&self, file: &CheckFile) -> Result<Vec<Directive>, ParseError> {
        let mut directives: Vec<Directive> = Vec::new();

        for (line_number, line) in file.lines() {
            let Some((kind, text)) = self.recognize(line) else {
                continue;
            };
            let location = FileLocation::new(file.name.as_str(), line_number);

            // Consecutive CHECK-NOT lines become one directive with several patterns.
            if let (DirectiveKind::CheckNot, Some(Directive::CheckNot(not))) =
                (kind, directives.last_mut())
            {
                debug!("{location}: added pattern {text:?} to {kind} directive");
                not.add_pattern(text, location);
            } else {
                let directive = Directive::new(kind, text, location);
                debug!("Creating directive {}", directive.render(&self.check_prefix));
                directives.push(directive);
            }
        }

        validate::validate(&directives, &file.name, &self.check_prefix)?;
        Ok(directives)
    }

    /// First table entry that matches wins; a line yields at most one directive.
    fn recognize<'a>(&self, line: &'a str) -> Option<(DirectiveKind, &'a str)> {
        self.specs.iter().find_map(|spec| {
            spec.regex
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| (spec.kind, m.as_str()))
        })
    }
}

/// Compile one line pattern per kind, in the given order. Kinds without a
/// token have no written form and get no entry.
fn build_specs(
    kinds: impl IntoIterator<Item = (DirectiveKind, Option<&'static str>)>,
    check_prefix: &str,
    comment_prefix: &str,
) -> Result<Vec<DirectiveSpec>, DiscoveryError> {
    kinds
        .into_iter()
        .filter_map(|(kind, token)| token.map(|token| (kind, token)))
        .map(|(kind, token)| {
            let pattern = format!(
                r"^\s*{comment_prefix}\s*{check_prefix}{}\s*(.+)$",
                regex::escape(token)
            );
            Regex::new(&pattern)
                .map(|regex| DirectiveSpec { regex, kind })
                .map_err(|source| DiscoveryError { kind, source })
        })
        .collect()
}
