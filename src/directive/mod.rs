//! The set of directive kinds a check file can contain.
//!
//! `DirectiveKind::ALL` is the only place a kind has to be registered: the
//! parser builds its recognition table from it, so adding a variant here is
//! enough for discovery to pick it up.

use serde::Serialize;

use crate::types::FileLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectiveKind {
    Check,
    CheckNext,
    CheckNot,
    CheckLiteral,
}

impl DirectiveKind {
    /// Discovery order. The first recognition pattern that matches a line
    /// wins, so more specific tokens are listed before less specific ones.
    pub const ALL: [DirectiveKind; 4] = [
        DirectiveKind::CheckNext,
        DirectiveKind::CheckNot,
        DirectiveKind::CheckLiteral,
        DirectiveKind::Check,
    ];

    /// Literal suffix that follows the check prefix, e.g. `-NEXT:` in
    /// `CHECK-NEXT:`. A kind without a token is skipped during discovery.
    pub const fn token(self) -> Option<&'static str> {
        Some(match self {
            DirectiveKind::Check => ":",
            DirectiveKind::CheckNext => "-NEXT:",
            DirectiveKind::CheckNot => "-NOT:",
            DirectiveKind::CheckLiteral => "-L:",
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            DirectiveKind::Check => "check",
            DirectiveKind::CheckNext => "check-next",
            DirectiveKind::CheckNot => "check-not",
            DirectiveKind::CheckLiteral => "check-literal",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// How this kind is spelled in a check file with the given prefix.
    pub fn spelling(self, check_prefix: &str) -> String {
        format!("{check_prefix}{}", self.token().unwrap_or_default())
    }
}

impl std::fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One raw pattern string exactly as captured from the check file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern {
    pub text: String,
    pub location: FileLocation,
}

impl Pattern {
    pub fn new(text: impl Into<String>, location: FileLocation) -> Self {
        Self {
            text: text.into(),
            location,
        }
    }
}

/// Patterns of a negative-match directive. Consecutive `CHECK-NOT` lines
/// accumulate here instead of becoming separate directives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotPatterns {
    pub patterns: Vec<Pattern>,
}

impl NotPatterns {
    pub fn add_pattern(&mut self, text: impl Into<String>, location: FileLocation) {
        self.patterns.push(Pattern::new(text, location));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Directive {
    Check(Pattern),
    CheckNext(Pattern),
    CheckNot(NotPatterns),
    CheckLiteral(Pattern),
}

impl Directive {
    pub fn new(kind: DirectiveKind, text: impl Into<String>, location: FileLocation) -> Self {
        let pattern = Pattern::new(text, location);
        match kind {
            DirectiveKind::Check => Directive::Check(pattern),
            DirectiveKind::CheckNext => Directive::CheckNext(pattern),
            DirectiveKind::CheckNot => Directive::CheckNot(NotPatterns {
                patterns: vec![pattern],
            }),
            DirectiveKind::CheckLiteral => Directive::CheckLiteral(pattern),
        }
    }

    pub const fn kind(&self) -> DirectiveKind {
        match self {
            Directive::Check(_) => DirectiveKind::Check,
            Directive::CheckNext(_) => DirectiveKind::CheckNext,
            Directive::CheckNot(_) => DirectiveKind::CheckNot,
            Directive::CheckLiteral(_) => DirectiveKind::CheckLiteral,
        }
    }

    /// Patterns in the order they were encountered. Always non-empty.
    pub fn patterns(&self) -> &[Pattern] {
        match self {
            Directive::Check(p) | Directive::CheckNext(p) | Directive::CheckLiteral(p) => {
                std::slice::from_ref(p)
            }
            Directive::CheckNot(not) => &not.patterns,
        }
    }

    /// Location of the line that introduced this directive.
    pub fn location(&self) -> &FileLocation {
        &self.patterns()[0].location
    }

    /// Human-readable form for diagnostics, e.g. `CHECK-NOT: foo, bar (t.txt:1)`.
    pub fn render(&self, check_prefix: &str) -> String {
        let texts: Vec<&str> = self.patterns().iter().map(|p| p.text.as_str()).collect();
        format!(
            "'{} {}' ({})",
            self.kind().spelling(check_prefix),
            texts.join(", "),
            self.location()
        )
    }
}
