use thiserror::Error;

use crate::directive::DirectiveKind;
use crate::types::FileLocation;

/// A check file that is structurally invalid. The whole file is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("'{source_name}' does not contain any {check_prefix} directives")]
    NoDirectives {
        source_name: String,
        check_prefix: String,
    },

    #[error("{directive} must have a {expected} directive before it instead of a {found}")]
    InvalidPredecessor {
        directive: String,
        location: FileLocation,
        expected: String,
        found: String,
    },

    #[error("{directive} must have a {expected} directive after it instead of a {found}")]
    InvalidFollower {
        directive: String,
        location: FileLocation,
        expected: String,
        found: String,
    },
}

impl ParseError {
    /// Location of the offending directive, if the error is about one.
    pub fn location(&self) -> Option<&FileLocation> {
        match self {
            ParseError::NoDirectives { .. } => None,
            ParseError::InvalidPredecessor { location, .. }
            | ParseError::InvalidFollower { location, .. } => Some(location),
        }
    }
}

/// The configured prefixes could not be turned into recognition patterns.
#[derive(Debug, Error)]
#[error("invalid recognition pattern for {kind} directives: {source}")]
pub struct DiscoveryError {
    pub kind: DirectiveKind,
    #[source]
    pub source: regex::Error,
}
