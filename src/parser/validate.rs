use crate::directive::{Directive, DirectiveKind};

use super::ParseError;

/// Kinds allowed immediately before a `CHECK-NEXT`.
const NEXT_PREDECESSORS: [DirectiveKind; 3] = [
    DirectiveKind::CheckNext,
    DirectiveKind::Check,
    DirectiveKind::CheckLiteral,
];

/// Kinds allowed immediately after a `CHECK-NOT`.
const NOT_FOLLOWERS: [DirectiveKind; 2] = [DirectiveKind::Check, DirectiveKind::CheckLiteral];

pub(crate) fn validate(
    directives: &[Directive],
    source_name: &str,
    check_prefix: &str,
) -> Result<(), ParseError> {
    if directives.is_empty() {
        return Err(ParseError::NoDirectives {
            source_name: source_name.to_string(),
            check_prefix: check_prefix.to_string(),
        });
    }

    check_not_followers(directives, check_prefix)?;
    check_next_predecessors(directives, check_prefix)
}

/// A `CHECK-NOT` only constrains the gap up to the next positive match, so it
/// must be followed by one. The last directive is exempt.
fn check_not_followers(directives: &[Directive], check_prefix: &str) -> Result<(), ParseError> {
    for pair in directives.windows(2) {
        let (directive, after) = (&pair[0], &pair[1]);
        if directive.kind() == DirectiveKind::CheckNot && !NOT_FOLLOWERS.contains(&after.kind()) {
            return Err(ParseError::InvalidFollower {
                directive: directive.render(check_prefix),
                location: directive.location().clone(),
                expected: describe_kinds(&NOT_FOLLOWERS, check_prefix),
                found: after.render(check_prefix),
            });
        }
    }
    Ok(())
}

/// A `CHECK-NEXT` is relative to the previous positive match. A leading
/// `CHECK-NEXT` has no predecessor and is accepted.
fn check_next_predecessors(directives: &[Directive], check_prefix: &str) -> Result<(), ParseError> {
    for pair in directives.windows(2) {
        let (before, directive) = (&pair[0], &pair[1]);
        if directive.kind() == DirectiveKind::CheckNext
            && !NEXT_PREDECESSORS.contains(&before.kind())
        {
            return Err(ParseError::InvalidPredecessor {
                directive: directive.render(check_prefix),
                location: directive.location().clone(),
                expected: describe_kinds(&NEXT_PREDECESSORS, check_prefix),
                found: before.render(check_prefix),
            });
        }
    }
    Ok(())
}

fn describe_kinds(kinds: &[DirectiveKind], check_prefix: &str) -> String {
    kinds
        .iter()
        .map(|k| k.spelling(check_prefix))
        .collect::<Vec<_>>()
        .join(" or ")
}
