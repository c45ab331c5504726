use crate::directive::DirectiveKind;

pub fn summary(kind: DirectiveKind) -> &'static str {
    match kind {
        DirectiveKind::Check => "Pattern must appear later in the output",
        DirectiveKind::CheckNext => "Pattern must appear on the very next line",
        DirectiveKind::CheckNot => "Patterns must not appear before the next match",
        DirectiveKind::CheckLiteral => "Exact text must appear later in the output",
    }
}

/// One row per kind, spelled with `check_prefix`.
pub fn list_kinds(check_prefix: &str) -> String {
    let mut out = String::from("Available directive kinds:\n\n");
    for kind in DirectiveKind::ALL {
        out.push_str(&format!(
            "  {:<16} {:<14} {}\n",
            kind.name(),
            kind.spelling(check_prefix),
            summary(kind)
        ));
    }
    out.push_str("\nRun `outputcheck explain <kind>` for details.");
    out
}

pub fn explain(kind: &str) -> Option<&'static str> {
    match DirectiveKind::from_name(kind)? {
        DirectiveKind::Check => Some(
            "check: the pattern must match some line of the output\n\n\
             Written as `CHECK: <pattern>`. Matches are searched in order: each\n\
             CHECK starts looking after the line matched by the directive before it.\n\n\
             Example:\n  \
             // CHECK: entering main\n  \
             // CHECK: leaving main",
        ),
        DirectiveKind::CheckNext => Some(
            "check-next: the pattern must match the line right after the previous match\n\n\
             Written as `CHECK-NEXT: <pattern>`. It must directly follow a CHECK,\n\
             CHECK-NEXT or CHECK-L directive. A CHECK-NEXT at the start of the file\n\
             is relative to the first line of output.\n\n\
             Example:\n  \
             // CHECK: begin\n  \
             // CHECK-NEXT: step 1\n  \
             // CHECK-NEXT: step 2",
        ),
        DirectiveKind::CheckNot => Some(
            "check-not: none of the patterns may appear between the surrounding matches\n\n\
             Written as `CHECK-NOT: <pattern>`. Consecutive CHECK-NOT lines are\n\
             merged into one directive holding all of their patterns. Unless it is\n\
             the last directive in the file, it must be followed by a CHECK or\n\
             CHECK-L directive that ends the searched region.\n\n\
             Example:\n  \
             // CHECK-NOT: error\n  \
             // CHECK-NOT: warning\n  \
             // CHECK: done",
        ),
        DirectiveKind::CheckLiteral => Some(
            "check-literal: the text must appear verbatim, with no pattern syntax\n\n\
             Written as `CHECK-L: <text>`. Behaves like CHECK, but characters that\n\
             would otherwise be pattern syntax are matched literally.\n\n\
             Example:\n  \
             // CHECK-L: result = [1, 2, 3] (ok)",
        ),
    }
}
