//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after code examples.
    pub examples: ExamplePair,
}

/// Before and after code examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would trigger a finding.
    pub before: &'static str,
    /// Code that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_LAYOUT_MULTILINE_TERNARY => Some(explain_multiline_ternary()),
        ids::CHECK_TOOL_PARSE => Some(explain_parse_error()),
        // Codes
        ids::CODE_EXPECTED_TEST_CONS => Some(explain_expected_test_cons()),
        ids::CODE_EXPECTED_CONS_ALT => Some(explain_expected_cons_alt()),
        ids::CODE_UNEXPECTED_TEST_CONS => Some(explain_unexpected_test_cons()),
        ids::CODE_UNEXPECTED_CONS_ALT => Some(explain_unexpected_cons_alt()),
        ids::CODE_PARSE_ERROR => Some(explain_parse_error()),
        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_LAYOUT_MULTILINE_TERNARY, ids::CHECK_TOOL_PARSE]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_EXPECTED_TEST_CONS,
        ids::CODE_EXPECTED_CONS_ALT,
        ids::CODE_UNEXPECTED_TEST_CONS,
        ids::CODE_UNEXPECTED_CONS_ALT,
        ids::CODE_PARSE_ERROR,
    ]
}

// --- Check-level explanations ---

fn explain_multiline_ternary() -> Explanation {
    Explanation {
        title: "Multiline Ternary Layout",
        description: "\
Enforces a consistent line-break policy between the operands of conditional
(ternary) expressions: `test ? consequent : alternate`.

Two boundaries are checked per expression: test -> consequent and
consequent -> alternate. The configured `style` decides what is expected:
- `always` (default): both boundaries must contain a line break
- `always-multiline`: like `always`, but only when the expression already
  spans more than one line
- `never`: neither boundary may contain a line break

Redundant parentheses around an operand count as part of that operand, so
`(a\\n)` ends on the line of its closing parenthesis. Nested conditionals are
checked independently.",
        remediation: "\
Move the `?` / `:` operands onto their own lines (`always`, `always-multiline`)
or join them onto one line (`never`). To change the policy, set `style` under
[checks.\"layout.multiline_ternary\"] in ternguard.toml.",
        examples: ExamplePair {
            before: "const x = ready ? start() : wait();",
            after: "const x = ready\n    ? start()\n    : wait();",
        },
    }
}

fn explain_parse_error() -> Explanation {
    Explanation {
        title: "Parse Error",
        description: "\
The source file is not valid JavaScript (or not valid UTF-8), so no layout
checks ran for it. The finding points at the first offending token.",
        remediation: "\
Fix the syntax error, or exclude the file with an `exclude` glob in
ternguard.toml if it is not meant to be analysed.",
        examples: ExamplePair {
            before: "a ? b",
            after: "a ? b : c",
        },
    }
}

// --- Code-level explanations ---

fn explain_expected_test_cons() -> Explanation {
    Explanation {
        title: "Expected Newline Between Test and Consequent",
        description: "\
The test and the consequent of a ternary expression end and start on the same
line, but the active style (`always`, or `always-multiline` on a multiline
expression) requires a line break there. The finding covers the test,
including any parentheses wrapping it.",
        remediation: "\
Break the line before (or after) the `?` operator.",
        examples: ExamplePair {
            before: "a ? b\n: c",
            after: "a\n? b\n: c",
        },
    }
}

fn explain_expected_cons_alt() -> Explanation {
    Explanation {
        title: "Expected Newline Between Consequent and Alternate",
        description: "\
The consequent and the alternate of a ternary expression end and start on the
same line, but the active style requires a line break there. The finding
covers the consequent, including any parentheses wrapping it.",
        remediation: "\
Break the line before (or after) the `:` operator.",
        examples: ExamplePair {
            before: "a\n? b : c",
            after: "a\n? b\n: c",
        },
    }
}

fn explain_unexpected_test_cons() -> Explanation {
    Explanation {
        title: "Unexpected Newline Between Test and Consequent",
        description: "\
Under the `never` style, the end of the test and the start of the consequent
must share a line. Line breaks inside an operand, or inside the parentheses
wrapping it, are allowed.",
        remediation: "\
Join the test and the `? consequent` part onto one line.",
        examples: ExamplePair {
            before: "a\n? b : c",
            after: "a ? b : c",
        },
    }
}

fn explain_unexpected_cons_alt() -> Explanation {
    Explanation {
        title: "Unexpected Newline Between Consequent and Alternate",
        description: "\
Under the `never` style, the end of the consequent and the start of the
alternate must share a line.",
        remediation: "\
Join the consequent and the `: alternate` part onto one line.",
        examples: ExamplePair {
            before: "a ? b\n: c",
            after: "a ? b : c",
        },
    }
}
