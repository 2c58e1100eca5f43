//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_LAYOUT_MULTILINE_TERNARY: &str = "layout.multiline_ternary";

// Codes: layout.multiline_ternary
pub const CODE_EXPECTED_TEST_CONS: &str = "expected_test_cons";
pub const CODE_EXPECTED_CONS_ALT: &str = "expected_cons_alt";
pub const CODE_UNEXPECTED_TEST_CONS: &str = "unexpected_test_cons";
pub const CODE_UNEXPECTED_CONS_ALT: &str = "unexpected_cons_alt";

// Tool-level
pub const CHECK_TOOL_PARSE: &str = "tool.parse";
pub const CODE_PARSE_ERROR: &str = "parse_error";
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

// Messages: layout.multiline_ternary
pub const MSG_EXPECTED_TEST_CONS: &str =
    "Expected newline between test and consequent of ternary expression.";
pub const MSG_EXPECTED_CONS_ALT: &str =
    "Expected newline between consequent and alternate of ternary expression.";
pub const MSG_UNEXPECTED_TEST_CONS: &str =
    "Unexpected newline between test and consequent of ternary expression.";
pub const MSG_UNEXPECTED_CONS_ALT: &str =
    "Unexpected newline between consequent and alternate of ternary expression.";

/// Fixed human-readable message for a finding code.
pub fn message_for_code(code: &str) -> Option<&'static str> {
    match code {
        CODE_EXPECTED_TEST_CONS => Some(MSG_EXPECTED_TEST_CONS),
        CODE_EXPECTED_CONS_ALT => Some(MSG_EXPECTED_CONS_ALT),
        CODE_UNEXPECTED_TEST_CONS => Some(MSG_UNEXPECTED_TEST_CONS),
        CODE_UNEXPECTED_CONS_ALT => Some(MSG_UNEXPECTED_CONS_ALT),
        _ => None,
    }
}
