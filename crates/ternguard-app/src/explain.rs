//! The `explain` use case: look up check/code documentation.

use std::fmt::{self, Write};
use ternguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available check_ids and codes.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a check_id or code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_explanation(&mut out, exp);
    out
}

fn write_explanation(out: &mut String, exp: &Explanation) -> fmt::Result {
    writeln!(out, "{}", exp.title)?;
    writeln!(out, "{}", "=".repeat(exp.title.chars().count()))?;
    writeln!(out)?;
    writeln!(out, "{}", exp.description)?;
    writeln!(out)?;
    writeln!(out, "Remediation\n-----------\n{}", exp.remediation)?;
    writeln!(out)?;
    writeln!(out, "Examples\n--------")?;
    writeln!(out)?;
    writeln!(out, "Before (violation):\n```js\n{}\n```", exp.examples.before)?;
    writeln!(out)?;
    writeln!(out, "After (fixed):\n```js\n{}\n```", exp.examples.after)
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let bullets = |items: &[&str]| {
        items
            .iter()
            .map(|item| format!("  - {item}\n"))
            .collect::<String>()
    };
    format!(
        "Unknown check_id or code: {identifier}\n\nAvailable check_ids:\n{}\nAvailable codes:\n{}",
        bullets(check_ids),
        bullets(codes),
    )
}
