use crate::fingerprint::fingerprint_for_span;
use crate::model::SourceSetModel;
use serde_json::json;
use ternguard_types::{ids, Finding, Location, Severity};

/// Files the front-end rejected become `tool.parse` errors. Not configurable.
pub fn run(model: &SourceSetModel, out: &mut Vec<Finding>) {
    for failure in &model.parse_failures {
        out.push(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_PARSE.to_string(),
            code: ids::CODE_PARSE_ERROR.to_string(),
            message: format!("failed to parse {}: {}", failure.path.as_str(), failure.message),
            location: Some(Location::point(
                failure.path.clone(),
                failure.line,
                failure.col,
            )),
            help: Some(
                "Fix the syntax error or exclude the file via `exclude` in ternguard.toml."
                    .to_string(),
            ),
            fingerprint: Some(fingerprint_for_span(
                ids::CHECK_TOOL_PARSE,
                ids::CODE_PARSE_ERROR,
                failure.path.as_str(),
                (failure.line, failure.col),
                (failure.line, failure.col),
            )),
            data: json!({ "path": failure.path.as_str() }),
        });
    }
}
