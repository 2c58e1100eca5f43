use crate::fingerprint::fingerprint_for_span;
use crate::model::{SourceFileModel, SourceSetModel};
use crate::policy::{CheckPolicy, EffectiveConfig};
use crate::ternary::{analyze, DiagnosticKind, TernaryDiagnostic};
use serde_json::json;
use ternguard_types::{ids, Finding, Location};

pub fn run(model: &SourceSetModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_LAYOUT_MULTILINE_TERNARY) else {
        return;
    };

    for file in &model.files {
        let diagnostics = analyze(file, policy.style);
        tracing::debug!(
            path = file.path.as_str(),
            diagnostics = diagnostics.len(),
            "checked conditionals"
        );
        out.extend(
            diagnostics
                .into_iter()
                .map(|diag| to_finding(file, policy, diag)),
        );
    }
}

fn to_finding(file: &SourceFileModel, policy: &CheckPolicy, diag: TernaryDiagnostic) -> Finding {
    let start = diag.range.start;
    let end = diag.range.end;
    let code = diag.kind.code();

    Finding {
        severity: policy.severity,
        check_id: ids::CHECK_LAYOUT_MULTILINE_TERNARY.to_string(),
        code: code.to_string(),
        message: diag.kind.message().to_string(),
        location: Some(Location {
            path: file.path.clone(),
            line: Some(start.line),
            col: Some(start.column),
            end_line: Some(end.line),
            end_col: Some(end.column),
        }),
        help: Some(help_for(diag.kind).to_string()),
        fingerprint: Some(fingerprint_for_span(
            ids::CHECK_LAYOUT_MULTILINE_TERNARY,
            code,
            file.path.as_str(),
            (start.line, start.column),
            (end.line, end.column),
        )),
        data: json!({
            "style": policy.style.as_str(),
            "boundary": diag.kind.boundary().as_str(),
        }),
    }
}

fn help_for(kind: DiagnosticKind) -> &'static str {
    match kind {
        DiagnosticKind::ExpectedTestCons => "Put the consequent (`? ...`) on its own line.",
        DiagnosticKind::ExpectedConsAlt => "Put the alternate (`: ...`) on its own line.",
        DiagnosticKind::UnexpectedTestCons => {
            "Join the test and the consequent (`? ...`) onto one line."
        }
        DiagnosticKind::UnexpectedConsAlt => {
            "Join the consequent and the alternate (`: ...`) onto one line."
        }
    }
}
