use super::boundary::{first_line, last_line};
use super::evaluate::{evaluate, Boundary, TernaryDiagnostic};
use crate::model::{NodeKind, SourceFileModel, SyntaxNode, TokenStream};
use crate::policy::TernaryStyle;

/// Check every conditional expression in `file`.
pub fn analyze(file: &SourceFileModel, style: TernaryStyle) -> Vec<TernaryDiagnostic> {
    analyze_nodes(&file.tokens, &file.roots, style)
}

/// Check every conditional reachable from `roots`, nested ones included.
///
/// Each conditional is judged on its own operands only. The result is sorted with
/// [`sort_diagnostics`].
pub fn analyze_nodes(
    tokens: &TokenStream,
    roots: &[SyntaxNode],
    style: TernaryStyle,
) -> Vec<TernaryDiagnostic> {
    let mut out = Vec::new();
    let mut stack: Vec<&SyntaxNode> = roots.iter().rev().collect();

    while let Some(node) = stack.pop() {
        match &node.kind {
            NodeKind::Conditional {
                test,
                consequent,
                alternate,
            } => {
                let whole_span_multiline = style == TernaryStyle::AlwaysMultiline
                    && first_line(tokens, test) != last_line(tokens, alternate);
                tracing::trace!(range = %node.range, whole_span_multiline, "conditional");

                out.extend(evaluate(
                    tokens,
                    test,
                    consequent,
                    Boundary::TestConsequent,
                    style,
                    whole_span_multiline,
                ));
                out.extend(evaluate(
                    tokens,
                    consequent,
                    alternate,
                    Boundary::ConsequentAlternate,
                    style,
                    whole_span_multiline,
                ));

                stack.push(alternate);
                stack.push(consequent);
                stack.push(test);
            }
            NodeKind::Expression { children, .. } => stack.extend(children.iter().rev()),
        }
    }

    sort_diagnostics(&mut out);
    out
}

/// Source order: start ascending, then end descending, then kind.
pub fn sort_diagnostics(diagnostics: &mut [TernaryDiagnostic]) {
    diagnostics.sort_by(|a, b| {
        a.range
            .start
            .cmp(&b.range.start)
            .then(b.range.end.cmp(&a.range.end))
            .then(a.kind.cmp(&b.kind))
    });
}
