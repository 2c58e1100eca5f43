use super::boundary::{first_line, outer_extent};
use crate::model::{SourceRange, SyntaxNode, TokenStream};
use crate::policy::TernaryStyle;
use ternguard_types::ids;

/// Which pair of operands a check looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Boundary {
    TestConsequent,
    ConsequentAlternate,
}

impl Boundary {
    pub fn as_str(self) -> &'static str {
        match self {
            Boundary::TestConsequent => "test-consequent",
            Boundary::ConsequentAlternate => "consequent-alternate",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    ExpectedTestCons,
    ExpectedConsAlt,
    UnexpectedTestCons,
    UnexpectedConsAlt,
}

impl DiagnosticKind {
    pub fn expected(boundary: Boundary) -> Self {
        match boundary {
            Boundary::TestConsequent => DiagnosticKind::ExpectedTestCons,
            Boundary::ConsequentAlternate => DiagnosticKind::ExpectedConsAlt,
        }
    }

    pub fn unexpected(boundary: Boundary) -> Self {
        match boundary {
            Boundary::TestConsequent => DiagnosticKind::UnexpectedTestCons,
            Boundary::ConsequentAlternate => DiagnosticKind::UnexpectedConsAlt,
        }
    }

    pub fn boundary(self) -> Boundary {
        match self {
            DiagnosticKind::ExpectedTestCons | DiagnosticKind::UnexpectedTestCons => {
                Boundary::TestConsequent
            }
            DiagnosticKind::ExpectedConsAlt | DiagnosticKind::UnexpectedConsAlt => {
                Boundary::ConsequentAlternate
            }
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::ExpectedTestCons => ids::CODE_EXPECTED_TEST_CONS,
            DiagnosticKind::ExpectedConsAlt => ids::CODE_EXPECTED_CONS_ALT,
            DiagnosticKind::UnexpectedTestCons => ids::CODE_UNEXPECTED_TEST_CONS,
            DiagnosticKind::UnexpectedConsAlt => ids::CODE_UNEXPECTED_CONS_ALT,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            DiagnosticKind::ExpectedTestCons => ids::MSG_EXPECTED_TEST_CONS,
            DiagnosticKind::ExpectedConsAlt => ids::MSG_EXPECTED_CONS_ALT,
            DiagnosticKind::UnexpectedTestCons => ids::MSG_UNEXPECTED_TEST_CONS,
            DiagnosticKind::UnexpectedConsAlt => ids::MSG_UNEXPECTED_CONS_ALT,
        }
    }
}

/// A policy violation at one operand boundary.
///
/// `range` is the left operand's outer extent: the test for test/consequent,
/// the consequent for consequent/alternate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TernaryDiagnostic {
    pub kind: DiagnosticKind,
    pub range: SourceRange,
}

/// The policy table, independent of any tree.
///
/// `same_line` is whether the left operand ends on the line the right operand starts.
pub fn decide(
    style: TernaryStyle,
    boundary: Boundary,
    same_line: bool,
    whole_span_multiline: bool,
) -> Option<DiagnosticKind> {
    if style.forbids_break() {
        return (!same_line).then(|| DiagnosticKind::unexpected(boundary));
    }
    if same_line && style.requires_break(whole_span_multiline) {
        return Some(DiagnosticKind::expected(boundary));
    }
    None
}

/// Check one boundary between two adjacent operands of a conditional.
pub fn evaluate(
    tokens: &TokenStream,
    left: &SyntaxNode,
    right: &SyntaxNode,
    boundary: Boundary,
    style: TernaryStyle,
    whole_span_multiline: bool,
) -> Option<TernaryDiagnostic> {
    let left_extent = outer_extent(tokens, left);
    let same_line = left_extent.end.line == first_line(tokens, right);

    decide(style, boundary, same_line, whole_span_multiline).map(|kind| TernaryDiagnostic {
        kind,
        range: left_extent,
    })
}
