//! Table-driven layout cases: every style, every paren placement, with the exact
//! reported positions.

use crate::policy::TernaryStyle::{self, *};
use crate::ternary::DiagnosticKind::{self, *};
use crate::test_support::diagnostics;

struct Expect {
    kind: DiagnosticKind,
    line: u32,
    column: u32,
    end: Option<(u32, u32)>,
}

fn at(kind: DiagnosticKind, line: u32, column: u32) -> Expect {
    Expect {
        kind,
        line,
        column,
        end: None,
    }
}

fn span(kind: DiagnosticKind, line: u32, column: u32, end_line: u32, end_column: u32) -> Expect {
    Expect {
        kind,
        line,
        column,
        end: Some((end_line, end_column)),
    }
}

#[test]
fn valid_layouts_report_nothing() {
    for (src, style) in valid_cases() {
        let got = diagnostics(src, style);
        assert!(got.is_empty(), "{style} {src:?} reported {got:?}");
    }
}

#[test]
fn invalid_layouts_report_exact_ranges() {
    for (src, style, expected) in invalid_cases() {
        let got = diagnostics(src, style);
        assert_eq!(
            got.len(),
            expected.len(),
            "{style} {src:?}: got {got:?}"
        );
        for (idx, (diag, want)) in got.iter().zip(&expected).enumerate() {
            assert_eq!(diag.kind, want.kind, "{style} {src:?} #{idx}");
            assert_eq!(
                (diag.range.start.line, diag.range.start.column),
                (want.line, want.column),
                "{style} {src:?} #{idx} start"
            );
            if let Some(end) = want.end {
                assert_eq!(
                    (diag.range.end.line, diag.range.end.column),
                    end,
                    "{style} {src:?} #{idx} end"
                );
            }
        }
    }
}

#[test]
fn default_style_is_always() {
    assert_eq!(TernaryStyle::default(), Always);
}

fn valid_cases() -> Vec<(&'static str, TernaryStyle)> {
    vec![
        ("a\n? b\n: c", Always),
        ("a ?\nb :\nc", Always),
        ("a\n? b\n? c\n: d\n: e", Always),
        ("a\n? (b\n? c\n: d)\n: e", Always),
        ("a\n? b\n: c", Always),
        ("a ?\nb :\nc", Always),
        ("a\n? b\n? c\n: d\n: e", Always),
        ("a\n? (b\n? c\n: d)\n: e", Always),
        ("(a\n ? b\n : c)", Always),
        ("(a)\n? b\n: c", Always),
        ("((a))\n? b\n: c", Always),
        ("(a)?\n b\n: c", Always),
        ("((a))?\n b\n: c", Always),
        ("a\n? (b)\n: c", Always),
        ("a\n? ((b))\n: c", Always),
        ("a ?\n (b)\n: c", Always),
        ("a ?\n ((b))\n: c", Always),
        ("a \n? b\n: (c)", Always),
        ("a \n? b\n: ((c))", Always),
        ("a \n? b:\n (c)", Always),
        ("a \n? b:\n ((c))", Always),
        ("(a) \n? (b)\n: (c)", Always),
        ("((a)) \n? ((b))\n: ((c))", Always),
        ("((a)) ?\n ((b)):\n ((c))", Always),
        ("a\n? b\n: c", AlwaysMultiline),
        ("a ?\nb :\nc", AlwaysMultiline),
        ("a\n? b\n? c\n: d\n: e", AlwaysMultiline),
        ("a\n? (b\n? c\n: d)\n: e", AlwaysMultiline),
        ("a ? b : c", AlwaysMultiline),
        ("a ? b ? c : d : e", AlwaysMultiline),
        ("a ? (b ? c : d) : e", AlwaysMultiline),
        ("a\n? (b ? c : d)\n: e", AlwaysMultiline),
        ("a ?\n(b ? c : d) :\ne", AlwaysMultiline),
        ("(a\n ? b\n : c)", AlwaysMultiline),
        ("(\na ? b : c\n)", AlwaysMultiline),
        ("(a)\n? b\n: c", AlwaysMultiline),
        ("((a))\n? b\n: c", AlwaysMultiline),
        ("(a)?\n b\n: c", AlwaysMultiline),
        ("((a))?\n b\n: c", AlwaysMultiline),
        ("a\n? (b)\n: c", AlwaysMultiline),
        ("a\n? ((b))\n: c", AlwaysMultiline),
        ("a ?\n (b)\n: c", AlwaysMultiline),
        ("a ?\n ((b))\n: c", AlwaysMultiline),
        ("a \n? b\n: (c)", AlwaysMultiline),
        ("a \n? b\n: ((c))", AlwaysMultiline),
        ("a \n? b:\n (c)", AlwaysMultiline),
        ("a \n? b:\n ((c))", AlwaysMultiline),
        ("(a) \n? (b)\n: (c)", AlwaysMultiline),
        ("((a)) \n? ((b))\n: ((c))", AlwaysMultiline),
        ("((a)) ?\n ((b)):\n ((c))", AlwaysMultiline),
        ("(a) ? b : c", AlwaysMultiline),
        ("((a)) ? b : c", AlwaysMultiline),
        ("a ? (b) : c", AlwaysMultiline),
        ("a ? ((b)) : c", AlwaysMultiline),
        ("a ? b : (c)", AlwaysMultiline),
        ("a ? b : ((c))", AlwaysMultiline),
        ("(a) ? (b) : (c)", AlwaysMultiline),
        ("((a)) ? ((b)) : ((c))", AlwaysMultiline),
        ("a ? b : c", Never),
        ("a ? b ? c : d : e", Never),
        ("a ? (b ? c : d) : e", Never),
        ("a  +\n b ? c +\n d : e + \nf", Never),
        ("(\na ? b : c\n)", Never),
        ("(a) ? b : c", Never),
        ("((a)) ? b : c", Never),
        ("a ? (b) : c", Never),
        ("a ? ((b)) : c", Never),
        ("a ? b : (c)", Never),
        ("a ? b : ((c))", Never),
        ("(a) ? (b) : (c)", Never),
        ("((a)) ? ((b)) : ((c))", Never),
        ("(a\n) ? b : c", Never),
        ("((a)\n) ? b : c", Never),
        ("a ? (\nb) : c", Never),
        ("a ? (\n(b)) : c", Never),
        ("a ? (b\n) : c", Never),
        ("a ? ((b)\n) : c", Never),
        ("a ? b : (\nc)", Never),
        ("a ? b : (\n(c))", Never),
        ("(a\n) ? (\nb\n) : (\nc)", Never),
        ("((a)\n) ? (\n(b)\n) : (\n(c))", Never),
    ]
}

fn invalid_cases() -> Vec<(&'static str, TernaryStyle, Vec<Expect>)> {
    vec![
        (
            "a ? b : c",
            Always,
            vec![
                at(ExpectedTestCons, 1, 1),
                at(ExpectedConsAlt, 1, 5),
            ],
        ),
        (
            "a\n? b : c",
            Always,
            vec![
                at(ExpectedConsAlt, 2, 3),
            ],
        ),
        (
            "a ? b\n: c",
            Always,
            vec![
                at(ExpectedTestCons, 1, 1),
            ],
        ),
        (
            "a ? (b ? c : d) : e",
            Always,
            vec![
                at(ExpectedTestCons, 1, 1),
                span(ExpectedConsAlt, 1, 5, 1, 16),
                at(ExpectedTestCons, 1, 6),
                at(ExpectedConsAlt, 1, 10),
            ],
        ),
        (
            "a ?\n(b ? c : d) :\ne",
            Always,
            vec![
                at(ExpectedTestCons, 2, 2),
                at(ExpectedConsAlt, 2, 6),
            ],
        ),
        (
            "a ? (b\n? c\n: d) : e",
            Always,
            vec![
                at(ExpectedTestCons, 1, 1),
                span(ExpectedConsAlt, 1, 5, 3, 5),
            ],
        ),
        (
            "a ?\n(b? c\n: d) : e",
            Always,
            vec![
                span(ExpectedConsAlt, 2, 1, 3, 5),
                at(ExpectedTestCons, 2, 2),
            ],
        ),
        (
            "a ?\n(b\n? c : d) : e",
            Always,
            vec![
                span(ExpectedConsAlt, 2, 1, 3, 9),
                at(ExpectedConsAlt, 3, 3),
            ],
        ),
        (
            "a ?\n(b\n? c\n : d) : e",
            Always,
            vec![
                span(ExpectedConsAlt, 2, 1, 4, 6),
            ],
        ),
        (
            "a ? b : c",
            Always,
            vec![
                span(ExpectedTestCons, 1, 1, 1, 2),
                span(ExpectedConsAlt, 1, 5, 1, 6),
            ],
        ),
        (
            "f() ? a + b : c",
            Always,
            vec![
                span(ExpectedTestCons, 1, 1, 1, 4),
                span(ExpectedConsAlt, 1, 7, 1, 12),
            ],
        ),
        (
            "a\n? b : c",
            Always,
            vec![
                at(ExpectedConsAlt, 2, 3),
            ],
        ),
        (
            "a ? b\n: c",
            Always,
            vec![
                at(ExpectedTestCons, 1, 1),
            ],
        ),
        (
            "a ? (b ? c : d) : e",
            Always,
            vec![
                at(ExpectedTestCons, 1, 1),
                span(ExpectedConsAlt, 1, 5, 1, 16),
                at(ExpectedTestCons, 1, 6),
                at(ExpectedConsAlt, 1, 10),
            ],
        ),
        (
            "a ?\n(b ? c : d) :\ne",
            Always,
            vec![
                at(ExpectedTestCons, 2, 2),
                at(ExpectedConsAlt, 2, 6),
            ],
        ),
        (
            "a ? (b\n? c\n: d) : e",
            Always,
            vec![
                at(ExpectedTestCons, 1, 1),
                span(ExpectedConsAlt, 1, 5, 3, 5),
            ],
        ),
        (
            "a ?\n(b? c\n: d) : e",
            Always,
            vec![
                span(ExpectedConsAlt, 2, 1, 3, 5),
                at(ExpectedTestCons, 2, 2),
            ],
        ),
        (
            "a ?\n(b\n? c : d) : e",
            Always,
            vec![
                span(ExpectedConsAlt, 2, 1, 3, 9),
                at(ExpectedConsAlt, 3, 3),
            ],
        ),
        (
            "a ?\n(b\n? c\n : d) : e",
            Always,
            vec![
                span(ExpectedConsAlt, 2, 1, 4, 6),
            ],
        ),
        (
            "(a\n) ? b\n: c",
            Always,
            vec![
                span(ExpectedTestCons, 1, 1, 2, 2),
            ],
        ),
        (
            "((a)\n) ? b\n: c",
            Always,
            vec![
                span(ExpectedTestCons, 1, 1, 2, 2),
            ],
        ),
        (
            "a ? (\nb)\n: c",
            Always,
            vec![
                span(ExpectedTestCons, 1, 1, 1, 2),
            ],
        ),
        (
            "a ? (\n(b))\n: c",
            Always,
            vec![
                span(ExpectedTestCons, 1, 1, 1, 2),
            ],
        ),
        (
            "a\n? (b\n): c",
            Always,
            vec![
                span(ExpectedConsAlt, 2, 3, 3, 2),
            ],
        ),
        (
            "a\n? ((b)\n): c",
            Always,
            vec![
                span(ExpectedConsAlt, 2, 3, 3, 2),
            ],
        ),
        (
            "a\n? b : (\nc)",
            Always,
            vec![
                span(ExpectedConsAlt, 2, 3, 2, 4),
            ],
        ),
        (
            "a\n? b : (\n(c))",
            Always,
            vec![
                span(ExpectedConsAlt, 2, 3, 2, 4),
            ],
        ),
        (
            "(a\n) ? (\nb\n) : (\nc)",
            Always,
            vec![
                span(ExpectedTestCons, 1, 1, 2, 2),
                span(ExpectedConsAlt, 2, 5, 4, 2),
            ],
        ),
        (
            "((a)\n) ? (\n(b)\n) : (\n(c))",
            Always,
            vec![
                span(ExpectedTestCons, 1, 1, 2, 2),
                span(ExpectedConsAlt, 2, 5, 4, 2),
            ],
        ),
        (
            "a\n? b : c",
            AlwaysMultiline,
            vec![
                at(ExpectedConsAlt, 2, 3),
            ],
        ),
        (
            "a ? b\n: c",
            AlwaysMultiline,
            vec![
                at(ExpectedTestCons, 1, 1),
            ],
        ),
        (
            "a &&\nb ? c : d",
            AlwaysMultiline,
            vec![
                span(ExpectedTestCons, 1, 1, 2, 2),
                at(ExpectedConsAlt, 2, 5),
            ],
        ),
        (
            "a ? b +\nc : d",
            AlwaysMultiline,
            vec![
                at(ExpectedTestCons, 1, 1),
                at(ExpectedConsAlt, 1, 5),
            ],
        ),
        (
            "a ? b : c +\nd",
            AlwaysMultiline,
            vec![
                at(ExpectedTestCons, 1, 1),
                at(ExpectedConsAlt, 1, 5),
            ],
        ),
        (
            "a ?\n(b ? c : d) : e",
            AlwaysMultiline,
            vec![
                span(ExpectedConsAlt, 2, 1, 2, 12),
            ],
        ),
        (
            "a ? (b ? c : d) :\ne",
            AlwaysMultiline,
            vec![
                at(ExpectedTestCons, 1, 1),
            ],
        ),
        (
            "a ? (b\n? c\n: d) : e",
            AlwaysMultiline,
            vec![
                at(ExpectedTestCons, 1, 1),
                span(ExpectedConsAlt, 1, 5, 3, 5),
            ],
        ),
        (
            "a ?\n(b ? c\n: d) : e",
            AlwaysMultiline,
            vec![
                span(ExpectedConsAlt, 2, 1, 3, 5),
                at(ExpectedTestCons, 2, 2),
            ],
        ),
        (
            "a ?\n(b\n? c : d) : e",
            AlwaysMultiline,
            vec![
                span(ExpectedConsAlt, 2, 1, 3, 9),
                at(ExpectedConsAlt, 3, 3),
            ],
        ),
        (
            "a ?\n(b\n? c\n : d) : e",
            AlwaysMultiline,
            vec![
                span(ExpectedConsAlt, 2, 1, 4, 6),
            ],
        ),
        (
            "(a\n) ? b\n: c",
            AlwaysMultiline,
            vec![
                span(ExpectedTestCons, 1, 1, 2, 2),
            ],
        ),
        (
            "((a)\n) ? b\n: c",
            AlwaysMultiline,
            vec![
                span(ExpectedTestCons, 1, 1, 2, 2),
            ],
        ),
        (
            "a ? (\nb)\n: c",
            AlwaysMultiline,
            vec![
                span(ExpectedTestCons, 1, 1, 1, 2),
            ],
        ),
        (
            "a ? (\n(b))\n: c",
            AlwaysMultiline,
            vec![
                span(ExpectedTestCons, 1, 1, 1, 2),
            ],
        ),
        (
            "a\n? (b\n): c",
            AlwaysMultiline,
            vec![
                span(ExpectedConsAlt, 2, 3, 3, 2),
            ],
        ),
        (
            "a\n? ((b)\n): c",
            AlwaysMultiline,
            vec![
                span(ExpectedConsAlt, 2, 3, 3, 2),
            ],
        ),
        (
            "a\n? b : (\nc)",
            AlwaysMultiline,
            vec![
                span(ExpectedConsAlt, 2, 3, 2, 4),
            ],
        ),
        (
            "a\n? b : (\n(c))",
            AlwaysMultiline,
            vec![
                span(ExpectedConsAlt, 2, 3, 2, 4),
            ],
        ),
        (
            "(a\n) ? (\nb\n) : (\nc)",
            AlwaysMultiline,
            vec![
                span(ExpectedTestCons, 1, 1, 2, 2),
                span(ExpectedConsAlt, 2, 5, 4, 2),
            ],
        ),
        (
            "((a)\n) ? (\n(b)\n) : (\n(c))",
            AlwaysMultiline,
            vec![
                span(ExpectedTestCons, 1, 1, 2, 2),
                span(ExpectedConsAlt, 2, 5, 4, 2),
            ],
        ),
        (
            "a\n? b : c",
            Never,
            vec![
                at(UnexpectedTestCons, 1, 1),
            ],
        ),
        (
            "a ? b\n: c",
            Never,
            vec![
                at(UnexpectedConsAlt, 1, 5),
            ],
        ),
        (
            "a ?\n(b ? c : d) :\ne",
            Never,
            vec![
                at(UnexpectedTestCons, 1, 1),
                span(UnexpectedConsAlt, 2, 1, 2, 12),
            ],
        ),
        (
            "a ? (b\n? c\n: d) : e",
            Never,
            vec![
                at(UnexpectedTestCons, 1, 6),
                at(UnexpectedConsAlt, 2, 3),
            ],
        ),
        (
            "a ?\n(b? c\n: d) : e",
            Never,
            vec![
                at(UnexpectedTestCons, 1, 1),
                at(UnexpectedConsAlt, 2, 5),
            ],
        ),
        (
            "a ?\n(b\n? c : d) : e",
            Never,
            vec![
                at(UnexpectedTestCons, 1, 1),
                at(UnexpectedTestCons, 2, 2),
            ],
        ),
        (
            "a ?\n(b\n? c\n : d) : e",
            Never,
            vec![
                at(UnexpectedTestCons, 1, 1),
                at(UnexpectedTestCons, 2, 2),
                at(UnexpectedConsAlt, 3, 3),
            ],
        ),
        (
            "a ? (b\n? c\n: d)\n: e",
            Never,
            vec![
                span(UnexpectedConsAlt, 1, 5, 3, 5),
                at(UnexpectedTestCons, 1, 6),
                at(UnexpectedConsAlt, 2, 3),
            ],
        ),
        (
            "a\n?\n(b\n?\nc\n:\nd)\n:\ne",
            Never,
            vec![
                at(UnexpectedTestCons, 1, 1),
                span(UnexpectedConsAlt, 3, 1, 7, 3),
                at(UnexpectedTestCons, 3, 2),
                at(UnexpectedConsAlt, 5, 1),
            ],
        ),
        (
            "(a)\n ? b \n : (c)",
            Never,
            vec![
                span(UnexpectedTestCons, 1, 1, 1, 4),
                span(UnexpectedConsAlt, 2, 4, 2, 5),
            ],
        ),
        (
            "(a)\n ? (b) \n : (c)",
            Never,
            vec![
                span(UnexpectedTestCons, 1, 1, 1, 4),
                span(UnexpectedConsAlt, 2, 4, 2, 7),
            ],
        ),
        (
            "((a))\n ? ((b)) \n : ((c))",
            Never,
            vec![
                span(UnexpectedTestCons, 1, 1, 1, 6),
                span(UnexpectedConsAlt, 2, 4, 2, 9),
            ],
        ),
    ]
}
