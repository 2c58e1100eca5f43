use crate::model::{
    Position, SourceFileModel, SourceRange, SourceSetModel, SyntaxNode, Token, TokenKind,
    TokenStream,
};
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn, TernaryStyle};
use crate::ternary::{analyze, TernaryDiagnostic};
use std::collections::BTreeMap;
use ternguard_types::{ids, RepoPath, Severity};

pub fn range(l1: u32, c1: u32, l2: u32, c2: u32) -> SourceRange {
    SourceRange::new(Position::new(l1, c1), Position::new(l2, c2))
}

fn token(kind: TokenKind, text: &str, line: u32, col: u32) -> Token {
    let len = text.chars().count() as u32;
    Token::new(kind, text, range(line, col, line, col + len))
}

pub fn ident(text: &str, line: u32, col: u32) -> Token {
    token(TokenKind::Word, text, line, col)
}

pub fn punct(text: &str, line: u32, col: u32) -> Token {
    token(TokenKind::Punctuator, text, line, col)
}

/// A leaf node covering tokens `first..=last` of the stream.
pub fn node_at(tokens: &TokenStream, first: usize, last: usize) -> SyntaxNode {
    let start = tokens.get(first).expect("first token").range.start;
    let end = tokens.get(last).expect("last token").range.end;
    SyntaxNode::expression(SourceRange::new(start, end), "Identifier", Vec::new())
}

pub fn file(path: &str, src: &str) -> SourceFileModel {
    let parsed = ternguard_syntax::parse_source(src).expect("test source parses");
    SourceFileModel::from_parsed(RepoPath::new(path), parsed)
}

pub fn model(files: Vec<SourceFileModel>) -> SourceSetModel {
    SourceSetModel {
        root: RepoPath::new("."),
        files,
        parse_failures: Vec::new(),
    }
}

pub fn diagnostics(src: &str, style: TernaryStyle) -> Vec<TernaryDiagnostic> {
    analyze(&file("test.js", src), style)
}

pub fn config(style: TernaryStyle, severity: Severity) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(
        ids::CHECK_LAYOUT_MULTILINE_TERNARY.to_string(),
        CheckPolicy::enabled(severity).with_style(style),
    );
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
    }
}
