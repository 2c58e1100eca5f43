use crate::{Position, SourceRange};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifiers, keywords and reserved words.
    Word,
    Numeric,
    String,
    /// One literal chunk of a template, between backquotes and `${`/`}`.
    Template,
    Regex,
    Punctuator,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub range: SourceRange,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, range: SourceRange) -> Self {
        Self {
            kind,
            text: text.into(),
            range,
        }
    }

    pub fn is_punctuator(&self, text: &str) -> bool {
        self.kind == TokenKind::Punctuator && self.text == text
    }

    pub fn is_open_paren(&self) -> bool {
        self.is_punctuator("(")
    }

    pub fn is_close_paren(&self) -> bool {
        self.is_punctuator(")")
    }
}

/// Ordered, comment-free token sequence with precomputed paren pairs.
///
/// Tokens never overlap, so both start and end positions are sorted and every
/// positional query is a binary search.
#[derive(Clone, Debug, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    /// For each `(` the index of its matching `)`, and vice versa.
    partners: Vec<Option<usize>>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut partners = vec![None; tokens.len()];
        let mut open: Vec<usize> = Vec::new();
        for (idx, tok) in tokens.iter().enumerate() {
            if tok.is_open_paren() {
                open.push(idx);
            } else if tok.is_close_paren()
                && let Some(o) = open.pop()
            {
                partners[o] = Some(idx);
                partners[idx] = Some(o);
            }
        }
        Self { tokens, partners }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Token> {
        self.tokens.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Index of the last token that ends at or before `pos`.
    pub fn before(&self, pos: Position) -> Option<usize> {
        let idx = self.tokens.partition_point(|t| t.range.end <= pos);
        idx.checked_sub(1)
    }

    /// Index of the first token that starts at or after `pos`.
    pub fn after(&self, pos: Position) -> Option<usize> {
        let idx = self.tokens.partition_point(|t| t.range.start < pos);
        (idx < self.tokens.len()).then_some(idx)
    }

    /// Index of the token starting exactly at `pos`.
    pub fn starting_at(&self, pos: Position) -> Option<usize> {
        self.after(pos)
            .filter(|&idx| self.tokens[idx].range.start == pos)
    }

    /// Index of the token ending exactly at `pos`.
    pub fn ending_at(&self, pos: Position) -> Option<usize> {
        self.before(pos)
            .filter(|&idx| self.tokens[idx].range.end == pos)
    }

    /// Index of the `)` matching the `(` at `open`, if the stream balances it.
    pub fn matching_close(&self, open: usize) -> Option<usize> {
        if !self.tokens.get(open)?.is_open_paren() {
            return None;
        }
        self.partners[open]
    }

    /// Index of the `(` matching the `)` at `close`.
    pub fn matching_open(&self, close: usize) -> Option<usize> {
        if !self.tokens.get(close)?.is_close_paren() {
            return None;
        }
        self.partners[close]
    }
}
