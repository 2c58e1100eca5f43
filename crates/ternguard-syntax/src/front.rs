//! Drives swc over one source text and lowers its output into the crate's own
//! token stream and conditional tree.

use crate::pos::LineIndex;
use crate::{ParseError, ParsedSource, Position, SourceRange, SyntaxNode, Token, TokenKind, TokenStream};
use swc_core::common::{BytePos, Span, Spanned};
use swc_core::ecma::ast::{CondExpr, EsVersion, Expr};
use swc_core::ecma::parser::error::Error as SwcError;
use swc_core::ecma::parser::lexer::Lexer;
use swc_core::ecma::parser::token::{Token as SwcToken, TokenAndSpan};
use swc_core::ecma::parser::{Capturing, Parser, StringInput, Syntax};
use swc_core::ecma::visit::{Visit, VisitWith};

/// Deepest `(`/`[`/`{` nesting accepted before handing text to the parser.
pub const MAX_NESTING: usize = 256;

/// Stack size that parsing inputs at [`MAX_NESTING`] needs.
pub const PARSE_STACK_SIZE: usize = 64 * 1024 * 1024;

// swc reserves `BytePos(0)` for dummy spans.
const BASE: u32 = 1;

pub(crate) fn parse(text: &str) -> Result<ParsedSource, ParseError> {
    let end = u32::try_from(text.len())
        .ok()
        .and_then(|len| len.checked_add(BASE))
        .ok_or(ParseError::TooLarge {
            bytes: text.len(),
            at: Position::new(1, 1),
        })?;
    let lines = LineIndex::new(text);
    check_nesting(text, &lines)?;

    let input = StringInput::new(text, BytePos(BASE), BytePos(end));
    let lexer = Lexer::new(Syntax::Es(Default::default()), EsVersion::EsNext, input, None);
    let mut parser = Parser::new_from(Capturing::new(lexer));

    let program = parser
        .parse_program()
        .map_err(|err| syntax_error(&err, &lines))?;
    // Recovered errors still mean the file is not valid JavaScript.
    if let Some(err) = parser.take_errors().first() {
        return Err(syntax_error(err, &lines));
    }

    let tokens = parser
        .input()
        .take()
        .iter()
        .filter_map(|t| lower_token(t, text, &lines))
        .collect();

    let mut builder = TreeBuilder {
        lines: &lines,
        frames: vec![Vec::new()],
    };
    program.visit_with(&mut builder);
    let roots = builder.frames.pop().unwrap_or_default();

    Ok(ParsedSource {
        tokens: TokenStream::new(tokens),
        roots,
    })
}

fn check_nesting(text: &str, lines: &LineIndex<'_>) -> Result<(), ParseError> {
    let mut depth = 0usize;
    for (offset, byte) in text.bytes().enumerate() {
        match byte {
            b'(' | b'[' | b'{' => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(ParseError::TooDeep {
                        limit: MAX_NESTING,
                        at: lines.position(offset),
                    });
                }
            }
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn offset(pos: BytePos) -> usize {
    pos.0.saturating_sub(BASE) as usize
}

fn syntax_error(err: &SwcError, lines: &LineIndex<'_>) -> ParseError {
    ParseError::Syntax {
        message: err.kind().msg().into_owned(),
        at: lines.position(offset(err.span().lo)),
    }
}

fn lower_range(span: Span, lines: &LineIndex<'_>) -> SourceRange {
    SourceRange::new(
        lines.position(offset(span.lo)),
        lines.position(offset(span.hi)),
    )
}

fn lower_token(t: &TokenAndSpan, text: &str, lines: &LineIndex<'_>) -> Option<Token> {
    let (lo, hi) = (offset(t.span.lo), offset(t.span.hi));
    if lo >= hi {
        return None;
    }
    let kind = match &t.token {
        SwcToken::Word { .. } => TokenKind::Word,
        SwcToken::Str { .. } => TokenKind::String,
        SwcToken::Num { .. } | SwcToken::BigInt { .. } => TokenKind::Numeric,
        SwcToken::Template { .. } => TokenKind::Template,
        SwcToken::Regex { .. } => TokenKind::Regex,
        _ => TokenKind::Punctuator,
    };
    let slice = text.get(lo..hi)?;
    Some(Token::new(kind, slice, lower_range(t.span, lines)))
}

/// Collects conditional expressions. Every other expression is kept only as
/// an operand of a conditional, holding the conditionals nested inside it.
struct TreeBuilder<'a> {
    lines: &'a LineIndex<'a>,
    frames: Vec<Vec<SyntaxNode>>,
}

impl Visit for TreeBuilder<'_> {
    fn visit_cond_expr(&mut self, n: &CondExpr) {
        let node = self.conditional(n);
        if let Some(frame) = self.frames.last_mut() {
            frame.push(node);
        }
    }
}

impl TreeBuilder<'_> {
    fn conditional(&mut self, n: &CondExpr) -> SyntaxNode {
        let test = self.operand(&n.test);
        let consequent = self.operand(&n.cons);
        let alternate = self.operand(&n.alt);
        SyntaxNode::conditional(lower_range(n.span, self.lines), test, consequent, alternate)
    }

    fn operand(&mut self, expr: &Expr) -> SyntaxNode {
        let mut expr = expr;
        while let Expr::Paren(paren) = expr {
            expr = &*paren.expr;
        }
        if let Expr::Cond(cond) = expr {
            return self.conditional(cond);
        }
        self.frames.push(Vec::new());
        expr.visit_with(self);
        let children = self.frames.pop().unwrap_or_default();
        SyntaxNode::expression(lower_range(expr.span(), self.lines), label(expr), children)
    }
}

fn label(expr: &Expr) -> &'static str {
    match expr {
        Expr::Ident(_) => "Identifier",
        Expr::Lit(_) => "Literal",
        Expr::This(_) => "ThisExpression",
        Expr::Array(_) => "ArrayExpression",
        Expr::Object(_) => "ObjectExpression",
        Expr::Fn(_) => "FunctionExpression",
        Expr::Arrow(_) => "ArrowFunctionExpression",
        Expr::Unary(_) => "UnaryExpression",
        Expr::Update(_) => "UpdateExpression",
        Expr::Bin(_) => "BinaryExpression",
        Expr::Assign(_) => "AssignmentExpression",
        Expr::Member(_) => "MemberExpression",
        Expr::OptChain(_) => "ChainExpression",
        Expr::Call(_) => "CallExpression",
        Expr::New(_) => "NewExpression",
        Expr::Seq(_) => "SequenceExpression",
        Expr::Tpl(_) => "TemplateLiteral",
        Expr::TaggedTpl(_) => "TaggedTemplateExpression",
        Expr::Await(_) => "AwaitExpression",
        _ => "Expression",
    }
}
