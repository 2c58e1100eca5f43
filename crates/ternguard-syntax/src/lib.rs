//! JavaScript front-end (no IO).
//!
//! Input: source text of one script or module.
//! Output: an ordered token stream with 1-based line/column ranges and the tree of conditional
//! expressions, whose node ranges exclude the parentheses that wrap them.

#![forbid(unsafe_code)]

mod error;
mod front;
mod pos;
mod token;
mod tree;

pub use error::ParseError;
pub use front::{MAX_NESTING, PARSE_STACK_SIZE};
pub use pos::{Position, SourceRange};
pub use token::{Token, TokenKind, TokenStream};
pub use tree::{NodeKind, SyntaxNode};

/// A parsed source file.
#[derive(Clone, Debug)]
pub struct ParsedSource {
    pub tokens: TokenStream,
    /// Outermost conditional expressions, in source order.
    pub roots: Vec<SyntaxNode>,
}

/// Parse `text` as a JavaScript program.
///
/// Deeply nested input needs a thread with [`PARSE_STACK_SIZE`] of stack.
pub fn parse_source(text: &str) -> Result<ParsedSource, ParseError> {
    front::parse(text)
}
