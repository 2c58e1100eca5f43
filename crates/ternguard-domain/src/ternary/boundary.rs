use crate::model::{SourceRange, SyntaxNode, TokenStream};

/// The node's range extended through every redundant paren pair wrapping it.
///
/// Extends one level at a time while the token just before the current extent is
/// `(`, the token just after is `)`, and the two are a matched pair. Falls back to
/// the node's own range when its boundary tokens are not in the stream.
pub fn outer_extent(tokens: &TokenStream, node: &SyntaxNode) -> SourceRange {
    let mut extent = node.range;

    if tokens.starting_at(extent.start).is_none() || tokens.ending_at(extent.end).is_none() {
        tracing::debug!(range = %extent, "operand boundary tokens not in stream; using node range");
        return extent;
    }

    loop {
        let (Some(open), Some(close)) = (tokens.before(extent.start), tokens.after(extent.end))
        else {
            break;
        };
        let (Some(open_tok), Some(close_tok)) = (tokens.get(open), tokens.get(close)) else {
            break;
        };
        if !open_tok.is_open_paren() || !close_tok.is_close_paren() {
            break;
        }
        if tokens.matching_close(open) != Some(close) {
            tracing::debug!(
                range = %extent,
                open = %open_tok.range.start,
                close = %close_tok.range.start,
                "adjacent parentheses are not a pair; stopping paren unwrap"
            );
            break;
        }
        extent = SourceRange::new(open_tok.range.start, close_tok.range.end);
    }

    extent
}

/// Line of the first token of the node's outer extent.
pub fn first_line(tokens: &TokenStream, node: &SyntaxNode) -> u32 {
    outer_extent(tokens, node).start.line
}

/// Line of the last token of the node's outer extent.
pub fn last_line(tokens: &TokenStream, node: &SyntaxNode) -> u32 {
    outer_extent(tokens, node).end.line
}
