use crate::SourceRange;

/// A node of the expression tree.
///
/// `range` covers the node's own syntax only. Parentheses wrapping the node are
/// not part of it; parentheses wrapping its children are.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    pub range: SourceRange,
    pub kind: NodeKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Conditional {
        test: Box<SyntaxNode>,
        consequent: Box<SyntaxNode>,
        alternate: Box<SyntaxNode>,
    },
    /// Any other expression, labelled with its ESTree-style type name.
    Expression {
        label: &'static str,
        children: Vec<SyntaxNode>,
    },
}

impl SyntaxNode {
    pub fn expression(range: SourceRange, label: &'static str, children: Vec<SyntaxNode>) -> Self {
        Self {
            range,
            kind: NodeKind::Expression { label, children },
        }
    }

    pub fn conditional(
        range: SourceRange,
        test: SyntaxNode,
        consequent: SyntaxNode,
        alternate: SyntaxNode,
    ) -> Self {
        Self {
            range,
            kind: NodeKind::Conditional {
                test: Box::new(test),
                consequent: Box::new(consequent),
                alternate: Box::new(alternate),
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match &self.kind {
            NodeKind::Conditional { .. } => "ConditionalExpression",
            NodeKind::Expression { label, .. } => label,
        }
    }

    pub fn is_conditional(&self) -> bool {
        matches!(self.kind, NodeKind::Conditional { .. })
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<&SyntaxNode> {
        match &self.kind {
            NodeKind::Conditional {
                test,
                consequent,
                alternate,
            } => vec![test.as_ref(), consequent.as_ref(), alternate.as_ref()],
            NodeKind::Expression { children, .. } => children.iter().collect(),
        }
    }

    /// Number of conditional nodes in this subtree, including `self`.
    pub fn count_conditionals(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_conditional() {
                count += 1;
            }
            stack.extend(node.children());
        }
        count
    }
}
