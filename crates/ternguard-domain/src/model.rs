pub use ternguard_syntax::{
    NodeKind, Position, SourceRange, SyntaxNode, Token, TokenKind, TokenStream,
};
use ternguard_syntax::ParsedSource;
use ternguard_types::RepoPath;

#[derive(Clone, Debug, Default)]
pub struct SourceSetModel {
    pub root: RepoPath,

    /// Successfully parsed files, sorted by path.
    pub files: Vec<SourceFileModel>,

    /// Files the front-end rejected.
    pub parse_failures: Vec<ParseFailure>,
}

#[derive(Clone, Debug)]
pub struct SourceFileModel {
    pub path: RepoPath,
    pub tokens: TokenStream,
    /// Outermost conditional expressions.
    pub roots: Vec<SyntaxNode>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseFailure {
    pub path: RepoPath,
    pub message: String,
    pub line: u32,
    pub col: u32,
}

impl SourceFileModel {
    pub fn from_parsed(path: RepoPath, parsed: ParsedSource) -> Self {
        Self {
            path,
            tokens: parsed.tokens,
            roots: parsed.roots,
        }
    }

    pub fn conditional_count(&self) -> usize {
        self.roots.iter().map(SyntaxNode::count_conditionals).sum()
    }
}

impl SourceSetModel {
    /// Every file in scope, parsed or not.
    pub fn files_scanned(&self) -> usize {
        self.files.len() + self.parse_failures.len()
    }

    pub fn conditionals_scanned(&self) -> usize {
        self.files.iter().map(SourceFileModel::conditional_count).sum()
    }
}
