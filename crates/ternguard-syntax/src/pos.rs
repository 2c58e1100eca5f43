use std::fmt;

/// A 1-based line/column position. Columns count characters, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Half-open source range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceRange {
    pub start: Position,
    pub end: Position,
}

impl SourceRange {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Whether the range starts and ends on different lines.
    pub fn is_multiline(&self) -> bool {
        self.start.line != self.end.line
    }

    /// Whether `other` lies entirely inside this range.
    pub fn contains(&self, other: SourceRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Maps byte offsets of one source text to 1-based line/column positions.
pub(crate) struct LineIndex<'a> {
    text: &'a str,
    /// Byte offset where each line starts.
    starts: Vec<usize>,
    /// Whether each line is pure ASCII, so columns are byte distances.
    ascii: Vec<bool>,
}

impl<'a> LineIndex<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let mut starts = vec![0];
        let mut ascii = vec![true];
        let mut chars = text.char_indices().peekable();
        while let Some((offset, c)) = chars.next() {
            if is_line_break(c) {
                // `\r\n` is a single break.
                if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
                    continue;
                }
                starts.push(offset + c.len_utf8());
                ascii.push(true);
            } else if !c.is_ascii()
                && let Some(flag) = ascii.last_mut()
            {
                *flag = false;
            }
        }
        Self {
            text,
            starts,
            ascii,
        }
    }

    /// Position of the byte at `offset`. Offsets past the end clamp to the end.
    pub(crate) fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = self.starts.partition_point(|&s| s <= offset).saturating_sub(1);
        let start = self.starts[line];
        let column = if self.ascii[line] {
            offset - start
        } else {
            self.text
                .get(start..offset)
                .map_or(0, |prefix| prefix.chars().count())
        };
        Position::new(line as u32 + 1, column as u32 + 1)
    }
}
