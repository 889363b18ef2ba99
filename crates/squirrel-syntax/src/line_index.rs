//! Byte offset to line/column conversion.

use rowan::TextSize;

/// 1-based position. `col` counts bytes from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl std::fmt::Display for LineCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Start offsets of every line in a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::from(offset as u32 + 1));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Offsets past the end clamp to the end of the text.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let col = offset - self.line_starts[line];
        LineCol {
            line: line as u32 + 1,
            col: u32::from(col) + 1,
        }
    }

    /// Inverse of [`line_col`](Self::line_col). `None` if the line does not exist.
    pub fn offset(&self, pos: LineCol) -> Option<TextSize> {
        let line = pos.line.checked_sub(1)? as usize;
        let start = *self.line_starts.get(line)?;
        let offset = start + TextSize::from(pos.col.checked_sub(1)?);
        (offset <= self.len).then_some(offset)
    }
}
