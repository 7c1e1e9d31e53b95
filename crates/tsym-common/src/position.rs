//! Line/column positions and offset conversion.
//!
//! Syntax trees carry byte offsets; the index reports line/column ranges.
//! `LineMap` converts between the two and backs the `PositionResolver` trait
//! that the indexer consumes.

/// A position in a source file (0-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (UTF-16 code units for LSP compatibility)
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

/// A half-open range in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Range { start, end }
    }
}

/// A file name paired with a range inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Location {
    #[serde(rename = "file")]
    pub file_path: String,
    pub range: Range,
}

impl Location {
    pub fn new(file_path: String, range: Range) -> Self {
        Location { file_path, range }
    }
}

/// Converts byte offsets inside one file into line/column positions.
pub trait PositionResolver {
    /// Resolve a byte offset to a position. Offsets past the end clamp to the
    /// last position of the file.
    fn resolve(&self, offset: u32) -> Position;

    /// Resolve a `[start, end)` byte span to a range.
    fn resolve_span(&self, start: u32, end: u32) -> Range {
        Range::new(self.resolve(start), self.resolve(end))
    }
}

/// Starting offset of every line in a text, for binary-searched lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMap {
    /// line_starts[0] is always 0
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map from source text. Recognizes `\n`, `\r\n` and lone `\r`.
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0u32];

        for (i, &b) in bytes.iter().enumerate() {
            match b {
                b'\n' => line_starts.push((i + 1) as u32),
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => line_starts.push((i + 1) as u32),
                _ => {}
            }
        }

        LineMap { line_starts }
    }

    /// Convert a byte offset to a position, counting columns in UTF-16 units.
    pub fn offset_to_position(&self, offset: u32, source: &str) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };

        let line_start = self.line_starts.get(line).copied().unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let character = source
            .get(line_start.min(end)..end)
            .unwrap_or("")
            .chars()
            .map(|ch| ch.len_utf16() as u32)
            .sum();

        Position::new(line as u32, character)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
