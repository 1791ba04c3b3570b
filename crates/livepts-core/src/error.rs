use thiserror::Error;

/// A point-list text that does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at byte {offset}")]
pub struct ParseError {
    /// Byte offset into the parsed text where the bad item starts.
    pub offset: usize,
    /// Short description of what was expected.
    pub message: &'static str,
}

impl ParseError {
    pub fn new(offset: usize, message: &'static str) -> Self {
        Self { offset, message }
    }
}
