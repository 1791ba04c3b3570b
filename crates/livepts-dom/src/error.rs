use livepts_core::{AttrName, ParseError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LiveAttributeError>;

/// Failures reported by live point lists. All are recoverable at the call site.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LiveAttributeError {
    /// The attribute is absent and no default is configured.
    /// The list stays unvalidated, so the next read retries.
    #[error("attribute `{name}` is missing and has no default value")]
    AttributeMissing { name: AttrName },

    /// The attribute text does not parse. The list now reads as empty and
    /// this error is not reported again until the attribute changes.
    #[error("attribute `{name}` has malformed value {value:?}: {source}")]
    AttributeMalformed {
        name: AttrName,
        value: String,
        source: ParseError,
    },

    #[error("index {index} is out of range for a list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// NaN and infinite coordinates have no attribute text form.
    #[error("point ({x}, {y}) is not finite and cannot be written to an attribute")]
    NonFinitePoint { x: f64, y: f64 },

    #[error("the animated value of `{name}` is read-only")]
    ReadOnly { name: AttrName },

    #[error("the element owning `{name}` has been dropped")]
    HostDropped { name: AttrName },
}
