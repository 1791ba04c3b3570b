//! Attribute names.
//!
//! Every live value and every host lookup is keyed by attribute name, so
//! names are interned once and compared as integers afterwards.

use lasso::{Spur, ThreadedRodeo};
use std::fmt;
use std::sync::LazyLock;

static ATTRIBUTE_NAMES: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// The local name of an element attribute, e.g. `points` or `kernelMatrix`.
///
/// Names are case-sensitive and carry no namespace. Two handles are equal
/// exactly when they were interned from the same text.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttrName(Spur);

impl AttrName {
    pub fn intern(name: &str) -> Self {
        AttrName(ATTRIBUTE_NAMES.get_or_intern(name))
    }

    pub fn as_str(&self) -> &str {
        ATTRIBUTE_NAMES.resolve(&self.0)
    }
}

impl fmt::Debug for AttrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.as_str())
    }
}

impl fmt::Display for AttrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for AttrName {
    fn from(name: &str) -> Self {
        Self::intern(name)
    }
}
