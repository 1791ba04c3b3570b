//! `PointList`: one view type over both values of an [`AnimatedPoints`].
//!
//! The view's [`ListKind`] decides what it may do. Base views read the
//! authored list and may edit it; animated views read whatever is presented
//! and reject every edit with [`LiveAttributeError::ReadOnly`].

use crate::animated_points::AnimatedPoints;
use crate::base_list;
use crate::error::{LiveAttributeError, Result};
use crate::item::PointItem;
use livepts_core::Point;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// The authored value. Mutable.
    Base,
    /// The presented value. Read-only.
    Animated,
}

impl ListKind {
    pub fn is_mutable(self) -> bool {
        matches!(self, Self::Base)
    }
}

#[derive(Clone, Copy)]
pub struct PointList<'a> {
    owner: &'a AnimatedPoints,
    kind: ListKind,
}

impl<'a> PointList<'a> {
    pub(crate) fn new(owner: &'a AnimatedPoints, kind: ListKind) -> Self {
        Self { owner, kind }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    // ─── Reads ───────────────────────────────────────────────────────────

    /// Number of items. Re-parses the attribute first if it changed.
    pub fn len(&self) -> Result<usize> {
        self.owner.read(self.kind, <[PointItem]>::len)
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.owner.read(self.kind, <[PointItem]>::is_empty)
    }

    /// The item at `index`, as a shared handle.
    pub fn get(&self, index: usize) -> Result<PointItem> {
        self.owner.read(self.kind, |items| {
            items
                .get(index)
                .cloned()
                .ok_or(LiveAttributeError::IndexOutOfRange {
                    index,
                    len: items.len(),
                })
        })?
    }

    /// Handles to every item, in order.
    pub fn items(&self) -> Result<Vec<PointItem>> {
        self.owner.read(self.kind, <[PointItem]>::to_vec)
    }

    /// Snapshot of the current values.
    pub fn points(&self) -> Result<Vec<Point>> {
        self.owner
            .read(self.kind, |items| items.iter().map(PointItem::get).collect())
    }

    /// The list serialized with the configured separator.
    pub fn value_as_string(&self) -> Result<String> {
        self.owner.value_text(self.kind)
    }

    // ─── Structural edits (base only) ────────────────────────────────────

    pub fn clear(&self) -> Result<()> {
        self.owner.edit(self.kind, base_list::clear)
    }

    /// Replace the whole list with a single item.
    pub fn initialize(&self, point: Point) -> Result<PointItem> {
        self.owner
            .edit(self.kind, |items| base_list::initialize(items, point))
    }

    /// Insert before `index`. `index == len` appends.
    pub fn insert_before(&self, point: Point, index: usize) -> Result<PointItem> {
        self.owner
            .edit(self.kind, |items| base_list::insert_before(items, point, index))
    }

    pub fn replace(&self, point: Point, index: usize) -> Result<PointItem> {
        self.owner
            .edit(self.kind, |items| base_list::replace(items, point, index))
    }

    /// Remove and return the item at `index`.
    pub fn remove(&self, index: usize) -> Result<PointItem> {
        self.owner
            .edit(self.kind, |items| base_list::remove(items, index))
    }

    pub fn append(&self, point: Point) -> Result<PointItem> {
        self.owner
            .edit(self.kind, |items| base_list::append(items, point))
    }
}

impl fmt::Debug for PointList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointList")
            .field("name", &self.owner.name())
            .field("kind", &self.kind)
            .finish()
    }
}
