//! Live point items.
//!
//! A [`PointItem`] is a shared handle: cloning it yields another handle to
//! the same item, and in-place updates made by the animated list are visible
//! through every clone. Identity is allocation identity.

use livepts_core::Point;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone)]
pub struct PointItem(Rc<Cell<Point>>);

impl PointItem {
    pub fn new(point: Point) -> Self {
        Self(Rc::new(Cell::new(point)))
    }

    /// Current value of the item.
    pub fn get(&self) -> Point {
        self.0.get()
    }

    pub fn x(&self) -> f64 {
        self.0.get().x
    }

    pub fn y(&self) -> f64 {
        self.0.get().y
    }

    /// Whether both handles refer to the same item (not merely equal values).
    pub fn same_item(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Overwrite the value in place, keeping identity.
    pub(crate) fn set(&self, point: Point) {
        self.0.set(point);
    }
}

impl fmt::Debug for PointItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.get();
        f.debug_tuple("PointItem").field(&p.x).field(&p.y).finish()
    }
}

impl From<Point> for PointItem {
    fn from(point: Point) -> Self {
        Self::new(point)
    }
}
