//! Animated (override) point list. Never parsed from text; written only by
//! merging sampled coordinates.

use crate::item::PointItem;
use livepts_core::{Point, emit_points};

#[derive(Debug, Default)]
pub(crate) struct AnimList {
    items: Vec<PointItem>,
}

impl AnimList {
    pub(crate) fn items(&self) -> &[PointItem] {
        &self.items
    }

    /// Merge interleaved `x, y` coordinates into the list.
    ///
    /// Items in the overlapping prefix are updated in place so handles held
    /// across animation frames stay attached. Extra pairs are appended and
    /// surplus items are removed from the tail. A dangling last coordinate
    /// is ignored.
    pub(crate) fn merge(&mut self, coords: &[f64]) {
        if coords.len() % 2 != 0 {
            log::warn!(
                "override has an odd number of coordinates ({}); ignoring the last",
                coords.len()
            );
        }
        let target = coords.len() / 2;
        let mut pairs = coords.chunks_exact(2).map(|p| Point::new(p[0], p[1]));

        for item in &self.items {
            match pairs.next() {
                Some(point) => item.set(point),
                None => break,
            }
        }
        self.items.extend(pairs.map(PointItem::new));
        while self.items.len() > target {
            self.items.pop();
        }

        log::trace!("merged override: {target} points");
    }

    pub(crate) fn to_text(&self, separator: &str) -> String {
        emit_points(self.items.iter().map(PointItem::get), separator)
    }
}
