//! Authored (base) point list: lazily parsed from the attribute text.

use crate::error::{LiveAttributeError, Result};
use crate::item::PointItem;
use livepts_core::{AttrName, Point, emit_points, parse_points};

/// Items of the base value plus whether they reflect the current attribute.
#[derive(Debug, Default)]
pub(crate) struct BaseList {
    items: Vec<PointItem>,
    valid: bool,
}

impl BaseList {
    pub(crate) fn is_valid(&self) -> bool {
        self.valid
    }

    pub(crate) fn items(&self) -> &[PointItem] {
        &self.items
    }

    /// Mark the items stale. The next read re-parses the attribute.
    pub(crate) fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Rebuild the items from `text` (the attribute value, or the configured
    /// default when the attribute is absent).
    ///
    /// A parse failure still leaves the list valid, holding no items, so the
    /// error surfaces once instead of on every read.
    pub(crate) fn revalidate(&mut self, name: AttrName, text: Option<&str>) -> Result<()> {
        if self.valid {
            return Ok(());
        }
        let Some(text) = text else {
            return Err(LiveAttributeError::AttributeMissing { name });
        };

        match parse_points(text) {
            Ok(points) => {
                log::debug!("revalidated `{name}`: {} points", points.len());
                self.items = points.into_iter().map(PointItem::new).collect();
                self.valid = true;
                Ok(())
            }
            Err(source) => {
                log::warn!("malformed `{name}` attribute {text:?}: {source}");
                self.items.clear();
                self.valid = true;
                Err(LiveAttributeError::AttributeMalformed {
                    name,
                    value: text.to_owned(),
                    source,
                })
            }
        }
    }

    /// Apply a structural edit and return the text to write back.
    /// Nothing changes if the edit fails.
    pub(crate) fn edit<R>(
        &mut self,
        separator: &str,
        edit: impl FnOnce(&mut Vec<PointItem>) -> Result<R>,
    ) -> Result<(R, String)> {
        let result = edit(&mut self.items)?;
        self.valid = true;
        Ok((result, self.to_text(separator)))
    }

    pub(crate) fn to_text(&self, separator: &str) -> String {
        emit_points(self.items.iter().map(PointItem::get), separator)
    }
}

// ─── Structural edits ────────────────────────────────────────────────────

fn check_index(items: &[PointItem], index: usize) -> Result<()> {
    if index < items.len() {
        Ok(())
    } else {
        Err(LiveAttributeError::IndexOutOfRange {
            index,
            len: items.len(),
        })
    }
}

fn check_finite(point: Point) -> Result<()> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(LiveAttributeError::NonFinitePoint {
            x: point.x,
            y: point.y,
        })
    }
}

pub(crate) fn clear(items: &mut Vec<PointItem>) -> Result<()> {
    items.clear();
    Ok(())
}

pub(crate) fn initialize(items: &mut Vec<PointItem>, point: Point) -> Result<PointItem> {
    check_finite(point)?;
    items.clear();
    append(items, point)
}

/// Insert before `index`; `index == len` appends.
pub(crate) fn insert_before(
    items: &mut Vec<PointItem>,
    point: Point,
    index: usize,
) -> Result<PointItem> {
    check_finite(point)?;
    if index > items.len() {
        return Err(LiveAttributeError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }
    let item = PointItem::new(point);
    items.insert(index, item.clone());
    Ok(item)
}

pub(crate) fn replace(items: &mut [PointItem], point: Point, index: usize) -> Result<PointItem> {
    check_index(items, index)?;
    check_finite(point)?;
    let item = PointItem::new(point);
    items[index] = item.clone();
    Ok(item)
}

pub(crate) fn remove(items: &mut Vec<PointItem>, index: usize) -> Result<PointItem> {
    check_index(items, index)?;
    Ok(items.remove(index))
}

pub(crate) fn append(items: &mut Vec<PointItem>, point: Point) -> Result<PointItem> {
    check_finite(point)?;
    let item = PointItem::new(point);
    items.push(item.clone());
    Ok(item)
}
