//! Emitter: points → attribute text.
//!
//! Produces text that round-trips through the parser. Numbers use the
//! shortest decimal form that re-parses to the same `f64`.

use kurbo::Point;
use std::fmt::Write;

/// Emit one point as `x,y`.
#[must_use]
pub fn emit_point(point: Point) -> String {
    let mut out = String::with_capacity(16);
    write_point(&mut out, point);
    out
}

/// Emit a point list, joining items with `separator`.
/// An empty list emits the empty string; there is no trailing separator.
#[must_use]
pub fn emit_points<I>(points: I, separator: &str) -> String
where
    I: IntoIterator<Item = Point>,
{
    let points = points.into_iter();
    let mut out = String::with_capacity(points.size_hint().0 * 8);
    for (i, point) in points.enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write_point(&mut out, point);
    }
    out
}

fn write_point(out: &mut String, point: Point) {
    let _ = write!(out, "{},{}", point.x, point.y);
}
