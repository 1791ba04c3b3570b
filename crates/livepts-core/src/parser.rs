//! Parser for point-list attribute text → `Vec<Point>`.
//!
//! Built on `winnow` 0.7. The grammar follows the SVG `points` attribute:
//! numbers separated by comma-whitespace, read two at a time.
//!
//! ```text
//! list     := wsp* (pair (comma-wsp pair)*)? wsp*
//! pair     := number comma-wsp? number
//! comma-wsp := wsp* (',' wsp*)?
//! number   := sign? (digits ('.' digits?)? | '.' digits) exponent?
//! ```

use crate::error::ParseError;
use kurbo::Point;
use winnow::ascii::multispace0;
use winnow::combinator::delimited;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_while;

/// Parse a complete point list. Empty or blank text yields an empty list.
///
/// Fails atomically: one malformed item rejects the whole text.
#[must_use = "parsing result should be used"]
pub fn parse_points(input: &str) -> Result<Vec<Point>, ParseError> {
    let mut points = Vec::new();
    let mut rest = input;

    skip_wsp(&mut rest);

    while !rest.is_empty() {
        let offset = input.len() - rest.len();
        let point = parse_pair
            .parse_next(&mut rest)
            .map_err(|_| ParseError::new(offset, "expected a coordinate pair"))?;
        points.push(point);

        if skip_comma_wsp(&mut rest) && rest.is_empty() {
            return Err(ParseError::new(input.len(), "trailing comma"));
        }
    }

    log::trace!("parsed {} points", points.len());
    Ok(points)
}

/// Parse a single `x,y` (or `x y`) token, surrounding whitespace allowed.
#[must_use = "parsing result should be used"]
pub fn parse_point(token: &str) -> Result<Point, ParseError> {
    delimited(multispace0, parse_pair, multispace0)
        .parse(token)
        .map_err(|e| ParseError::new(e.offset(), "expected `x,y`"))
}

// ─── Low-level parsers ──────────────────────────────────────────────────

fn parse_pair(input: &mut &str) -> ModalResult<Point> {
    let x = parse_number.parse_next(input)?;
    skip_comma_wsp(input);
    let y = parse_number.parse_next(input)?;
    Ok(Point::new(x, y))
}

fn parse_digits<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(0.., |c: char| c.is_ascii_digit()).parse_next(input)
}

fn parse_number(input: &mut &str) -> ModalResult<f64> {
    let start = *input;
    if input.starts_with(['+', '-']) {
        *input = &input[1..];
    }

    let int_len = parse_digits.parse_next(input)?.len();
    let mut frac_len = 0;
    if input.starts_with('.') {
        *input = &input[1..];
        frac_len = parse_digits.parse_next(input)?.len();
    }
    if int_len + frac_len == 0 {
        *input = start;
        return Err(ErrMode::Backtrack(ContextError::new()));
    }

    // An `e` without digits belongs to whatever follows, not to this number.
    if input.starts_with(['e', 'E']) {
        let before_exp = *input;
        *input = &input[1..];
        if input.starts_with(['+', '-']) {
            *input = &input[1..];
        }
        if parse_digits.parse_next(input)?.is_empty() {
            *input = before_exp;
        }
    }

    // Out-of-range literals overflow to infinity; the emitter cannot write
    // those back in this grammar.
    let matched = &start[..start.len() - input.len()];
    match matched.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            *input = start;
            Err(ErrMode::Backtrack(ContextError::new()))
        }
    }
}

/// Whether `text` is a non-empty comma-whitespace run, i.e. safe to place
/// between two emitted items.
pub fn is_item_separator(text: &str) -> bool {
    let mut rest = text;
    skip_comma_wsp(&mut rest);
    !text.is_empty() && rest.is_empty()
}

/// Consume optional whitespace (concrete error type avoids inference issues).
fn skip_wsp(input: &mut &str) {
    let _: Result<&str, ErrMode<ContextError>> = multispace0.parse_next(input);
}

/// Consume `wsp* (',' wsp*)?`. Returns whether a comma was consumed.
fn skip_comma_wsp(input: &mut &str) -> bool {
    skip_wsp(input);
    if input.starts_with(',') {
        *input = &input[1..];
        skip_wsp(input);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_comma_and_space_separated() {
        let points = parse_points("1,2 3,4 5,6").expect("parse failed");
        assert_eq!(
            points,
            vec![
                Point::new(1.0, 2.0),
                Point::new(3.0, 4.0),
                Point::new(5.0, 6.0)
            ]
        );
    }

    #[test]
    fn parse_mixed_separators() {
        let a = parse_points("1 2 3 4").unwrap();
        let b = parse_points("1,2,3,4").unwrap();
        let c = parse_points("  1 , 2\n\t3,4  ").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn parse_empty_and_blank_text() {
        assert!(parse_points("").unwrap().is_empty());
        assert!(parse_points("   \n ").unwrap().is_empty());
    }

    #[test]
    fn parse_number_forms() {
        let points = parse_points("-1.5,+2 .5,1. 1e2,2.5E-1").unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(-1.5, 2.0),
                Point::new(0.5, 1.0),
                Point::new(100.0, 0.25)
            ]
        );
    }

    #[test]
    fn parse_sign_as_separator() {
        // `10-20` is two numbers: 10 and -20.
        let points = parse_points("10-20").unwrap();
        assert_eq!(points, vec![Point::new(10.0, -20.0)]);
    }

    #[test]
    fn reject_malformed_token() {
        let err = parse_points("1,2 bogus").unwrap_err();
        assert_eq!(err.offset, 4);
    }

    #[test]
    fn reject_odd_coordinate_count() {
        let err = parse_points("1,2 3").unwrap_err();
        assert_eq!(err.offset, 4);
    }

    #[test]
    fn reject_double_and_trailing_commas() {
        assert!(parse_points("1,,2").is_err());
        assert!(parse_points("1,2,").is_err());
        assert!(parse_points(",1,2").is_err());
    }

    #[test]
    fn reject_non_finite_words() {
        assert!(parse_points("inf,0").is_err());
        assert!(parse_points("0,NaN").is_err());
    }

    #[test]
    fn reject_overflowing_literal() {
        let err = parse_points("1,2 1e400,0").unwrap_err();
        assert_eq!(err.offset, 4);
        assert!(parse_points("0,-1e309").is_err());
        assert!(parse_point("1e999 0").is_err());
    }

    #[test]
    fn accept_extreme_finite_literals() {
        let points = parse_points("1.7976931348623157e308,1e-400").unwrap();
        assert_eq!(points, vec![Point::new(f64::MAX, 0.0)]);
    }

    #[test]
    fn item_separators() {
        for sep in [" ", ",", ", ", " , ", "\n\t"] {
            assert!(is_item_separator(sep), "{sep:?} should separate items");
        }
        for sep in ["", ";", ",,", " | ", "x"] {
            assert!(!is_item_separator(sep), "{sep:?} should not separate items");
        }
    }

    #[test]
    fn parse_single_point_token() {
        assert_eq!(parse_point("3,4").unwrap(), Point::new(3.0, 4.0));
        assert_eq!(parse_point(" 3 4 ").unwrap(), Point::new(3.0, 4.0));
    }

    #[test]
    fn reject_incomplete_point_token() {
        assert!(parse_point("3").is_err());
        assert!(parse_point("3,").is_err());
        assert!(parse_point("3,4,5").is_err());
        assert!(parse_point("").is_err());
    }
}
