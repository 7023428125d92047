use std::fmt::Write;

use crate::error::{ParseError, Result};
use crate::geometry::Path;
use crate::math::Point2;

/// Largest accepted number of decimal places.
pub const MAX_ACCURACY: usize = 20;

/// Parses a path from plain text of the form `x y, x y, ...`.
///
/// Whitespace separates the coordinates of a node and commas separate
/// nodes. Repeated delimiters count as one. A node with fewer than two
/// coordinates is skipped; tokens past the second are ignored unread.
///
/// # Errors
///
/// Returns `ParseError::InvalidNumber` if a coordinate is not a number.
pub fn parse_path(text: &str) -> Result<Path> {
    let mut path = Path::with_capacity(text.matches(',').count() + 1);
    for node in text.split(',') {
        let mut coords = node.split_whitespace().map(parse_coord);
        let (Some(x), Some(y)) = (coords.next(), coords.next()) else {
            continue;
        };
        path.push(Point2::new(x?, y?));
    }
    Ok(path)
}

fn parse_coord(token: &str) -> Result<f64> {
    token.parse::<f64>().map_err(|_| {
        ParseError::InvalidNumber {
            token: token.to_owned(),
        }
        .into()
    })
}

/// Formats a path with `accuracy` decimal places per coordinate.
///
/// `accuracy` is clamped to [`MAX_ACCURACY`]. A path with fewer than two
/// nodes formats as the empty string.
#[must_use]
pub fn format_path(path: &Path, accuracy: usize) -> String {
    if path.len() < 2 {
        return String::new();
    }
    let prec = accuracy.min(MAX_ACCURACY);
    let mut out = String::new();
    for (i, p) in path.points().iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{:.prec$} {:.prec$}", p.x, p.y);
    }
    out
}
