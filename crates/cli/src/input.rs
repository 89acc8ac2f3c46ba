//! Coordinate-file parsing and writing.
//!
//! Format: first an integer count N, then N `x y` pairs, all whitespace
//! separated. Stricter than lenient readers in one way: non-whitespace
//! after the Nth pair is an error, so a truncated count or a concatenated
//! file cannot pass silently.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use collinear::Point;

/// Read a point list from `path`.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Parse the `N x1 y1 .. xN yN` token stream.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut tokens = text.split_whitespace();
    let count: usize = match tokens.next() {
        Some(tok) => tok
            .parse()
            .with_context(|| format!("point count {tok:?} is not an unsigned integer"))?,
        None => bail!("empty input: expected a point count"),
    };
    let mut points = Vec::with_capacity(count);
    for index in 0..count {
        let x = next_coord(&mut tokens, index, "x")?;
        let y = next_coord(&mut tokens, index, "y")?;
        points.push(Point::new(x, y));
    }
    if let Some(extra) = tokens.next() {
        bail!("trailing token {extra:?} after {count} points");
    }
    Ok(points)
}

fn next_coord<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    index: usize,
    axis: &str,
) -> Result<i32> {
    let tok = tokens
        .next()
        .with_context(|| format!("point {index}: missing {axis} coordinate"))?;
    tok.parse()
        .with_context(|| format!("point {index}: {axis} coordinate {tok:?} is not an integer"))
}

/// Write a point list in the same format, one pair per line.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    let mut text = String::new();
    // Writes into a String cannot fail.
    let _ = writeln!(text, "{}", points.len());
    for p in points {
        let _ = writeln!(text, "{} {}", p.x, p.y);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}
