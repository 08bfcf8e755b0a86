//! Simplification and run-length encoding of map rows.
//!
//! Stored map files hold one run-length-encoded row per line, written over
//! the simplified alphabet (`*` wall, `.` dot, `o` power pellet). The codec
//! is row-local; there is no cross-row compression and no header.

use crate::error::{MapError, Result};
use crate::symbols;

/// Maps each row to the simplified alphabet.
///
/// The six wall glyphs become [`symbols::SIMPLE_WALL`], dots and power
/// pellets become their single-character stand-ins, and every other
/// character passes through unchanged. Simplify is a closure over its target
/// alphabet, so applying it twice is the same as applying it once.
///
/// # Examples
///
/// ```
/// use pacmap::codec::simplify;
///
/// assert_eq!(simplify(&["╔══╗", "║·•║"]), vec!["****", "*.o*"]);
/// ```
pub fn simplify<S: AsRef<str>>(rows: &[S]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            row.as_ref()
                .chars()
                .map(|c| {
                    if symbols::is_wall_glyph(c) {
                        symbols::SIMPLE_WALL
                    } else if c == symbols::DOT {
                        symbols::SIMPLE_DOT
                    } else if c == symbols::POWER_PELLET {
                        symbols::SIMPLE_PELLET
                    } else {
                        c
                    }
                })
                .collect()
        })
        .collect()
}

/// Run-length-encodes each row as `<count><character>` repeated.
///
/// An empty row encodes to an empty row. Compression is not guaranteed to
/// shrink pathological alternating input; it may map 1:1 or larger.
///
/// # Examples
///
/// ```
/// use pacmap::codec::compress;
///
/// assert_eq!(compress(&["****...***"]), vec!["4*3.3*"]);
/// ```
pub fn compress<S: AsRef<str>>(rows: &[S]) -> Vec<String> {
    rows.iter().map(|row| compress_row(row.as_ref())).collect()
}

fn compress_row(row: &str) -> String {
    let mut out = String::new();
    let mut run: Option<(char, usize)> = None;
    for c in row.chars() {
        run = match run {
            Some((current, count)) if current == c => Some((current, count + 1)),
            Some((current, count)) => {
                out.push_str(&count.to_string());
                out.push(current);
                Some((c, 1))
            }
            None => Some((c, 1)),
        };
    }
    if let Some((current, count)) = run {
        out.push_str(&count.to_string());
        out.push(current);
    }
    out
}

/// Inverse of [`compress`].
///
/// Each row is parsed as decimal run lengths followed by exactly one
/// character. A row that ends on pending digits, or holds a character with
/// no preceding run length, fails with [`MapError::MalformedEncoding`].
///
/// # Examples
///
/// ```
/// use pacmap::codec::decompress;
///
/// assert_eq!(decompress(&["4*3.3*"]).unwrap(), vec!["****...***"]);
/// ```
pub fn decompress<S: AsRef<str>>(rows: &[S]) -> Result<Vec<String>> {
    rows.iter()
        .enumerate()
        .map(|(line, row)| decompress_row(row.as_ref(), line))
        .collect()
}

fn decompress_row(row: &str, line: usize) -> Result<String> {
    let mut out = String::new();
    let mut count = String::new();
    for c in row.chars() {
        if c.is_ascii_digit() {
            count.push(c);
        } else {
            let n: usize = count.parse().map_err(|_| MapError::MalformedEncoding {
                line,
                detail: format!("character {c:?} has no run length"),
            })?;
            for _ in 0..n {
                out.push(c);
            }
            count.clear();
        }
    }
    if !count.is_empty() {
        return Err(MapError::MalformedEncoding {
            line,
            detail: format!("trailing digits {count:?} with no terminating character"),
        });
    }
    Ok(out)
}
