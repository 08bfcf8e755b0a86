//! Reconstruction of box-drawing border glyphs from a simplified grid.
//!
//! A simplified map marks every wall cell with `*` and no longer remembers
//! which of the six box-drawing glyphs each cell was. [`prettify`] infers the
//! glyphs back from neighbor context in four sequential passes, each
//! consuming the previous pass's full output:
//!
//! 1. restore dots/pellets and classify wall cells with exactly two cardinal
//!    wall neighbors,
//! 2. classify the remaining wall cells from their full 8-neighbor pattern,
//! 3. re-derive `╔`/`╗` corners sitting in the first or last column of a row,
//! 4. re-derive `╚`/`╝` corners sitting in the first or last column of a row.
//!
//! The staged structure exists because corner disambiguation needs context
//! that is only available once earlier passes have resolved the neighbors.
//! A neighbor pattern that matches no table is a hard
//! [`MapError::UnclassifiableBorder`]: it means the maze shape itself is
//! malformed and must be fixed at authoring time.

use crate::error::{MapError, Result};
use crate::symbols::{
    self, CORNER_BOTTOM_LEFT, CORNER_BOTTOM_RIGHT, CORNER_TOP_LEFT, CORNER_TOP_RIGHT, DOT,
    POWER_PELLET, SIMPLE_DOT, SIMPLE_PELLET, SIMPLE_WALL, WALL_H, WALL_V,
};
use log::debug;

/// Reconstructs the pretty glyph form of a simplified grid.
///
/// The output has identical wall topology to the drawing the simplified grid
/// came from; empty rows are discarded between passes.
///
/// # Examples
///
/// ```
/// use pacmap::border::prettify;
///
/// let pretty = prettify(&["****", "*..*", "****"]).unwrap();
/// assert_eq!(pretty, vec!["╔══╗", "║··║", "╚══╝"]);
/// ```
pub fn prettify<S: AsRef<str>>(rows: &[S]) -> Result<Vec<String>> {
    let grid: Vec<Vec<char>> = rows
        .iter()
        .map(|row| row.as_ref().chars().collect())
        .collect();
    let grid = pass_one(&grid);
    let grid = pass_two(&grid)?;
    let grid = pass_three(&grid)?;
    let grid = pass_four(&grid)?;
    Ok(grid
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect())
}

/// Character at `(row, col)`, tolerating ragged rows and negative indices.
fn at(grid: &[Vec<char>], row: isize, col: isize) -> Option<char> {
    if row < 0 || col < 0 {
        return None;
    }
    grid.get(row as usize)?.get(col as usize).copied()
}

/// Whether the pass-1/2 cell at `(row, col)` counts as wall context: either
/// an already-resolved glyph or a still-simplified `*`.
fn is_wall_context(grid: &[Vec<char>], row: isize, col: isize) -> bool {
    at(grid, row, col).is_some_and(|c| symbols::is_wall_glyph(c) || c == SIMPLE_WALL)
}

/// Pass 1: restore dots and pellets, and resolve every `*` whose cardinal
/// wall neighbors form one of the six two-direction combinations. Any other
/// combination is deferred to pass 2, which sees the full 8-neighbor
/// context.
fn pass_one(grid: &[Vec<char>]) -> Vec<Vec<char>> {
    let mut unresolved = 0usize;
    let out: Vec<Vec<char>> = grid
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, &glyph)| match glyph {
                    SIMPLE_DOT => DOT,
                    SIMPLE_PELLET => POWER_PELLET,
                    SIMPLE_WALL => {
                        let resolved = classify_cardinal(grid, r as isize, c as isize);
                        if resolved.is_none() {
                            unresolved += 1;
                        }
                        resolved.unwrap_or(SIMPLE_WALL)
                    }
                    other => other,
                })
                .collect()
        })
        .filter(|row: &Vec<char>| !row.is_empty())
        .collect();
    debug!("border pass 1 left {unresolved} wall cells for pass 2");
    out
}

/// Pass-1 lookup: which glyph a `*` becomes given which of its four cardinal
/// neighbors are also `*`. Order: top, bottom, left, right.
fn classify_cardinal(grid: &[Vec<char>], row: isize, col: isize) -> Option<char> {
    let wall = |r, c| at(grid, r, c) == Some(SIMPLE_WALL);
    let top = wall(row - 1, col);
    let bottom = wall(row + 1, col);
    let left = wall(row, col - 1);
    let right = wall(row, col + 1);
    match (top, bottom, left, right) {
        (true, false, true, false) => Some(CORNER_BOTTOM_RIGHT),
        (true, false, false, true) => Some(CORNER_BOTTOM_LEFT),
        (false, true, true, false) => Some(CORNER_TOP_RIGHT),
        (false, true, false, true) => Some(CORNER_TOP_LEFT),
        (false, false, true, true) => Some(WALL_H),
        (true, true, false, false) => Some(WALL_V),
        _ => None,
    }
}

/// Clockwise 8-neighbor offsets, indexed 1 (top-left) through 8 (left).
const VISION_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Pass 2: resolve every remaining `*` from the ordered string of wall-bearing
/// 8-neighbor direction indices. The pattern tables are enumerated; an
/// unmatched pattern is a hard error carrying the position and pattern.
fn pass_two(grid: &[Vec<char>]) -> Result<Vec<Vec<char>>> {
    let mut out = Vec::with_capacity(grid.len());
    for (r, row) in grid.iter().enumerate() {
        let mut new_row = Vec::with_capacity(row.len());
        for (c, &glyph) in row.iter().enumerate() {
            if glyph != SIMPLE_WALL {
                new_row.push(glyph);
                continue;
            }
            let mut vision = String::new();
            for (i, (dr, dc)) in VISION_OFFSETS.iter().enumerate() {
                if is_wall_context(grid, r as isize + dr, c as isize + dc) {
                    vision.push((b'1' + i as u8) as char);
                }
            }
            match match_vision(&vision) {
                Some(resolved) => new_row.push(resolved),
                None => {
                    return Err(MapError::UnclassifiableBorder {
                        row: r,
                        col: c,
                        pattern: vision,
                    })
                }
            }
        }
        if !new_row.is_empty() {
            out.push(new_row);
        }
    }
    Ok(out)
}

/// Pass-2 lookup table mapping a wall-bearing direction pattern to a glyph.
fn match_vision(pattern: &str) -> Option<char> {
    match pattern {
        "4" | "8" | "12348" | "45678" | "123458" | "123478" | "345678" | "145678" => Some(WALL_H),
        "123456" | "123678" | "23456" | "12678" | "125678" | "234567" | "6" => Some(WALL_V),
        "4678" | "1234678" | "2346" => Some(CORNER_TOP_LEFT),
        "4568" | "1234568" | "1268" => Some(CORNER_TOP_RIGHT),
        "1245678" | "2456" | "1248" => Some(CORNER_BOTTOM_LEFT),
        "2345678" | "2678" | "2348" => Some(CORNER_BOTTOM_RIGHT),
        _ => None,
    }
}

/// Which vertical half a corner glyph belongs to during the edge-column
/// fix-up passes: `╔`/`╗` connect downward, `╚`/`╝` connect upward.
#[derive(Clone, Copy, PartialEq, Eq)]
enum CornerHalf {
    Top,
    Bottom,
}

/// Pass 3: re-derive `╔`/`╗` corners that sit in the first or last column of
/// a row, where pass 2 lacked full 8-neighbor context.
fn pass_three(grid: &[Vec<char>]) -> Result<Vec<Vec<char>>> {
    fix_edge_corners(grid, CornerHalf::Top)
}

/// Pass 4: same fix-up as pass 3, for `╚`/`╝` corners.
fn pass_four(grid: &[Vec<char>]) -> Result<Vec<Vec<char>>> {
    fix_edge_corners(grid, CornerHalf::Bottom)
}

fn fix_edge_corners(grid: &[Vec<char>], half: CornerHalf) -> Result<Vec<Vec<char>>> {
    let targets: [char; 2] = match half {
        CornerHalf::Top => [CORNER_TOP_LEFT, CORNER_TOP_RIGHT],
        CornerHalf::Bottom => [CORNER_BOTTOM_LEFT, CORNER_BOTTOM_RIGHT],
    };
    let mut out = Vec::with_capacity(grid.len());
    for (r, row) in grid.iter().enumerate() {
        let last = row.len().saturating_sub(1);
        let mut new_row = Vec::with_capacity(row.len());
        for (c, &glyph) in row.iter().enumerate() {
            if (c == 0 || c == last) && targets.contains(&glyph) {
                new_row.push(fix_edge_corner(grid, r, c, half)?);
            } else {
                new_row.push(glyph);
            }
        }
        if !new_row.is_empty() {
            out.push(new_row);
        }
    }
    Ok(out)
}

/// Re-derives one edge-column corner from its already-resolved cardinal
/// neighbors' connectivity.
///
/// A corner in the first column can only connect rightward, one in the last
/// column only leftward; the vertical partner decides between a corner and a
/// plain horizontal run (a tunnel-row wall continuing off the grid edge).
/// Neighbors that support no known shape are a hard error.
fn fix_edge_corner(grid: &[Vec<char>], row: usize, col: usize, half: CornerHalf) -> Result<char> {
    let first_col = col == 0;
    let vertical_offset: isize = match half {
        CornerHalf::Top => 1,
        CornerHalf::Bottom => -1,
    };
    let side_offset: isize = if first_col { 1 } else { -1 };

    let vertical = at(grid, row as isize + vertical_offset, col as isize)
        .filter(|&c| symbols::is_wall_glyph(c));
    let side =
        at(grid, row as isize, col as isize + side_offset).filter(|&c| symbols::is_wall_glyph(c));

    let vertical_connects = vertical.is_some_and(|c| match half {
        CornerHalf::Top => symbols::connects_up(c),
        CornerHalf::Bottom => symbols::connects_down(c),
    });
    let side_connects = side.is_some_and(|c| {
        if first_col {
            symbols::connects_left(c)
        } else {
            symbols::connects_right(c)
        }
    });

    match (vertical_connects, side_connects) {
        (true, true) => Ok(match (half, first_col) {
            (CornerHalf::Top, true) => CORNER_TOP_LEFT,
            (CornerHalf::Top, false) => CORNER_TOP_RIGHT,
            (CornerHalf::Bottom, true) => CORNER_BOTTOM_LEFT,
            (CornerHalf::Bottom, false) => CORNER_BOTTOM_RIGHT,
        }),
        // no vertical partner: the wall runs horizontally off the grid edge
        (false, true) => Ok(WALL_H),
        _ => Err(MapError::UnclassifiableBorder {
            row,
            col,
            pattern: [vertical, side].iter().flatten().collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(rows: &[&str]) -> Vec<Vec<char>> {
        rows.iter().map(|r| r.chars().collect()).collect()
    }

    fn strings(grid: Vec<Vec<char>>) -> Vec<String> {
        grid.into_iter().map(|r| r.into_iter().collect()).collect()
    }

    #[test]
    fn rectangle_resolves_in_pass_one() {
        let pretty = prettify(&["*****", "*...*", "*.o.*", "*****"]).unwrap();
        assert_eq!(pretty, vec!["╔═══╗", "║···║", "║·•·║", "╚═══╝"]);
    }

    #[test]
    fn ring_island_resolves_in_pass_one() {
        let pretty = prettify(&["***", "* *", "***"]).unwrap();
        assert_eq!(pretty, vec!["╔═╗", "║ ║", "╚═╝"]);
    }

    #[test]
    fn free_standing_segment_ends_resolve_in_pass_two() {
        // the two ends only see a single cardinal wall neighbor
        let pretty = prettify(&["****"]).unwrap();
        assert_eq!(pretty, vec!["════"]);
    }

    #[test]
    fn thick_wall_interior_resolves_in_pass_two() {
        // cells with three cardinal wall neighbors defer to the 8-neighbor
        // tables ("45678" and "12348")
        let pretty = prettify(&["  ****  ", "  ****  "]).unwrap();
        assert_eq!(pretty, vec!["  ╔══╗  ", "  ╚══╝  "]);
    }

    #[test]
    fn isolated_wall_cell_is_unclassifiable() {
        let err = prettify(&["  *  "]).unwrap_err();
        match err {
            MapError::UnclassifiableBorder { row, col, pattern } => {
                assert_eq!((row, col), (0, 2));
                assert!(pattern.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unclassifiable_reports_pattern() {
        // a plus of walls is malformed for this alphabet (no T or cross
        // glyphs); the first unresolvable cell is the top of the plus
        let err = prettify(&[" * ", "***", " * "]).unwrap_err();
        match err {
            MapError::UnclassifiableBorder { row, col, pattern } => {
                assert_eq!((row, col), (0, 1));
                assert_eq!(pattern, "567");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_rows_are_discarded() {
        let pretty = prettify(&["***", "* *", "***", ""]).unwrap();
        assert_eq!(pretty.len(), 3);
    }

    #[test]
    fn pass_three_rewrites_misclassified_first_column_corner() {
        // ╗ in the first column with a downward partner and a rightward run
        // must be ╔
        let grid = chars(&["╗══╗", "║  ║", "╚══╝"]);
        let fixed = strings(pass_three(&grid).unwrap());
        assert_eq!(fixed[0], "╔══╗");
    }

    #[test]
    fn pass_three_keeps_correct_corners() {
        let grid = chars(&["╔══╗", "║  ║", "╚══╝"]);
        let fixed = strings(pass_three(&grid).unwrap());
        assert_eq!(fixed, vec!["╔══╗", "║  ║", "╚══╝"]);
    }

    #[test]
    fn pass_three_flattens_tunnel_row_corner() {
        // no vertical partner below: the wall continues off the grid edge
        let grid = chars(&["╗══╗", "   ║", "═══╝"]);
        let fixed = strings(pass_three(&grid).unwrap());
        assert_eq!(fixed[0], "═══╗");
    }

    #[test]
    fn pass_four_rewrites_misclassified_last_column_corner() {
        // ╚ in the last column with an upward partner and a leftward run
        // must be ╝
        let grid = chars(&["╔══╗", "║  ║", "╚══╚"]);
        let fixed = strings(pass_four(&grid).unwrap());
        assert_eq!(fixed[2], "╚══╝");
    }

    #[test]
    fn pass_four_unsupported_corner_is_an_error() {
        // ╝ in the first column with nothing around it supports no shape
        let grid = chars(&["╝  "]);
        assert!(matches!(
            pass_four(&grid),
            Err(MapError::UnclassifiableBorder { row: 0, col: 0, .. })
        ));
    }
}
