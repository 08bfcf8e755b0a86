//! The rectangular character grid a level is played on.

use crate::border;
use crate::codec;
use crate::error::{MapError, Result};
use crate::symbols::{self, DOT, POWER_PELLET, WALL_H};
use nalgebra::Point2;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::path::Path;

/// Enum for direction values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Direction {
    /// +x, towards the right edge of the screen.
    Right = 0,
    /// -x, towards the left edge of the screen.
    Left = 1,
    /// -y, towards the top of the screen.
    Up = 2,
    /// +y, towards the bottom of the screen.
    Down = 3,
}

impl Direction {
    /// All four directions, in enum order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// The `(dx, dy)` offset one step in this direction applies.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// A rectangular mapping from `(row, column)` to a single map character.
///
/// Every row is padded to the longest row's length with spaces at
/// construction; width and height never change afterwards. The grid is
/// mutable in place only through [`Grid::eat`], which removes dots and
/// pellets during play.
///
/// # Examples
///
/// ```
/// use pacmap::grid::Grid;
/// use pacmap::standard_maps::MAP_DEMO;
///
/// let grid = Grid::new(MAP_DEMO.lines().map(String::from).collect()).unwrap();
/// assert_eq!((grid.width(), grid.height()), (12, 9));
/// assert_eq!(grid.at(0, 0), Some('╔'));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Builds a grid from rows of characters, padding every row with spaces
    /// to the longest row's length.
    ///
    /// Fails with [`MapError::InvalidInput`] when there are no rows or every
    /// row is empty.
    pub fn new(rows: Vec<String>) -> Result<Self> {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        if width == 0 {
            return Err(MapError::InvalidInput(
                "map has no rows or only empty rows".into(),
            ));
        }
        let cells: Vec<Vec<char>> = rows
            .iter()
            .map(|row| {
                let mut chars: Vec<char> = row.chars().collect();
                chars.resize(width, ' ');
                chars
            })
            .collect();
        let height = cells.len();
        Ok(Grid {
            cells,
            width,
            height,
        })
    }

    /// Grid width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Character at `(row, col)`, or `None` out of bounds.
    pub fn at(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Character at a point (`x` = column, `y` = row), or `None` out of
    /// bounds.
    pub fn at_point(&self, p: Point2<i32>) -> Option<char> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        self.at(p.y as usize, p.x as usize)
    }

    /// Whether the cell at `p` is in bounds and not a wall or closed door.
    pub fn walkable(&self, p: Point2<i32>) -> bool {
        self.at_point(p).is_some_and(symbols::is_walkable)
    }

    /// The point one step in `direction` from `p`, or `None` if it would
    /// leave the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::Point2;
    /// use pacmap::grid::{Direction, Grid};
    ///
    /// let grid = Grid::new(vec!["···".into(), "···".into()]).unwrap();
    /// assert_eq!(grid.next(Point2::new(1, 1), Direction::Up), Some(Point2::new(1, 0)));
    /// assert_eq!(grid.next(Point2::new(1, 1), Direction::Down), None);
    /// ```
    pub fn next(&self, p: Point2<i32>, direction: Direction) -> Option<Point2<i32>> {
        let (dx, dy) = direction.offset();
        let next = Point2::new(p.x + dx, p.y + dy);
        if next.x < 0 || next.y < 0 || next.x >= self.width as i32 || next.y >= self.height as i32 {
            return None;
        }
        Some(next)
    }

    /// Consumes the dot or power pellet at `p`, replacing it with a space.
    ///
    /// Returns the eaten glyph, or `None` if the cell holds neither.
    /// Dimensions never change; this is the only in-place mutation the grid
    /// supports during play.
    pub fn eat(&mut self, p: Point2<i32>) -> Option<char> {
        let glyph = self.at_point(p)?;
        if glyph != DOT && glyph != POWER_PELLET {
            return None;
        }
        self.cells[p.y as usize][p.x as usize] = ' ';
        Some(glyph)
    }

    /// Marks a cell as blocked on a scratch grid during flood fill.
    pub(crate) fn block(&mut self, p: Point2<i32>) {
        if self.at_point(p).is_some() {
            self.cells[p.y as usize][p.x as usize] = WALL_H;
        }
    }

    /// The grid rows as strings, padded to full width.
    pub fn lines(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.iter().collect()).collect()
    }
}

/// Loads a grid from a run-length-encoded map file: one RLE row per line
/// over the simplified alphabet, decompressed and border-reconstructed.
///
/// An unreadable or non-UTF-8 file is [`MapError::InvalidInput`]; decoding
/// and reconstruction failures carry their own variants.
pub fn load_level_map(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        MapError::InvalidInput(format!("cannot read map file {}: {e}", path.display()))
    })?;
    let rle: Vec<&str> = text.lines().collect();
    let simplified = codec::decompress(&rle)?;
    let pretty = border::prettify(&simplified)?;
    Grid::new(pretty)
}
