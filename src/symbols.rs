//! The glyph alphabet shared by the codec, the border reconstructor, and the
//! grid.
//!
//! Maps exist in three parallel representations: *raw* (the decorative
//! box-drawing glyphs as authored), *simplified* (single-character stand-ins
//! suitable for run-length encoding), and *compressed* (the RLE rows stored
//! on disk). The constants here pin down the shared alphabet.

/// Horizontal wall `═`.
pub const WALL_H: char = '═';
/// Vertical wall `║`.
pub const WALL_V: char = '║';
/// Top-left corner `╔` (connects down and right).
pub const CORNER_TOP_LEFT: char = '╔';
/// Top-right corner `╗` (connects down and left).
pub const CORNER_TOP_RIGHT: char = '╗';
/// Bottom-left corner `╚` (connects up and right).
pub const CORNER_BOTTOM_LEFT: char = '╚';
/// Bottom-right corner `╝` (connects up and left).
pub const CORNER_BOTTOM_RIGHT: char = '╝';

/// Dot (a normal pellet) as drawn on the pretty map.
pub const DOT: char = '·';
/// Power pellet as drawn on the pretty map.
pub const POWER_PELLET: char = '•';

/// Simplified stand-in for any wall glyph.
pub const SIMPLE_WALL: char = '*';
/// Simplified stand-in for a dot.
pub const SIMPLE_DOT: char = '.';
/// Simplified stand-in for a power pellet.
pub const SIMPLE_PELLET: char = 'o';

/// Closed-door marker (ghost house lid).
pub const DOOR_DASH: char = '-';
/// Closed-door marker (blocked cell).
pub const DOOR_X: char = 'x';

/// The six box-drawing wall glyphs.
pub const WALL_GLYPHS: [char; 6] = [
    WALL_H,
    WALL_V,
    CORNER_TOP_LEFT,
    CORNER_TOP_RIGHT,
    CORNER_BOTTOM_LEFT,
    CORNER_BOTTOM_RIGHT,
];

/// Glyphs an actor can never stand on: the wall glyphs plus the two
/// closed-door markers.
pub const NOT_WALKABLE: [char; 8] = [
    WALL_H,
    WALL_V,
    CORNER_TOP_LEFT,
    CORNER_TOP_RIGHT,
    CORNER_BOTTOM_LEFT,
    CORNER_BOTTOM_RIGHT,
    DOOR_DASH,
    DOOR_X,
];

/// Returns whether `c` is one of the six box-drawing wall glyphs.
pub fn is_wall_glyph(c: char) -> bool {
    WALL_GLYPHS.contains(&c)
}

/// Returns whether a cell holding `c` is walkable.
pub fn is_walkable(c: char) -> bool {
    !NOT_WALKABLE.contains(&c)
}

/// Whether `c` draws a line segment towards the cell above it.
pub fn connects_up(c: char) -> bool {
    matches!(c, WALL_V | CORNER_BOTTOM_LEFT | CORNER_BOTTOM_RIGHT)
}

/// Whether `c` draws a line segment towards the cell below it.
pub fn connects_down(c: char) -> bool {
    matches!(c, WALL_V | CORNER_TOP_LEFT | CORNER_TOP_RIGHT)
}

/// Whether `c` draws a line segment towards the cell to its left.
pub fn connects_left(c: char) -> bool {
    matches!(c, WALL_H | CORNER_TOP_RIGHT | CORNER_BOTTOM_RIGHT)
}

/// Whether `c` draws a line segment towards the cell to its right.
pub fn connects_right(c: char) -> bool {
    matches!(c, WALL_H | CORNER_TOP_LEFT | CORNER_BOTTOM_LEFT)
}
