#![cfg_attr(rustfmt, rustfmt_skip)]
//! A set of pre-made maps used by tests and documentation examples.

/// A small demo maze in pretty glyph form.
///
/// Two pairs of island walls split the interior into three corridors, giving
/// five intersections: one on the top corridor, three on the middle
/// corridor, and one on the bottom corridor (which also holds a power
/// pellet).
///
/// ```
/// use pacmap::codec::{compress, simplify};
/// use pacmap::standard_maps::{MAP_DEMO, MAP_DEMO_RLE};
///
/// let rows: Vec<&str> = MAP_DEMO.lines().collect();
/// let rle: Vec<&str> = MAP_DEMO_RLE.lines().collect();
/// assert_eq!(compress(&simplify(&rows)), rle);
/// ```
pub const MAP_DEMO: &str = "\
╔══════════╗
║··········║
║·╔══╗·╔═╗·║
║·╚══╝·╚═╝·║
║··········║
║·╔══╗·╔═╗·║
║·╚══╝·╚═╝·║
║··•·······║
╚══════════╝";

/// [`MAP_DEMO`] in stored form: simplified, then run-length encoded per row.
pub const MAP_DEMO_RLE: &str = "\
12*
1*10.1*
1*1.4*1.3*1.1*
1*1.4*1.3*1.1*
1*10.1*
1*1.4*1.3*1.1*
1*1.4*1.3*1.1*
1*2.1o7.1*
12*";

/// A 5×5 walled grid whose interior corridor forms a plus shape.
///
/// The center is the only cell with three or more walkable neighbors, so the
/// node graph over this map has exactly one node and no edges.
pub const MAP_PLUS: &str = "\
╔═══╗
║═·═║
║···║
║═·═║
╚═══╝";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::prettify;
    use crate::codec::{compress, decompress, simplify};

    #[test]
    fn demo_map_round_trips_through_the_codec() {
        let rows: Vec<&str> = MAP_DEMO.lines().collect();
        let simplified = simplify(&rows);
        let compressed = compress(&simplified);
        assert_eq!(compressed, MAP_DEMO_RLE.lines().collect::<Vec<_>>());
        assert_eq!(decompress(&compressed).unwrap(), simplified);
    }

    #[test]
    fn demo_map_survives_border_reconstruction() {
        let rows: Vec<&str> = MAP_DEMO.lines().collect();
        let pretty = prettify(&simplify(&rows)).unwrap();
        assert_eq!(pretty, rows);
    }
}
