//! Walkable-cell and intersection-node graphs over a grid.
//!
//! Navigation happens in two tiers. The [`CellGraph`] is a flood fill of
//! every walkable cell reachable from a start coordinate, linked to its
//! cardinal neighbors. The [`NodeGraph`] collapses that to intersection
//! cells only (three or more walkable neighbors), connected by
//! corridor-length edges, which is the compact structure path planning runs
//! on.

use crate::error::{MapError, Result};
use crate::grid::{Direction, Grid};
use log::debug;
use nalgebra::Point2;
use std::collections::{BTreeMap, HashMap, VecDeque};

/// A walkable grid position discovered by the flood fill.
///
/// Identifiers are `row * width + column` and are stable for a given grid
/// and start point only within a single build.
#[derive(Clone, Debug)]
pub struct Cell {
    /// Unique identifier, `row * width + column`.
    pub id: usize,
    /// Position on the grid (`x` = column, `y` = row).
    pub pos: Point2<i32>,
    /// Indices into the owning graph's cell vector, one per cardinal
    /// neighbor at Euclidean distance exactly 1.
    pub neighbors: Vec<usize>,
}

impl Cell {
    /// Whether this cell is an intersection: three or more walkable
    /// neighbors.
    pub fn is_intersection(&self) -> bool {
        self.neighbors.len() >= 3
    }
}

/// Every walkable cell reachable from a start coordinate, with
/// adjacency-by-proximity links.
///
/// # Examples
///
/// ```
/// use nalgebra::Point2;
/// use pacmap::graph::CellGraph;
/// use pacmap::grid::Grid;
/// use pacmap::standard_maps::MAP_DEMO;
///
/// let grid = Grid::new(MAP_DEMO.lines().map(String::from).collect()).unwrap();
/// let cells = CellGraph::build(&grid, Point2::new(1, 1)).unwrap();
/// assert!(!cells.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct CellGraph {
    cells: Vec<Cell>,
}

impl CellGraph {
    /// Breadth-first flood fill from `start` over 4-connected walkable
    /// cells, followed by the pairwise neighbor-linking pass.
    ///
    /// Fails with [`MapError::InvalidStart`] when `start` is a wall, a
    /// closed door, or out of bounds. Cells come back sorted ascending by id
    /// for determinism.
    ///
    /// The fill is O(W·H); linking is a deliberate O(N²) scan over all cell
    /// pairs, registering a bidirectional link exactly when the Euclidean
    /// distance is 1. The node reducer assumes this full pairwise check.
    pub fn build(grid: &Grid, start: Point2<i32>) -> Result<Self> {
        if !grid.walkable(start) {
            return Err(MapError::InvalidStart {
                x: start.x,
                y: start.y,
            });
        }

        // visit each position once, marking a private scratch copy
        let mut scratch = grid.clone();
        let mut discovered: BTreeMap<usize, Point2<i32>> = BTreeMap::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(pos) = queue.pop_front() {
            if !scratch.walkable(pos) {
                continue;
            }
            let id = pos.y as usize * grid.width() + pos.x as usize;
            discovered.insert(id, pos);
            scratch.block(pos);
            for direction in Direction::ALL {
                if let Some(next) = scratch.next(pos, direction) {
                    if scratch.walkable(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        let mut cells: Vec<Cell> = discovered
            .into_iter()
            .map(|(id, pos)| Cell {
                id,
                pos,
                neighbors: Vec::new(),
            })
            .collect();

        for i in 0..cells.len() {
            for j in 0..cells.len() {
                if i == j {
                    continue;
                }
                let d = cells[i].pos - cells[j].pos;
                if d.x * d.x + d.y * d.y == 1 {
                    cells[i].neighbors.push(j);
                }
            }
        }

        debug!("cell graph: {} walkable cells", cells.len());
        Ok(CellGraph { cells })
    }

    /// The cells, sorted ascending by id.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells in the graph.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the graph holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// An intersection cell in the reduced graph.
#[derive(Clone, Debug)]
pub struct Node {
    /// Index of the underlying cell in the cell graph.
    pub cell: usize,
    /// The underlying cell's id.
    pub id: usize,
    /// Position on the grid (`x` = column, `y` = row).
    pub pos: Point2<i32>,
    /// Outgoing `(corridor distance, node index)` edges.
    ///
    /// Both directions of a corridor are discovered independently; path
    /// search consumes only outgoing edges, so both ends record theirs.
    pub edges: Vec<(u32, usize)>,
}

/// The intersection-only graph with corridor-length-weighted edges.
///
/// # Examples
///
/// ```
/// use nalgebra::Point2;
/// use pacmap::graph::NodeGraph;
/// use pacmap::grid::Grid;
/// use pacmap::standard_maps::MAP_PLUS;
///
/// let grid = Grid::new(MAP_PLUS.lines().map(String::from).collect()).unwrap();
/// let graph = NodeGraph::build(&grid, Point2::new(2, 2)).unwrap();
/// assert_eq!(graph.nodes().len(), 1);
/// assert!(graph.nodes()[0].edges.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct NodeGraph {
    nodes: Vec<Node>,
    cells: CellGraph,
}

impl NodeGraph {
    /// Builds the cell graph from `start`, keeps the intersection cells as
    /// nodes, and walks every corridor to connect them.
    ///
    /// Each corridor walk follows the unique non-backtracking neighbor
    /// cell-by-cell until another intersection is reached, accumulating hop
    /// count as the edge distance. A walk ending in a dead end, or looping
    /// back to its own origin, records no edge. Corridors between two
    /// intersections never branch; any branch point is itself an
    /// intersection.
    pub fn build(grid: &Grid, start: Point2<i32>) -> Result<Self> {
        let cell_graph = CellGraph::build(grid, start)?;
        let cells = cell_graph.cells();

        let mut node_of_cell: HashMap<usize, usize> = HashMap::new();
        let mut nodes: Vec<Node> = Vec::new();
        for (index, cell) in cells.iter().enumerate() {
            if cell.is_intersection() {
                node_of_cell.insert(index, nodes.len());
                nodes.push(Node {
                    cell: index,
                    id: cell.id,
                    pos: cell.pos,
                    edges: Vec::new(),
                });
            }
        }

        for node_index in 0..nodes.len() {
            let origin = nodes[node_index].cell;
            for &first in &cells[origin].neighbors {
                let mut last = origin;
                let mut current = first;
                let mut hops = 1u32;
                loop {
                    if cells[current].is_intersection() {
                        if current != origin {
                            let target = node_of_cell[&current];
                            nodes[node_index].edges.push((hops, target));
                        }
                        break;
                    }
                    // the unique non-backtracking neighbor; absent at a dead end
                    let next = cells[current].neighbors.iter().find(|&&n| n != last);
                    match next {
                        Some(&next) => {
                            last = current;
                            current = next;
                            hops += 1;
                        }
                        None => break,
                    }
                }
            }
        }

        debug!(
            "node graph: {} intersections over {} cells",
            nodes.len(),
            cells.len()
        );
        Ok(NodeGraph {
            nodes,
            cells: cell_graph,
        })
    }

    /// Assembles a graph from bare nodes, for tests that need shapes the
    /// flood fill can never produce (e.g. disconnected components).
    #[cfg(test)]
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        NodeGraph {
            nodes,
            cells: CellGraph { cells: Vec::new() },
        }
    }

    /// The intersection nodes, in ascending cell-id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The underlying cell graph.
    pub fn cell_graph(&self) -> &CellGraph {
        &self.cells
    }

    /// Index of the node at a grid position, if that position is an
    /// intersection.
    pub fn node_at(&self, pos: Point2<i32>) -> Option<usize> {
        self.nodes.iter().position(|n| n.pos == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard_maps::{MAP_DEMO, MAP_PLUS};

    fn demo_grid() -> Grid {
        Grid::new(MAP_DEMO.lines().map(String::from).collect()).unwrap()
    }

    #[test]
    fn build_rejects_wall_start() {
        let grid = demo_grid();
        assert!(matches!(
            CellGraph::build(&grid, Point2::new(0, 0)),
            Err(MapError::InvalidStart { x: 0, y: 0 })
        ));
        assert!(matches!(
            CellGraph::build(&grid, Point2::new(-1, 4)),
            Err(MapError::InvalidStart { .. })
        ));
    }

    #[test]
    fn cells_are_sorted_by_id() {
        let grid = demo_grid();
        let cells = CellGraph::build(&grid, Point2::new(1, 1)).unwrap();
        let ids: Vec<usize> = cells.cells().iter().map(|c| c.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn ids_encode_row_and_column() {
        let grid = demo_grid();
        let cells = CellGraph::build(&grid, Point2::new(1, 1)).unwrap();
        for cell in cells.cells() {
            assert_eq!(
                cell.id,
                cell.pos.y as usize * grid.width() + cell.pos.x as usize
            );
        }
    }

    #[test]
    fn neighbor_links_are_unit_distance_and_symmetric() {
        let grid = demo_grid();
        let graph = CellGraph::build(&grid, Point2::new(1, 1)).unwrap();
        let cells = graph.cells();
        for (i, cell) in cells.iter().enumerate() {
            for &j in &cell.neighbors {
                let d = cell.pos - cells[j].pos;
                assert_eq!(d.x * d.x + d.y * d.y, 1);
                assert!(cells[j].neighbors.contains(&i));
            }
        }
    }

    #[test]
    fn every_cell_is_reachable_through_neighbor_links() {
        let grid = demo_grid();
        let graph = CellGraph::build(&grid, Point2::new(1, 1)).unwrap();
        let cells = graph.cells();
        let start = cells.iter().position(|c| c.pos == Point2::new(1, 1)).unwrap();
        let mut seen = vec![false; cells.len()];
        let mut queue = VecDeque::from([start]);
        while let Some(i) = queue.pop_front() {
            if std::mem::replace(&mut seen[i], true) {
                continue;
            }
            queue.extend(cells[i].neighbors.iter().copied());
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn every_node_is_a_true_intersection() {
        let grid = demo_grid();
        let graph = NodeGraph::build(&grid, Point2::new(1, 1)).unwrap();
        let cells = graph.cell_graph().cells();
        for node in graph.nodes() {
            assert!(cells[node.cell].neighbors.len() >= 3);
        }
        // and no intersection cell is missing from the node set
        let intersections = cells.iter().filter(|c| c.is_intersection()).count();
        assert_eq!(intersections, graph.nodes().len());
    }

    #[test]
    fn demo_map_intersections_and_corridors() {
        let grid = demo_grid();
        let graph = NodeGraph::build(&grid, Point2::new(1, 1)).unwrap();
        let positions: Vec<Point2<i32>> = graph.nodes().iter().map(|n| n.pos).collect();
        assert_eq!(
            positions,
            vec![
                Point2::new(6, 1),
                Point2::new(1, 4),
                Point2::new(6, 4),
                Point2::new(10, 4),
                Point2::new(6, 7),
            ]
        );

        // the center column corridor is 3 hops each way
        let top = graph.node_at(Point2::new(6, 1)).unwrap();
        let mid = graph.node_at(Point2::new(6, 4)).unwrap();
        assert!(graph.nodes()[top].edges.contains(&(3, mid)));
        assert!(graph.nodes()[mid].edges.contains(&(3, top)));

        // the corridor around the top-left island is 8 hops
        let left = graph.node_at(Point2::new(1, 4)).unwrap();
        assert!(graph.nodes()[top].edges.contains(&(8, left)));
        assert!(graph.nodes()[left].edges.contains(&(8, top)));
    }

    #[test]
    fn plus_shape_yields_one_node_with_no_edges() {
        let grid = Grid::new(MAP_PLUS.lines().map(String::from).collect()).unwrap();
        let graph = NodeGraph::build(&grid, Point2::new(2, 2)).unwrap();
        assert_eq!(graph.nodes().len(), 1);
        assert_eq!(graph.nodes()[0].pos, Point2::new(2, 2));
        assert!(graph.nodes()[0].edges.is_empty());
    }
}
