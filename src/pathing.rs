//! Shortest-path search over the intersection node graph.

use crate::error::{MapError, Result};
use crate::graph::NodeGraph;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Computes the lowest-weight path between two nodes of a [`NodeGraph`].
///
/// Returns the node indices `[source, ..., destination]`, where consecutive
/// entries are linked by a registered edge. Dijkstra over a binary min-heap;
/// edge weights are corridor hop counts.
///
/// Fails with [`MapError::Unreachable`] when no predecessor chain connects
/// the destination back to the source (disconnected node graph), and with
/// [`MapError::InvalidInput`] for out-of-range node indices.
///
/// # Examples
///
/// ```
/// use nalgebra::Point2;
/// use pacmap::graph::NodeGraph;
/// use pacmap::grid::Grid;
/// use pacmap::pathing::find_shortest_path;
/// use pacmap::standard_maps::MAP_DEMO;
///
/// let grid = Grid::new(MAP_DEMO.lines().map(String::from).collect()).unwrap();
/// let graph = NodeGraph::build(&grid, Point2::new(1, 1)).unwrap();
/// let from = graph.node_at(Point2::new(6, 1)).unwrap();
/// let to = graph.node_at(Point2::new(6, 7)).unwrap();
/// let path = find_shortest_path(&graph, from, to).unwrap();
/// assert_eq!(path.first(), Some(&from));
/// assert_eq!(path.last(), Some(&to));
/// ```
pub fn find_shortest_path(
    graph: &NodeGraph,
    source: usize,
    destination: usize,
) -> Result<Vec<usize>> {
    let nodes = graph.nodes();
    if source >= nodes.len() || destination >= nodes.len() {
        return Err(MapError::InvalidInput(format!(
            "node index out of range: {} nodes, requested {source} -> {destination}",
            nodes.len()
        )));
    }

    let mut distance = vec![u32::MAX; nodes.len()];
    let mut predecessor: Vec<Option<usize>> = vec![None; nodes.len()];
    let mut heap = BinaryHeap::new();
    distance[source] = 0;
    heap.push(Reverse((0u32, source)));

    while let Some(Reverse((dist, index))) = heap.pop() {
        if dist > distance[index] {
            continue; // stale heap entry
        }
        if index == destination {
            break;
        }
        for &(weight, neighbor) in &nodes[index].edges {
            let candidate = dist + weight;
            if candidate < distance[neighbor] {
                distance[neighbor] = candidate;
                predecessor[neighbor] = Some(index);
                heap.push(Reverse((candidate, neighbor)));
            }
        }
    }

    // backtrack via predecessor pointers, prepending each node
    let mut path = vec![destination];
    let mut current = destination;
    while current != source {
        match predecessor[current] {
            Some(previous) => {
                path.push(previous);
                current = previous;
            }
            None => {
                return Err(MapError::Unreachable {
                    from: source,
                    to: destination,
                })
            }
        }
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Node, NodeGraph};
    use crate::grid::Grid;
    use crate::standard_maps::MAP_DEMO;
    use nalgebra::Point2;

    fn demo_graph() -> NodeGraph {
        let grid = Grid::new(MAP_DEMO.lines().map(String::from).collect()).unwrap();
        NodeGraph::build(&grid, Point2::new(1, 1)).unwrap()
    }

    fn path_weight(graph: &NodeGraph, path: &[usize]) -> u32 {
        path.windows(2)
            .map(|pair| {
                graph.nodes()[pair[0]]
                    .edges
                    .iter()
                    .filter(|&&(_, n)| n == pair[1])
                    .map(|&(w, _)| w)
                    .min()
                    .expect("consecutive path nodes must share an edge")
            })
            .sum()
    }

    /// Exhaustive simple-path search, for cross-checking on small graphs.
    fn brute_force_best(graph: &NodeGraph, from: usize, to: usize) -> Option<u32> {
        fn recurse(
            graph: &NodeGraph,
            current: usize,
            to: usize,
            visited: &mut Vec<bool>,
            weight: u32,
            best: &mut Option<u32>,
        ) {
            if current == to {
                *best = Some(best.map_or(weight, |b: u32| b.min(weight)));
                return;
            }
            for &(w, n) in &graph.nodes()[current].edges {
                if !visited[n] {
                    visited[n] = true;
                    recurse(graph, n, to, visited, weight + w, best);
                    visited[n] = false;
                }
            }
        }
        let mut visited = vec![false; graph.nodes().len()];
        visited[from] = true;
        let mut best = None;
        recurse(graph, from, to, &mut visited, 0, &mut best);
        best
    }

    fn edgeless_node(index: usize) -> Node {
        Node {
            cell: index,
            id: index,
            pos: Point2::new(index as i32, 0),
            edges: Vec::new(),
        }
    }

    #[test]
    fn path_endpoints_and_edges_are_valid() {
        let graph = demo_graph();
        let from = graph.node_at(Point2::new(6, 1)).unwrap();
        let to = graph.node_at(Point2::new(6, 7)).unwrap();
        let path = find_shortest_path(&graph, from, to).unwrap();
        assert_eq!(path.first(), Some(&from));
        assert_eq!(path.last(), Some(&to));
        for pair in path.windows(2) {
            assert!(graph.nodes()[pair[0]]
                .edges
                .iter()
                .any(|&(_, n)| n == pair[1]));
        }
    }

    #[test]
    fn matches_exhaustive_search_on_all_pairs() {
        let graph = demo_graph();
        let n = graph.nodes().len();
        for from in 0..n {
            for to in 0..n {
                let path = find_shortest_path(&graph, from, to).unwrap();
                let weight = path_weight(&graph, &path);
                assert_eq!(Some(weight), brute_force_best(&graph, from, to));
            }
        }
    }

    #[test]
    fn source_equals_destination_is_a_single_node_path() {
        let graph = demo_graph();
        assert_eq!(find_shortest_path(&graph, 2, 2).unwrap(), vec![2]);
    }

    #[test]
    fn disconnected_components_are_unreachable() {
        // a node graph built by the flood fill is always connected, so a
        // disconnected one has to be assembled directly
        let graph = NodeGraph::from_nodes(vec![edgeless_node(0), edgeless_node(1)]);
        assert!(matches!(
            find_shortest_path(&graph, 0, 1),
            Err(MapError::Unreachable { from: 0, to: 1 })
        ));
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let graph = demo_graph();
        assert!(matches!(
            find_shortest_path(&graph, 0, 99),
            Err(MapError::InvalidInput(_))
        ));
    }
}
