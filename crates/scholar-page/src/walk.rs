//! Random walk over an undirected graph, used for the site's decorative
//! network animation.
//!
//! The graph is recovered from vector-image geometry: node positions plus
//! line segments, where each segment connects the two nodes nearest its
//! endpoints. The walk prefers not to backtrack: the immediately previous
//! node is excluded from the neighbor choice unless it is the only way out.
//! Entirely decoupled from the publication pipeline.

use rand::Rng;

/// A 2D point.
pub type Point = (f64, f64);

/// Undirected graph over indexed nodes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Build a graph from node positions and line segments. Each segment
    /// connects the nodes nearest (by squared distance) to its two
    /// endpoints; segments whose endpoints map to the same node are
    /// discarded.
    #[must_use]
    pub fn from_segments(nodes: &[Point], segments: &[(Point, Point)]) -> Self {
        let mut adjacency = vec![Vec::new(); nodes.len()];

        for (a, b) in segments {
            let (Some(i), Some(j)) = (nearest_node(*a, nodes), nearest_node(*b, nodes)) else {
                continue;
            };
            if i == j {
                continue;
            }
            if !adjacency[i].contains(&j) {
                adjacency[i].push(j);
                adjacency[j].push(i);
            }
        }

        Self { adjacency }
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// True when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Neighbors of a node.
    #[must_use]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }
}

/// Index of the node nearest to a point. Squared distance; ties go to the
/// lower index.
fn nearest_node(point: Point, nodes: &[Point]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, (x, y)) in nodes.iter().enumerate() {
        let dx = point.0 - x;
        let dy = point.1 - y;
        let dist = dx * dx + dy * dy;
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}

/// State of a walk over a [`Graph`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    graph: &'a Graph,
    current: Option<usize>,
    previous: Option<usize>,
}

impl<'a> Walk<'a> {
    /// Start a walk with no position; the first step lands on a uniformly
    /// random node.
    #[must_use]
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph, current: None, previous: None }
    }

    /// Node the walk currently occupies.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Advance one step and return the new node. Neighbor choice excludes
    /// the node stepped from, unless backtracking is the only option; a
    /// node with no neighbors holds the walk in place. Returns `None` on an
    /// empty graph.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.graph.is_empty() {
            return None;
        }

        let next = match self.current {
            None => rng.gen_range(0..self.graph.len()),
            Some(current) => {
                let neighbors = self.graph.neighbors(current);
                let forward: Vec<usize> = neighbors
                    .iter()
                    .copied()
                    .filter(|n| Some(*n) != self.previous)
                    .collect();

                if !forward.is_empty() {
                    forward[rng.gen_range(0..forward.len())]
                } else if !neighbors.is_empty() {
                    // Dead end: going back is the only move.
                    neighbors[rng.gen_range(0..neighbors.len())]
                } else {
                    current
                }
            }
        };

        self.previous = self.current;
        self.current = Some(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn line_graph() -> Graph {
        // Three nodes in a row connected by two segments.
        let nodes = [(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)];
        let segments = [((0.1, 0.0), (9.9, 0.0)), ((10.1, 0.0), (19.9, 0.0))];
        Graph::from_segments(&nodes, &segments)
    }

    #[test]
    fn test_segments_connect_nearest_nodes() {
        let graph = line_graph();
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert_eq!(graph.neighbors(2), &[1]);
    }

    #[test]
    fn test_self_loop_segments_are_discarded() {
        let nodes = [(0.0, 0.0), (100.0, 0.0)];
        // Both endpoints nearest to node 0.
        let segments = [((0.0, 0.0), (1.0, 1.0))];
        let graph = Graph::from_segments(&nodes, &segments);
        assert!(graph.neighbors(0).is_empty());
    }

    #[test]
    fn test_duplicate_segments_add_one_edge() {
        let nodes = [(0.0, 0.0), (10.0, 0.0)];
        let segments = [((0.0, 0.0), (10.0, 0.0)), ((0.1, 0.0), (9.9, 0.0))];
        let graph = Graph::from_segments(&nodes, &segments);
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(1), &[0]);
    }

    #[test]
    fn test_walk_never_immediately_backtracks_midline() {
        let graph = line_graph();
        let mut rng = StdRng::seed_from_u64(7);
        let mut walk = Walk::new(&graph);

        // From the middle node with a previous node set, the step must go
        // forward, never back where it came from.
        for _ in 0..50 {
            walk.current = Some(1);
            walk.previous = Some(0);
            assert_eq!(walk.step(&mut rng), Some(2));
        }
    }

    #[test]
    fn test_walk_backtracks_at_dead_end() {
        let graph = line_graph();
        let mut rng = StdRng::seed_from_u64(7);
        let mut walk = Walk::new(&graph);

        walk.current = Some(2);
        walk.previous = Some(1);
        // Node 2 only connects to node 1; backtracking is allowed.
        assert_eq!(walk.step(&mut rng), Some(1));
    }

    #[test]
    fn test_walk_on_empty_graph() {
        let graph = Graph::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut walk = Walk::new(&graph);
        assert_eq!(walk.step(&mut rng), None);
    }

    #[test]
    fn test_isolated_node_stays_put() {
        let nodes = [(0.0, 0.0)];
        let graph = Graph::from_segments(&nodes, &[]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut walk = Walk::new(&graph);
        assert_eq!(walk.step(&mut rng), Some(0));
        assert_eq!(walk.step(&mut rng), Some(0));
    }
}
