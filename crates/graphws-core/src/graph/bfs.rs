use std::collections::{HashSet, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::model::Graph;
use crate::graph::types::{Reach, Vertex};

impl Graph {
    /// Breadth-first reachability over outbound edges, starting at `seed`.
    ///
    /// Vertices already in `visited` are not expanded again; every vertex
    /// discovered here is added to it. Each traversed edge `(x, y)` is
    /// recorded with its cost in both directions. A reverse pair only takes
    /// the forward cost when the graph has no edge of its own for it.
    ///
    /// Returns an empty [`Reach`] if `seed` was already visited.
    pub fn breadth_first_reach(&self, seed: Vertex, visited: &mut HashSet<Vertex>) -> Result<Reach> {
        if !self.contains_vertex(seed) {
            return Err(GraphError::unknown_vertex(seed));
        }

        let mut reach = Reach::default();
        if !visited.insert(seed) {
            return Ok(reach);
        }
        reach.vertices.push(seed);

        let mut queue = VecDeque::from([seed]);
        while let Some(x) = queue.pop_front() {
            for y in self.out_neighbors(x)? {
                let cost = self.cost(x, y)?;
                reach.edges.insert((x, y), cost);
                reach.edges.entry((y, x)).or_insert(cost);

                if visited.insert(y) {
                    reach.vertices.push(y);
                    queue.push_back(y);
                }
            }
        }

        tracing::trace!(
            seed,
            vertices = reach.vertices.len(),
            edges = reach.edges.len(),
            "breadth_first_reach"
        );
        Ok(reach)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::EdgeCosts;

    #[test]
    fn test_reach_follows_out_edges_in_fifo_order() {
        let mut graph = Graph::with_vertices([1, 2, 3, 4, 5]).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        graph.add_edge(1, 3, 2).unwrap();
        graph.add_edge(2, 4, 3).unwrap();

        let mut visited = HashSet::new();
        let reach = graph.breadth_first_reach(1, &mut visited).unwrap();

        assert_eq!(reach.vertices, vec![1, 2, 3, 4]);
        assert_eq!(visited, HashSet::from([1, 2, 3, 4]));
        assert_eq!(
            reach.edges,
            EdgeCosts::from([
                ((1, 2), 1),
                ((2, 1), 1),
                ((1, 3), 2),
                ((3, 1), 2),
                ((2, 4), 3),
                ((4, 2), 3),
            ])
        );
    }

    #[test]
    fn test_reach_skips_already_visited() {
        let mut graph = Graph::with_vertices([1, 2, 3]).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        graph.add_edge(2, 3, 1).unwrap();

        let mut visited = HashSet::from([2]);
        let reach = graph.breadth_first_reach(1, &mut visited).unwrap();
        assert_eq!(reach.vertices, vec![1]);
        assert!(reach.edges.contains_key(&(1, 2)));
        assert!(!reach.edges.contains_key(&(2, 3)));

        let again = graph.breadth_first_reach(1, &mut visited).unwrap();
        assert_eq!(again, Reach::default());
    }

    #[test]
    fn test_reach_keeps_real_reverse_cost() {
        let mut graph = Graph::with_vertices([1, 2]).unwrap();
        graph.add_edge(1, 2, 4).unwrap();
        graph.add_edge(2, 1, 6).unwrap();

        let mut visited = HashSet::new();
        let reach = graph.breadth_first_reach(1, &mut visited).unwrap();
        assert_eq!(reach.edges, EdgeCosts::from([((1, 2), 4), ((2, 1), 6)]));
    }

    #[test]
    fn test_reach_unknown_seed() {
        let graph = Graph::new();
        let mut visited = HashSet::new();
        assert!(matches!(
            graph.breadth_first_reach(7, &mut visited),
            Err(GraphError::UnknownVertex { vertex: 7 })
        ));
    }
}
