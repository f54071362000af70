#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    pub to: u32,
    pub weight: u64,
}

/// Immutable weighted digraph over vertices `0..vertex_count`, stored as a
/// compact adjacency array. Weights are unsigned, so negative edges are
/// unrepresentable.
#[derive(Clone, Debug)]
pub struct DirectedGraph {
    offsets: Vec<usize>,
    targets: Vec<u32>,
    weights: Vec<u64>,
}

impl DirectedGraph {
    /// Builds the graph from `(origin, destination, weight)` triples in any
    /// order. Panics if an endpoint is outside `0..vertex_count`.
    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32, u64)]) -> Self {
        let mut out_degree = vec![0_usize; vertex_count];
        for &(from, to, _) in edges {
            assert!((from as usize) < vertex_count, "origin vertex out of range");
            assert!((to as usize) < vertex_count, "destination vertex out of range");
            out_degree[from as usize] += 1;
        }

        let mut offsets = vec![0_usize; vertex_count + 1];
        for v in 0..vertex_count {
            offsets[v + 1] = offsets[v] + out_degree[v];
        }

        let mut targets = vec![0_u32; edges.len()];
        let mut weights = vec![0_u64; edges.len()];
        let mut cursor = offsets[..vertex_count].to_vec();
        for &(from, to, weight) in edges {
            let slot = cursor[from as usize];
            cursor[from as usize] += 1;
            targets[slot] = to;
            weights[slot] = weight;
        }

        Self {
            offsets,
            targets,
            weights,
        }
    }

    /// Builds the graph from per-vertex outgoing `(destination, weight)`
    /// lists, preserving each list's order. Panics if a destination is
    /// outside `0..adjacency.len()`.
    pub fn from_adjacency(adjacency: &[Vec<(u32, u64)>]) -> Self {
        let vertex_count = adjacency.len();
        let mut offsets = Vec::with_capacity(vertex_count + 1);
        offsets.push(0);
        let mut targets = Vec::new();
        let mut weights = Vec::new();

        for out_edges in adjacency {
            for &(to, weight) in out_edges {
                assert!((to as usize) < vertex_count, "destination vertex out of range");
                targets.push(to);
                weights.push(weight);
            }
            offsets.push(targets.len());
        }

        Self {
            offsets,
            targets,
            weights,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub fn out_degree(&self, v: usize) -> usize {
        self.offsets[v + 1] - self.offsets[v]
    }

    #[inline]
    pub fn out_edges(&self, v: usize) -> impl Iterator<Item = Edge> + '_ {
        let start = self.offsets[v];
        let end = self.offsets[v + 1];
        self.targets[start..end]
            .iter()
            .zip(&self.weights[start..end])
            .map(|(&to, &weight)| Edge { to, weight })
    }
}

#[cfg(test)]
mod tests {
    use super::DirectedGraph;
    use super::Edge;

    #[test]
    fn from_edges_groups_by_origin() {
        let graph = DirectedGraph::from_edges(4, &[(2, 0, 5), (0, 1, 1), (2, 3, 7), (0, 2, 9)]);
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.out_degree(0), 2);
        assert_eq!(graph.out_degree(1), 0);
        assert_eq!(graph.out_degree(2), 2);

        let from_two: Vec<Edge> = graph.out_edges(2).collect();
        assert_eq!(from_two, [Edge { to: 0, weight: 5 }, Edge { to: 3, weight: 7 }]);
    }

    #[test]
    fn from_adjacency_preserves_edge_order() {
        let graph = DirectedGraph::from_adjacency(&[vec![(1, 7), (2, 3)], vec![(0, 2)], vec![]]);
        let from_zero: Vec<Edge> = graph.out_edges(0).collect();
        assert_eq!(from_zero, [Edge { to: 1, weight: 7 }, Edge { to: 2, weight: 3 }]);
        assert_eq!(graph.out_degree(2), 0);
    }

    #[test]
    #[should_panic(expected = "destination vertex out of range")]
    fn rejects_out_of_range_destination() {
        DirectedGraph::from_adjacency(&[vec![(3, 1)]]);
    }
}
