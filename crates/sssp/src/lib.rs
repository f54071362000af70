mod dijkstra;
pub mod generator;
pub mod graph;
mod indexed_heap;

pub use dijkstra::shortest_paths;
pub use graph::DirectedGraph;
pub use graph::Edge;
pub use indexed_heap::HeapEntry;
pub use indexed_heap::IndexedMinHeap;

/// Distance sentinel for unreached vertices. Relaxation saturates at this
/// value, so `INF + weight` can never wrap or escape the sentinel.
pub const INF: u64 = u64::MAX / 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The query's source vertex is outside the graph's vertex range.
    InvalidSource { source: usize, vertex_count: usize },
    /// `extract_min` was called on an empty heap.
    EmptyHeap,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSource {
                source,
                vertex_count,
            } => write!(
                f,
                "source vertex {source} is outside the vertex range 0..{vertex_count}"
            ),
            Self::EmptyHeap => write!(f, "extract_min called on an empty heap"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::Error;
    use crate::INF;
    use crate::generator::GraphCase;
    use crate::generator::generate_case;
    use crate::graph::DirectedGraph;
    use crate::shortest_paths;

    /// Lazy-deletion Dijkstra over std's `BinaryHeap`, kept as an oracle.
    fn reference_dijkstra(graph: &DirectedGraph, source: usize) -> Vec<u64> {
        let mut dist = vec![INF; graph.vertex_count()];
        dist[source] = 0;
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0_u64, source)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if d != dist[u] {
                continue;
            }
            for edge in graph.out_edges(u) {
                let v = edge.to as usize;
                let candidate = d.saturating_add(edge.weight).min(INF);
                if candidate < dist[v] {
                    dist[v] = candidate;
                    heap.push(Reverse((candidate, v)));
                }
            }
        }

        dist
    }

    fn random_graph(n: usize, m: usize, seed: u64) -> DirectedGraph {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut edges = Vec::with_capacity(m);
        while edges.len() < m {
            let u = rng.random_range(0..n as u32);
            let v = rng.random_range(0..n as u32);
            if u == v {
                continue;
            }
            edges.push((u, v, rng.random_range(0..=1_000_000_u64)));
        }
        DirectedGraph::from_edges(n, &edges)
    }

    #[test]
    fn textbook_graph_distances() {
        let graph = DirectedGraph::from_adjacency(&[
            vec![(1, 7)],
            vec![(2, 6), (3, 20), (4, 3)],
            vec![(3, 14)],
            vec![(4, 2)],
            vec![],
            vec![],
        ]);
        let dist = shortest_paths(&graph, 0).unwrap();
        assert_eq!(dist, [0, 7, 13, 16, 10, INF]);
    }

    #[test]
    fn single_vertex_graph() {
        let graph = DirectedGraph::from_adjacency(&[vec![]]);
        assert_eq!(shortest_paths(&graph, 0).unwrap(), [0]);
    }

    #[test]
    fn source_out_of_range_is_rejected() {
        let graph = DirectedGraph::from_adjacency(&[vec![], vec![]]);
        assert_eq!(
            shortest_paths(&graph, 2),
            Err(Error::InvalidSource {
                source: 2,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn unreachable_component_keeps_infinity() {
        let graph = DirectedGraph::from_edges(5, &[(0, 1, 2), (1, 2, 2), (3, 4, 1)]);
        assert_eq!(shortest_paths(&graph, 0).unwrap(), [0, 2, 4, INF, INF]);
    }

    #[test]
    fn zero_weight_edges_are_relaxed() {
        let graph = DirectedGraph::from_edges(4, &[(0, 1, 0), (1, 2, 0), (2, 3, 5), (0, 3, 7)]);
        assert_eq!(shortest_paths(&graph, 0).unwrap(), [0, 0, 0, 5]);
    }

    #[test]
    fn repeated_queries_agree() {
        let input = generate_case(GraphCase::SparseRandom, 256, 0x1DE0_0001);
        let first = shortest_paths(&input.graph, input.source).unwrap();
        let second = shortest_paths(&input.graph, input.source).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn matches_reference_on_random_graphs() {
        for seed in 0..20_u64 {
            let n = 64;
            let graph = random_graph(n, 512, 0xD1A5_0000 + seed);
            let source = (seed as usize) % n;
            assert_eq!(
                shortest_paths(&graph, source).unwrap(),
                reference_dijkstra(&graph, source),
                "seed={seed}"
            );
        }
    }

    #[test]
    fn generator_cases_match_reference() {
        let cases = [
            GraphCase::SparseRandom,
            GraphCase::DenseRandom,
            GraphCase::LineWithShortcuts,
            GraphCase::Grid,
            GraphCase::SplitComponents,
        ];

        for (i, case) in cases.iter().enumerate() {
            let input = generate_case(*case, 512, 0x5EED_0100 + i as u64);
            assert!(input.graph.vertex_count() >= 2, "case={case:?}");
            assert_eq!(
                shortest_paths(&input.graph, input.source).unwrap(),
                reference_dijkstra(&input.graph, input.source),
                "case={case:?}"
            );
        }
    }

    #[test]
    fn split_components_leave_the_far_half_unreached() {
        let input = generate_case(GraphCase::SplitComponents, 256, 0x5EED_0200);
        let dist = shortest_paths(&input.graph, input.source).unwrap();
        let n = input.graph.vertex_count();
        assert!(dist[n / 2..].iter().all(|&d| d == INF));
    }
}
