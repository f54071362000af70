/// Unweighted directed graph as per-vertex destination lists.
#[derive(Clone, Debug)]
pub struct AdjacencyList {
    edges: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Panics if any destination is outside `0..edges.len()`.
    pub fn new(edges: Vec<Vec<usize>>) -> Self {
        let vertex_count = edges.len();
        for destinations in &edges {
            for &destination in destinations {
                assert!(destination < vertex_count, "destination vertex out of range");
            }
        }
        Self { edges }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn contains(&self, vertex: usize) -> bool {
        vertex < self.edges.len()
    }

    #[inline]
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.edges[vertex]
    }

    pub fn has_edge(&self, origin: usize, destination: usize) -> bool {
        self.contains(origin)
            && self.contains(destination)
            && self.edges[origin].contains(&destination)
    }
}
