mod adjacency;
mod topological;
mod traverser;

pub use adjacency::AdjacencyList;
pub use topological::topological_sort;
pub use traverser::GraphTraverser;
pub use traverser::TraversalOrder;
