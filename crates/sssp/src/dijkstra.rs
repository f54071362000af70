use crate::Error;
use crate::INF;
use crate::graph::DirectedGraph;
use crate::indexed_heap::HeapEntry;
use crate::indexed_heap::IndexedMinHeap;

/// Single-source shortest distances via Dijkstra's algorithm over an
/// indexed binary heap, O((V + E) log V).
///
/// Returns one distance per vertex; unreachable vertices keep [`INF`].
/// Fails with [`Error::InvalidSource`] when `source` is not a vertex of
/// `graph`.
pub fn shortest_paths(graph: &DirectedGraph, source: usize) -> Result<Vec<u64>, Error> {
    let n = graph.vertex_count();
    if source >= n {
        return Err(Error::InvalidSource {
            source,
            vertex_count: n,
        });
    }

    let mut dist = vec![INF; n];
    dist[source] = 0;

    // The source distance is seeded before the heap is built: the
    // infinite-distance short-circuit below assumes every vertex entered the
    // queue with its tentative distance.
    let entries = (0..n)
        .map(|vertex| HeapEntry {
            vertex: vertex as u32,
            priority: dist[vertex],
        })
        .collect();
    let mut queue = IndexedMinHeap::from_entries(entries);

    while !queue.is_empty() {
        let HeapEntry { vertex, priority } = queue.extract_min()?;
        if priority == INF {
            // Everything still queued is unreachable.
            break;
        }

        for edge in graph.out_edges(vertex as usize) {
            let candidate = priority.saturating_add(edge.weight).min(INF);
            if candidate < dist[edge.to as usize] {
                dist[edge.to as usize] = candidate;
                queue.decrease_key(edge.to, candidate);
            }
        }
    }

    Ok(dist)
}
