#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum VisitStatus {
    Unvisited,
    InProgress,
    Visited,
}

/// Topological ordering of `0..vertex_count` under `(origin, destination)`
/// edges: every origin appears before its destination. `None` when the
/// graph has a directed cycle.
pub fn topological_sort(vertex_count: usize, edges: &[(usize, usize)]) -> Option<Vec<usize>> {
    let mut predecessors = vec![Vec::new(); vertex_count];
    for &(origin, destination) in edges {
        assert!(origin < vertex_count, "origin vertex out of range");
        assert!(destination < vertex_count, "destination vertex out of range");
        predecessors[destination].push(origin);
    }

    let mut status = vec![VisitStatus::Unvisited; vertex_count];
    let mut ordering = Vec::with_capacity(vertex_count);

    for vertex in 0..vertex_count {
        if status[vertex] != VisitStatus::Visited
            && visit_detects_cycle(vertex, &predecessors, &mut status, &mut ordering)
        {
            return None;
        }
    }

    Some(ordering)
}

/// Appends `vertex` after all its transitive predecessors; reports whether
/// a cycle was encountered on the way.
fn visit_detects_cycle(
    vertex: usize,
    predecessors: &[Vec<usize>],
    status: &mut [VisitStatus],
    ordering: &mut Vec<usize>,
) -> bool {
    if status[vertex] == VisitStatus::InProgress {
        return true;
    }

    status[vertex] = VisitStatus::InProgress;
    for &predecessor in &predecessors[vertex] {
        if status[predecessor] != VisitStatus::Visited
            && visit_detects_cycle(predecessor, predecessors, status, ordering)
        {
            return true;
        }
    }

    ordering.push(vertex);
    status[vertex] = VisitStatus::Visited;
    false
}
