use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::graph::DirectedGraph;

const W_MAX: u64 = 1_000_000;

/// Graph families exercised by the benchmarks and smoke tests.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    LineWithShortcuts,
    Grid,
    SplitComponents,
}

impl GraphCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::LineWithShortcuts => "line_with_shortcuts",
            Self::Grid => "grid",
            Self::SplitComponents => "split_components",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: DirectedGraph,
    pub source: usize,
}

pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> GeneratedGraph {
    match case {
        GraphCase::SparseRandom => sparse_random_case(size.max(16), seed),
        GraphCase::DenseRandom => dense_random_case(size.max(64), seed),
        GraphCase::LineWithShortcuts => line_with_shortcuts_case(size.max(16), seed),
        GraphCase::Grid => grid_case(size.max(64), seed),
        GraphCase::SplitComponents => split_components_case(size.max(16), seed),
    }
}

fn sparse_random_case(n: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let m = n * 4;
    let mut edges = Vec::with_capacity(m);

    while edges.len() < m {
        let u = rng.random_range(0..n as u32);
        let v = rng.random_range(0..n as u32);
        if u == v {
            continue;
        }
        edges.push((u, v, rng.random_range(0..=W_MAX)));
    }

    GeneratedGraph {
        graph: DirectedGraph::from_edges(n, &edges),
        source: rng.random_range(0..n),
    }
}

fn dense_random_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(n * (n - 1));

    for u in 0..n {
        for v in 0..n {
            if u != v {
                edges.push((u as u32, v as u32, rng.random_range(0..=W_MAX)));
            }
        }
    }

    GeneratedGraph {
        graph: DirectedGraph::from_edges(n, &edges),
        source: rng.random_range(0..n),
    }
}

/// A long path with a few forward shortcuts, so the frontier stays narrow
/// and decrease-key fires often.
fn line_with_shortcuts_case(n: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(n + n / 2);

    for i in 0..(n - 1) {
        edges.push((i as u32, (i + 1) as u32, rng.random_range(0..=W_MAX)));
    }
    for _ in 0..(n / 2) {
        let from = rng.random_range(0..(n - 2));
        let to = (from + rng.random_range(2..=4)).min(n - 1);
        edges.push((from as u32, to as u32, rng.random_range(0..=W_MAX)));
    }

    GeneratedGraph {
        graph: DirectedGraph::from_edges(n, &edges),
        source: 0,
    }
}

fn grid_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = floor_sqrt(size).max(4);
    let n = len * len;
    let index = |i: usize, j: usize| -> u32 { (i * len + j) as u32 };
    let mut edges = Vec::with_capacity(n * 4);

    for i in 0..len {
        for j in 0..len {
            if j + 1 < len {
                edges.push((index(i, j), index(i, j + 1), rng.random_range(0..=W_MAX)));
                edges.push((index(i, j + 1), index(i, j), rng.random_range(0..=W_MAX)));
            }
            if i + 1 < len {
                edges.push((index(i, j), index(i + 1, j), rng.random_range(0..=W_MAX)));
                edges.push((index(i + 1, j), index(i, j), rng.random_range(0..=W_MAX)));
            }
        }
    }

    GeneratedGraph {
        graph: DirectedGraph::from_edges(n, &edges),
        source: rng.random_range(0..n),
    }
}

/// Two sparse halves with no edges across, so the far half is unreachable
/// and the engine's infinite-distance short-circuit fires.
fn split_components_case(n: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = n / 2;
    let mut edges = Vec::with_capacity(n * 2);

    for base in [0, half] {
        let limit = if base == 0 { half } else { n - half };
        let mut added = 0;
        while added < limit * 2 {
            let u = base + rng.random_range(0..limit);
            let v = base + rng.random_range(0..limit);
            if u == v {
                continue;
            }
            edges.push((u as u32, v as u32, rng.random_range(0..=W_MAX)));
            added += 1;
        }
    }

    GeneratedGraph {
        graph: DirectedGraph::from_edges(n, &edges),
        source: rng.random_range(0..half),
    }
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}
