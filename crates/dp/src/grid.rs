use std::collections::HashMap;

/// Number of monotone paths (right/down moves only) from the top-left to
/// the bottom-right corner of a `rows` x `cols` grid.
pub fn grid_traveler(rows: u64, cols: u64) -> u64 {
    count_paths(rows, cols, &mut HashMap::new())
}

fn count_paths(rows: u64, cols: u64, memo: &mut HashMap<(u64, u64), u64>) -> u64 {
    if rows == 0 || cols == 0 {
        return 0;
    }
    if rows == 1 && cols == 1 {
        return 1;
    }

    // The count is symmetric in its arguments; one ordered key serves both.
    let key = if rows <= cols { (rows, cols) } else { (cols, rows) };
    if let Some(&known) = memo.get(&key) {
        return known;
    }

    let ways = count_paths(rows, cols - 1, memo) + count_paths(rows - 1, cols, memo);
    memo.insert(key, ways);
    ways
}
