/// Collapses overlapping `(start, stop)` intervals into a minimal sorted
/// set of covers.
pub fn merge_intervals(intervals: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable();

    let mut covers: Vec<(i64, i64)> = Vec::with_capacity(sorted.len());
    for (start, stop) in sorted {
        match covers.last_mut() {
            // Touching counts as overlap: [1,4] and [4,5] merge.
            Some((_, last_stop)) if *last_stop >= start => {
                *last_stop = (*last_stop).max(stop);
            }
            _ => covers.push((start, stop)),
        }
    }

    covers
}
