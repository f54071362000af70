use std::cmp::Ordering;

/// Iterative binary search over a sorted slice. Returns the index of some
/// occurrence of `target`, or `None` when absent.
pub fn binary_search<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = values.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match values[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    None
}

/// Same contract as [`binary_search`], recursive strategy.
pub fn binary_search_recursive<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    search_window(values, target, 0, values.len())
}

fn search_window<T: Ord>(values: &[T], target: &T, lo: usize, hi: usize) -> Option<usize> {
    if lo >= hi {
        return None;
    }

    let mid = lo + (hi - lo) / 2;
    match values[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_window(values, target, mid + 1, hi),
        Ordering::Greater => search_window(values, target, lo, mid),
    }
}

/// Binary search over a sorted slice that was rotated by an unknown offset.
/// One half of every window is still sorted; that half decides where to
/// continue.
pub fn shifted_binary_search<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = values.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if values[mid] == *target {
            return Some(mid);
        }

        if values[lo] <= values[mid] {
            if values[lo] <= *target && *target < values[mid] {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        } else if values[mid] < *target && *target <= values[hi - 1] {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    None
}

/// First and last index of `target`'s run in a sorted slice.
pub fn search_range<T: Ord>(values: &[T], target: &T) -> Option<(usize, usize)> {
    let first = directed_search(values, target, Direction::Left)?;
    let last = directed_search(values, target, Direction::Right)?;
    Some((first, last))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Direction {
    Left,
    Right,
}

/// Binary search that keeps narrowing toward one end of a run of equal
/// values after the first hit.
fn directed_search<T: Ord>(values: &[T], target: &T, direction: Direction) -> Option<usize> {
    let mut lo = 0;
    let mut hi = values.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match values[mid].cmp(target) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => match direction {
                Direction::Left => {
                    if mid > 0 && values[mid - 1] == *target {
                        hi = mid;
                    } else {
                        return Some(mid);
                    }
                }
                Direction::Right => {
                    if mid + 1 < values.len() && values[mid + 1] == *target {
                        lo = mid + 1;
                    } else {
                        return Some(mid);
                    }
                }
            },
        }
    }

    None
}

/// First index at which `predicate` stops holding. The slice must be
/// partitioned: every element satisfying the predicate precedes every
/// element that does not.
pub fn partition_point<T>(values: &[T], mut predicate: impl FnMut(&T) -> bool) -> usize {
    let mut lo = 0;
    let mut hi = values.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if predicate(&values[mid]) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}
