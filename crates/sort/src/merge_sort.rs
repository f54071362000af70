/// Top-down merge sort. Not in place: every level merges into freshly
/// allocated vectors, O(n log n) time and O(n log n) allocated space.
pub fn merge_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let mid = values.len() / 2;
    let left = merge_sort(&values[..mid]);
    let right = merge_sort(&values[mid..]);
    merge_sorted(left, right)
}

fn merge_sorted<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut a = left.next();
    let mut b = right.next();

    loop {
        match (a.take(), b.take()) {
            (Some(x), Some(y)) => {
                if x <= y {
                    merged.push(x);
                    a = left.next();
                    b = Some(y);
                } else {
                    merged.push(y);
                    a = Some(x);
                    b = right.next();
                }
            }
            (Some(x), None) => {
                merged.push(x);
                merged.extend(left);
                break;
            }
            (None, Some(y)) => {
                merged.push(y);
                merged.extend(right);
                break;
            }
            (None, None) => break,
        }
    }

    merged
}
