use std::collections::HashMap;

/// Whether `target` can be written as a sum of elements of `numbers`, each
/// usable any number of times. Zero-valued numbers are skipped: they cannot
/// shrink the subproblem.
pub fn can_sum(target: u64, numbers: &[u64]) -> bool {
    can_sum_memo(target, numbers, &mut HashMap::new())
}

fn can_sum_memo(target: u64, numbers: &[u64], memo: &mut HashMap<u64, bool>) -> bool {
    if target == 0 {
        return true;
    }
    if let Some(&known) = memo.get(&target) {
        return known;
    }

    for &num in numbers {
        if num == 0 || num > target {
            continue;
        }
        if can_sum_memo(target - num, numbers, memo) {
            memo.insert(target, true);
            return true;
        }
    }

    memo.insert(target, false);
    false
}

/// Some combination of `numbers` summing to `target`: the first one the
/// search finds, not necessarily the shortest. `None` when impossible.
pub fn how_sum(target: u64, numbers: &[u64]) -> Option<Vec<u64>> {
    how_sum_memo(target, numbers, &mut HashMap::new())
}

fn how_sum_memo(
    target: u64,
    numbers: &[u64],
    memo: &mut HashMap<u64, Option<Vec<u64>>>,
) -> Option<Vec<u64>> {
    if target == 0 {
        return Some(Vec::new());
    }
    if let Some(known) = memo.get(&target) {
        return known.clone();
    }

    for &num in numbers {
        if num == 0 || num > target {
            continue;
        }
        if let Some(rest) = how_sum_memo(target - num, numbers, memo) {
            let mut solution = Vec::with_capacity(rest.len() + 1);
            solution.push(num);
            solution.extend(rest);
            memo.insert(target, Some(solution.clone()));
            return Some(solution);
        }
    }

    memo.insert(target, None);
    None
}

/// The shortest combination of `numbers` summing to `target`, or `None`
/// when impossible.
pub fn best_sum(target: u64, numbers: &[u64]) -> Option<Vec<u64>> {
    best_sum_memo(target, numbers, &mut HashMap::new())
}

fn best_sum_memo(
    target: u64,
    numbers: &[u64],
    memo: &mut HashMap<u64, Option<Vec<u64>>>,
) -> Option<Vec<u64>> {
    if target == 0 {
        return Some(Vec::new());
    }
    if let Some(known) = memo.get(&target) {
        return known.clone();
    }

    let mut best: Option<Vec<u64>> = None;
    for &num in numbers {
        if num == 0 || num > target {
            continue;
        }
        if let Some(rest) = best_sum_memo(target - num, numbers, memo) {
            if best.as_ref().is_none_or(|current| rest.len() + 1 < current.len()) {
                let mut candidate = Vec::with_capacity(rest.len() + 1);
                candidate.push(num);
                candidate.extend(rest);
                best = Some(candidate);
            }
        }
    }

    memo.insert(target, best.clone());
    best
}
