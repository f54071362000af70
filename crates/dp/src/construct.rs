use std::collections::HashMap;

/// Whether `target` can be assembled by concatenating elements of `words`,
/// each usable any number of times. Empty words are skipped.
pub fn can_construct(target: &str, words: &[&str]) -> bool {
    can_construct_from(target, words, 0, &mut HashMap::new())
}

fn can_construct_from(
    target: &str,
    words: &[&str],
    start: usize,
    memo: &mut HashMap<usize, bool>,
) -> bool {
    if start == target.len() {
        return true;
    }
    if let Some(&known) = memo.get(&start) {
        return known;
    }

    let rest = &target[start..];
    for word in words {
        if !word.is_empty()
            && rest.starts_with(word)
            && can_construct_from(target, words, start + word.len(), memo)
        {
            memo.insert(start, true);
            return true;
        }
    }

    memo.insert(start, false);
    false
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    Memoized,
    Tabulated,
}

pub const ALL_STRATEGIES: [Strategy; 2] = [Strategy::Memoized, Strategy::Tabulated];

/// Number of distinct ways to assemble `target` from `words` (with
/// replacement). Both strategies compute the same count.
pub fn count_construct(target: &str, words: &[&str], strategy: Strategy) -> u64 {
    match strategy {
        Strategy::Memoized => count_construct_from(target, words, 0, &mut HashMap::new()),
        Strategy::Tabulated => count_construct_tabulated(target, words),
    }
}

fn count_construct_from(
    target: &str,
    words: &[&str],
    start: usize,
    memo: &mut HashMap<usize, u64>,
) -> u64 {
    if start == target.len() {
        return 1;
    }
    if let Some(&known) = memo.get(&start) {
        return known;
    }

    let rest = &target[start..];
    let mut ways = 0;
    for word in words {
        if !word.is_empty() && rest.starts_with(word) {
            ways += count_construct_from(target, words, start + word.len(), memo);
        }
    }

    memo.insert(start, ways);
    ways
}

fn count_construct_tabulated(target: &str, words: &[&str]) -> u64 {
    // table[i] = number of ways to assemble target[..i].
    let mut table = vec![0_u64; target.len() + 1];
    table[0] = 1;

    for start in 0..=target.len() {
        if table[start] == 0 {
            continue;
        }
        let rest = &target[start..];
        for word in words {
            if !word.is_empty() && rest.starts_with(word) {
                table[start + word.len()] += table[start];
            }
        }
    }

    table[target.len()]
}
