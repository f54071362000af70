mod merge_sort;
mod quick_sort;

pub use merge_sort::merge_sort;
pub use quick_sort::quick_sort;

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::merge_sort;
    use super::quick_sort;

    fn fixed_cases() -> Vec<Vec<u64>> {
        vec![
            vec![],
            vec![1],
            vec![3, 2],
            vec![2, 3, 1],
            vec![1, 2, 3],
            vec![33, 33, 33, 33, 33],
            vec![33, 33, 33, 33, 44],
            vec![16, 1, 53, 99, 16, 9, 100, 300, 12],
        ]
    }

    #[test]
    fn merge_sort_fixed_cases() {
        for case in fixed_cases() {
            let mut expected = case.clone();
            expected.sort_unstable();
            assert_eq!(merge_sort(&case), expected, "case={case:?}");
        }
    }

    #[test]
    fn quick_sort_fixed_cases() {
        for case in fixed_cases() {
            let mut expected = case.clone();
            expected.sort_unstable();
            let mut result = case.clone();
            quick_sort(&mut result);
            assert_eq!(result, expected, "case={case:?}");
        }
    }

    #[test]
    fn both_sorts_match_std_on_random_data() {
        let mut rng = StdRng::seed_from_u64(0x50B7_0001);
        for round in 0..30 {
            let len = rng.random_range(0..200);
            let values: Vec<u64> = (0..len).map(|_| rng.random_range(0..50)).collect();

            let mut expected = values.clone();
            expected.sort_unstable();

            assert_eq!(merge_sort(&values), expected, "round={round}");

            let mut in_place = values.clone();
            quick_sort(&mut in_place);
            assert_eq!(in_place, expected, "round={round}");
        }
    }

    #[test]
    fn works_on_non_copy_elements() {
        let words: Vec<String> = ["pear", "apple", "cherry", "apple"]
            .into_iter()
            .map(String::from)
            .collect();

        let sorted = merge_sort(&words);
        assert_eq!(sorted, ["apple", "apple", "cherry", "pear"]);

        let mut words = words;
        quick_sort(&mut words);
        assert_eq!(words, ["apple", "apple", "cherry", "pear"]);
    }
}
