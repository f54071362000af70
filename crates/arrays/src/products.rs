/// For each position, the product of every other element. The zero count
/// decides the shape of the answer: two or more zeros blank everything,
/// exactly one zero concentrates the product at its own position, and with
/// no zeros the total product divides evenly at every position.
pub fn product_except_self(values: &[i64]) -> Vec<i64> {
    let zero_count = values.iter().filter(|&&v| v == 0).count();

    if zero_count >= 2 || zero_count == values.len() {
        return vec![0; values.len()];
    }

    if zero_count == 1 {
        let product: i64 = values.iter().filter(|&&v| v != 0).product();
        return values
            .iter()
            .map(|&v| if v == 0 { product } else { 0 })
            .collect();
    }

    let product: i64 = values.iter().product();
    values.iter().map(|&v| product / v).collect()
}
