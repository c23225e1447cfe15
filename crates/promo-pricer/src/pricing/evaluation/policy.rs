/// Number of largest contributions blended into the settled discount.
/// Contributions below the cut never stack.
pub(crate) const TOP_CONTRIBUTIONS: usize = 2;

/// Arithmetic mean of the `TOP_CONTRIBUTIONS` largest values, 0.0 for an
/// empty set. Insensitive to the order values arrive in.
pub(crate) fn settle(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut ranked = values.to_vec();
    ranked.sort_by(|a, b| b.total_cmp(a));

    let top = &ranked[..ranked.len().min(TOP_CONTRIBUTIONS)];
    top.iter().sum::<f64>() / top.len() as f64
}
