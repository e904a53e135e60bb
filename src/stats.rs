//! Descriptive statistics over small samples.

/// Arithmetic mean, or `0.0` for an empty sample.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by `n`), or `0.0` with fewer than two values.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Cohen's d with a pooled variance.
///
/// ```text
/// pooled = ((n_x - 1) * var_x + (n_y - 1) * var_y) / max(1, n_x + n_y - 2)
/// d      = (mean_x - mean_y) / sqrt(pooled)
/// ```
///
/// Each variance is the population variance. Returns `0.0` when either
/// sample is empty or the pooled variance is zero.
pub fn cohens_d(x: &[f64], y: &[f64]) -> f64 {
    if x.is_empty() || y.is_empty() {
        return 0.0;
    }
    let n_x = x.len() as f64;
    let n_y = y.len() as f64;
    let pooled = ((n_x - 1.0) * population_variance(x) + (n_y - 1.0) * population_variance(y))
        / (n_x + n_y - 2.0).max(1.0);
    let sd = pooled.sqrt();
    if sd == 0.0 {
        return 0.0;
    }
    (mean(x) - mean(y)) / sd
}
