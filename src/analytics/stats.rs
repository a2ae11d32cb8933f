//! Numeric helpers shared by the aggregators

/// Arithmetic mean, or `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Population variance (divides by n), or `None` for an empty slice
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some(sum_sq / values.len() as f64)
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate Pearson correlation coefficient
///
/// Returns a value between -1 and 1:
/// - 1: perfect positive correlation
/// - 0: no correlation (also returned for mismatched, empty or zero-variance input)
/// - -1: perfect negative correlation
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }

    // A constant series has no variance; its mean may not be exact in floating point
    if is_constant(x) || is_constant(y) {
        return 0.0;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    // Centered sums: same r as n·Σxy − Σx·Σy over the raw-sum denominator,
    // without the cancellation residue
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();

    if denominator == 0.0 || !denominator.is_finite() {
        0.0
    } else {
        // Rounding error can push |r| a hair past 1
        (cov / denominator).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[8.0, 9.0]), Some(8.5));
    }

    #[test]
    fn test_population_variance() {
        let var = population_variance(&[5.0, 6.0, 7.0]).unwrap();
        assert!((var - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(population_variance(&[4.0]), Some(0.0));
        assert_eq!(population_variance(&[]), None);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(0.6667), 0.7);
        assert_eq!(round1(6.0), 6.0);
        assert_eq!(round1(3.25), 3.3);
    }

    #[test]
    fn test_pearson_correlation_perfect_positive() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
        let r = pearson_correlation(&x, &y);
        assert!((r - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_pearson_correlation_perfect_negative() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![10.0, 8.0, 6.0, 4.0, 2.0];
        let r = pearson_correlation(&x, &y);
        assert!((r + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_pearson_correlation_symmetric() {
        let x = vec![6.5, 7.0, 5.0, 8.0, 4.5, 9.0];
        let y = vec![6.0, 7.0, 4.0, 6.0, 5.0, 8.0];
        assert_eq!(pearson_correlation(&x, &y), pearson_correlation(&y, &x));
    }

    #[test]
    fn test_pearson_correlation_zero_variance() {
        let x = vec![7.0, 7.0, 7.0];
        let y = vec![3.0, 5.0, 8.0];
        let r = pearson_correlation(&x, &y);
        assert_eq!(r, 0.0);
        assert!(!r.is_nan());
    }

    #[test]
    fn test_pearson_correlation_constant_fraction() {
        for value in [0.1, 0.3, 1.1, 2.2, 7.3] {
            for n in 6..=11 {
                let x = vec![value; n];
                let y: Vec<f64> = (1..=n).map(|i| i as f64).collect();
                assert_eq!(pearson_correlation(&x, &y), 0.0, "x = {} repeated {}", value, n);
                assert_eq!(pearson_correlation(&y, &x), 0.0);
            }
        }
    }

    #[test]
    fn test_pearson_correlation_shifted_series_exact() {
        let sleep = [4.0, 9.0, 5.0, 8.0, 6.0];
        let mood = [3.0, 8.0, 4.0, 7.0, 5.0];
        assert!((pearson_correlation(&sleep, &mood) - 1.0).abs() < 1e-12);

        let stress = [8.0, 2.0, 7.0, 3.0, 9.0];
        let mood = [2.0, 8.0, 3.0, 7.0, 1.0];
        assert!((pearson_correlation(&stress, &mood) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_correlation_empty() {
        let x: Vec<f64> = vec![];
        let y: Vec<f64> = vec![];
        assert_eq!(pearson_correlation(&x, &y), 0.0);
    }

    #[test]
    fn test_pearson_correlation_length_mismatch() {
        assert_eq!(pearson_correlation(&[1.0, 2.0], &[1.0]), 0.0);
    }
}
