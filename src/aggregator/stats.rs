//! Small numeric helpers over execution samples.

/// Arithmetic mean and population standard deviation (ddof = 0)
///
/// Returns NaN for both on an empty slice.
pub fn mean_stddev(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Smallest value, or +inf on an empty slice
pub fn minimum(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_stddev_population() {
        let (mean, stddev) = mean_stddev(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(mean, 3.0);
        assert!((stddev - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_mean_stddev_constant() {
        let (mean, stddev) = mean_stddev(&[7.0; 4]);
        assert_eq!(mean, 7.0);
        assert_eq!(stddev, 0.0);
    }

    #[test]
    fn test_minimum() {
        assert_eq!(minimum(&[3.0, -1.0, 2.0]), -1.0);
        assert_eq!(minimum(&[]), f64::INFINITY);
    }
}
