//! Utility functions for the crate.

use distances::Number;

/// Return the minimum and maximum of the given slice of values.
///
/// NAN values are ignored when comparing.
///
/// This will return `None` if the given slice is empty.
#[must_use]
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values.split_first().map(|(&first, rest)| {
        rest.iter()
            .fold((first, first), |(min, max), &v| (v.min(min), v.max(max)))
    })
}

/// Return the mean value of the given slice of values.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len().as_f64()
}

/// Return the variance of the given slice of values around the given mean.
#[must_use]
pub fn variance(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len().as_f64()
}

/// A helper function to find the standard deviation from a list of values.
///
/// Source: <https://en.wikipedia.org/wiki/Standard_deviation>
#[must_use]
pub fn standard_deviation(values: &[f64]) -> f64 {
    variance(values, mean(values)).sqrt()
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn min_max_of_slice() {
        assert_eq!(min_max(&[]), None);
        assert_eq!(min_max(&[3.0]), Some((3.0, 3.0)));
        assert_eq!(min_max(&[-2.0, 5.0, 0.5, -7.5, 4.0]), Some((-7.5, 5.0)));
    }

    #[test]
    fn moments_of_slice() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let mu = mean(&values);
        assert!(approx_eq!(f64, mu, 5.0));
        assert!(approx_eq!(f64, variance(&values, mu), 4.0));
        assert!(approx_eq!(f64, standard_deviation(&values), 2.0));
    }
}
