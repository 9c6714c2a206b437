//! Generate the 1d backbone of a dataset.

use distances::Number;

use crate::{GenError, Spacing};

/// Generate a line of values with the given spacing mode.
///
/// # Arguments:
///
/// * `num_points`: requested number of points, at least 1.
/// * `half_range`: half the extent of the line.
/// * `spacing`: how values are spaced along the line.
///
/// # Errors:
///
/// * `Unsupported` if `spacing` is `Spacing::Jittered`.
/// * `InvalidArgument` if `num_points` is zero or `half_range` is not finite
///   and positive.
pub fn generate(num_points: usize, half_range: f64, spacing: Spacing) -> Result<Vec<f64>, GenError> {
    spacing.ensure_supported()?;
    evenly_spaced(num_points, half_range)
}

/// Generate an evenly spaced line of values, symmetric about zero.
///
/// The requested count is rounded up to the nearest even number `n`, and
/// `n + 1` values are generated, so the output always has odd length, spans
/// `[-half_range, half_range]`, and contains the midpoint `0.0`. An even
/// `num_points` thus yields `num_points + 1` values and an odd one yields
/// `num_points + 2`.
///
/// # Arguments:
///
/// * `num_points`: requested number of points, at least 1.
/// * `half_range`: half the extent of the line.
///
/// # Errors:
///
/// * `InvalidArgument` if `num_points` is zero or `half_range` is not finite
///   and positive.
pub fn evenly_spaced(num_points: usize, half_range: f64) -> Result<Vec<f64>, GenError> {
    if num_points == 0 {
        return Err(GenError::InvalidArgument(
            "num_points must be at least 1".to_string(),
        ));
    }
    if !(half_range.is_finite() && half_range > 0.0) {
        return Err(GenError::InvalidArgument(format!(
            "half_range must be finite and positive, got {half_range}"
        )));
    }

    let n = if num_points % 2 == 0 {
        num_points
    } else {
        num_points.checked_add(1).ok_or_else(|| {
            GenError::InvalidArgument(format!("num_points {num_points} is too large"))
        })?
    };
    let half = (n / 2).as_f64();
    let step = half_range / half;
    Ok((0..=n).map(|i| (i.as_f64() - half) * step).collect())
}
