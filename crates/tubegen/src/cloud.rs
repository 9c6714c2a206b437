//! Cloud a line into a 3d tube with Gaussian noise.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::{utils, CloudNoise, GenError, Points3};

/// Derive default noise parameters from the extent of a line.
///
/// The mean is 1/40 of the value range and the standard deviation is 1/20 of
/// it, so the tube stays thin relative to its length no matter how the line
/// was scaled.
///
/// # Errors:
///
/// * `InvalidArgument` if `line` is empty.
pub fn derive_noise(line: &[f64]) -> Result<CloudNoise, GenError> {
    let (min, max) = utils::min_max(line).ok_or_else(|| {
        GenError::InvalidArgument("Cannot derive noise parameters from an empty line".to_string())
    })?;
    let range = max - min;
    Ok(CloudNoise {
        mean: range / 40.0,
        std: range / 20.0,
    })
}

/// Spread a line into a tube around the X axis.
///
/// The X row of the result is the input line, unchanged. The Y and Z rows
/// are drawn per point from `Normal(mean, std)`, the Y row in full before
/// the Z row, so a seeded generator reproduces a cloud exactly.
///
/// # Arguments:
///
/// * `line`: the X coordinates to cloud around.
/// * `noise`: the Gaussian parameters for the Y and Z offsets.
/// * `rng`: random number generator.
///
/// # Errors:
///
/// * `InvalidArgument` if `line` is empty or `noise` does not describe a
///   valid Gaussian.
pub fn radial_cloud<R: Rng>(line: &[f64], noise: CloudNoise, rng: &mut R) -> Result<Points3, GenError> {
    if !noise.mean.is_finite() || !noise.std.is_finite() || noise.std < 0.0 {
        return Err(GenError::InvalidArgument(format!(
            "Cloud noise must have a finite mean and a finite non-negative std, got mean {} and std {}",
            noise.mean, noise.std
        )));
    }
    let normal = Normal::new(noise.mean, noise.std).map_err(|e| {
        GenError::InvalidArgument(format!(
            "Cloud noise with mean {} and std {} is not a valid Gaussian: {e}",
            noise.mean, noise.std
        ))
    })?;
    let y = (0..line.len()).map(|_| normal.sample(rng)).collect();
    let z = (0..line.len()).map(|_| normal.sample(rng)).collect();
    Points3::new([line.to_vec(), y, z])
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use rand::prelude::*;

    use crate::line;
    use crate::utils;

    use super::*;

    #[test]
    fn derived_noise_follows_the_range() -> Result<(), GenError> {
        let line = line::evenly_spaced(100, 10.0)?;
        let noise = derive_noise(&line)?;
        assert!(approx_eq!(f64, noise.mean, 0.5, epsilon = 1e-12));
        assert!(approx_eq!(f64, noise.std, 1.0, epsilon = 1e-12));
        assert!(derive_noise(&[]).is_err());
        Ok(())
    }

    #[test]
    fn cloud_keeps_the_line_intact() -> Result<(), GenError> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let line = line::evenly_spaced(100, 10.0)?;
        let points = radial_cloud(&line, CloudNoise { mean: 0.5, std: 1.0 }, &mut rng)?;

        assert_eq!(points.cardinality(), line.len());
        assert_eq!(points.x(), line.as_slice());
        Ok(())
    }

    #[test]
    fn sampled_offsets_match_the_parameters() -> Result<(), GenError> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let line = line::evenly_spaced(10_000, 10.0)?;
        let noise = CloudNoise { mean: 2.0, std: 0.5 };
        let points = radial_cloud(&line, noise, &mut rng)?;

        for row in [points.y(), points.z()] {
            assert!(approx_eq!(f64, utils::mean(row), noise.mean, epsilon = 0.05));
            assert!(approx_eq!(
                f64,
                utils::standard_deviation(row),
                noise.std,
                epsilon = 0.05
            ));
        }
        Ok(())
    }

    #[test]
    fn zero_std_collapses_the_tube() -> Result<(), GenError> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let line = [-1.0, 0.0, 1.0];
        let points = radial_cloud(&line, CloudNoise { mean: 3.0, std: 0.0 }, &mut rng)?;
        assert!(points.y().iter().all(|&v| v == 3.0));
        assert!(points.z().iter().all(|&v| v == 3.0));
        Ok(())
    }

    #[test]
    fn rejects_invalid_noise() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let bad = CloudNoise { mean: 0.0, std: -1.0 };
        assert!(matches!(
            radial_cloud(&[0.0], bad, &mut rng),
            Err(GenError::InvalidArgument(_))
        ));
    }
}
