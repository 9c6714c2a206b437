//! Embed a 3d point set in a higher-dimensional space.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::{EmbedParams, GenError, Points3, PointsHd};

/// The scale applied to noise axes when `large_noise` is set.
const LARGE_NOISE_SCALE: f64 = 10.0;

/// Embed the given points in a `num_dimensions`-dimensional space.
///
/// The X, Y, and Z rows are carried over unchanged and `num_dimensions - 3`
/// rows of pure Gaussian noise are appended after them, each sampled in full
/// before the next. With `large_noise` the noise is scaled by 10, drowning
/// the data rows in axes of much larger magnitude. When `data_first` is
/// false the order of all rows is shuffled; the shuffle only reorders rows,
/// never points, and is recorded in the output's permutation.
///
/// # Arguments:
///
/// * `points`: the 3d points to embed.
/// * `params`: dimensionality, noise scale, and row-order options.
/// * `rng`: random number generator.
///
/// # Errors:
///
/// * `InvalidArgument` if `params.num_dimensions` is less than 3.
pub fn embed<R: Rng>(points: &Points3, params: &EmbedParams, rng: &mut R) -> Result<PointsHd, GenError> {
    if params.num_dimensions < 3 {
        return Err(GenError::InvalidArgument(format!(
            "num_dimensions must be at least 3 to hold the data rows, got {}",
            params.num_dimensions
        )));
    }

    let scale = if params.large_noise { LARGE_NOISE_SCALE } else { 1.0 };
    let cardinality = points.cardinality();

    let mut axes = Vec::with_capacity(params.num_dimensions);
    axes.extend(points.axes().iter().cloned());
    for _ in 3..params.num_dimensions {
        let row = (0..cardinality)
            .map(|_| {
                let noise: f64 = StandardNormal.sample(rng);
                scale * noise
            })
            .collect();
        axes.push(row);
    }

    let mut embedded = PointsHd::new(axes);
    if !params.data_first {
        let mut order = (0..params.num_dimensions).collect::<Vec<_>>();
        order.shuffle(rng);
        embedded.permute(&order);
    }
    Ok(embedded)
}
