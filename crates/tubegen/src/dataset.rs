//! The generated dataset and the pipeline that builds it.

use rand::Rng;

use crate::{cloud, embedding, line, rotation, translation};
use crate::{EmbedParams, GenError, Points3, PointsHd, TubeConfig};

/// A tube dataset: the 1d ground truth and the 3d points grown around it.
///
/// The points are the line after clouding, rotation, and translation, so an
/// algorithm fed the points can be scored against the line it is supposed to
/// recover. Use `embed` to bury the same points in a higher-dimensional
/// space.
#[derive(Debug, Clone, PartialEq)]
pub struct TubeCloud {
    /// The 1d values the tube was grown around.
    line: Vec<f64>,
    /// The clouded, rotated, and translated 3d points.
    points: Points3,
}

impl TubeCloud {
    /// Generate a dataset from the given configuration.
    ///
    /// The configuration is validated in full before the first stage runs,
    /// and each stage consumes the previous stage's output, so a failure
    /// never leaves a partial dataset behind. All randomness is drawn from
    /// `rng`; a seeded generator reproduces a dataset exactly.
    ///
    /// # Arguments:
    ///
    /// * `config`: every parameter of the pipeline.
    /// * `rng`: random number generator.
    ///
    /// # Errors:
    ///
    /// * `Unsupported` if the configured spacing mode is not implemented.
    /// * `InvalidArgument` if any parameter is outside its domain.
    pub fn generate<R: Rng>(config: &TubeConfig, rng: &mut R) -> Result<Self, GenError> {
        config.validate()?;

        let line = match &config.line {
            Some(line) => line.clone(),
            None => line::generate(config.num_points, config.half_range, config.spacing)?,
        };
        ftlog::debug!("Generated a line of {} values.", line.len());

        let noise = match config.noise {
            Some(noise) => noise,
            None => cloud::derive_noise(&line)?,
        };
        ftlog::debug!(
            "Clouding the line with noise mean {} and std {}.",
            noise.mean,
            noise.std
        );
        let points = cloud::radial_cloud(&line, noise, rng)?;

        ftlog::debug!(
            "Rotating by ({}, {}, {}) degrees and translating by {:?}.",
            config.angles.alpha,
            config.angles.beta,
            config.angles.gamma,
            config.offset
        );
        let points = rotation::rotate_zyx(points, config.angles);
        let points = translation::translate(points, config.offset);

        Ok(Self { line, points })
    }

    /// The 1d values the tube was grown around.
    #[must_use]
    pub fn line(&self) -> &[f64] {
        &self.line
    }

    /// The 3d points after clouding, rotation, and translation.
    #[must_use]
    pub const fn points(&self) -> &Points3 {
        &self.points
    }

    /// Embed the 3d points in a higher-dimensional space.
    ///
    /// The dataset itself is unchanged; each call samples fresh noise axes
    /// from `rng`.
    ///
    /// # Errors:
    ///
    /// * `InvalidArgument` if `params.num_dimensions` is less than 3.
    pub fn embed<R: Rng>(&self, params: &EmbedParams, rng: &mut R) -> Result<PointsHd, GenError> {
        ftlog::debug!(
            "Embedding {} points in {} dimensions.",
            self.points.cardinality(),
            params.num_dimensions
        );
        embedding::embed(&self.points, params, rng)
    }
}
