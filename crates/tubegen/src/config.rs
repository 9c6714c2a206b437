//! Configuration for dataset generation.

use crate::GenError;

/// How values are spaced along the 1d line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    /// Uniform spacing across the whole range.
    #[default]
    Even,
    /// Randomly jittered spacing. Recognized but not implemented.
    Jittered,
}

impl Spacing {
    /// Fail unless this spacing mode is implemented.
    ///
    /// # Errors:
    ///
    /// * `Unsupported` for `Spacing::Jittered`.
    pub fn ensure_supported(self) -> Result<(), GenError> {
        match self {
            Self::Even => Ok(()),
            Self::Jittered => Err(GenError::Unsupported(
                "Jittered line spacing is not implemented; use Spacing::Even".to_string(),
            )),
        }
    }
}

/// Gaussian noise parameters for the radial clouding stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudNoise {
    /// Mean of the sampled coordinate offsets.
    pub mean: f64,
    /// Standard deviation of the sampled coordinate offsets.
    pub std: f64,
}

/// Rotation angles in degrees, applied in Z-Y-X order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    /// The rotation about the Z axis.
    pub alpha: f64,
    /// The rotation about the Y axis.
    pub beta: f64,
    /// The rotation about the X axis.
    pub gamma: f64,
}

impl EulerAngles {
    /// Create a new set of angles, each in degrees.
    #[must_use]
    pub const fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    /// The zero rotation.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Default for EulerAngles {
    fn default() -> Self {
        Self::new(45.0, 45.0, 45.0)
    }
}

/// Parameters for the high-dimensional embedding stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedParams {
    /// Dimensionality of the embedded space. Must be at least 3 to hold the
    /// X, Y, and Z data rows.
    pub num_dimensions: usize,
    /// Scale the noise axes by 10 instead of 1, drowning the data rows in
    /// noise of a much larger magnitude.
    pub large_noise: bool,
    /// Keep the data rows as the first three rows of the output. When false,
    /// the order of all rows is shuffled and the shuffle is recorded in the
    /// output's permutation.
    pub data_first: bool,
}

impl Default for EmbedParams {
    fn default() -> Self {
        Self {
            num_dimensions: 7,
            large_noise: true,
            data_first: true,
        }
    }
}

/// Every parameter of the generation pipeline, with its default stated here
/// and nowhere else.
///
/// Callers start from `TubeConfig::default()`, override the fields they care
/// about, and pass the result to `TubeCloud::generate`. All parameters are
/// checked up front by `validate`, so a bad configuration fails before any
/// stage runs.
#[derive(Debug, Clone, PartialEq)]
pub struct TubeConfig {
    /// Requested number of line points. Rounded up to the nearest even count,
    /// after which one extra value is generated, so the line always has odd
    /// length and a value at exactly zero. Default 100, i.e. 101 values.
    pub num_points: usize,
    /// Half the extent of the line. The values span `[-half_range,
    /// half_range]`. Default 10.
    pub half_range: f64,
    /// How values are spaced along the line. Default `Spacing::Even`.
    pub spacing: Spacing,
    /// A pre-made line to cloud instead of generating one. When set, the
    /// line is used as-is, though `num_points`, `half_range`, and `spacing`
    /// must still pass validation. Default `None`.
    pub line: Option<Vec<f64>>,
    /// Noise parameters for the clouding stage. When `None`, the parameters
    /// are derived from the extent of the line: the mean is 1/40 of the
    /// value range and the standard deviation is 1/20 of it. Default `None`.
    pub noise: Option<CloudNoise>,
    /// Euler angles for the rotation stage. Default 45 degrees about each
    /// axis.
    pub angles: EulerAngles,
    /// Per-axis offset for the translation stage. Default `[10, 10, 10]`.
    pub offset: [f64; 3],
    /// Parameters for the embedding stage, consumed by `TubeCloud::embed`.
    pub embed: EmbedParams,
}

impl Default for TubeConfig {
    fn default() -> Self {
        Self {
            num_points: 100,
            half_range: 10.0,
            spacing: Spacing::Even,
            line: None,
            noise: None,
            angles: EulerAngles::default(),
            offset: [10.0; 3],
            embed: EmbedParams::default(),
        }
    }
}

impl TubeConfig {
    /// Check every parameter before any stage runs.
    ///
    /// # Errors:
    ///
    /// * `InvalidArgument` if `num_points` is zero, `half_range` is not
    ///   finite and positive, a supplied line is empty or contains non-finite
    ///   values, the noise standard deviation is negative, or any noise,
    ///   angle, or offset value is not finite.
    /// * `InvalidArgument` if fewer than 3 embedding dimensions are asked
    ///   for.
    /// * `Unsupported` if the spacing mode is not implemented.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.num_points == 0 {
            return Err(GenError::InvalidArgument(
                "num_points must be at least 1".to_string(),
            ));
        }
        if !(self.half_range.is_finite() && self.half_range > 0.0) {
            return Err(GenError::InvalidArgument(format!(
                "half_range must be finite and positive, got {}",
                self.half_range
            )));
        }
        self.spacing.ensure_supported()?;

        if let Some(line) = &self.line {
            if line.is_empty() {
                return Err(GenError::InvalidArgument(
                    "A supplied line must not be empty".to_string(),
                ));
            }
            if line.iter().any(|v| !v.is_finite()) {
                return Err(GenError::InvalidArgument(
                    "A supplied line must contain only finite values".to_string(),
                ));
            }
        }

        if let Some(noise) = self.noise {
            if !noise.mean.is_finite() || !noise.std.is_finite() || noise.std < 0.0 {
                return Err(GenError::InvalidArgument(format!(
                    "Cloud noise must have a finite mean and a finite, non-negative std, got mean {} and std {}",
                    noise.mean, noise.std
                )));
            }
        }

        let angles = [self.angles.alpha, self.angles.beta, self.angles.gamma];
        if angles.iter().any(|v| !v.is_finite()) {
            return Err(GenError::InvalidArgument(format!(
                "Rotation angles must be finite, got {angles:?}"
            )));
        }
        if self.offset.iter().any(|v| !v.is_finite()) {
            return Err(GenError::InvalidArgument(format!(
                "Translation offsets must be finite, got {:?}",
                self.offset
            )));
        }

        if self.embed.num_dimensions < 3 {
            return Err(GenError::InvalidArgument(format!(
                "num_dimensions must be at least 3 to hold the data rows, got {}",
                self.embed.num_dimensions
            )));
        }
        Ok(())
    }
}
