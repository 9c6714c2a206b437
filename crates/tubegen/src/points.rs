//! Point sets produced by the generation pipeline.

use crate::{utils, GenError};

/// A set of points in 3-dimensional space, stored one coordinate axis at a
/// time.
///
/// The three rows hold the X, Y, and Z coordinates of all points, in that
/// order, and always have equal length. Row order is part of the contract:
/// the geometric stages change coordinate values but never which row holds
/// which axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Points3 {
    /// The X, Y, and Z coordinate rows.
    axes: [Vec<f64>; 3],
}

impl Points3 {
    /// Create a new point set from three coordinate rows.
    ///
    /// # Arguments:
    ///
    /// * `axes`: the X, Y, and Z coordinate rows, in that order.
    ///
    /// # Errors:
    ///
    /// * If the rows are empty.
    /// * If the rows do not all have the same length.
    pub fn new(axes: [Vec<f64>; 3]) -> Result<Self, GenError> {
        let cardinality = axes[0].len();
        if cardinality == 0 {
            return Err(GenError::InvalidArgument(
                "Cannot create a point set from empty coordinate rows".to_string(),
            ));
        }
        if axes.iter().any(|row| row.len() != cardinality) {
            let lengths = [axes[0].len(), axes[1].len(), axes[2].len()];
            return Err(GenError::InvalidArgument(format!(
                "Coordinate rows must all have the same length, got {lengths:?}"
            )));
        }
        Ok(Self { axes })
    }

    /// Create the degenerate set whose X row is the given line and whose Y
    /// and Z rows are all zeros.
    ///
    /// This is the tube before any clouding: every point still lies exactly
    /// on the 1d backbone.
    ///
    /// # Errors:
    ///
    /// * If `line` is empty.
    pub fn from_line(line: &[f64]) -> Result<Self, GenError> {
        Self::new([line.to_vec(), vec![0.0; line.len()], vec![0.0; line.len()]])
    }

    /// Build a set from rows already known to be non-empty and of equal
    /// length.
    pub(crate) fn from_rows(axes: [Vec<f64>; 3]) -> Self {
        Self { axes }
    }

    /// The number of points in the set.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.axes[0].len()
    }

    /// The X coordinates of all points.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.axes[0]
    }

    /// The Y coordinates of all points.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.axes[1]
    }

    /// The Z coordinates of all points.
    #[must_use]
    pub fn z(&self) -> &[f64] {
        &self.axes[2]
    }

    /// All three coordinate rows, in X, Y, Z order.
    #[must_use]
    pub const fn axes(&self) -> &[Vec<f64>; 3] {
        &self.axes
    }

    /// The smallest and largest coordinate value across all three axes.
    ///
    /// A plotting front-end can use this to set the same limits on every
    /// axis, so the tube is drawn with a unitary aspect ratio.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        self.axes
            .iter()
            .filter_map(|row| utils::min_max(row))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (min, max)| {
                (lo.min(min), hi.max(max))
            })
    }

    /// Consume the set, returning the coordinate rows.
    #[must_use]
    pub fn into_axes(self) -> [Vec<f64>; 3] {
        self.axes
    }
}

/// A set of points embedded in a higher-dimensional space.
///
/// Stores one coordinate row per axis, along with the permutation that maps
/// each row back to the position it was generated at. When the rows were
/// never shuffled, the permutation is the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsHd {
    /// One coordinate row per axis, all of equal length.
    axes: Vec<Vec<f64>>,
    /// `permutation[i]` is the index at which the row now at position `i`
    /// was generated.
    permutation: Vec<usize>,
}

impl PointsHd {
    /// Create a new embedded set with the identity permutation.
    pub(crate) fn new(axes: Vec<Vec<f64>>) -> Self {
        let permutation = (0..axes.len()).collect();
        Self { axes, permutation }
    }

    /// Reorder the axis rows by the given permutation.
    ///
    /// `permutation[i]` is the index of the row to place at position `i`.
    /// The applied permutation is recorded so callers can always recover the
    /// original row order.
    pub(crate) fn permute(&mut self, permutation: &[usize]) {
        let axes = permutation
            .iter()
            .map(|&i| core::mem::take(&mut self.axes[i]))
            .collect();
        self.axes = axes;
        self.permutation = permutation.to_vec();
    }

    /// The number of axes in the embedded space.
    #[must_use]
    pub fn dimensionality(&self) -> usize {
        self.axes.len()
    }

    /// The number of points in the set.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.axes.first().map_or(0, Vec::len)
    }

    /// All coordinate rows, in their current order.
    #[must_use]
    pub fn axes(&self) -> &[Vec<f64>] {
        &self.axes
    }

    /// The coordinate row at the given position.
    ///
    /// # Panics:
    ///
    /// * If `i` is not less than the dimensionality.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.axes[i]
    }

    /// The permutation mapping each current row to the position it was
    /// generated at.
    ///
    /// `permutation()[i] == j` means the row now at position `i` was
    /// generated at position `j`. Rows `0..3` of the generation order are
    /// the X, Y, and Z data rows; the rest are noise.
    #[must_use]
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }
}
