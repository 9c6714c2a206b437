//! Translate a point set by a constant offset.

use crate::Points3;

/// Move every point in the set by the given per-axis offset.
///
/// Translating again by the negated offset undoes the move.
#[must_use]
pub fn translate(points: Points3, offset: [f64; 3]) -> Points3 {
    let mut axes = points.into_axes();
    for (row, delta) in axes.iter_mut().zip(offset) {
        for v in row.iter_mut() {
            *v += delta;
        }
    }
    Points3::from_rows(axes)
}

#[cfg(test)]
mod tests {
    use crate::GenError;

    use super::*;

    #[test]
    fn offsets_apply_per_axis() -> Result<(), GenError> {
        let points = Points3::new([vec![0.0, 0.0], vec![0.0, 0.0], vec![0.0, 0.0]])?;
        let moved = translate(points, [5.0, 3.0, 1.0]);
        assert_eq!(moved.x(), &[5.0, 5.0]);
        assert_eq!(moved.y(), &[3.0, 3.0]);
        assert_eq!(moved.z(), &[1.0, 1.0]);
        Ok(())
    }

    #[test]
    fn negated_offset_is_the_exact_inverse() -> Result<(), GenError> {
        let points = Points3::new([
            vec![1.5, -2.25, 0.125],
            vec![0.75, 3.5, -1.0],
            vec![-1.5, 0.0, 2.625],
        ])?;
        let offset = [10.0, -4.5, 0.25];

        let moved = translate(points.clone(), offset);
        let restored = translate(moved, [-offset[0], -offset[1], -offset[2]]);
        assert_eq!(restored, points);
        Ok(())
    }

    #[test]
    fn zero_offset_is_the_identity() -> Result<(), GenError> {
        let points = Points3::new([vec![1.0], vec![2.0], vec![3.0]])?;
        let moved = translate(points.clone(), [0.0; 3]);
        assert_eq!(moved, points);
        Ok(())
    }
}
