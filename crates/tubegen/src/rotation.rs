//! Rotate a point set by Euler angles, applied in Z-Y-X order.

use crate::{EulerAngles, Points3};

/// The rotation matrix for the given angles.
///
/// The matrix is the product `Rz(alpha) * Ry(beta) * Rx(gamma)`, so points
/// are rotated about the X axis first and the Z axis last. Its transpose is
/// its inverse.
#[must_use]
pub fn matrix(angles: EulerAngles) -> [[f64; 3]; 3] {
    let (sa, ca) = angles.alpha.to_radians().sin_cos();
    let (sb, cb) = angles.beta.to_radians().sin_cos();
    let (sg, cg) = angles.gamma.to_radians().sin_cos();
    [
        [ca * cb, ca * sb * sg - sa * cg, sa * sg + ca * cg * sb],
        [cb * sa, ca * cg + sa * sb * sg, cg * sa * sb - ca * sg],
        [-sb, cb * sg, cb * cg],
    ]
}

/// Rotate every point in the set by the given angles.
///
/// The shape of the set is unchanged: the rows of the result are still the
/// X, Y, and Z coordinates of all points, in that order.
#[must_use]
pub fn rotate_zyx(points: Points3, angles: EulerAngles) -> Points3 {
    let m = matrix(angles);
    let [x, y, z] = points.into_axes();

    let mut rx = Vec::with_capacity(x.len());
    let mut ry = Vec::with_capacity(x.len());
    let mut rz = Vec::with_capacity(x.len());
    for ((&px, &py), &pz) in x.iter().zip(y.iter()).zip(z.iter()) {
        rx.push(m[0][0] * px + m[0][1] * py + m[0][2] * pz);
        ry.push(m[1][0] * px + m[1][1] * py + m[1][2] * pz);
        rz.push(m[2][0] * px + m[2][1] * py + m[2][2] * pz);
    }
    Points3::from_rows([rx, ry, rz])
}
