use approx::abs_diff_eq;
use itertools::iproduct;

use crate::{GeometryError, Result, Yaw, EPSILON};

pub type Matrix3 = [[f64; 3]; 3];

fn determinant(m: &Matrix3) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Fails unless `m` is a finite proper rotation (orthonormal, det +1).
pub fn check_rotation33(m: &Matrix3) -> Result<()> {
    if m.iter().flatten().any(|v| !v.is_finite()) {
        return Err(GeometryError::InvalidPose(format!(
            "rotation contains non-finite entries: {m:?}"
        )));
    }
    let det = determinant(m);
    if !abs_diff_eq!(det, 1.0, epsilon = EPSILON) {
        return Err(GeometryError::InvalidPose(format!(
            "rotation determinant is {det}, expected 1"
        )));
    }
    // columns must be orthonormal: (M^T M)_ij == δ_ij
    let orthonormal = iproduct!(0..3, 0..3).all(|(i, j)| {
        let dot: f64 = (0..3).map(|k| m[k][i] * m[k][j]).sum();
        let expected = if i == j { 1.0 } else { 0.0 };
        abs_diff_eq!(dot, expected, epsilon = EPSILON)
    });
    if !orthonormal {
        return Err(GeometryError::InvalidPose(format!(
            "rotation is not orthonormal: {m:?}"
        )));
    }
    Ok(())
}

/// Heading of a 3D rotation about the z axis.
pub fn yaw_from_rotation33(m: &Matrix3) -> Result<Yaw> {
    check_rotation33(m)?;
    Ok(Yaw::from_rad(m[1][0].atan2(m[0][0])))
}

pub fn yaw_as_rotation33(yaw: Yaw) -> Matrix3 {
    let (sin, cos) = yaw.rad().sin_cos();
    [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]]
}

#[cfg(test)]
mod tests {
    use ntest::assert_about_eq;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::deg;

    #[test]
    fn test_yaw_survives_matrix_round_trip() {
        [-179.0, -90.0, -12.5, 0.0, 45.0, 135.0, 180.0]
            .into_iter()
            .for_each(|d| {
                let yaw = yaw_from_rotation33(&yaw_as_rotation33(deg(d))).unwrap();
                assert_about_eq!(yaw.smallest_angle_to(deg(d)).rad(), 0.0, 1e-9);
            });
    }

    #[test]
    fn test_reflection_is_rejected() {
        let m = [[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]];
        assert!(matches!(
            yaw_from_rotation33(&m),
            Err(GeometryError::InvalidPose(_))
        ));
    }

    #[test]
    fn test_scaled_matrix_is_rejected() {
        let mut m = yaw_as_rotation33(deg(30.0));
        m[0][0] *= 2.0;
        assert!(check_rotation33(&m).is_err());
    }

    #[test]
    fn test_shear_with_unit_determinant_is_rejected() {
        let m = [[1.0, 0.5, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert!(check_rotation33(&m).is_err());
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut m = yaw_as_rotation33(deg(0.0));
        m[2][2] = f64::NAN;
        assert!(check_rotation33(&m).is_err());
    }

    #[test]
    fn test_identity_is_zero_yaw() {
        assert_eq!(yaw_from_rotation33(&yaw_as_rotation33(Yaw::zero())), Ok(Yaw::zero()));
    }
}
