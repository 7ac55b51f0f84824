//! 3×3 linear systems by Cramer's rule.
//!
//! The quadratic trend fit solves its normal equations this way. We keep the
//! determinant explicit (rather than a factorization) so near-singular systems
//! are detected with a single absolute threshold.

use nalgebra::{Matrix3, Vector3};

/// Determinant magnitude below which a system is treated as singular.
pub const SINGULAR_EPS: f64 = 1e-10;

/// Solve `m · s = v`.
///
/// Returns `None` when `|det(m)| < SINGULAR_EPS`.
pub fn solve_cramer3(m: &Matrix3<f64>, v: &Vector3<f64>) -> Option<Vector3<f64>> {
    let det = m.determinant();
    if det.abs() < SINGULAR_EPS {
        return None;
    }

    let mut out = Vector3::zeros();
    for col in 0..3 {
        let mut replaced = *m;
        replaced.set_column(col, v);
        out[col] = replaced.determinant() / det;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn solves_well_conditioned_system() {
        // x + y + z = 6, 2y + 5z = -4, 2x + 5y - z = 27  =>  (5, 3, -2)
        let m = Matrix3::new(1.0, 1.0, 1.0, 0.0, 2.0, 5.0, 2.0, 5.0, -1.0);
        let v = Vector3::new(6.0, -4.0, 27.0);
        let s = solve_cramer3(&m, &v).unwrap();
        assert_abs_diff_eq!(s[0], 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s[1], 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s[2], -2.0, epsilon = 1e-9);
    }

    #[test]
    fn singular_system_is_rejected() {
        let m = Matrix3::new(1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 1.0, 1.0);
        assert!(solve_cramer3(&m, &Vector3::new(1.0, 2.0, 3.0)).is_none());
    }
}
