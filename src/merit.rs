//! The merit function and its radial sinc kernel.
//!
//! The merit surface is a weighted sum of three shifted sinc wells in
//! 2-parameter space. An external optimizer minimizing the surface should
//! settle into the deepest well at `(-4, -3)`.

use num::traits::Float;

/// Weight and shift of each well forming the merit surface.
const WELLS: [(f64, [f64; 2]); 3] = [
    (-1.0, [-2.0, 2.0]),
    (-100.8, [4.0, 3.0]),
    (-2.4, [0.0, -3.0]),
];

/// Radial sinc kernel of a shifted point.
///
/// The shift is applied to the first two entries of `params`; any further
/// entries contribute to the radius unshifted. Returns `1.0` where the
/// radius vanishes, matching the limit of `sin(rho)/rho`.
pub fn shifted_sinc<T: Float>(params: &[T], shift: [T; 2]) -> T {
    let mut sum = T::zero();
    for (i, &p) in params.iter().enumerate() {
        let q = if i < 2 { p + shift[i] } else { p };
        sum = sum + q * q;
    }
    let rho = T::from(3.0).unwrap() * sum.sqrt();
    if rho == T::zero() {
        T::one()
    } else {
        rho.sin() / rho
    }
}

/// Merit function evaluated by the example drivers.
///
/// Deterministic and finite on all of ℝ²; worst case is a kernel returning
/// exactly `1.0` at its singular point.
pub fn merit_function(params: &[f64]) -> f64 {
    WELLS
        .iter()
        .map(|&(weight, shift)| weight * shifted_sinc(params, shift))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{merit_function, shifted_sinc};
    use rand::{thread_rng, Rng};

    #[test]
    fn kernel_is_one_at_singular_point() {
        assert_eq!(shifted_sinc(&[2.0, -2.0], [-2.0, 2.0]), 1.0);
        assert_eq!(shifted_sinc(&[0.0, 0.0], [0.0, 0.0]), 1.0);
    }

    #[test]
    fn kernel_counts_unshifted_tail_entries() {
        let with_tail = shifted_sinc(&[1.0, 1.0, 2.0], [0.0, 0.0]);
        let radius = 3.0 * (1.0f64 + 1.0 + 4.0).sqrt();
        assert_eq!(with_tail, radius.sin() / radius);
    }

    #[test]
    fn merit_matches_kernel_sum() {
        let p = [0.7, -1.3];
        let expected = -shifted_sinc(&p, [-2.0, 2.0])
            - 100.8 * shifted_sinc(&p, [4.0, 3.0])
            - 2.4 * shifted_sinc(&p, [0.0, -3.0]);
        assert!((merit_function(&p) - expected).abs() < 1e-12);
    }

    #[test]
    fn merit_at_origin() {
        // -sinc(3*sqrt(8)) - 100.8*sinc(15) - 2.4*sinc(9)
        assert!((merit_function(&[0.0, 0.0]) - -4.574969180508795).abs() < 1e-9);
    }

    #[test]
    fn deepest_well_dominates() {
        assert!((merit_function(&[-4.0, -3.0]) - -100.80785749646653).abs() < 1e-9);
        assert!(merit_function(&[-4.0, -3.0]) < merit_function(&[2.0, -2.0]));
        assert!(merit_function(&[-4.0, -3.0]) < merit_function(&[0.0, 3.0]));
    }

    #[test]
    fn merit_is_finite_and_deterministic() {
        let mut rng = thread_rng();
        for _ in 0..1000 {
            let p = [rng.gen_range(-10.0..=10.0), rng.gen_range(-10.0..=10.0)];
            let value = merit_function(&p);
            assert!(value.is_finite());
            assert_eq!(value, merit_function(&p));
        }
    }
}
