use crate::differentiation::{partial_cols, partial_rows};
use crate::error::{GeometryError, Result};
use crate::quadrature::QuadratureRule;
use crate::sampling::MobiusStrip;
use nalgebra::{DMatrix, Vector3};
use tracing::{debug, instrument};

impl MobiusStrip {
    /// Local area density `|T_u x T_v|` on every grid cell, from finite
    /// differences of the coordinate grids. Recomputed on each call.
    pub fn area_density(&self) -> Result<DMatrix<f64>> {
        let u = self.u_samples();
        let v = self.v_samples();

        let dx_du = partial_rows(self.x(), u)?;
        let dy_du = partial_rows(self.y(), u)?;
        let dz_du = partial_rows(self.z(), u)?;
        let dx_dv = partial_cols(self.x(), v)?;
        let dy_dv = partial_cols(self.y(), v)?;
        let dz_dv = partial_cols(self.z(), v)?;

        let (rows, cols) = self.x().shape();
        Ok(DMatrix::from_fn(rows, cols, |i, j| {
            let t_u = Vector3::new(dx_du[(i, j)], dy_du[(i, j)], dz_du[(i, j)]);
            let t_v = Vector3::new(dx_dv[(i, j)], dy_dv[(i, j)], dz_dv[(i, j)]);
            magnitude(&t_u.cross(&t_v))
        }))
    }

    /// Surface area by composite Simpson quadrature.
    pub fn surface_area(&self) -> Result<f64> {
        self.surface_area_with(QuadratureRule::Simpson)
    }

    /// Surface area: each fixed-`u` row of the density is integrated over
    /// `v`, then the row integrals are integrated over `u`, both with `rule`.
    #[instrument(level = "debug", skip(self), fields(n = self.resolution()))]
    pub fn surface_area_with(&self, rule: QuadratureRule) -> Result<f64> {
        rule.check_samples(self.resolution())?;

        let density = self.area_density()?;
        let v = self.v_samples();
        let mut row = vec![0.0; v.len()];
        let mut row_integrals = Vec::with_capacity(density.nrows());
        for i in 0..density.nrows() {
            for (j, slot) in row.iter_mut().enumerate() {
                *slot = density[(i, j)];
            }
            row_integrals.push(rule.integrate(&row, v)?);
        }

        let area = rule.integrate(&row_integrals, self.u_samples())?;
        debug!(area, %rule, "integrated surface area");
        finite_estimate("surface area", area)
    }
}

/// Euclidean length scaled by the largest component, so squares of large
/// components do not overflow and squares of tiny ones do not flush to zero.
pub(crate) fn magnitude(vector: &Vector3<f64>) -> f64 {
    let scale = vector.amax();
    if scale == 0.0 {
        return 0.0;
    }
    scale * (vector / scale).norm()
}

pub(crate) fn finite_estimate(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFiniteEstimate { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::magnitude;
    use crate::error::GeometryError;
    use crate::quadrature::QuadratureRule;
    use crate::sampling::MobiusStrip;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::Vector3;

    fn area(radius: f64, width: f64, n: usize) -> f64 {
        MobiusStrip::with_dimensions(radius, width, n)
            .expect("strip")
            .surface_area()
            .expect("area")
    }

    #[test]
    fn reference_strip_area_is_close_to_analytic_integral() {
        // Double integral of sqrt((R + v cos(u/2))^2 + v^2/4) for R = 1, w = 0.2.
        let value = area(1.0, 0.2, 200);
        assert_relative_eq!(value, 1.257162, max_relative = 1e-3);
        assert!(value.is_finite() && value > 0.0);
    }

    #[test]
    fn surface_area_is_deterministic() {
        let strip = MobiusStrip::with_dimensions(1.0, 0.2, 200).expect("strip");
        let first = strip.surface_area().expect("area");
        let second = strip.surface_area().expect("area");
        let rebuilt = area(1.0, 0.2, 200);
        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(first.to_bits(), rebuilt.to_bits());
    }

    #[test]
    fn wider_strip_has_larger_area() {
        assert!(area(1.0, 0.3, 200) > area(1.0, 0.2, 200));
    }

    #[test]
    fn area_decreases_toward_zero_as_width_shrinks() {
        let widths = [2.0, 1.0, 0.5, 0.1, 0.01, 0.001];
        let areas: Vec<f64> = widths.iter().map(|&w| area(1.0, w, 51)).collect();
        for pair in areas.windows(2) {
            assert!(pair[1] < pair[0], "areas not decreasing: {areas:?}");
        }
        assert!(areas[areas.len() - 1] < 1e-2);
        for value in areas {
            assert!(value.is_finite() && value >= 0.0);
        }
    }

    #[test]
    fn tiny_widths_give_finite_non_negative_area() {
        for width in [1e-100, 1e-200, 1e-300, f64::MIN_POSITIVE, 1e-320] {
            let value = area(1.0, width, 51);
            assert!(value.is_finite() && value >= 0.0, "w = {width:e}: {value}");
        }
        // Above the subnormal range the estimate keeps scaling with w.
        assert_relative_eq!(
            area(1.0, 1e-200, 51) * 1e100,
            area(1.0, 1e-100, 51),
            max_relative = 1e-9
        );
    }

    #[test]
    fn large_dimensions_give_finite_area_or_a_typed_error() {
        for (radius, width) in [(1e6, 1e3), (1e150, 1e150), (1e300, 1.0), (1.0, 1e100)] {
            let value = area(radius, width, 51);
            assert!(value.is_finite() && value > 0.0, "R = {radius:e}, w = {width:e}: {value}");
        }
        // The true area, about 2 pi R w, exceeds f64::MAX here.
        let strip = MobiusStrip::with_dimensions(1e200, 1e200, 51).expect("strip");
        assert!(matches!(
            strip.surface_area(),
            Err(GeometryError::NonFiniteEstimate { quantity: "surface area", .. })
        ));
    }

    #[test]
    fn magnitude_survives_extreme_components() {
        assert_eq!(magnitude(&Vector3::zeros()), 0.0);
        let large = magnitude(&Vector3::new(3e200, 4e200, 0.0));
        let tiny = magnitude(&Vector3::new(0.0, 3e-200, 4e-200));
        assert_relative_eq!(large, 5e200, max_relative = 1e-15);
        assert_relative_eq!(tiny, 5e-200, max_relative = 1e-15);
    }

    #[test]
    fn density_field_matches_grid_shape_and_is_non_negative() {
        let strip = MobiusStrip::with_dimensions(1.0, 0.2, 21).expect("strip");
        let density = strip.area_density().expect("density");
        assert_eq!(density.shape(), (21, 21));
        assert!(density.iter().all(|d| d.is_finite() && *d >= 0.0));
        // On the centerline the density equals R.
        assert_abs_diff_eq!(density[(10, 10)], 1.0, epsilon = 2e-2);
    }

    #[test]
    fn even_and_odd_resolutions_agree() {
        assert_relative_eq!(area(1.0, 0.2, 200), area(1.0, 0.2, 201), max_relative = 1e-5);
    }

    #[test]
    fn two_samples_are_degenerate_for_simpson_but_not_trapezoid() {
        let strip = MobiusStrip::with_dimensions(1.0, 0.2, 2).expect("strip");
        assert_eq!(
            strip.surface_area(),
            Err(GeometryError::DegenerateQuadrature {
                rule: QuadratureRule::Simpson,
                samples: 2,
                minimum: 3,
            })
        );
        let value = strip
            .surface_area_with(QuadratureRule::Trapezoid)
            .expect("trapezoid area");
        assert!(value.is_finite() && value >= 0.0);
    }

    #[test]
    fn trapezoid_area_converges_to_simpson_area() {
        let strip = MobiusStrip::with_dimensions(1.0, 0.2, 200).expect("strip");
        let simpson = strip.surface_area().expect("simpson");
        let trapezoid = strip
            .surface_area_with(QuadratureRule::Trapezoid)
            .expect("trapezoid");
        assert_relative_eq!(simpson, trapezoid, max_relative = 1e-3);
    }
}
