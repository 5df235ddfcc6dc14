//! Transcendental functions over jets.
//!
//! Every function here follows one pattern: compute the outer value
//! `y = f(x)` from the jet's scalar value, then rescale all existing
//! partial coefficients by `f′(x)` — the chain rule for composition is a
//! single scalar rescale, shared by every function in this module. The
//! result is always a derived quantity, never a fresh variable.
//!
//! `sinc` is the one function that needs care: the naive `sin(x)/x` loses
//! precision as `x → 0`, so it switches to a Taylor expansion below a
//! threshold derived from machine epsilon (see [`Jet::sinc`]).
//!
//! # Example
//!
//! ```
//! use tangent::Jet;
//!
//! // f(x) = exp(sin(x)) at x = 0; f′(x) = cos(x)·exp(sin(x))
//! let x = Jet::variable(0.0_f64);
//! let f = x.clone().sin().exp();
//!
//! assert_eq!(f.value(), 1.0);
//! assert_eq!(f.partial(&x), 1.0);
//! ```

use crate::jet::Jet;

macro_rules! impl_transcendental {
    ($T:ty) => {
        impl Jet<$T> {
            /// Sine. Rescales partials by `cos(x)`.
            pub fn sin(self) -> Self {
                let x = self.value();
                self.chain(x.sin(), x.cos())
            }

            /// Cosine. Rescales partials by `−sin(x)`.
            pub fn cos(self) -> Self {
                let x = self.value();
                self.chain(x.cos(), -x.sin())
            }

            /// Tangent. Rescales partials by `sec²(x) = 1/cos²(x)`.
            pub fn tan(self) -> Self {
                let x = self.value();
                let sec = 1.0 / x.cos();
                self.chain(x.tan(), sec * sec)
            }

            /// Exponential. Rescales partials by the result value itself.
            pub fn exp(self) -> Self {
                let e = self.value().exp();
                self.chain(e, e)
            }

            /// Square root. Rescales partials by `1/(2√x)`.
            pub fn sqrt(self) -> Self {
                let s = self.value().sqrt();
                self.chain(s, 0.5 / s)
            }

            /// Natural logarithm. Rescales partials by `1/x`.
            pub fn ln(self) -> Self {
                let x = self.value();
                self.chain(x.ln(), 1.0 / x)
            }

            /// Reciprocal. Rescales partials by `−1/x²`.
            pub fn recip(self) -> Self {
                let r = 1.0 / self.value();
                self.chain(r, -(r * r))
            }

            /// Integer power. Rescales partials by `n·xⁿ⁻¹`.
            pub fn powi(self, n: i32) -> Self {
                let x = self.value();
                self.chain(x.powi(n), (n as $T) * x.powi(n - 1))
            }

            /// Absolute value. Rescales partials by the sign of `x`.
            ///
            /// `abs` has no derivative at exactly zero; this implementation
            /// takes the positive branch there (`x ≥ 0` rescales by `+1`,
            /// `x < 0` by `−1`), a documented discontinuity rather than a
            /// subgradient.
            pub fn abs(self) -> Self {
                let x = self.value();
                let sign = if x < 0.0 { -1.0 } else { 1.0 };
                self.chain(x.abs(), sign)
            }

            /// Normalized sinc, `sin(x)/x`, with `sinc(0) = 1`.
            ///
            /// The direct formulas
            ///
            /// ```text
            /// value = sin(x)/x     slope = (x·cos(x) − sin(x)) / x²
            /// ```
            ///
            /// cancel catastrophically as `x → 0`, so below the fourth root
            /// of machine epsilon the implementation switches to a Taylor
            /// expansion, adding each refinement term only once `|x|` is
            /// large enough for it to matter at this precision:
            ///
            /// ```text
            /// value = 1 − x²/6 + x⁴/120     slope = −x/3 + x³/30
            /// ```
            pub fn sinc(self) -> Self {
                let x = self.value();
                let ax = x.abs();
                let e1 = <$T>::EPSILON;
                let e2 = e1.sqrt();
                let e4 = e2.sqrt();

                let value;
                let slope;
                if ax > e4 {
                    let sx = x.sin();
                    value = sx / x;
                    slope = (x * x.cos() - sx) / (x * x);
                } else {
                    let x2 = x * x;
                    let mut v: $T = 1.0;
                    let mut d = -x / 3.0;
                    if ax > e1 {
                        v -= x2 / 6.0;
                        if ax > e2 {
                            v += x2 * x2 / 120.0;
                            d += x * x2 / 30.0;
                        }
                    }
                    value = v;
                    slope = d;
                }
                self.chain(value, slope)
            }
        }
    };
}

impl_transcendental!(f32);
impl_transcendental!(f64);

#[cfg(test)]
mod tests {
    use crate::jet::{gradient, Jet};

    /// Central finite differences, for cross-checking propagated
    /// derivatives against a numerical estimate.
    fn finite_diff_grad<F>(f: F, point: &[f64], eps: f64) -> Vec<f64>
    where
        F: Fn(&[f64]) -> f64,
    {
        let mut grads = Vec::with_capacity(point.len());
        let mut perturbed = point.to_vec();
        for i in 0..point.len() {
            perturbed[i] = point[i] + eps;
            let f_plus = f(&perturbed);
            perturbed[i] = point[i] - eps;
            let f_minus = f(&perturbed);
            perturbed[i] = point[i];
            grads.push((f_plus - f_minus) / (2.0 * eps));
        }
        grads
    }

    #[test]
    fn sin_applies_chain_rule_at_zero() {
        let x = Jet::variable(0.0_f64);
        let s = x.clone().sin();

        assert_eq!(s.value(), 0.0);
        assert_eq!(s.partial(&x), 1.0); // cos(0) = 1
    }

    #[test]
    fn cos_at_zero() {
        let x = Jet::variable(0.0_f64);
        let c = x.clone().cos();

        assert_eq!(c.value(), 1.0);
        assert_eq!(c.partial(&x), 0.0); // -sin(0) = 0
    }

    #[test]
    fn tan_derivative_is_secant_squared() {
        let x = Jet::variable(std::f64::consts::FRAC_PI_4);
        let t = x.clone().tan();

        assert!((t.value() - 1.0).abs() < 1e-15);
        assert!((t.partial(&x) - 2.0).abs() < 1e-14); // sec²(π/4) = 2
    }

    #[test]
    fn exp_derivative_is_the_result_itself() {
        let x = Jet::variable(0.0_f64);
        let f = x.clone().exp();
        assert_eq!(f.value(), 1.0);
        assert_eq!(f.partial(&x), 1.0);

        // f(x) = e^(x²) at x=1: f′ = 2x·e^(x²) = 2e
        let x = Jet::variable(1.0_f64);
        let f = (x.clone() * x.clone()).exp();
        let e = 1.0_f64.exp();
        assert_eq!(f.value(), e);
        assert!((f.partial(&x) - 2.0 * e).abs() < 1e-14);
    }

    #[test]
    fn sqrt_at_four() {
        let x = Jet::variable(4.0_f64);
        let f = x.clone().sqrt();

        assert_eq!(f.value(), 2.0);
        assert_eq!(f.partial(&x), 0.25); // 1/(2·2)
    }

    #[test]
    fn ln_of_a_product() {
        let x = Jet::variable(1.0_f64);
        let f = x.clone().ln();
        assert_eq!(f.value(), 0.0);
        assert_eq!(f.partial(&x), 1.0);

        // ln(xy): ∂/∂x = 1/x, ∂/∂y = 1/y
        let x = Jet::variable(2.0_f64);
        let y = Jet::variable(4.0_f64);
        let f = (x.clone() * y.clone()).ln();
        assert!((f.value() - 8.0_f64.ln()).abs() < 1e-15);
        assert!((f.partial(&x) - 0.5).abs() < 1e-15);
        assert!((f.partial(&y) - 0.25).abs() < 1e-15);
    }

    #[test]
    fn recip_at_two() {
        let x = Jet::variable(2.0_f64);
        let f = x.clone().recip();

        assert_eq!(f.value(), 0.5);
        assert_eq!(f.partial(&x), -0.25); // -1/x²
    }

    #[test]
    fn powi_matches_power_rule() {
        let x = Jet::variable(2.0_f64);
        let f = x.clone().powi(3);
        assert_eq!(f.value(), 8.0);
        assert_eq!(f.partial(&x), 12.0); // 3x² = 12

        let g = x.clone().powi(-1);
        assert_eq!(g.value(), 0.5);
        assert_eq!(g.partial(&x), -0.25); // -x⁻² = -1/4
    }

    #[test]
    fn abs_takes_the_sign_branch() {
        let x = Jet::variable(-3.0_f64);
        let f = x.clone().abs();
        assert_eq!(f.value(), 3.0);
        assert_eq!(f.partial(&x), -1.0);

        let y = Jet::variable(3.0_f64);
        let g = y.clone().abs();
        assert_eq!(g.value(), 3.0);
        assert_eq!(g.partial(&y), 1.0);
    }

    #[test]
    fn abs_at_zero_takes_the_positive_branch() {
        let x = Jet::variable(0.0_f64);
        let f = x.clone().abs();
        assert_eq!(f.value(), 0.0);
        assert_eq!(f.partial(&x), 1.0);
    }

    #[test]
    fn sinc_at_zero_is_one_with_zero_derivative() {
        let x = Jet::variable(0.0_f64);
        let s = x.clone().sinc();

        assert_eq!(s.value(), 1.0);
        assert_eq!(s.partial(&x), 0.0);
    }

    #[test]
    fn sinc_matches_direct_formula_away_from_zero() {
        let x = Jet::variable(1.0_f64);
        let s = x.clone().sinc();

        assert_eq!(s.value(), 1.0_f64.sin());
        assert_eq!(s.partial(&x), 1.0_f64.cos() - 1.0_f64.sin());
    }

    #[test]
    fn sinc_branches_agree_near_the_threshold() {
        let e4 = f64::EPSILON.sqrt().sqrt();

        // Just below the switch point the Taylor branch is used; the direct
        // formulas are still accurate here, so both must agree.
        let below = e4 * 0.5;
        let x = Jet::variable(below);
        let s = x.clone().sinc();
        assert!((s.value() - below.sin() / below).abs() < 1e-14);
        let direct_slope = (below * below.cos() - below.sin()) / (below * below);
        assert!((s.partial(&x) - direct_slope).abs() < 1e-11);

        // Just above the switch point the direct branch is used; the Taylor
        // sum is still accurate here, so both must agree.
        let above = e4 * 2.0;
        let x = Jet::variable(above);
        let s = x.clone().sinc();
        let x2 = above * above;
        let taylor_value = 1.0 - x2 / 6.0 + x2 * x2 / 120.0;
        let taylor_slope = -above / 3.0 + above * x2 / 30.0;
        assert!((s.value() - taylor_value).abs() < 1e-14);
        assert!((s.partial(&x) - taylor_slope).abs() < 1e-11);
    }

    #[test]
    fn sinc_derivative_matches_finite_difference() {
        let grads = finite_diff_grad(|v| v[0].sin() / v[0], &[0.5], 1e-6);

        let x = Jet::variable(0.5_f64);
        let s = x.clone().sinc();
        assert!((s.partial(&x) - grads[0]).abs() < 1e-8);
    }

    #[test]
    fn transcendental_results_are_derived_quantities() {
        let x = Jet::variable(0.3_f64);
        let s = x.clone().sin();

        // The result is no longer an independent variable, so it keys no
        // partial lookups; the original variable still does.
        assert_eq!(s.partial(&s), 0.0);
        assert_eq!(s.partial(&x), 0.3_f64.cos());
    }

    #[test]
    fn composite_gradient_matches_finite_difference() {
        // f(x, y) = sin(x)·exp(y) + √(x·y)
        let f = |vars: [Jet<f64>; 2]| {
            let [x, y] = vars;
            x.clone().sin() * y.clone().exp() + (x * y).sqrt()
        };
        let point = [1.2, 0.7];
        let (_, grad) = gradient(f, point);

        let reference = finite_diff_grad(
            |v| v[0].sin() * v[1].exp() + (v[0] * v[1]).sqrt(),
            &point,
            1e-6,
        );
        assert!((grad[0] - reference[0]).abs() < 1e-5);
        assert!((grad[1] - reference[1]).abs() < 1e-5);
    }

    #[test]
    fn single_precision_jets_work_too() {
        let x: Jet<f32> = Jet::variable(0.0);
        let s = x.clone().sin();
        assert_eq!(s.value(), 0.0);
        assert_eq!(s.partial(&x), 1.0);

        let z: Jet<f32> = Jet::variable(0.0);
        assert_eq!(z.clone().sinc().value(), 1.0);
    }
}
