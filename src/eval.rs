// Copyright 2026 the Bezkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evaluation strategies for cubic segments.
//!
//! A [`CubicBez`](crate::CubicBez) is generic over how it turns a time
//! value into a curve value. [`DeCasteljau`] works for any value type
//! with an affine combination and keeps no state. [`PowerBasis`] caches
//! the polynomial coefficients of a scalar curve so that evaluation is a
//! short Horner chain; it is only available when the value type is a
//! float.

use core::fmt;

use num_traits::{AsPrimitive, Float};

use crate::Lerp;

/// A strategy for evaluating a cubic segment.
///
/// The evaluator may hold a cache derived from the control points and the
/// window. [`sync`](Evaluator::sync) rebuilds all of it;
/// [`set_window`](Evaluator::set_window) rebuilds only what depends on
/// the window.
pub trait Evaluator<V, K>: Copy + fmt::Debug {
    /// Build the evaluator state for the given segment.
    fn from_segment(points: &[V; 4], r: K, s: K) -> Self;

    /// Rebuild every cached value from the control points and window.
    fn sync(&mut self, points: &[V; 4], r: K, s: K);

    /// Rebuild the values that depend on the window only.
    fn set_window(&mut self, r: K, s: K);

    /// Evaluate the segment at time `t`.
    ///
    /// `points`, `r` and `s` are the segment the evaluator was last synced
    /// with.
    fn eval(&self, points: &[V; 4], r: K, s: K, t: K) -> V;
}

/// Evaluation by repeated affine combination.
///
/// Costs six lerps per evaluation and needs no cache, so it never goes
/// stale.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct DeCasteljau;

impl<V: Lerp<K>, K: Float> Evaluator<V, K> for DeCasteljau {
    #[inline]
    fn from_segment(_: &[V; 4], _: K, _: K) -> Self {
        DeCasteljau
    }

    #[inline]
    fn sync(&mut self, _: &[V; 4], _: K, _: K) {}

    #[inline]
    fn set_window(&mut self, _: K, _: K) {}

    #[inline]
    fn eval(&self, points: &[V; 4], r: K, s: K, t: K) -> V {
        eval_casteljau(points, (t - r) / (s - r))
    }
}

/// Evaluate the cubic with control points `points` at local parameter `u`.
#[inline]
pub(crate) fn eval_casteljau<V: Lerp<K>, K: Copy>(points: &[V; 4], u: K) -> V {
    let [a, b, c, d] = *points;
    let bc = b.lerp(c, u);
    a.lerp(b, u)
        .lerp(bc, u)
        .lerp(bc.lerp(c.lerp(d, u), u), u)
}

/// Evaluation of a scalar cubic in power-basis (monomial) form.
///
/// Holds `c0 + c1 u + c2 u² + c3 u³` and the reciprocal of the window
/// width. Evaluation costs four products, three sums and one difference.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct PowerBasis<V, K> {
    coeff: [V; 4],
    drs: K,
}

impl<V: Float, K: Copy> PowerBasis<V, K> {
    /// The polynomial coefficients, lowest degree first.
    #[inline]
    pub fn coeffs(&self) -> [V; 4] {
        self.coeff
    }

    /// The cached reciprocal of the window width.
    #[inline]
    pub fn drs(&self) -> K {
        self.drs
    }
}

/// Convert Bernstein coefficients into power-basis coefficients.
#[inline]
fn power_coeffs<V: Float>(points: &[V; 4]) -> [V; 4] {
    let [a, b, c, d] = *points;
    let three = V::one() + V::one() + V::one();
    let six = three + three;
    [
        a,
        b * three - a * three,
        c * three - b * six + a * three,
        d - c * three + b * three - a,
    ]
}

impl<V, K> Evaluator<V, K> for PowerBasis<V, K>
where
    V: Float + fmt::Debug + 'static,
    K: Float + AsPrimitive<V> + fmt::Debug,
{
    fn from_segment(points: &[V; 4], r: K, s: K) -> Self {
        PowerBasis {
            coeff: power_coeffs(points),
            drs: (s - r).recip(),
        }
    }

    fn sync(&mut self, points: &[V; 4], r: K, s: K) {
        self.coeff = power_coeffs(points);
        self.drs = (s - r).recip();
    }

    #[inline]
    fn set_window(&mut self, r: K, s: K) {
        self.drs = (s - r).recip();
    }

    #[inline]
    fn eval(&self, _: &[V; 4], r: K, _: K, t: K) -> V {
        let u: V = ((t - r) * self.drs).as_();
        let [c0, c1, c2, c3] = self.coeff;
        c0 + (c1 + (c2 + c3 * u) * u) * u
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_coefficients() {
        // y = u³ has Bernstein coefficients 0, 0, 0, 1.
        assert_eq!(power_coeffs(&[0.0_f64, 0.0, 0.0, 1.0]), [0.0, 0.0, 0.0, 1.0]);
        // y = u has Bernstein coefficients 0, 1/3, 2/3, 1.
        let c = power_coeffs(&[0.0_f64, 1.0 / 3.0, 2.0 / 3.0, 1.0]);
        assert!((c[1] - 1.0).abs() < 1e-12);
        assert!(c[2].abs() < 1e-12);
        assert!(c[3].abs() < 1e-12);
    }

    #[test]
    fn casteljau_matches_power_basis() {
        let pts = [0.5_f64, -2.0, 3.0, 1.25];
        let pb = <PowerBasis<f64, f64> as Evaluator<f64, f64>>::from_segment(&pts, 0.0, 1.0);
        for i in 0..=20 {
            let u = i as f64 / 10.0 - 0.5;
            let expected = eval_casteljau(&pts, u);
            assert!((pb.eval(&pts, 0.0, 1.0, u) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn window_only_touches_reciprocal() {
        let pts = [0.0_f32, 1.0, 2.0, 3.0];
        let mut pb = <PowerBasis<f32, f32> as Evaluator<f32, f32>>::from_segment(&pts, 0.0, 1.0);
        let coeffs = pb.coeffs();
        Evaluator::<f32, f32>::set_window(&mut pb, 2.0, 6.0);
        assert_eq!(pb.coeffs(), coeffs);
        assert_eq!(pb.drs(), 0.25);
    }
}
