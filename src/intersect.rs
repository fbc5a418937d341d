// Copyright 2026 the Bezkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Approximate intersection of scalar cubic segments.

use core::fmt;

use num_traits::{AsPrimitive, Float};

use crate::FastCubicBez;

/// Default number of Newton steps taken by [`FastCubicBez::intersect`].
pub const DEFAULT_INTERSECT_ITERATIONS: usize = 15;

impl<V, K> FastCubicBez<V, K>
where
    V: Float + AsPrimitive<K> + fmt::Debug + 'static,
    K: Float + AsPrimitive<V> + fmt::Debug,
{
    /// Estimate a time at which this segment takes the same value as
    /// `other`, starting from time `t`.
    ///
    /// Runs `iterations` steps of Newton's method on the difference of the
    /// two cached polynomials, both read in *this* segment's local
    /// parameter.
    ///
    /// This is only an approximation. The two segments are treated as if
    /// they shared one parametrization, which is not true in general, and
    /// Newton's method is not guaranteed to converge: a poor starting time,
    /// a double root, or a difference with no real root can all leave the
    /// estimate anywhere. Returns `None` when the iteration produces a
    /// non-finite value, which includes the case of identical segments.
    ///
    /// The cached coefficients of both segments must be current, see
    /// [`sync`](crate::CubicBez::sync).
    ///
    /// # Examples
    ///
    /// ```
    /// use bezkit::{FastCubicBez, DEFAULT_INTERSECT_ITERATIONS};
    ///
    /// let rising = FastCubicBez::<f64>::new(0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0);
    /// let falling = FastCubicBez::<f64>::new(1.0, 2.0 / 3.0, 1.0 / 3.0, 0.0);
    /// let t = rising.intersect(&falling, 0.0, DEFAULT_INTERSECT_ITERATIONS).unwrap();
    /// assert!((t - 0.5).abs() < 1e-12);
    /// ```
    pub fn intersect(&self, other: &Self, t: K, iterations: usize) -> Option<K> {
        let [a0, a1, a2, a3] = self.coeffs();
        let [b0, b1, b2, b3] = other.coeffs();
        let (s0, s1, s2, s3) = (a0 - b0, a1 - b1, a2 - b2, a3 - b3);
        let two = V::one() + V::one();
        let three = two + V::one();

        let mut u: V = ((t - self.r()) * self.evaluator().drs()).as_();
        for _ in 0..iterations {
            let f = s0 + (s1 + (s2 + s3 * u) * u) * u;
            let df = s1 + (s2 * two + s3 * three * u) * u;
            u = u - f / df;
        }

        let found = self.r() + u.as_() * self.dt();
        if found.is_finite() {
            Some(found)
        } else {
            log::debug!("intersection search from {t:?} diverged");
            None
        }
    }
}
