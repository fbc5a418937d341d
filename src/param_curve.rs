// Copyright 2026 the Bezkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits for curves parametrized by a scalar time value.

use num_traits::{Float, Zero};

use crate::common::lit;
use crate::DistanceMetric;

/// Maximum recursion depth of the root isolation behind
/// [`ParamCurveNearest::nearest`].
pub const MAX_DEPTH: usize = 64;

/// Flatness threshold of the root isolation, `2^-(MAX_DEPTH + 1)`.
pub const BEZIER_EPSILON: f64 = 2.710_505_431_213_761e-20;

/// Degree of the polynomial whose roots locate the nearest point on a cubic.
pub const W_DEGREE: usize = 5;

/// Default number of chords used by [`ParamCurveArclen::arclen`].
pub const DEFAULT_ARCLEN_STEPS: usize = 7;

/// Default number of narrowing rounds of [`ParamCurveNearest::nearest_fast`].
pub const DEFAULT_FAST_ITERATIONS: usize = 7;

/// [`BEZIER_EPSILON`] in the time type.
#[inline]
pub(crate) fn bezier_epsilon<K: Float>() -> K {
    let half = K::one() / (K::one() + K::one());
    half.powi(MAX_DEPTH as i32 + 1)
}

/// A curve parametrized by a scalar.
///
/// Each curve has a time window `[r, s]`. Evaluating at `r` gives the
/// start of the curve and at `s` its end; times outside the window
/// extrapolate.
pub trait ParamCurve {
    /// The value produced by evaluation, usually a point.
    type Value: Copy;
    /// The parameter type.
    type Time: Float;

    /// Evaluate the curve at time `t`.
    fn eval(&self, t: Self::Time) -> Self::Value;

    /// The time window `(r, s)`.
    fn window(&self) -> (Self::Time, Self::Time);

    /// The start point.
    fn start(&self) -> Self::Value {
        self.eval(self.window().0)
    }

    /// The end point.
    fn end(&self) -> Self::Value {
        self.eval(self.window().1)
    }
}

/// A parametrized curve that can have its arc length estimated.
pub trait ParamCurveArclen: ParamCurve {
    /// Estimate the arc length between times `r` and `s`.
    ///
    /// The interval is cut into `steps` equal pieces and the lengths of
    /// the chords joining the sampled values are summed, so this is a
    /// polyline approximation with a fixed cost rather than an adaptive
    /// one. The result is in the uncooked (natural) units of `metric`.
    ///
    /// An empty interval has length zero, a reversed interval measures the
    /// same stretch of curve as the forward one, and `steps == 0` is
    /// treated as a single chord.
    fn arclen_steps<M>(&self, metric: &M, r: Self::Time, s: Self::Time, steps: usize) -> Self::Time
    where
        M: DistanceMetric<Self::Value, Self::Time>,
    {
        if s < r {
            return self.arclen_steps(metric, s, r, steps);
        }
        let steps = steps.max(1);
        let inc = (s - r) / lit(steps as f64);
        if inc == Self::Time::zero() {
            return Self::Time::zero();
        }
        let mut total = Self::Time::zero();
        let mut last = self.eval(r);
        let mut last_t = r;
        for i in 1..steps {
            let t = r + inc * lit(i as f64);
            let next = self.eval(t);
            total = total + metric.uncook(metric.distance(last, next));
            last = next;
            last_t = t;
        }
        // The final sample can land a rounding error away from `s`; scale
        // its chord to the part of the interval it actually covers.
        let t = r + inc * lit(steps as f64);
        let tail = metric.uncook(metric.distance(last, self.eval(t)));
        total + tail * (s - last_t) / inc
    }

    /// Estimate the arc length of the whole window with
    /// [`DEFAULT_ARCLEN_STEPS`] chords.
    fn arclen<M>(&self, metric: &M) -> Self::Time
    where
        M: DistanceMetric<Self::Value, Self::Time>,
    {
        let (r, s) = self.window();
        self.arclen_steps(metric, r, s, DEFAULT_ARCLEN_STEPS)
    }
}

/// The nearest position on a curve to some point.
///
/// Returned by the methods of [`ParamCurveNearest`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nearest<K> {
    /// The distance to the point, in cooked (squared) units.
    pub distance_sq: K,
    /// The time of the nearest position, inside the curve's window.
    pub t: K,
}

/// A parametrized curve that reports the nearest position to a point.
pub trait ParamCurveNearest: ParamCurve {
    /// Find the position on the curve nearest the given point.
    ///
    /// This is exact up to the precision of the time type: every
    /// stationary point of the distance is located and compared with
    /// both ends of the window.
    fn nearest(&self, p: Self::Value) -> Nearest<Self::Time>;

    /// Approximate the nearest position by narrowing a bracket.
    ///
    /// Each round compares the curve at one and two thirds of the current
    /// bracket and keeps the half closer to the better of the two, so the
    /// bracket halves every round. This finds *a* local minimum of the
    /// distance, not necessarily the global one: a curve that passes near
    /// the point more than once can trap the search in the wrong lobe.
    /// Use [`nearest`](ParamCurveNearest::nearest) when that matters.
    ///
    /// The reported distance is in the cooked units of `metric`.
    fn nearest_fast<M>(&self, metric: &M, p: Self::Value, iterations: usize) -> Nearest<Self::Time>
    where
        M: DistanceMetric<Self::Value, Self::Time>,
    {
        let (mut r, mut s) = self.window();
        let half = lit::<Self::Time>(0.5);
        let one_third = lit::<Self::Time>(1.0 / 3.0);
        let two_thirds = lit::<Self::Time>(2.0 / 3.0);
        let mut t = (r + s) * half;
        for _ in 0..iterations {
            let near = metric.distance(self.eval((s - r) * one_third + r), p);
            let far = metric.distance(self.eval((s - r) * two_thirds + r), p);
            if near < far {
                s = t;
            } else {
                r = t;
            }
            t = (r + s) * half;
        }
        Nearest {
            distance_sq: metric.distance(self.eval(t), p),
            t,
        }
    }
}
