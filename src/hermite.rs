// Copyright 2026 the Bezkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Hermite segments.

use core::ops::{Add, Sub};

use num_traits::Float;

use crate::common::lit;
use crate::{
    CubicBez, CurveError, DeCasteljau, Dot, Evaluator, Lerp, Nearest, ParamCurve,
    ParamCurveArclen, ParamCurveNearest,
};

/// A cubic segment given by its two end points and the tangents there.
///
/// The tangents are derivatives with respect to the local parameter, so
/// the equivalent Bézier handles sit a third of a tangent away from each
/// end: `b1 = p1 + t1 / 3` and `b2 = p2 - t2 / 3`. The segment keeps that
/// [`CubicBez`] up to date and evaluates through it.
///
/// # Examples
///
/// ```
/// use bezkit::{CubicBez, Hermite, ParamCurve, Vec2};
///
/// let h: Hermite<Vec2> = Hermite::new(
///     Vec2::new(0.0, 0.0),
///     Vec2::new(3.0, 0.0),
///     Vec2::new(3.0, 3.0),
///     Vec2::new(3.0, -3.0),
/// );
/// let c = CubicBez::from(h);
/// assert_eq!(c.p0(), Vec2::new(0.0, 0.0));
/// assert_eq!(c.p1(), Vec2::new(1.0, 1.0));
/// assert_eq!(h.eval(0.5), c.eval(0.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hermite<V, K = f64, E = DeCasteljau> {
    p1: V,
    p2: V,
    t1: V,
    t2: V,
    curve: CubicBez<V, K, E>,
}

fn control_points<V, K>(p1: V, p2: V, t1: V, t2: V) -> [V; 4]
where
    V: Lerp<K> + Add<Output = V> + Sub<Output = V>,
    K: Float,
{
    let third = lit::<K>(1.0 / 3.0);
    [p1, p1.lerp(p1 + t1, third), p2.lerp(p2 - t2, third), p2]
}

impl<V, K, E> Hermite<V, K, E>
where
    V: Lerp<K> + Add<Output = V> + Sub<Output = V>,
    K: Float,
    E: Evaluator<V, K>,
{
    /// Create a new segment over the window `[0, 1]`.
    pub fn new(p1: V, p2: V, t1: V, t2: V) -> Self {
        let [b0, b1, b2, b3] = control_points(p1, p2, t1, t2);
        Hermite {
            p1,
            p2,
            t1,
            t2,
            curve: CubicBez::new(b0, b1, b2, b3),
        }
    }

    /// Create a new segment over the window `[r, s]`.
    ///
    /// Fails when the window has no usable width, see
    /// [`CurveError::InvalidWindow`].
    pub fn with_window(p1: V, p2: V, t1: V, t2: V, r: K, s: K) -> Result<Self, CurveError> {
        let [b0, b1, b2, b3] = control_points(p1, p2, t1, t2);
        Ok(Hermite {
            p1,
            p2,
            t1,
            t2,
            curve: CubicBez::with_window(b0, b1, b2, b3, r, s)?,
        })
    }

    /// A segment from `p1` to `p2` with both tangents equal to `p2 - p1`.
    ///
    /// This traces the straight line at constant speed.
    pub fn from_points(p1: V, p2: V) -> Self {
        let chord = p2 - p1;
        Self::new(p1, p2, chord, chord)
    }

    /// The start point.
    #[inline]
    pub fn p1(&self) -> V {
        self.p1
    }

    /// The end point.
    #[inline]
    pub fn p2(&self) -> V {
        self.p2
    }

    /// The tangent at the start point.
    #[inline]
    pub fn t1(&self) -> V {
        self.t1
    }

    /// The tangent at the end point.
    #[inline]
    pub fn t2(&self) -> V {
        self.t2
    }

    /// The equivalent Bézier segment.
    #[inline]
    pub fn cubic(&self) -> &CubicBez<V, K, E> {
        &self.curve
    }

    /// Move the end points, keeping the tangents.
    pub fn set_points(&mut self, p1: V, p2: V) {
        self.p1 = p1;
        self.p2 = p2;
        self.sync();
    }

    /// Replace the tangents, keeping the end points.
    pub fn set_tangents(&mut self, t1: V, t2: V) {
        self.t1 = t1;
        self.t2 = t2;
        self.sync();
    }

    /// Set the time window.
    ///
    /// On error the segment is left unchanged.
    pub fn set_window(&mut self, r: K, s: K) -> Result<(), CurveError> {
        self.curve.set_window(r, s)
    }

    /// The tangent at time `t`.
    ///
    /// Like [`t1`](Hermite::t1) and [`t2`](Hermite::t2), this is the
    /// derivative with respect to the local parameter, so `derivative(r)`
    /// is `t1` and `derivative(s)` is `t2` whatever the window.
    pub fn derivative(&self, t: K) -> V {
        self.curve.eval_deriv(t).1
    }

    fn sync(&mut self) {
        *self.curve.points_mut() = control_points(self.p1, self.p2, self.t1, self.t2);
        self.curve.sync();
    }
}

impl<V, K, E> From<CubicBez<V, K, E>> for Hermite<V, K, E>
where
    V: Lerp<K> + Add<Output = V> + Sub<Output = V>,
    K: Float,
    E: Evaluator<V, K>,
{
    /// Read the end points and tangents off a Bézier segment, keeping its
    /// window.
    fn from(c: CubicBez<V, K, E>) -> Self {
        let start = c.p1() - c.p0();
        let end = c.p3() - c.p2();
        let mut h = Hermite {
            p1: c.p0(),
            p2: c.p3(),
            t1: start + start + start,
            t2: end + end + end,
            curve: c,
        };
        h.sync();
        h
    }
}

impl<V, K, E> From<Hermite<V, K, E>> for CubicBez<V, K, E> {
    #[inline]
    fn from(h: Hermite<V, K, E>) -> Self {
        h.curve
    }
}

impl<V: Copy, K: Float, E: Evaluator<V, K>> ParamCurve for Hermite<V, K, E> {
    type Value = V;
    type Time = K;

    #[inline]
    fn eval(&self, t: K) -> V {
        self.curve.eval(t)
    }

    #[inline]
    fn window(&self) -> (K, K) {
        self.curve.window()
    }

    #[inline]
    fn start(&self) -> V {
        self.p1
    }

    #[inline]
    fn end(&self) -> V {
        self.p2
    }
}

impl<V: Copy, K: Float, E: Evaluator<V, K>> ParamCurveArclen for Hermite<V, K, E> {}

impl<V, K, E> ParamCurveNearest for Hermite<V, K, E>
where
    V: Lerp<K> + Dot<K> + Sub<Output = V>,
    K: Float,
    E: Evaluator<V, K>,
{
    #[inline]
    fn nearest(&self, p: V) -> Nearest<K> {
        self.curve.nearest(p)
    }
}
