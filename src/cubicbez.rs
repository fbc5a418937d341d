// Copyright 2026 the Bezkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use core::ops::{Add, Index, IndexMut, Sub};

use num_traits::Float;

use crate::common::{de_casteljau, lit};
use crate::error::window_reciprocal;
use crate::eval::eval_casteljau;
use crate::{CurveError, DeCasteljau, Evaluator, Lerp, ParamCurve, ParamCurveArclen, PowerBasis};

/// A single cubic Bézier segment over a time window.
///
/// The segment blends four control points of type `V` and is evaluated at
/// times of type `K`. A time `t` is first mapped to the local parameter
/// `u = (t - r) / (s - r)`, so evaluating at `r` yields the first control
/// point and at `s` the last. Times outside `[r, s]` extrapolate the
/// cubic.
///
/// The evaluator `E` is chosen at compile time. The default,
/// [`DeCasteljau`], works for any value with an affine combination and has
/// no cache. [`FastCubicBez`] uses [`PowerBasis`] instead, which caches
/// polynomial coefficients for float values; after mutating control points
/// through [`points_mut`](CubicBez::points_mut) or indexing, call
/// [`sync`](CubicBez::sync) before evaluating again.
///
/// # Examples
///
/// ```
/// use bezkit::{CubicBez, ParamCurve};
///
/// let c: CubicBez<f64> = CubicBez::new(0.0, 0.0, 1.0, 1.0);
/// assert_eq!(c.eval(0.5), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBez<V, K = f64, E = DeCasteljau> {
    points: [V; 4],
    r: K,
    s: K,
    evaluator: E,
}

/// A cubic segment of float values evaluated through cached power-basis
/// coefficients.
pub type FastCubicBez<V, K = V> = CubicBez<V, K, PowerBasis<V, K>>;

impl<V: Copy, K: Float, E: Evaluator<V, K>> CubicBez<V, K, E> {
    /// Create a new cubic segment over the window `[0, 1]`.
    #[inline]
    pub fn new(p0: V, p1: V, p2: V, p3: V) -> Self {
        let points = [p0, p1, p2, p3];
        let (r, s) = (K::zero(), K::one());
        CubicBez {
            points,
            r,
            s,
            evaluator: E::from_segment(&points, r, s),
        }
    }

    /// Create a new cubic segment over the window `[r, s]`.
    ///
    /// Fails when the window has no usable width, see
    /// [`CurveError::InvalidWindow`].
    pub fn with_window(p0: V, p1: V, p2: V, p3: V, r: K, s: K) -> Result<Self, CurveError> {
        window_reciprocal(r, s)?;
        let points = [p0, p1, p2, p3];
        Ok(CubicBez {
            points,
            r,
            s,
            evaluator: E::from_segment(&points, r, s),
        })
    }

    /// The first control point, where the curve starts.
    #[inline]
    pub fn p0(&self) -> V {
        self.points[0]
    }

    /// The second control point.
    #[inline]
    pub fn p1(&self) -> V {
        self.points[1]
    }

    /// The third control point.
    #[inline]
    pub fn p2(&self) -> V {
        self.points[2]
    }

    /// The fourth control point, where the curve ends.
    #[inline]
    pub fn p3(&self) -> V {
        self.points[3]
    }

    /// The control points in order.
    #[inline]
    pub fn points(&self) -> &[V; 4] {
        &self.points
    }

    /// Mutable access to the control points.
    ///
    /// This does not update the evaluator; call [`sync`](CubicBez::sync)
    /// afterwards.
    #[inline]
    pub fn points_mut(&mut self) -> &mut [V; 4] {
        &mut self.points
    }

    /// Start of the time window.
    #[inline]
    pub fn r(&self) -> K {
        self.r
    }

    /// End of the time window.
    #[inline]
    pub fn s(&self) -> K {
        self.s
    }

    /// Width of the time window, `s - r`.
    #[inline]
    pub fn dt(&self) -> K {
        self.s - self.r
    }

    /// The evaluator state.
    #[inline]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Set the time window.
    ///
    /// On error the segment is left unchanged.
    pub fn set_window(&mut self, r: K, s: K) -> Result<(), CurveError> {
        window_reciprocal(r, s)?;
        self.r = r;
        self.s = s;
        self.evaluator.set_window(r, s);
        Ok(())
    }

    /// Set the start of the time window.
    pub fn set_r(&mut self, r: K) -> Result<(), CurveError> {
        self.set_window(r, self.s)
    }

    /// Set the end of the time window.
    pub fn set_s(&mut self, s: K) -> Result<(), CurveError> {
        self.set_window(self.r, s)
    }

    /// Rebuild the evaluator cache from the control points and window.
    pub fn sync(&mut self) {
        self.evaluator.sync(&self.points, self.r, self.s);
    }

    /// Map a time into the local parameter space, where the window is `[0, 1]`.
    #[inline]
    pub fn local_t(&self, t: K) -> K {
        (t - self.r) / (self.s - self.r)
    }

    /// Map a local parameter back to a time in the window.
    ///
    /// The ends of the local range map exactly to `r` and `s`.
    #[inline]
    pub(crate) fn window_t(&self, u: K) -> K {
        if u == K::zero() {
            self.r
        } else if u == K::one() {
            self.s
        } else {
            self.r + u * self.dt()
        }
    }
}

impl<V, K, E> CubicBez<V, K, E>
where
    V: Lerp<K>,
    K: Float,
    E: Evaluator<V, K>,
{
    /// Evaluate by de Casteljau regardless of the configured evaluator.
    ///
    /// This never reads the evaluator cache.
    #[inline]
    pub fn eval_casteljau(&self, t: K) -> V {
        eval_casteljau(&self.points, self.local_t(t))
    }

    /// Split the segment at time `t`.
    ///
    /// The left piece keeps the window start and ends at `t`; the right
    /// piece starts at `t` and keeps the window end. Together they trace
    /// the same curve as `self`, and both come back with their evaluators
    /// synced.
    ///
    /// Fails when `t` would leave either piece without a usable window,
    /// for example when `t` equals `r` or `s`.
    pub fn subdivide(&self, t: K) -> Result<(Self, Self), CurveError> {
        window_reciprocal(self.r, t)?;
        window_reciprocal(t, self.s)?;
        let (_, left, right) = de_casteljau(&self.points, self.local_t(t));
        Ok((
            CubicBez {
                points: left,
                r: self.r,
                s: t,
                evaluator: E::from_segment(&left, self.r, t),
            },
            CubicBez {
                points: right,
                r: t,
                s: self.s,
                evaluator: E::from_segment(&right, t, self.s),
            },
        ))
    }

    /// Split the segment in the middle of its window.
    pub fn split_half(&self) -> Result<(Self, Self), CurveError> {
        self.subdivide((self.r + self.s) * lit(0.5))
    }
}

impl<V, K, E> CubicBez<V, K, E>
where
    V: Lerp<K> + Add<Output = V> + Sub<Output = V>,
    K: Float,
    E: Evaluator<V, K>,
{
    /// Evaluate the value and the first derivative at time `t`.
    ///
    /// The derivative is taken with respect to the local parameter `u`;
    /// divide by [`dt`](CubicBez::dt) for the rate of change per unit of
    /// time.
    pub fn eval_deriv(&self, t: K) -> (V, V) {
        let u = self.local_t(t);
        let [a, b, c, d] = self.points;
        let bc = b.lerp(c, u);
        let p1 = a.lerp(b, u).lerp(bc, u);
        let p2 = bc.lerp(c.lerp(d, u), u);
        let diff = p2 - p1;
        (p1.lerp(p2, u), diff + diff + diff)
    }
}

impl<V, K> FastCubicBez<V, K>
where
    V: Float,
    K: Float,
    PowerBasis<V, K>: Evaluator<V, K>,
{
    /// The cached power-basis coefficients, lowest degree first.
    ///
    /// These are only current as of the last [`sync`](CubicBez::sync).
    #[inline]
    pub fn coeffs(&self) -> [V; 4] {
        self.evaluator.coeffs()
    }
}

impl<V: Copy, K: Float, E: Evaluator<V, K>> ParamCurve for CubicBez<V, K, E> {
    type Value = V;
    type Time = K;

    #[inline]
    fn eval(&self, t: K) -> V {
        self.evaluator.eval(&self.points, self.r, self.s, t)
    }

    #[inline]
    fn window(&self) -> (K, K) {
        (self.r, self.s)
    }

    #[inline]
    fn start(&self) -> V {
        self.points[0]
    }

    #[inline]
    fn end(&self) -> V {
        self.points[3]
    }
}

impl<V: Copy, K: Float, E: Evaluator<V, K>> ParamCurveArclen for CubicBez<V, K, E> {}

impl<V, K, E> Index<usize> for CubicBez<V, K, E> {
    type Output = V;

    #[inline]
    fn index(&self, i: usize) -> &V {
        &self.points[i]
    }
}

impl<V, K, E> IndexMut<usize> for CubicBez<V, K, E> {
    /// Raw access to control point `i`; the evaluator must be
    /// [synced](CubicBez::sync) before the next evaluation.
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut V {
        &mut self.points[i]
    }
}
