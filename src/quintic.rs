// Copyright 2026 the Bezkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root isolation for the quintic behind exact nearest-point search.
//!
//! The squared distance from a point `P` to a cubic `B(u)` is stationary
//! where `(B(u) - P) · B'(u) = 0`. That dot product is a polynomial of
//! degree 5, and written in Bernstein form its control polygon bounds its
//! roots. Roots are isolated by halving the polygon until each piece
//! crosses zero at most once and is close enough to a straight line that
//! the crossing of its chord is the root.
//!
//! This follows Schneider, "Solving the Nearest-Point-on-Curve Problem",
//! Graphics Gems (1990).

use core::ops::Sub;

use arrayvec::ArrayVec;
use num_traits::Float;

use crate::common::{de_casteljau, lit};
use crate::param_curve::bezier_epsilon;
use crate::{Dot, Lerp, MAX_DEPTH, W_DEGREE};

const DEGREE: usize = 3;

/// Products of binomial coefficients, `C(3, i) C(2, j) / C(5, i + j)`,
/// indexed `[j][i]`.
const Z: [[f64; DEGREE + 1]; DEGREE] = [
    [1.0, 0.6, 0.3, 0.1],
    [0.4, 0.6, 0.6, 0.4],
    [0.1, 0.3, 0.6, 1.0],
];

/// A control point of the quintic: `x` is the parameter, `y` the value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Ctrl<K> {
    pub(crate) x: K,
    pub(crate) y: K,
}

impl<K: Float> Lerp<K> for Ctrl<K> {
    #[inline]
    fn lerp(self, other: Ctrl<K>, t: K) -> Ctrl<K> {
        Ctrl {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

pub(crate) type Quintic<K> = [Ctrl<K>; W_DEGREE + 1];

/// The candidate parameters produced by [`find_roots`].
pub(crate) type Roots<K> = ArrayVec<K, W_DEGREE>;

/// Build the Bernstein control polygon of `(B(u) - p) · B'(u)`.
pub(crate) fn to_bezier_form<V, K>(p: V, points: &[V; DEGREE + 1]) -> Quintic<K>
where
    V: Dot<K> + Sub<Output = V>,
    K: Float,
{
    let c: [V; DEGREE + 1] = core::array::from_fn(|i| points[i] - p);
    // The derivative's control points are 3 (points[i + 1] - points[i]);
    // the factor of 3 is applied to the dot products below.
    let d: [V; DEGREE] = core::array::from_fn(|i| points[i + 1] - points[i]);
    let three = lit::<K>(3.0);

    let mut w: Quintic<K> = core::array::from_fn(|i| Ctrl {
        x: lit(i as f64 / W_DEGREE as f64),
        y: K::zero(),
    });
    // The convolution of the two Bernstein bases puts the product of the
    // i-th and j-th terms on coefficient i + j.
    for (k, wk) in w.iter_mut().enumerate() {
        let lb = k.saturating_sub(DEGREE - 1);
        let ub = k.min(DEGREE);
        for i in lb..=ub {
            let j = k - i;
            wk.y = wk.y + three * d[j].dot(c[i]) * lit(Z[j][i]);
        }
    }
    w
}

/// Count sign changes along the control polygon.
///
/// This is an upper bound on the number of roots in the interval the
/// polygon spans. Zero counts as positive.
pub(crate) fn crossing_count<K: Float>(w: &Quintic<K>) -> usize {
    w.windows(2)
        .filter(|pair| (pair[0].y < K::zero()) != (pair[1].y < K::zero()))
        .count()
}

/// Whether the polygon is close enough to its chord for the chord's
/// crossing to stand in for the root.
///
/// The interior points are bracketed between two lines parallel to the
/// chord; the polygon is flat when those lines cross zero less than
/// [`BEZIER_EPSILON`](crate::BEZIER_EPSILON) apart.
pub(crate) fn flat_enough<K: Float>(w: &Quintic<K>) -> bool {
    let first = w[0];
    let last = w[W_DEGREE];

    // Implicit equation a x + b y + c = 0 of the chord.
    let a = first.y - last.y;
    let b = last.x - first.x;
    let c = first.x * last.y - last.x * first.y;
    let ab_squared = a * a + b * b;

    let mut max_above = K::zero();
    let mut max_below = K::zero();
    for pt in &w[1..W_DEGREE] {
        let dist = a * pt.x + b * pt.y + c;
        if dist > K::zero() {
            max_above = max_above.max(dist * dist / ab_squared);
        } else if dist < K::zero() {
            max_below = max_below.min(-(dist * dist) / ab_squared);
        }
    }

    let intercept_1 = -(c + max_above) / a;
    let intercept_2 = -(c + max_below) / a;
    let left = intercept_1.min(intercept_2);
    let right = intercept_1.max(intercept_2);
    lit::<K>(0.5) * (right - left) < bezier_epsilon()
}

/// Where the chord from the first to the last control point crosses zero.
pub(crate) fn x_intercept<K: Float>(w: &Quintic<K>) -> K {
    let first = w[0];
    let last = w[W_DEGREE];
    let ynm = last.y - first.y;
    (ynm * first.x - (last.x - first.x) * first.y) / ynm
}

/// Collect the roots of the quintic `w` into `roots`.
///
/// `depth` is the number of halvings that produced `w`. At [`MAX_DEPTH`]
/// the midpoint of the polygon's interval is reported instead of halving
/// further, so the recursion always terminates; this also caps the
/// error of any root at `2^-MAX_DEPTH`.
pub(crate) fn find_roots<K: Float>(w: &Quintic<K>, depth: usize, roots: &mut Roots<K>) {
    let crossings = crossing_count(w);
    if crossings == 0 {
        return;
    }
    if depth >= MAX_DEPTH {
        log::debug!("root isolation hit depth {depth} with {crossings} crossings left");
        push_root(roots, (w[0].x + w[W_DEGREE].x) * lit(0.5));
        return;
    }
    if crossings == 1 && flat_enough(w) {
        push_root(roots, x_intercept(w));
        return;
    }
    let (_, left, right) = de_casteljau(w, lit(0.5));
    find_roots(&left, depth + 1, roots);
    find_roots(&right, depth + 1, roots);
}

fn push_root<K>(roots: &mut Roots<K>, t: K) {
    if roots.try_push(t).is_err() {
        log::debug!("more than {W_DEGREE} root candidates, dropping one");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec2;

    fn polygon(ys: [f64; 6]) -> Quintic<f64> {
        core::array::from_fn(|i| Ctrl {
            x: i as f64 / 5.0,
            y: ys[i],
        })
    }

    #[test]
    fn z_table_is_binomial() {
        fn choose(n: usize, k: usize) -> f64 {
            (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
        }
        for (j, row) in Z.iter().enumerate() {
            for (i, z) in row.iter().enumerate() {
                let expected = choose(3, i) * choose(2, j) / choose(5, i + j);
                assert!((z - expected).abs() < 1e-12, "z[{j}][{i}]");
            }
        }
    }

    #[test]
    fn crossings() {
        assert_eq!(crossing_count(&polygon([1.0, 1.0, 1.0, 1.0, 1.0, 1.0])), 0);
        assert_eq!(crossing_count(&polygon([-1.0, 1.0, 1.0, 1.0, 1.0, 1.0])), 1);
        assert_eq!(crossing_count(&polygon([-1.0, 1.0, -1.0, 1.0, -1.0, 1.0])), 5);
        // Zero is treated as positive.
        assert_eq!(crossing_count(&polygon([0.0, 0.0, 1.0, 0.0, 0.0, 0.0])), 0);
    }

    #[test]
    fn straight_polygon_is_flat() {
        // y = x - 0.3, degree-elevated.
        let w = polygon([-0.3, -0.1, 0.1, 0.3, 0.5, 0.7]);
        assert!(flat_enough(&w));
        assert!((x_intercept(&w) - 0.3).abs() < 1e-15);
    }

    #[test]
    fn bent_polygon_is_not_flat() {
        let w = polygon([-1.0, 2.0, 2.0, 2.0, 2.0, 1.0]);
        assert!(!flat_enough(&w));
    }

    #[test]
    fn roots_of_linear() {
        let mut roots = Roots::new();
        find_roots(&polygon([-0.3, -0.1, 0.1, 0.3, 0.5, 0.7]), 0, &mut roots);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 0.3).abs() < 1e-15);
    }

    #[test]
    fn roots_of_product() {
        // (x - 0.2)(x - 0.7) in Bernstein form, elevated to degree 5.
        let f = |x: f64| (x - 0.2) * (x - 0.7);
        // Degree 2 coefficients: f(0), f(0) + f'(0)/2, f(1).
        let b = [f(0.0), f(0.0) + 0.5 * (2.0 * 0.0 - 0.9), f(1.0)];
        let mut ys = [0.0; 6];
        for (k, y) in ys.iter_mut().enumerate() {
            for i in k.saturating_sub(3)..=k.min(2) {
                let j = k - i;
                let choose = |n: usize, r: usize| {
                    (0..r).fold(1.0, |acc, m| acc * (n - m) as f64 / (m + 1) as f64)
                };
                *y += b[i] * choose(2, i) * choose(3, j) / choose(5, k);
            }
        }
        let mut roots = Roots::new();
        find_roots(&polygon(ys), 0, &mut roots);
        assert_eq!(roots.len(), 2);
        assert!((roots[0] - 0.2).abs() < 1e-9, "{roots:?}");
        assert!((roots[1] - 0.7).abs() < 1e-9, "{roots:?}");
    }

    #[test]
    fn depth_ceiling_returns_midpoint() {
        let w = polygon([-1.0, 3.0, -3.0, 3.0, -3.0, 1.0]);
        let mut roots = Roots::new();
        find_roots(&w, MAX_DEPTH, &mut roots);
        assert_eq!(roots.as_slice(), &[0.5]);
    }

    #[test]
    fn bezier_form_of_line() {
        // A line from (0, 0) to (3, 0) at unit speed in x, point above x = 1.
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 0.0),
        ];
        let w: Quintic<f64> = to_bezier_form(Vec2::new(1.0, 5.0), &pts);
        // (B(u) - p) · B'(u) = (3u - 1) * 3, linear with its root at 1/3.
        for (i, c) in w.iter().enumerate() {
            let u = i as f64 / 5.0;
            assert!((c.x - u).abs() < 1e-15);
            assert!((c.y - 3.0 * (3.0 * u - 1.0)).abs() < 1e-12, "w[{i}] = {c:?}");
        }
    }
}
