// Copyright 2026 the Bezkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact nearest-point projection onto cubic segments.

use core::ops::Sub;

use num_traits::Float;

use crate::eval::eval_casteljau;
use crate::quintic::{self, Roots};
use crate::{CubicBez, Dot, Evaluator, Lerp, Nearest, ParamCurveNearest};

impl<V, K, E> ParamCurveNearest for CubicBez<V, K, E>
where
    V: Lerp<K> + Dot<K> + Sub<Output = V>,
    K: Float,
    E: Evaluator<V, K>,
{
    /// Find the nearest point by isolating the roots of the distance
    /// derivative.
    ///
    /// Every root is a candidate, as are both ends of the segment: a point
    /// lying beyond an end of the curve is nearest to that end even though
    /// the derivative does not vanish there.
    fn nearest(&self, p: V) -> Nearest<K> {
        let points = self.points();
        let w = quintic::to_bezier_form(p, points);
        let mut candidates = Roots::new();
        quintic::find_roots(&w, 0, &mut candidates);
        log::trace!("{} stationary point candidates", candidates.len());

        let mut best_u = K::zero();
        let mut best = (p - points[0]).mag_squared();
        for &u in &candidates {
            let dist = (p - eval_casteljau(points, u)).mag_squared();
            if dist < best {
                best = dist;
                best_u = u;
            }
        }
        let dist = (p - points[3]).mag_squared();
        if dist < best {
            best = dist;
            best_u = K::one();
        }

        Nearest {
            distance_sq: best,
            t: self.window_t(best_u),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{
        CubicBez, Euclidean, FastCubicBez, ParamCurve, ParamCurveNearest, Vec2,
        DEFAULT_FAST_ITERATIONS,
    };

    fn verify(result: f64, expected: f64) {
        assert!(
            (result - expected).abs() < 1e-9,
            "got {result} expected {expected}"
        );
    }

    #[test]
    fn cubicbez_nearest() {
        // y = x^3
        let c: CubicBez<Vec2> = CubicBez::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0 / 3.0, 0.0),
            Vec2::new(2.0 / 3.0, 0.0),
            Vec2::new(1.0, 1.0),
        );
        for i in 1..10 {
            let x = i as f64 / 10.0;
            let nearest = c.nearest(Vec2::new(x, x * x * x));
            verify(nearest.t, x);
            assert!(nearest.distance_sq < 1e-18);
        }
        verify(c.nearest(Vec2::new(1.0, 1.0)).t, 1.0);
        verify(c.nearest(Vec2::new(1.1, 1.1)).t, 1.0);
        verify(c.nearest(Vec2::new(-0.1, 0.0)).t, 0.0);
    }

    #[test]
    fn cubicbez_nearest_line_matches_projection() {
        let a = Vec2::new(-1.0, 2.0);
        let b = Vec2::new(5.0, -1.0);
        let c: CubicBez<Vec2> = CubicBez::new(a, a.lerp(b, 1.0 / 3.0), a.lerp(b, 2.0 / 3.0), b);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let p = Vec2::new(rng.random_range(-4.0..8.0), rng.random_range(-4.0..5.0));
            let expected = ((p - a).dot(b - a) / (b - a).hypot2()).clamp(0.0, 1.0);
            let nearest = c.nearest(p);
            verify(nearest.t, expected);
            let on_line = a.lerp(b, expected);
            assert!((nearest.distance_sq - (p - on_line).hypot2()).abs() < 1e-9);
        }
    }

    #[test]
    fn cubicbez_nearest_s_curve() {
        let c: CubicBez<Vec2> = CubicBez::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(2.0, -2.0),
            Vec2::new(3.0, 0.0),
        );
        let p = Vec2::new(1.5, 0.0);
        let exact = c.nearest(p);
        let fast = c.nearest_fast(&Euclidean, p, DEFAULT_FAST_ITERATIONS);
        let at = |t: f64| (c.eval(t) - p).hypot2();
        assert!(at(exact.t) <= at(0.0));
        assert!(at(exact.t) <= at(1.0));
        assert!(at(exact.t) <= at(fast.t));
        // The curve passes through p halfway along.
        verify(exact.t, 0.5);
        assert!(exact.distance_sq < 1e-18);
    }

    #[test]
    fn cubicbez_nearest_beats_fast() {
        // A loop that passes near the query point twice.
        let c: CubicBez<Vec2> = CubicBez::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 3.0),
            Vec2::new(-2.0, 3.0),
            Vec2::new(2.0, 0.0),
        );
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = Vec2::new(rng.random_range(-3.0..5.0), rng.random_range(-2.0..4.0));
            let exact = c.nearest(p);
            let fast = c.nearest_fast(&Euclidean, p, 30);
            assert!(exact.distance_sq <= fast.distance_sq + 1e-9, "p={p}");
            // Brute force over a fine grid can only tie or lose.
            for i in 0..=500 {
                let t = i as f64 / 500.0;
                assert!(exact.distance_sq <= (c.eval(t) - p).hypot2() + 1e-9, "p={p} t={t}");
            }
        }
    }

    #[test]
    fn cubicbez_nearest_fast_wrong_lobe() {
        // The loop comes back past its start; the first comparison of the
        // fast search sees the far lobe as closer and never returns.
        let c: CubicBez<Vec2> = CubicBez::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 3.0),
            Vec2::new(-2.0, 3.0),
            Vec2::new(2.0, 0.0),
        );
        let p = Vec2::new(0.2, 0.1);
        let exact = c.nearest(p);
        assert!(exact.t < 0.1, "{exact:?}");
        assert!(exact.distance_sq < 0.01, "{exact:?}");
        for iterations in [DEFAULT_FAST_ITERATIONS, 40] {
            let fast = c.nearest_fast(&Euclidean, p, iterations);
            assert!(fast.t > 0.5, "{fast:?}");
            assert!(fast.distance_sq > exact.distance_sq + 1.0, "{fast:?}");
        }
    }

    #[test]
    fn cubicbez_nearest_window() {
        let c = CubicBez::<Vec2>::with_window(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 0.0),
            10.0,
            20.0,
        )
        .unwrap();
        verify(c.nearest(Vec2::new(1.5, 4.0)).t, 15.0);
        assert_eq!(c.nearest(Vec2::new(-5.0, 0.0)).t, 10.0);
        assert_eq!(c.nearest(Vec2::new(9.0, 1.0)).t, 20.0);
        let fast = c.nearest_fast(&Euclidean, Vec2::new(1.5, 4.0), 40);
        assert!((fast.t - 15.0).abs() < 1e-6);
    }

    #[test]
    fn cubicbez_nearest_scalar() {
        let c = FastCubicBez::<f64>::new(0.0, 0.0, 1.0, 1.0);
        let nearest = c.nearest(0.5);
        verify(nearest.t, 0.5);
        assert_eq!(c.nearest(-3.0).t, 0.0);
        assert_eq!(c.nearest(3.0).t, 1.0);
    }

    #[test]
    fn cubicbez_nearest_degenerate_point() {
        let q = Vec2::new(2.0, -1.0);
        let c: CubicBez<Vec2> = CubicBez::new(q, q, q, q);
        let nearest = c.nearest(Vec2::new(0.0, 0.0));
        assert_eq!(nearest.t, 0.0);
        assert_eq!(nearest.distance_sq, 5.0);
    }

    #[test]
    fn cubicbez_nearest_cusp() {
        // Both handles on the far end: a cusp-like tangency at the start.
        let c: CubicBez<Vec2> = CubicBez::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 0.0),
        );
        let nearest = c.nearest(Vec2::new(2.0, 0.0));
        assert!(nearest.t.is_finite());
        verify(nearest.t, 0.5);
        verify(nearest.distance_sq, 1.5625);
    }

    #[test]
    fn cubicbez_nearest_hostile_inputs() {
        let mut rng = StdRng::seed_from_u64(0xbad);
        let number = |rng: &mut StdRng| match rng.random_range(0..12) {
            0 => 0.0,
            1 => f64::MAX,
            2 => f64::MIN,
            3 => f64::MIN_POSITIVE,
            4 => f64::INFINITY,
            5 => f64::NAN,
            _ => rng.random_range(-100.0..100.0),
        };
        for _ in 0..2000 {
            let pt = |rng: &mut StdRng| Vec2::new(number(rng), number(rng));
            let c: CubicBez<Vec2> =
                CubicBez::new(pt(&mut rng), pt(&mut rng), pt(&mut rng), pt(&mut rng));
            // Must terminate without panicking; the answer may be NaN.
            let _ = c.nearest(pt(&mut rng));
        }
    }
}
