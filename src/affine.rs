// Copyright 2026 the Bezkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affine combinations and inner products of curve values.
//!
//! A cubic segment never looks inside its control points; it only
//! blends them. Anything that can be linearly interpolated can be the
//! value type of a [`CubicBez`](crate::CubicBez): a scalar, a [`Vec2`],
//! or a caller's own color or vector type. The exact nearest-point
//! search additionally needs an inner product, provided by [`Dot`].

use crate::Vec2;

/// An affine combination of two values.
///
/// `K` is the time (parameter) type the combination is weighted by.
pub trait Lerp<K>: Copy {
    /// Blend from `self` (at `t = 0`) to `other` (at `t = 1`).
    ///
    /// Values of `t` outside `[0, 1]` extrapolate.
    fn lerp(self, other: Self, t: K) -> Self;
}

/// An inner product whose result is expressed in the time type `K`.
pub trait Dot<K>: Copy {
    /// The inner product of two values.
    fn dot(self, other: Self) -> K;

    /// The squared magnitude, `self · self`.
    #[inline]
    fn mag_squared(self) -> K {
        self.dot(self)
    }
}

/// Implements [`Lerp`] and [`Dot`] for a float value type weighted by a
/// float time type.
macro_rules! impl_scalar_value {
    ($($value:ty => $time:ty;)+) => {
        $(
            impl Lerp<$time> for $value {
                #[inline]
                fn lerp(self, other: $value, t: $time) -> $value {
                    self + (other - self) * <$value>::from(t)
                }
            }

            impl Dot<$time> for $value {
                #[inline]
                #[allow(
                    trivial_numeric_casts,
                    clippy::cast_possible_truncation,
                    reason = "narrowing to the time type is the point of this impl"
                )]
                fn dot(self, other: $value) -> $time {
                    (self * other) as $time
                }
            }
        )+
    };
}

impl_scalar_value! {
    f32 => f32;
    f64 => f64;
    f64 => f32;
}

impl Lerp<f64> for Vec2 {
    #[inline]
    fn lerp(self, other: Vec2, t: f64) -> Vec2 {
        Vec2::lerp(self, other, t)
    }
}

impl Dot<f64> for Vec2 {
    #[inline]
    fn dot(self, other: Vec2) -> f64 {
        Vec2::dot(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_lerp() {
        assert_eq!(Lerp::<f64>::lerp(2.0_f64, 4.0, 0.25), 2.5);
        assert_eq!(Lerp::<f32>::lerp(2.0_f32, 4.0, 0.5), 3.0);
        assert_eq!(Lerp::<f32>::lerp(-1.0_f64, 1.0, 0.75_f32), 0.5);
    }

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(Lerp::<f64>::lerp(0.0_f64, 1.0, 2.0), 2.0);
        assert_eq!(Lerp::<f64>::lerp(0.0_f64, 1.0, -1.0), -1.0);
    }

    #[test]
    fn vec2_dot() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(Dot::<f64>::mag_squared(v), 25.0);
        assert_eq!(Dot::<f64>::dot(v, Vec2::new(-4.0, 3.0)), 0.0);
    }

    #[test]
    fn mixed_precision_dot() {
        let d: f32 = Dot::<f32>::dot(1.5_f64, 2.0_f64);
        assert_eq!(d, 3.0);
    }
}
