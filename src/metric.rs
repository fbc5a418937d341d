// Copyright 2026 the Bezkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance metrics for proximity search and arc length.

use core::ops::Sub;

use num_traits::Float;

use crate::Dot;

/// A distance between two curve values.
///
/// Distances come in two units. The *cooked* unit is whatever is cheapest
/// to compare (for the Euclidean metric, the squared distance); the
/// *uncooked* unit is the natural one that can be summed along a path.
/// Comparisons only ever need cooked values, so hot loops avoid the
/// square root entirely.
pub trait DistanceMetric<V, K> {
    /// The cooked distance between `a` and `b`.
    fn distance(&self, a: V, b: V) -> K;

    /// Convert a natural distance into cooked units.
    fn cook(&self, d: K) -> K;

    /// Convert a cooked distance into natural units.
    fn uncook(&self, d: K) -> K;
}

/// The Euclidean metric, cooked as squared distance.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Euclidean;

impl<V, K> DistanceMetric<V, K> for Euclidean
where
    V: Dot<K> + Sub<Output = V>,
    K: Float,
{
    #[inline]
    fn distance(&self, a: V, b: V) -> K {
        (a - b).mag_squared()
    }

    #[inline]
    fn cook(&self, d: K) -> K {
        d * d
    }

    #[inline]
    fn uncook(&self, d: K) -> K {
        d.sqrt()
    }
}
