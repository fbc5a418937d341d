// Copyright 2026 the Bezkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common numerical helpers shared by the curve algorithms.

use num_traits::Float;

use crate::Lerp;

/// Convert an `f64` constant into the time type.
///
/// Every [`Float`] in practical use represents these constants; the NaN
/// fallback only exists so that the conversion is total.
#[inline]
pub(crate) fn lit<K: Float>(v: f64) -> K {
    K::from(v).unwrap_or_else(K::nan)
}

/// Evaluate a Bézier control polygon of any degree at `t` by de Casteljau.
///
/// Returns the point on the curve together with the control polygons of
/// the left (`[0, t]`) and right (`[t, 1]`) pieces.
pub(crate) fn de_casteljau<V: Lerp<K>, K: Copy, const N: usize>(
    points: &[V; N],
    t: K,
) -> (V, [V; N], [V; N]) {
    let mut tmp = *points;
    let mut left = *points;
    let mut right = *points;
    for level in 1..N {
        for j in 0..N - level {
            tmp[j] = tmp[j].lerp(tmp[j + 1], t);
        }
        left[level] = tmp[0];
        right[N - 1 - level] = tmp[N - 1 - level];
    }
    (tmp[0], left, right)
}
