// Copyright 2026 the Bezkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for curve construction.

use num_traits::Float;
use thiserror::Error;

/// Errors raised when a curve's preconditions are violated.
///
/// Numerical approximations (a depth-limited root, a local minimum found
/// by the fast nearest search) are never reported as errors.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum CurveError {
    /// The time window `[r, s]` has no usable width.
    ///
    /// Every evaluation divides by `s - r`, so a window is rejected when
    /// the reciprocal of its width is not finite. This covers `r == s`
    /// as well as NaN bounds.
    #[error("invalid time window [{r}, {s}]")]
    InvalidWindow {
        /// The requested start of the window.
        r: f64,
        /// The requested end of the window.
        s: f64,
    },
}

impl CurveError {
    pub(crate) fn invalid_window<K: Float>(r: K, s: K) -> Self {
        CurveError::InvalidWindow {
            r: r.to_f64().unwrap_or(f64::NAN),
            s: s.to_f64().unwrap_or(f64::NAN),
        }
    }
}

/// Check that `[r, s]` can be used as a time window, returning `1 / (s - r)`.
pub(crate) fn window_reciprocal<K: Float>(r: K, s: K) -> Result<K, CurveError> {
    let drs = (s - r).recip();
    if drs.is_finite() {
        Ok(drs)
    } else {
        Err(CurveError::invalid_window(r, s))
    }
}
