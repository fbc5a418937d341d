// Copyright 2026 the Bezkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments over arbitrary value types.
//!
//! The bezkit library evaluates, splits, measures and projects onto cubic
//! Bézier segments. A segment is generic over the type of its control
//! points, which only needs an affine combination ([`Lerp`]), and over the
//! type of its time parameter. Each segment carries a time window `[r, s]`
//! so that segments can be chained into larger curves without
//! renormalizing time.
//!
//! # Examples
//!
//! Evaluating and splitting a segment:
//! ```
//! use bezkit::{CubicBez, ParamCurve, Vec2};
//!
//! let c: CubicBez<Vec2> = CubicBez::new(
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(1.0, 2.0),
//!     Vec2::new(2.0, 2.0),
//!     Vec2::new(3.0, 0.0),
//! );
//! assert_eq!(c.eval(0.5), Vec2::new(1.5, 1.5));
//!
//! let (left, right) = c.split_half().unwrap();
//! assert_eq!(left.end(), right.start());
//! assert_eq!(right.window(), (0.5, 1.0));
//! ```
//!
//! Finding the closest position on a segment to a point:
//! ```
//! use bezkit::{CubicBez, Euclidean, ParamCurveNearest, Vec2};
//!
//! let c: CubicBez<Vec2> = CubicBez::new(
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(1.0, 2.0),
//!     Vec2::new(2.0, 2.0),
//!     Vec2::new(3.0, 0.0),
//! );
//! let p = Vec2::new(1.5, 3.0);
//! let exact = c.nearest(p);
//! assert!((exact.t - 0.5).abs() < 1e-9);
//!
//! // A cheaper approximation that can miss the global minimum.
//! let fast = c.nearest_fast(&Euclidean, p, 20);
//! assert!(fast.distance_sq >= exact.distance_sq - 1e-9);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The crate never allocates.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("bezkit requires either the `std` or `libm` feature");

mod affine;
mod common;
mod cubicbez;
mod error;
mod eval;
mod hermite;
mod intersect;
mod metric;
mod nearest;
mod param_curve;
mod quintic;
mod vec2;

pub use crate::affine::*;
pub use crate::cubicbez::*;
pub use crate::error::*;
pub use crate::eval::*;
pub use crate::hermite::*;
pub use crate::intersect::*;
pub use crate::metric::*;
pub use crate::param_curve::*;
pub use crate::vec2::*;
