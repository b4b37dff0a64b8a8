//! Scalar math helpers for widget animations.
//!
//! Everything here is a small, pure function over `f32` (or a tiny value type wrapping one):
//! - normalization and range checks (`normalize`, `is_between`, `clamp`)
//! - piecewise-linear interpolation over [`Keyframes`]
//! - rotation of a point around a center (`rotate_x`, `rotate_y`, `rotate`)
//! - size interpolation (`enlarge`, `reduce`)
//! - exponential smoothing (`smooth`, [`Smoother`])
//!
//! The crate is UI-agnostic: it does not know about frames, clocks or drawing surfaces. Animation
//! code is expected to feed it a normalized time `t` (usually `0.0..=1.0`) and use the results to
//! place and size whatever it draws.
//!
//! Rotation needs `sin`/`cos` and is only available with `feature = "std"`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod keyframes;
#[cfg(feature = "std")]
mod rotate;
mod scalar;
mod size;
mod smooth;


pub use error::MathError;
pub use keyframes::{Keyframe, Keyframes, piecewise_interpolate};
#[cfg(feature = "std")]
pub use rotate::{Point, rotate, rotate_x, rotate_y};
pub use scalar::{clamp, is_between, normalize};
pub use size::{enlarge, reduce};
pub use smooth::{Smoother, smooth};
