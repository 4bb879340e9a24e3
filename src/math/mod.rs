//! Miscellaneous math functions for general use

/// Free functions for handling angles given in degrees.
pub mod angular;
pub use angular::sincosd;

/// Elliptic integrals: Carlson's symmetric forms, and the
/// Legendre forms built on top of them.
pub mod elliptic;
pub use elliptic::EllipticFunction;

use num_traits::float::FloatConst;
use num_traits::Float;

/// The real number types usable by the numerical core. Blanket
/// implemented, so `f32`, `f64`, and any user supplied type implementing
/// the `num_traits` floating point traits will do.
pub trait Real: Float + FloatConst + std::fmt::Debug {}
impl<T: Float + FloatConst + std::fmt::Debug> Real for T {}

/// Convert a numeric literal to the working real type. For the floating
/// point types in actual use, this never fails; a type unable to represent
/// the literal gets NaN, which propagates visibly through the computation.
#[inline]
pub(crate) fn cast<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Scale (x, y) to unit length, i.e. to the (sin, cos) pair of the
/// direction it represents.
#[inline]
pub(crate) fn norm<T: Float>(x: T, y: T) -> (T, T) {
    let h = x.hypot(y);
    (x / h, y / h)
}
