//! *Jacobi's conformal projection of the triaxial ellipsoid*.
//!
//! Jacobi (1839) showed that the triaxial ellipsoid can be mapped
//! conformally to the plane in a way where the plane coordinate *x* depends
//! only on the ellipsoidal longitude, 𝜔, and *y* only on the ellipsoidal
//! latitude, 𝛽. Both coordinates are incomplete elliptic integrals of the
//! third kind, which are here evaluated by Carlson's duplication algorithms.
//!
//! ```
//! # fn main() -> Result<(), jacobi_conformal::Error> {
//! use jacobi_conformal::prelude::*;
//!
//! let jc: JacobiConformal<f64> = JacobiConformal::new(6378172.0, 6378102.0, 6356752.0)?;
//! // Scale the plane so that a quadrant spans 90 units
//! let f = 90.0 / jc.x_quadrant();
//! assert!((jc.x(90.0) * f - 90.0).abs() < 1e-12);
//! assert!(jc.x(45.0) * f > 0.0 && jc.x(45.0) * f < 90.0);
//! # Ok(())
//! # }
//! ```
//!
//! The numerical core is generic over the real number type (anything
//! implementing [`num_traits::Float`]), so the working precision is
//! chosen by the caller through the type, not through global state.

mod bibliography;
pub mod ellipsoid;
pub mod jacobi;
pub mod math;

pub use bibliography::Bibliography;
pub use ellipsoid::ShapeConstants;
pub use ellipsoid::TriaxialEllipsoid;
pub use jacobi::JacobiConformal;
pub use math::elliptic::EllipticFunction;

use thiserror::Error;

/// The bread-and-butter
pub mod prelude {
    pub use crate::ellipsoid::ShapeConstants;
    pub use crate::ellipsoid::TriaxialEllipsoid;
    pub use crate::jacobi::JacobiConformal;
    pub use crate::math::elliptic::EllipticFunction;
    pub use crate::Error;
}

/// The crate-wide error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid ellipsoid shape: {0}")]
    InvalidShape(String),

    #[error("argument outside domain of elliptic integral: {0}")]
    Domain(String),

    #[error("{0} not found in {1}")]
    NotFound(String, String),

    #[error("syntax error: {0}")]
    Syntax(String),
}
