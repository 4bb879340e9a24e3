//! Jacobi's conformal projection of the triaxial ellipsoid.
//!
//! With the ellipsoidal longitude, 𝜔, and latitude, 𝛽, defined by
//!
//! ```text
//! X = a cos 𝜔 √(a² - b² sin² 𝛽 - c² cos² 𝛽) / √(a² - c²)
//! Y = b cos 𝛽 sin 𝜔
//! Z = c sin 𝛽 √(a² sin² 𝜔 + b² cos² 𝜔 - c²) / √(a² - c²)
//! ```
//!
//! [Jacobi (1839)](crate::Bibliography::Jac39) showed that the projection
//! *x = x(𝜔)*, *y = y(𝛽)* with
//!
//! ```text
//! x(𝜔) = a / √(a² - c²) · Π(𝜔', α²ₓ, kₓ),   tan 𝜔' = b/a · tan 𝜔
//! y(𝛽) = c / √(a² - c²) · Π(𝛽', α²ᵧ, kᵧ),   tan 𝛽' = b/c · tan 𝛽
//! ```
//!
//! is conformal. The parameters of the integrals are given by
//! [`TriaxialEllipsoid::shape_constants`]. Following
//! [GeographicLib](crate::Bibliography::Kar22), the coordinates are given in units
//! of degrees, i.e. the integrals are divided by one degree in radians.

use crate::ellipsoid::{ShapeConstants, TriaxialEllipsoid};
use crate::math::angular::{reduce_turns, sincosd};
use crate::math::elliptic::EllipticFunction;
use crate::math::{cast, norm, Real};
use crate::Error;

/// Jacobi's conformal projection of a given ellipsoid.
///
/// All the work of deriving the shape constants and the complete integrals
/// happens at construction. After that, the object is immutable: the
/// coordinate functions are pure, and an evaluator may be shared freely
/// between threads, without locking.
///
/// ```
/// # fn main() -> Result<(), jacobi_conformal::Error> {
/// use jacobi_conformal::JacobiConformal;
/// let jc = JacobiConformal::new(6378172.0, 6378102.0, 6356752.0)?;
/// assert_eq!(jc.x(0.0), 0.0);
/// assert_eq!(jc.x(90.0), jc.x_quadrant());
/// assert!(jc.y(30.0) < jc.y(60.0));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JacobiConformal<T = f64> {
    ellps: TriaxialEllipsoid<T>,
    shape: ShapeConstants<T>,
    ex: EllipticFunction<T>,
    ey: EllipticFunction<T>,
    // Integral to plane coordinate factors: (a, c) / √(a² - c²) / 1°
    x_scale: T,
    y_scale: T,
    // The quarter periods: x(90°), y(90°)
    x_quadrant: T,
    y_quadrant: T,
}

/// Constructors for `JacobiConformal`
impl<T: Real> JacobiConformal<T> {
    /// The projection for the ellipsoid with semiaxes *a ≥ b ≥ c > 0*, *a > c*.
    pub fn new(a: T, b: T, c: T) -> Result<JacobiConformal<T>, Error> {
        Self::from_ellipsoid(&TriaxialEllipsoid::new(a, b, c)?)
    }

    /// The projection for the ellipsoid with semiaxes *a ≥ b ≥ c > 0*, and
    /// axis differences *ab = a - b*, *bc = b - c* given explicitly (see
    /// [`TriaxialEllipsoid::with_differences`]).
    pub fn with_differences(a: T, b: T, c: T, ab: T, bc: T) -> Result<JacobiConformal<T>, Error> {
        Self::from_ellipsoid(&TriaxialEllipsoid::with_differences(a, b, c, ab, bc)?)
    }

    /// The projection for a given ellipsoid.
    ///
    /// The shape constants of a valid ellipsoid always satisfy the
    /// requirements of [`EllipticFunction::new`], so the
    /// [`Error::Domain`] case is an internal consistency check.
    pub fn from_ellipsoid(ellps: &TriaxialEllipsoid<T>) -> Result<JacobiConformal<T>, Error> {
        let shape = ellps.shape_constants();
        let (x, y) = (shape.x, shape.y);
        let ex = EllipticFunction::new(x.k2, x.alpha2, x.kp2, x.alphap2)?;
        let ey = EllipticFunction::new(y.k2, y.alpha2, y.kp2, y.alphap2)?;

        let degree = T::one().to_radians();
        let (x_scale, y_scale) = ellps.scale_factors();
        let (x_scale, y_scale) = (x_scale / degree, y_scale / degree);

        // The quadrants are evaluated exactly as x(90°) and y(90°) are,
        // i.e. with (sin, cos) = (1, 0), so the two agree to the last bit
        let (a, b, c) = (
            ellps.semimajor_axis(),
            ellps.semimedian_axis(),
            ellps.semiminor_axis(),
        );
        let x_quadrant = conformal(&ex, x_scale, b * T::one(), a * T::zero());
        let y_quadrant = conformal(&ey, y_scale, b * T::one(), c * T::zero());

        log::debug!(
            "JacobiConformal: a = {a:?}, b = {b:?}, c = {c:?}, \
             k²ₓ = {:?}, α²ₓ = {:?}, k²ᵧ = {:?}, α²ᵧ = {:?}, \
             quadrants: x = {x_quadrant:?}, y = {y_quadrant:?}",
            x.k2,
            x.alpha2,
            y.k2,
            y.alpha2,
        );

        Ok(JacobiConformal {
            ellps: *ellps,
            shape,
            ex,
            ey,
            x_scale,
            y_scale,
            x_quadrant,
            y_quadrant,
        })
    }
}

impl<T: Real> JacobiConformal<T> {
    /// The x coordinate as a function of the ellipsoidal longitude, 𝜔,
    /// in degrees.
    ///
    /// x(0) = 0, and x increases monotonically with 𝜔. Within
    /// [-180°, 180°], x is odd, and symmetric about the quadrant:
    /// x(180° - 𝜔) = 2 x(90°) - x(𝜔). Outside, it is quasi periodic:
    /// x(𝜔 + 360°) = x(𝜔) + 4 x(90°).
    #[must_use]
    pub fn x(&self, omega: T) -> T {
        let (omega, turns) = reduce_turns(omega);
        let (s, c) = sincosd(omega);
        let x = conformal(
            &self.ex,
            self.x_scale,
            self.ellps.semimedian_axis() * s,
            self.ellps.semimajor_axis() * c,
        );
        self.unwind(x, turns, self.x_quadrant)
    }

    /// The y coordinate as a function of the ellipsoidal latitude, 𝛽,
    /// in degrees. Same symmetries as [`x`](JacobiConformal::x).
    ///
    /// For oblate ellipsoids (a = b), y is infinite at the poles: The
    /// projection degenerates to the Mercator.
    #[must_use]
    pub fn y(&self, beta: T) -> T {
        let (beta, turns) = reduce_turns(beta);
        let (s, c) = sincosd(beta);
        let y = conformal(
            &self.ey,
            self.y_scale,
            self.ellps.semimedian_axis() * s,
            self.ellps.semiminor_axis() * c,
        );
        self.unwind(y, turns, self.y_quadrant)
    }

    /// Both coordinates, *(x(𝜔), y(𝛽))*.
    #[must_use]
    pub fn xy(&self, omega: T, beta: T) -> (T, T) {
        (self.x(omega), self.y(beta))
    }

    /// The quarter period of x, i.e. x(90°).
    #[must_use]
    pub fn x_quadrant(&self) -> T {
        self.x_quadrant
    }

    /// The quarter period of y, i.e. y(90°).
    #[must_use]
    pub fn y_quadrant(&self) -> T {
        self.y_quadrant
    }

    /// The ellipsoid being projected.
    #[must_use]
    pub fn ellipsoid(&self) -> &TriaxialEllipsoid<T> {
        &self.ellps
    }

    /// The shape constants of the ellipsoid being projected.
    #[must_use]
    pub fn shape_constants(&self) -> &ShapeConstants<T> {
        &self.shape
    }

    // Add the contribution of the whole turns removed by reduce_turns.
    // With an infinite quadrant, everything beyond half a turn is infinite
    fn unwind(&self, value: T, turns: T, quadrant: T) -> T {
        if turns == T::zero() {
            return value;
        }
        if quadrant.is_infinite() {
            return quadrant * turns.signum();
        }
        value + cast::<T>(4.) * turns * quadrant
    }
}

// The scaled integral of the third kind, for the reduced angle with
// (sin, cos) proportional to (s, c)
fn conformal<T: Real>(ef: &EllipticFunction<T>, scale: T, s: T, c: T) -> T {
    let (sn, cn) = norm(s, c);
    ef.pi_sncndn(sn, cn, ef.delta(sn, cn)) * scale
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    fn earth() -> Result<JacobiConformal, Error> {
        JacobiConformal::new(6_378_172.0, 6_378_102.0, 6_356_752.0)
    }

    #[test]
    fn origin_and_quadrants() -> Result<(), Error> {
        for jc in [earth()?, JacobiConformal::new(3.0, 2.0, 1.0)?] {
            assert_eq!(jc.x(0.0), 0.0);
            assert_eq!(jc.y(0.0), 0.0);
            assert_eq!(jc.x(90.0), jc.x_quadrant());
            assert_eq!(jc.y(90.0), jc.y_quadrant());
            assert!(jc.x_quadrant().is_finite() && jc.x_quadrant() > 0.0);
            assert!(jc.y_quadrant().is_finite() && jc.y_quadrant() > 0.0);
            assert_eq!(jc.xy(90.0, 90.0), (jc.x_quadrant(), jc.y_quadrant()));
        }
        Ok(())
    }

    #[test]
    fn monotonic() -> Result<(), Error> {
        let jc = earth()?;
        let (mut x0, mut y0) = (0.0, 0.0);
        for i in 1..=360 {
            let angle = i as f64 / 4.0;
            let (x, y) = jc.xy(angle, angle);
            assert!(x > x0, "x not increasing at {angle}");
            assert!(y > y0, "y not increasing at {angle}");
            (x0, y0) = (x, y);
        }
        Ok(())
    }

    #[test]
    fn symmetries() -> Result<(), Error> {
        let jc: JacobiConformal<f64> = JacobiConformal::new(3.0, 2.0, 1.0)?;
        let (xq, yq) = (jc.x_quadrant(), jc.y_quadrant());
        for angle in [1.0, 12.5, 33.0, 45.0, 71.0, 89.9] {
            // Odd
            assert_float_eq!(jc.x(-angle), -jc.x(angle), ulps <= 1);
            assert_float_eq!(jc.y(-angle), -jc.y(angle), ulps <= 1);

            // Symmetric about the quadrant
            assert_float_eq!(jc.x(180.0 - angle), 2.0 * xq - jc.x(angle), abs <= 1e-11);
            assert_float_eq!(jc.y(180.0 - angle), 2.0 * yq - jc.y(angle), abs <= 1e-11);

            // Quasi periodic
            assert_float_eq!(jc.x(angle + 360.0), jc.x(angle) + 4.0 * xq, abs <= 1e-11);
            assert_float_eq!(jc.y(angle - 720.0), jc.y(angle) - 8.0 * yq, abs <= 1e-11);
        }
        assert_float_eq!(jc.x(180.0), 2.0 * xq, abs <= 1e-11);
        assert_float_eq!(jc.x(-180.0), -2.0 * xq, abs <= 1e-11);
        assert_float_eq!(jc.x(270.0), 3.0 * xq, abs <= 1e-11);
        Ok(())
    }

    #[test]
    fn ellipsoids_of_revolution() -> Result<(), Error> {
        // Oblate: x is a linear function of 𝜔, y is Mercator-like
        let (a, c) = (2.0_f64, 1.0_f64);
        let jc = JacobiConformal::new(a, a, c)?;
        let scale = a / (a * a - c * c).sqrt();
        for i in 0..=18 {
            let omega = 5.0 * i as f64;
            assert_float_eq!(jc.x(omega), omega * scale, r2nd <= 1e-14);
        }
        assert!(jc.y(89.0).is_finite());
        assert!(jc.y_quadrant().is_infinite());
        for beta in [100.0, 180.0, 270.0, 360.0, 450.0] {
            assert_eq!(jc.y(beta), f64::INFINITY);
            assert_eq!(jc.y(-beta), f64::NEG_INFINITY);
        }
        assert!(jc.x(180.0).is_finite());
        assert!(jc.y(f64::NAN).is_nan());

        // Prolate: the roles of x and y are swapped
        let jc = JacobiConformal::new(a, c, c)?;
        let scale = c / (a * a - c * c).sqrt();
        for i in 0..=18 {
            let beta = 5.0 * i as f64;
            assert_float_eq!(jc.y(beta), beta * scale, r2nd <= 1e-14);
        }
        assert!(jc.x(89.0).is_finite());
        assert!(jc.x_quadrant().is_infinite());
        for omega in [100.0, 180.0, 270.0, 360.0, 450.0] {
            assert_eq!(jc.x(omega), f64::INFINITY);
            assert_eq!(jc.x(-omega), f64::NEG_INFINITY);
        }

        // The builtin biaxial ellipsoids are oblate
        let jc = JacobiConformal::from_ellipsoid(&TriaxialEllipsoid::named("WGS84")?)?;
        assert_eq!(jc.y(180.0), f64::INFINITY);
        assert_eq!(jc.y(-180.0), f64::NEG_INFINITY);
        assert_float_eq!(jc.x(180.0), 2.0 * jc.x_quadrant(), r2nd <= 1e-14);
        Ok(())
    }

    #[test]
    fn near_spherical() -> Result<(), Error> {
        // As b → a and c → a (with a - b vanishing faster than a - c), the
        // quadrant approaches that of a linear angle scaling, i.e. a · π/2
        // in units of √(a² - c²) per radian
        let a = 6_378_137.0_f64;
        for eps in [1e-1, 1e-2, 1e-3, 1e-4] {
            let (ab, bc) = (a * eps * eps, a * (eps - eps * eps));
            let jc = JacobiConformal::with_differences(a, a - ab, a - ab - bc, ab, bc)?;
            let ac2 = jc.shape_constants().ac2;
            let normalized = jc.x_quadrant() * ac2.sqrt() / a;
            assert!((normalized / 90.0 - 1.0).abs() < eps);
        }
        Ok(())
    }

    #[test]
    fn repeatable() -> Result<(), Error> {
        let jc = earth()?;
        let first: Vec<f64> = (0..=90).map(|i| jc.x(i as f64)).collect();
        for _ in 0..3 {
            for (i, x) in first.iter().enumerate() {
                assert_eq!(jc.x(i as f64).to_bits(), x.to_bits());
            }
        }
        Ok(())
    }

    #[test]
    fn single_precision() -> Result<(), Error> {
        let jc32 = JacobiConformal::<f32>::new(3.0, 2.0, 1.0)?;
        let jc64 = JacobiConformal::<f64>::new(3.0, 2.0, 1.0)?;
        assert_eq!(jc32.x(90.0), jc32.x_quadrant());
        for angle in [10.0_f32, 45.0, 80.0] {
            let (x32, y32) = jc32.xy(angle, angle);
            let (x64, y64) = jc64.xy(angle as f64, angle as f64);
            assert_float_eq!(x32 as f64, x64, r2nd <= 1e-5);
            assert_float_eq!(y32 as f64, y64, r2nd <= 1e-5);
        }
        Ok(())
    }

    #[test]
    fn construction_failures() {
        assert!(matches!(
            JacobiConformal::new(6_378_102.0, 6_378_172.0, 6_356_752.0),
            Err(Error::InvalidShape(_))
        ));
        assert!(matches!(
            JacobiConformal::new(1.0, 1.0, 1.0),
            Err(Error::InvalidShape(_))
        ));
        assert!(matches!(
            JacobiConformal::new(1.0, 0.5, 0.0),
            Err(Error::InvalidShape(_))
        ));
    }
}
