//! Triaxial ellipsoids, and the shape constants derived from them

mod constants;

use crate::math::Real;
use crate::Error;

/// A triaxial ellipsoid with semiaxes *a ≥ b ≥ c > 0*.
///
/// Besides the axes themselves, the axis differences *a - b* and *b - c*
/// are stored, so that a near spherical ellipsoid can be specified without
/// the loss of precision incurred by subtracting nearly equal axes (see
/// [`TriaxialEllipsoid::with_differences`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriaxialEllipsoid<T = f64> {
    a: T,
    b: T,
    c: T,
    ab: T,
    bc: T,
}

/// The squared axis differences of an ellipsoid, and the parameters of the
/// elliptic integrals of Jacobi's conformal projection derived from them.
///
/// The squared differences are computed as products, *a² - b² = (a - b)(a + b)*,
/// never by subtraction of squares.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeConstants<T = f64> {
    /// a² - b²
    pub ab2: T,
    /// b² - c²
    pub bc2: T,
    /// a² - c²
    pub ac2: T,
    /// Parameters for the x coordinate, as a function of the ellipsoidal longitude
    pub x: EllipticParameters<T>,
    /// Parameters for the y coordinate, as a function of the ellipsoidal latitude
    pub y: EllipticParameters<T>,
}

/// Squared modulus and characteristic of an elliptic integral of the third
/// kind, with their complements. Analytically *k² + k'² = 1* and
/// *α² + α'² = 1*, but the complements are computed independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipticParameters<T = f64> {
    /// Squared modulus, *k²*, in [0, 1]
    pub k2: T,
    /// Complementary squared modulus, *k'² = 1 - k²*
    pub kp2: T,
    /// Characteristic, *α²*, below 1
    pub alpha2: T,
    /// Complementary characteristic, *α'² = 1 - α²*
    pub alphap2: T,
}

/// Constructors for `TriaxialEllipsoid`
impl<T: Real> TriaxialEllipsoid<T> {
    /// User defined ellipsoid, given by its semiaxes.
    ///
    /// Fails with [`Error::InvalidShape`] unless *a ≥ b ≥ c > 0* and
    /// *a > c*, i.e. the sphere is excluded: On the sphere, the
    /// ellipsoidal coordinates, and hence Jacobi's projection, are
    /// undefined.
    pub fn new(a: T, b: T, c: T) -> Result<TriaxialEllipsoid<T>, Error> {
        Self::with_differences(a, b, c, a - b, b - c)
    }

    /// User defined ellipsoid, given by its semiaxes and the axis
    /// differences *ab = a - b* and *bc = b - c*. Use this for ellipsoids
    /// so close to spherical that the differences cannot be determined
    /// accurately from the axes.
    pub fn with_differences(a: T, b: T, c: T, ab: T, bc: T) -> Result<TriaxialEllipsoid<T>, Error> {
        let invalid = |why: &str| {
            Err(Error::InvalidShape(format!(
                "{why} (a = {a:?}, b = {b:?}, c = {c:?})"
            )))
        };

        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return invalid("axes must be finite");
        }
        if c <= T::zero() {
            return invalid("axes must be positive");
        }
        if a < b || b < c {
            return invalid("axes must satisfy a ≥ b ≥ c");
        }
        if !(ab.is_finite() && bc.is_finite()) || ab < T::zero() || bc < T::zero() {
            return invalid("axis differences must be finite and non-negative");
        }
        if ab + bc == T::zero() {
            return invalid("sphere: ellipsoidal coordinates undefined");
        }

        Ok(TriaxialEllipsoid { a, b, c, ab, bc })
    }

    // ----- Axes ------------------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> T {
        self.a
    }

    /// The semimedian axis, *b*
    #[must_use]
    pub fn semimedian_axis(&self) -> T {
        self.b
    }

    /// The semiminor axis, *c*
    #[must_use]
    pub fn semiminor_axis(&self) -> T {
        self.c
    }

    /// The axis differences, *(a - b, b - c)*
    #[must_use]
    pub fn axis_differences(&self) -> (T, T) {
        (self.ab, self.bc)
    }

    /// Oblate ellipsoid of revolution, *a = b*
    #[must_use]
    pub fn is_oblate(&self) -> bool {
        self.ab == T::zero()
    }

    /// Prolate ellipsoid of revolution, *b = c*
    #[must_use]
    pub fn is_prolate(&self) -> bool {
        self.bc == T::zero()
    }

    // ----- Shape -----------------------------------------------------------------

    // a² - b², b² - c², a² - c², by products of sums and differences
    fn squared_differences(&self) -> (T, T, T) {
        let ab2 = self.ab * (self.a + self.b);
        let bc2 = self.bc * (self.b + self.c);
        (ab2, bc2, ab2 + bc2)
    }

    /// The factors converting the integrals of the third kind to plane
    /// coordinates: *(a, c) / √(a² - c²)*, per radian.
    #[must_use]
    pub fn scale_factors(&self) -> (T, T) {
        let s = self.squared_differences().2.sqrt();
        (self.a / s, self.c / s)
    }

    /// The constants needed for the elliptic integrals of
    /// [Jacobi's conformal projection](crate::JacobiConformal).
    ///
    /// For the x coordinate:
    /// *k² = (a² - b²)/(a² - c²) · c²/b²*, *α² = -(a² - b²)/b²*,
    /// *k'² = (b² - c²)/(a² - c²) · a²/b²*, *α'² = a²/b²*.
    ///
    /// For the y coordinate, the roles of *a* and *c* are swapped:
    /// *k² = (b² - c²)/(a² - c²) · a²/b²*, *α² = (b² - c²)/b²*,
    /// *k'² = (a² - b²)/(a² - c²) · c²/b²*, *α'² = c²/b²*.
    #[must_use]
    pub fn shape_constants(&self) -> ShapeConstants<T> {
        let (a, b, c) = (self.a, self.b, self.c);
        let (ab2, bc2, ac2) = self.squared_differences();

        let a_b = (a / b).powi(2);
        let c_b = (c / b).powi(2);
        let b2 = b * b;

        // (a² - c²) b² = (a² - b²) c² + (b² - c²) a², so the moduli are
        // p / (p + q), which never round beyond 1
        let p = ab2 * c * c;
        let q = bc2 * a * a;
        let m2 = p / (p + q);
        let mp2 = q / (p + q);

        let x = EllipticParameters {
            k2: m2,
            kp2: mp2,
            alpha2: -ab2 / b2,
            alphap2: a_b,
        };
        let y = EllipticParameters {
            k2: mp2,
            kp2: m2,
            alpha2: bc2 / b2,
            alphap2: c_b,
        };

        ShapeConstants {
            ab2,
            bc2,
            ac2,
            x,
            y,
        }
    }
}

impl TriaxialEllipsoid<f64> {
    /// Predefined ellipsoid; built-in, or given as a string formatted
    /// (a, b, c) tuple, e.g. "6378172, 6378102, 6356752" (the parentheses
    /// are optional).
    ///
    /// Unknown names give [`Error::NotFound`], malformed tuples give
    /// [`Error::Syntax`], and tuples describing invalid ellipsoids give
    /// [`Error::InvalidShape`].
    pub fn named(name: &str) -> Result<TriaxialEllipsoid<f64>, Error> {
        let name = name.trim();

        // Is it one of the few builtins?
        if let Some(e) = constants::ELLIPSOID_LIST
            .iter()
            .find(|ellps| ellps.0 == name)
        {
            log::debug!("TriaxialEllipsoid::named(): builtin {}", e.0);
            return TriaxialEllipsoid::new(e.1, e.2, e.3);
        }

        // Remove optional parenthesis
        let tuple = name
            .strip_prefix('(')
            .and_then(|n| n.strip_suffix(')'))
            .unwrap_or(name);

        if !tuple.contains(',') {
            return Err(Error::NotFound(
                String::from(name),
                String::from("TriaxialEllipsoid::named()"),
            ));
        }

        // The "a, b, c" form
        let axes = tuple
            .split(',')
            .map(|axis| axis.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Error::Syntax(format!("{name}: {e}")))?;
        let [a, b, c] = axes[..] else {
            return Err(Error::Syntax(format!(
                "{name}: expected 3 axes, found {}",
                axes.len()
            )));
        };
        TriaxialEllipsoid::new(a, b, c)
    }
}

/// The triaxial Earth model used in the literature on Jacobi's projection.
impl Default for TriaxialEllipsoid<f64> {
    fn default() -> TriaxialEllipsoid<f64> {
        let (_, a, b, c) = constants::ELLIPSOID_LIST[0];
        TriaxialEllipsoid {
            a,
            b,
            c,
            ab: a - b,
            bc: b - c,
        }
    }
}

// ----- Tests ---------------------------------------------------------------------
