//! Elliptic integrals of the first, second and third kind.
//!
//! Everything is built on Carlson's symmetric integrals, evaluated by the
//! duplication theorem, following [Carlson (1995)](crate::Bibliography::Car95)
//! and [DLMF §19](crate::Bibliography::Dlmf). The convergence tolerances
//! are derived from the machine epsilon of the working type, so the number
//! of duplication steps is small (typically 5-10 for `f64`) and bounded.

use super::{cast, Real};
use crate::Error;
use num_traits::Float;

// Hard upper bound on the number of duplication steps. Only reached for
// non-finite or otherwise nonsensical arguments.
const MAX_ITER: usize = 100;

fn tol_rf<T: Float>() -> T {
    (cast::<T>(3.) * T::epsilon() * cast::<T>(0.01)).powf(cast::<T>(0.125))
}

fn tol_rd<T: Float>() -> T {
    (cast::<T>(0.2) * T::epsilon() * cast::<T>(0.01)).powf(cast::<T>(0.125))
}

fn tol_rg0<T: Float>() -> T {
    cast::<T>(2.7) * (T::epsilon() * cast::<T>(0.01)).sqrt()
}

fn zeros<T: Float>(args: &[T]) -> usize {
    args.iter().filter(|&&v| v == T::zero()).count()
}

// ----- Carlson's symmetric integrals -----------------------------------------

/// Carlson's symmetric integral of the first kind,
/// *R<sub>F</sub>(x, y, z) = ½ ∫ dt / √((t + x)(t + y)(t + z))*, t ∈ [0, ∞).
///
/// Infinite if two of the arguments vanish.
#[allow(non_snake_case)] // mimic the notation of DLMF 19.36.1
pub fn rf<T: Float>(x: T, y: T, z: T) -> T {
    if zeros(&[x, y, z]) > 1 {
        return T::infinity();
    }
    let four: T = cast::<T>(4.);
    let A0 = (x + y + z) / cast::<T>(3.);
    let Q = (A0 - x).abs().max((A0 - y).abs()).max((A0 - z).abs()) / tol_rf::<T>();
    let (mut An, mut x0, mut y0, mut z0, mut mul) = (A0, x, y, z, T::one());

    let mut iter = 0;
    while Q >= mul * An.abs() && iter < MAX_ITER {
        let lam = x0.sqrt() * y0.sqrt() + y0.sqrt() * z0.sqrt() + z0.sqrt() * x0.sqrt();
        An = (An + lam) / four;
        x0 = (x0 + lam) / four;
        y0 = (y0 + lam) / four;
        z0 = (z0 + lam) / four;
        mul = mul * four;
        iter += 1;
    }

    let X = (A0 - x) / (mul * An);
    let Y = (A0 - y) / (mul * An);
    let Z = -(X + Y);
    let E2 = X * Y - Z * Z;
    let E3 = X * Y * Z;

    let c = cast::<T>;
    (E3 * (c(6930.) * E3 + E2 * (c(15015.) * E2 - c(16380.)) + c(17160.))
        + E2 * ((c(10010.) - c(5775.) * E2) * E2 - c(24024.))
        + c(240240.))
        / (c(240240.) * An.sqrt())
}

/// The complete case, *R<sub>F</sub>(0, x, y)*, computed by the
/// arithmetic-geometric mean. Infinite if x or y vanishes.
pub fn rf2<T: Real>(x: T, y: T) -> T {
    if zeros(&[x, y]) > 0 {
        return T::infinity();
    }
    let tol = tol_rg0::<T>();
    let two: T = cast::<T>(2.);
    let (mut xn, mut yn) = (x.sqrt(), y.sqrt());
    if xn < yn {
        std::mem::swap(&mut xn, &mut yn);
    }
    for _ in 0..MAX_ITER {
        if (xn - yn).abs() <= tol * xn {
            break;
        }
        let t = (xn + yn) / two;
        yn = (xn * yn).sqrt();
        xn = t;
    }
    T::PI() / (xn + yn)
}

/// Carlson's degenerate integral *R<sub>C</sub>(x, y) = R<sub>F</sub>(x, y, y)*,
/// here in closed form (DLMF 19.2.17-20). Defined for x ≥ 0, y ≠ 0.
pub fn rc<T: Float>(x: T, y: T) -> T {
    use std::cmp::Ordering::*;
    match x.partial_cmp(&y) {
        // DLMF 19.2.18 (NaNs propagate through this branch)
        Some(Less) | None => ((y - x) / x).sqrt().atan() / (y - x).sqrt(),
        Some(Equal) => y.sqrt().recip(),
        // DLMF 19.2.19 and 19.2.20
        Some(Greater) => {
            let t = if y > T::zero() {
                ((x - y) / y).sqrt()
            } else {
                (-x / y).sqrt()
            };
            t.asinh() / (x - y).sqrt()
        }
    }
}

/// Carlson's symmetric integral of the second kind,
/// *R<sub>D</sub>(x, y, z) = R<sub>J</sub>(x, y, z, z)*.
///
/// Infinite if z, or both of x and y, vanish.
#[allow(non_snake_case)] // mimic the notation of DLMF 19.36.2
pub fn rd<T: Float>(x: T, y: T, z: T) -> T {
    if z == T::zero() || zeros(&[x, y]) > 1 {
        return T::infinity();
    }
    let c = cast::<T>;
    let four = c(4.);
    let A0 = (x + y + c(3.) * z) / c(5.);
    let Q = (A0 - x).abs().max((A0 - y).abs()).max((A0 - z).abs()) / tol_rd::<T>();
    let (mut An, mut x0, mut y0, mut z0, mut mul, mut s) = (A0, x, y, z, T::one(), T::zero());

    let mut iter = 0;
    while Q >= mul * An.abs() && iter < MAX_ITER {
        let lam = x0.sqrt() * y0.sqrt() + y0.sqrt() * z0.sqrt() + z0.sqrt() * x0.sqrt();
        s = s + (mul * z0.sqrt() * (z0 + lam)).recip();
        An = (An + lam) / four;
        x0 = (x0 + lam) / four;
        y0 = (y0 + lam) / four;
        z0 = (z0 + lam) / four;
        mul = mul * four;
        iter += 1;
    }

    let X = (A0 - x) / (mul * An);
    let Y = (A0 - y) / (mul * An);
    let Z = -(X + Y) / c(3.);
    let E2 = X * Y - c(6.) * Z * Z;
    let E3 = (c(3.) * X * Y - c(8.) * Z * Z) * Z;
    let E4 = c(3.) * (X * Y - Z * Z) * Z * Z;
    let E5 = X * Y * Z * Z * Z;

    series_rj(E2, E3, E4, E5) / (c(4084080.) * mul * An * An.sqrt()) + c(3.) * s
}

/// Carlson's symmetric integral of the third kind,
/// *R<sub>J</sub>(x, y, z, p) = 3/2 ∫ dt / ((t + p) √((t + x)(t + y)(t + z)))*.
///
/// Here restricted to p > 0, i.e. the Cauchy principal value case is not
/// supported. Infinite if two of x, y, z vanish.
#[allow(non_snake_case)] // mimic the notation of DLMF 19.36.2
pub fn rj<T: Float>(x: T, y: T, z: T, p: T) -> T {
    if zeros(&[x, y, z]) > 1 {
        return T::infinity();
    }
    let c = cast::<T>;
    let four = c(4.);
    let A0 = (x + y + z + c(2.) * p) / c(5.);
    let delta = (p - x) * (p - y) * (p - z);
    let Q = (A0 - x)
        .abs()
        .max((A0 - y).abs())
        .max((A0 - z).abs().max((A0 - p).abs()))
        / tol_rd::<T>();
    let (mut An, mut x0, mut y0, mut z0, mut p0) = (A0, x, y, z, p);
    let (mut mul, mut mul3, mut s) = (T::one(), T::one(), T::zero());

    let mut iter = 0;
    while Q >= mul * An.abs() && iter < MAX_ITER {
        let lam = x0.sqrt() * y0.sqrt() + y0.sqrt() * z0.sqrt() + z0.sqrt() * x0.sqrt();
        let d0 = (p0.sqrt() + x0.sqrt()) * (p0.sqrt() + y0.sqrt()) * (p0.sqrt() + z0.sqrt());
        let e0 = delta / (mul3 * d0 * d0);
        s = s + rc(T::one(), T::one() + e0) / (mul * d0);
        An = (An + lam) / four;
        x0 = (x0 + lam) / four;
        y0 = (y0 + lam) / four;
        z0 = (z0 + lam) / four;
        p0 = (p0 + lam) / four;
        mul = mul * four;
        mul3 = mul3 * c(64.);
        iter += 1;
    }

    let X = (A0 - x) / (mul * An);
    let Y = (A0 - y) / (mul * An);
    let Z = (A0 - z) / (mul * An);
    let P = -(X + Y + Z) / c(2.);
    let E2 = X * Y + X * Z + Y * Z - c(3.) * P * P;
    let E3 = X * Y * Z + c(2.) * P * (E2 + c(2.) * P * P);
    let E4 = (c(2.) * X * Y * Z + P * (E2 + c(3.) * P * P)) * P;
    let E5 = X * Y * Z * P * P;

    series_rj(E2, E3, E4, E5) / (c(4084080.) * mul * An * An.sqrt()) + c(6.) * s
}

// The DLMF 19.36.2 series, shared by rd and rj, scaled by 4084080
#[allow(non_snake_case)]
fn series_rj<T: Float>(E2: T, E3: T, E4: T, E5: T) -> T {
    let c = cast::<T>;
    (c(471240.) - c(540540.) * E2) * E5
        + (c(612612.) * E2 - c(540540.) * E3 - c(556920.)) * E4
        + E3 * (c(306306.) * E3 + E2 * (c(675675.) * E2 - c(706860.)) + c(680680.))
        + E2 * ((c(417690.) - c(255255.) * E2) * E2 - c(875160.))
        + c(4084080.)
}

// ----- The elliptic function object ------------------------------------------

/// Elliptic integrals for a fixed modulus, *k*, and characteristic, *α²*.
///
/// The parameters are given together with their complements,
/// *k'² = 1 - k²* and *α'² = 1 - α²*, so callers able to compute the
/// complements without cancellation can retain full relative precision.
/// The complete integrals are computed once, at construction.
///
/// The incomplete integrals are given in terms of the Jacobi elliptic
/// functions *sn = sin φ*, *cn = cos φ* and *dn = Δ(φ) = √(1 - k² sin² φ)*
/// of the amplitude, φ, and are extended beyond the first quadrant by the
/// symmetries of the integrands: odd in φ, and for cn < 0, mirrored about
/// the complete value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipticFunction<T = f64> {
    k2: T,
    kp2: T,
    alpha2: T,
    alphap2: T,
    // The complete integrals K, E, and Π
    kc: T,
    ec: T,
    pic: T,
}

impl<T: Real> EllipticFunction<T> {
    /// Set up for modulus k² ∈ [0, 1] and characteristic α² < 1.
    ///
    /// Fails with [`Error::Domain`] outside these ranges: For α² ≥ 1,
    /// the integrand of the third kind has a pole in the first quadrant.
    pub fn new(k2: T, alpha2: T, kp2: T, alphap2: T) -> Result<EllipticFunction<T>, Error> {
        let unit = T::zero()..=T::one();
        if !unit.contains(&k2) || !unit.contains(&kp2) {
            return Err(Error::Domain(format!(
                "modulus k² = {k2:?} (complement {kp2:?}) outside [0, 1]"
            )));
        }
        if alpha2 >= T::one() || !alpha2.is_finite() || alphap2 <= T::zero() || alphap2.is_nan() {
            return Err(Error::Domain(format!(
                "characteristic α² = {alpha2:?} (complement {alphap2:?}): pole in first quadrant"
            )));
        }

        let three: T = cast::<T>(3.);
        let (kc, ec) = if kp2 == T::zero() {
            (T::infinity(), T::one())
        } else {
            let kc = rf2(kp2, T::one());
            (kc, kc - k2 / three * rd(T::zero(), kp2, T::one()))
        };
        let pic = if kp2 == T::zero() {
            T::infinity()
        } else if alpha2 == T::zero() {
            kc
        } else {
            kc + alpha2 * rj(T::zero(), kp2, T::one(), alphap2) / three
        };

        Ok(EllipticFunction {
            k2,
            kp2,
            alpha2,
            alphap2,
            kc,
            ec,
            pic,
        })
    }

    /// Elliptic integrals of the first and second kind only, i.e. α² = 0.
    pub fn with_modulus(k2: T) -> Result<EllipticFunction<T>, Error> {
        Self::new(k2, T::zero(), T::one() - k2, T::one())
    }

    /// The squared modulus, *k²*
    #[must_use]
    pub fn k2(&self) -> T {
        self.k2
    }

    /// The complementary squared modulus, *k'²*
    #[must_use]
    pub fn kp2(&self) -> T {
        self.kp2
    }

    /// The characteristic, *α²*
    #[must_use]
    pub fn alpha2(&self) -> T {
        self.alpha2
    }

    /// The complementary characteristic, *α'²*
    #[must_use]
    pub fn alphap2(&self) -> T {
        self.alphap2
    }

    // ----- Complete integrals --------------------------------------------

    /// The complete integral of the first kind, *K(k)*. Infinite for k = 1.
    #[must_use]
    pub fn complete_k(&self) -> T {
        self.kc
    }

    /// The complete integral of the second kind, *E(k)*
    #[must_use]
    pub fn complete_e(&self) -> T {
        self.ec
    }

    /// The complete integral of the third kind, *Π(α², k)*
    #[must_use]
    pub fn complete_pi(&self) -> T {
        self.pic
    }

    // ----- Incomplete integrals ------------------------------------------

    /// Δ = √(1 - k² sn²), evaluated as √(k'² + k² cn²) to avoid
    /// cancellation when k is close to 1. Since k² is never negative,
    /// `sn` enters only through the identity sn² + cn² = 1.
    #[must_use]
    pub fn delta(&self, _sn: T, cn: T) -> T {
        (self.kp2 + self.k2 * cn * cn).sqrt()
    }

    /// The incomplete integral of the first kind, *F(φ, k)*, in terms of
    /// the Jacobi elliptic functions of φ. DLMF 19.25.5.
    #[must_use]
    pub fn f_sncndn(&self, sn: T, cn: T, dn: T) -> T {
        let fi = if cn == T::zero() {
            self.kc
        } else {
            sn.abs() * rf(cn * cn, dn * dn, T::one())
        };
        self.extend(fi, sn, cn, self.kc)
    }

    /// The incomplete integral of the second kind, *E(φ, k)*, in terms of
    /// the Jacobi elliptic functions of φ. DLMF 19.25.9.
    #[must_use]
    pub fn e_sncndn(&self, sn: T, cn: T, dn: T) -> T {
        let ei = if self.kp2 == T::zero() {
            // E(φ, 1) = sin φ
            sn.abs()
        } else {
            let (cn2, dn2, sn2) = (cn * cn, dn * dn, sn * sn);
            sn.abs()
                * (rf(cn2, dn2, T::one()) - self.k2 * sn2 * rd(cn2, dn2, T::one()) / cast::<T>(3.))
        };
        self.extend(ei, sn, cn, self.ec)
    }

    /// The incomplete integral of the third kind, *Π(φ, α², k)*, in terms
    /// of the Jacobi elliptic functions of φ. DLMF 19.25.14.
    #[must_use]
    pub fn pi_sncndn(&self, sn: T, cn: T, dn: T) -> T {
        let pi = if cn == T::zero() && self.kp2 == T::zero() {
            // Logarithmic singularity at φ = 90° for k = 1
            T::infinity()
        } else {
            let (cn2, dn2, sn2) = (cn * cn, dn * dn, sn * sn);
            sn.abs()
                * (rf(cn2, dn2, T::one())
                    + self.alpha2 * sn2 * rj(cn2, dn2, T::one(), cn2 + self.alphap2 * sn2)
                        / cast::<T>(3.))
        };
        self.extend(pi, sn, cn, self.pic)
    }

    /// *F(φ, k)*, for φ in radians. Quasi periodic: F(φ + nπ) = F(φ) + 2nK.
    #[must_use]
    pub fn f(&self, phi: T) -> T {
        self.by_amplitude(phi, Self::f_sncndn, self.kc)
    }

    /// *E(φ, k)*, for φ in radians. Quasi periodic: E(φ + nπ) = E(φ) + 2nE.
    #[must_use]
    pub fn e(&self, phi: T) -> T {
        self.by_amplitude(phi, Self::e_sncndn, self.ec)
    }

    /// *Π(φ, α², k)*, for φ in radians. Quasi periodic: Π(φ + nπ) = Π(φ) + 2nΠ.
    #[must_use]
    pub fn pi(&self, phi: T) -> T {
        self.by_amplitude(phi, Self::pi_sncndn, self.pic)
    }

    // Mirror a first quadrant value into the quadrant given by (sn, cn)
    fn extend(&self, value: T, sn: T, cn: T, complete: T) -> T {
        let value = if cn < T::zero() {
            cast::<T>(2.) * complete - value
        } else {
            value
        };
        if sn.is_sign_negative() {
            return -value;
        }
        value
    }

    // Reduce φ to [-π/2, π/2], and add the contribution of the half turns
    fn by_amplitude(&self, phi: T, integral: fn(&Self, T, T, T) -> T, complete: T) -> T {
        let turns = (phi / T::PI()).round();
        let (sn, cn) = (phi - turns * T::PI()).sin_cos();
        let value = integral(self, sn, cn, self.delta(sn, cn));
        if turns == T::zero() {
            return value;
        }
        // Beyond a divergent quarter period, only the sign survives
        if complete.is_infinite() {
            return complete * turns.signum();
        }
        value + cast::<T>(2.) * turns * complete
    }
}

// ----- Legendre forms --------------------------------------------------------

// Largest value of sin²θ for θ ∈ [0, φ]
fn max_sin2<T: Real>(phi: T) -> T {
    if phi.abs() >= T::FRAC_PI_2() {
        return T::one();
    }
    phi.sin().powi(2)
}

fn check_modulus<T: Real>(k2: T) -> Result<(), Error> {
    if k2 > T::one() || k2.is_nan() {
        return Err(Error::Domain(format!("modulus k² = {k2:?} exceeds 1")));
    }
    Ok(())
}

fn check_divergence<T: Real>(phi: T, k2: T) -> Result<(), Error> {
    if k2 == T::one() && phi.abs() >= T::FRAC_PI_2() {
        return Err(Error::Domain(format!(
            "integral diverges for k = 1 and |φ| = {:?} ≥ π/2",
            phi.abs()
        )));
    }
    Ok(())
}

/// The incomplete elliptic integral of the first kind in Legendre form,
/// *F(φ, k) = ∫ dθ / √(1 - k² sin² θ)*, θ ∈ [0, φ], φ in radians.
pub fn legendre_f<T: Real>(phi: T, k: T) -> Result<T, Error> {
    legendre_pi(phi, T::zero(), k)
}

/// The incomplete elliptic integral of the second kind in Legendre form,
/// *E(φ, k) = ∫ √(1 - k² sin² θ) dθ*, θ ∈ [0, φ], φ in radians.
pub fn legendre_e<T: Real>(phi: T, k: T) -> Result<T, Error> {
    let k2 = k * k;
    check_modulus(k2)?;
    Ok(EllipticFunction::with_modulus(k2)?.e(phi))
}

/// The incomplete elliptic integral of the third kind in Legendre form,
/// *Π(φ; n, k) = ∫ dθ / ((1 - n sin² θ) √(1 - k² sin² θ))*, θ ∈ [0, φ],
/// φ in radians.
///
/// Fails with [`Error::Domain`] if k > 1, or if the integrand has a pole
/// in the integration interval, i.e. if n sin² θ = 1 for some θ ∈ [0, φ].
pub fn legendre_pi<T: Real>(phi: T, n: T, k: T) -> Result<T, Error> {
    let k2 = k * k;
    check_modulus(k2)?;
    check_divergence(phi, k2)?;
    let m = n * max_sin2(phi);
    if m >= T::one() || m.is_nan() {
        return Err(Error::Domain(format!(
            "characteristic n = {n:?} gives a pole inside [0, {phi:?}]"
        )));
    }

    // Within the first quadrant, n may exceed 1 as long as the pole is
    // beyond φ, so we evaluate directly rather than through EllipticFunction
    if phi.abs() <= T::FRAC_PI_2() {
        let (sn, cn) = phi.sin_cos();
        let (sn2, cn2) = (sn * sn, cn * cn);
        let dn2 = T::one() - k2 * sn2;
        let rj_term = if n == T::zero() {
            T::zero()
        } else {
            n * sn2 * rj(cn2, dn2, T::one(), T::one() - n * sn2) / cast::<T>(3.)
        };
        return Ok(sn * (rf(cn2, dn2, T::one()) + rj_term));
    }

    Ok(EllipticFunction::new(k2, n, T::one() - k2, T::one() - n)?.pi(phi))
}

// ----- Tests ---------------------------------------------------------------------
