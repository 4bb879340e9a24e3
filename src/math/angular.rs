use num_traits::Float;

use super::cast;

/// Sine and cosine of an angle given in degrees.
///
/// The argument is reduced to [-45°, 45°] *before* conversion to radians,
/// so multiples of 90° give exact results: `sincosd(90.0) == (1.0, 0.0)`.
/// This is what makes the quarter period of a map coincide, bit for bit,
/// with the value of the map at 90°.
///
/// For angles where the sine vanishes, its sign follows the argument, so
/// `sincosd(-180.0)` gives (-0, -1) and `sincosd(180.0)` gives (+0, -1).
pub fn sincosd<T: Float>(angle: T) -> (T, T) {
    let ninety: T = cast(90.);
    let r = angle % cast::<T>(360.);
    let q = (r / ninety).round();
    let r = (r - q * ninety).to_radians();
    let (s, c) = r.sin_cos();

    let (sin, cos) = match q.to_i32().unwrap_or(0).rem_euclid(4) {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    };

    // Remove the sign of a negative zero from the cosine
    let cos = cos + T::zero();
    if sin == T::zero() {
        let zero = if angle.is_sign_negative() { -T::zero() } else { T::zero() };
        return (zero, cos);
    }
    (sin, cos)
}

/// Reduce an angle given in degrees to [-180°, 180°], and count the
/// number of whole turns removed. The remainder is exact.
pub fn reduce_turns<T: Float>(angle: T) -> (T, T) {
    let turn: T = cast(360.);
    let turns = (angle / turn).round();
    if turns == T::zero() {
        return (angle, turns);
    }
    (angle - turns * turn, turns)
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn exact_quadrants() {
        assert_eq!(sincosd(0.0), (0.0, 1.0));
        assert_eq!(sincosd(90.0), (1.0, 0.0));
        assert_eq!(sincosd(-90.0), (-1.0, 0.0));
        assert_eq!(sincosd(270.0), (-1.0, 0.0));
        assert_eq!(sincosd(360.0), (0.0, 1.0));

        // The sign of a vanishing sine follows the argument
        let (s, c) = sincosd(180.0);
        assert!(s == 0.0 && s.is_sign_positive() && c == -1.0);
        let (s, c) = sincosd(-180.0);
        assert!(s == 0.0 && s.is_sign_negative() && c == -1.0);

        // ...but the cosine is never a negative zero
        assert!(sincosd(90.0).1.is_sign_positive());
        assert!(sincosd(-90.0_f32).1.is_sign_positive());
    }

    #[test]
    fn agrees_with_radians() {
        for i in -72..=72 {
            let angle = 7.5 * i as f64 + 0.25;
            let (s, c) = sincosd(angle);
            let (sr, cr) = angle.to_radians().sin_cos();
            assert_float_eq!(s, sr, abs <= 1e-14);
            assert_float_eq!(c, cr, abs <= 1e-14);
        }
        let (s, c) = sincosd(30.0_f32);
        assert_float_eq!(s, 0.5, abs <= 1e-6);
        assert_float_eq!(c, 0.75_f32.sqrt(), abs <= 1e-6);
    }

    #[test]
    fn turns() {
        assert_eq!(reduce_turns(45.0), (45.0, 0.0));
        assert_eq!(reduce_turns(-180.0), (180.0, -1.0));
        assert_eq!(reduce_turns(180.0), (-180.0, 1.0));
        assert_eq!(reduce_turns(405.0), (45.0, 1.0));
        assert_eq!(reduce_turns(-770.0), (-50.0, -2.0));
    }
}
