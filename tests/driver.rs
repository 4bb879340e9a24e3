use jacobi_conformal::prelude::*;
use std::thread;

// ----- The conformal coordinates as seen by a plotting or tabulating driver ----

/// The triaxial Earth model, rescaled so a quadrant spans 90 units, as
/// done by the demo program.
#[test]
fn scaled_table() -> Result<(), Error> {
    let jc: JacobiConformal<f64> = JacobiConformal::new(6_378_172.0, 6_378_102.0, 6_356_752.0)?;
    let (xq, yq) = (jc.x_quadrant(), jc.y_quadrant());
    assert!(xq.is_finite() && yq.is_finite());

    let ratio = jc.x(45.0) / jc.x(90.0);
    assert!(ratio > 0.0 && ratio < 1.0);

    let f = 90.0 / xq;
    let table: Vec<(f64, f64)> = (0..=90)
        .step_by(5)
        .map(|i| {
            let (x, y) = jc.xy(i as f64, i as f64);
            (x * f, y * f)
        })
        .collect();

    assert_eq!(table.len(), 19);
    assert_eq!(table[0], (0.0, 0.0));
    for pair in table.windows(2) {
        assert!(pair[0].0 <= pair[1].0);
        assert!(pair[0].1 <= pair[1].1);
    }
    assert!((table[18].0 - 90.0).abs() < 1e-12);
    assert_eq!(table[18].1, yq * f);

    // The Earth is nearly oblate, so x is nearly a linear function of 𝜔,
    // while y grows much faster than 𝛽 towards the poles
    assert!((table[9].0 - 45.0).abs() < 0.1);
    assert!(table[18].1 > 2.0 * table[18].0);
    Ok(())
}

/// Origin, oddness, reflection and quasi-periodicity, over a small family of ellipsoids
#[test]
fn properties() -> Result<(), Error> {
    let ellipsoids = [
        TriaxialEllipsoid::named("earth")?,
        TriaxialEllipsoid::named("3, 2, 1")?,
        TriaxialEllipsoid::new(1.0, 0.999, 0.5)?,
        TriaxialEllipsoid::new(1.0, 0.501, 0.5)?,
    ];
    for ellps in ellipsoids {
        let jc = JacobiConformal::from_ellipsoid(&ellps)?;
        assert_eq!(jc.ellipsoid(), &ellps);
        assert_eq!(jc.x(0.0), 0.0);
        assert_eq!(jc.y(0.0), 0.0);
        assert_eq!(jc.x(90.0), jc.x_quadrant());
        assert_eq!(jc.y(90.0), jc.y_quadrant());

        let (mut x0, mut y0) = (0.0, 0.0);
        for i in 1..=90 {
            let (x, y) = jc.xy(i as f64, i as f64);
            assert!(x > x0 && y > y0);
            (x0, y0) = (x, y);
        }
    }

    // Axes out of order
    let (a, b, c) = (6_378_172.0, 6_378_102.0, 6_356_752.0);
    assert!(matches!(
        JacobiConformal::new(b, a, c),
        Err(Error::InvalidShape(_))
    ));
    Ok(())
}

/// One evaluator, shared by reference between threads
#[test]
fn shared_between_threads() -> Result<(), Error> {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let jc = JacobiConformal::new(3.0, 2.0, 1.0)?;
    assert_send_sync(&jc);
    let expected: Vec<(f64, f64)> = (0..=90).map(|i| jc.xy(i as f64, i as f64)).collect();

    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| (0..=90).map(|i| jc.xy(i as f64, i as f64)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            let computed = handle.join().expect("worker thread panicked");
            assert_eq!(computed, expected);
        }
    });
    Ok(())
}
