// demos/jacobi_conformal.rs

// Tabulating Jacobi's conformal projection of a triaxial ellipsoid.
// Run with:
// cargo run --example jacobi-conformal
// or, to see the derived constants:
// RUST_LOG=debug cargo run --example jacobi-conformal

use jacobi_conformal::prelude::*;

// Use Anyhow for convenient error handling
fn main() -> anyhow::Result<()> {
    env_logger::init();

    // A triaxial Earth: the equatorial axes differ by 70 m
    let (a, b, c) = (6_378_137.0 + 35.0, 6_378_137.0 - 35.0, 6_356_752.0);
    let jc = JacobiConformal::new(a, b, c)?;

    println!("Ellipsoid parameters: a = {a:.1}, b = {b:.1}, c = {c:.1}");
    println!(
        "Quadrants: x = {:.10}, y = {:.10}",
        jc.x_quadrant(),
        jc.y_quadrant()
    );

    // Rescale, so the x quadrant spans 90 units
    let f = 90.0 / jc.x_quadrant();
    println!("Scaled coordinates (angle x y):");
    for i in (0..=90).step_by(5) {
        let (x, y) = jc.xy(i as f64, i as f64);
        println!("{i} {:.10} {:.10}", x * f, y * f);
    }
    Ok(())
}
