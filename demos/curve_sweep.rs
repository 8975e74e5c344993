//! Prints one control-point set sampled under all four interpolation modes.
//!
//! Run with: cargo run --example curve_sweep

use contour::{CatmullRom, Clamp, ClampUp, Curve, Interpolator, Linear};

fn main() -> Result<(), anyhow::Error> {
    let inputs = [0.0, 0.5, 1.5, 2.0, 5.0];
    let outputs = [4.0, 3.0, 4.0, 5.0, 5.0];

    let strategies: [&dyn Interpolator<f64, f64>; 4] = [&Clamp, &ClampUp, &Linear, &CatmullRom];
    let mut curves: [Curve<f64, f64, 8>; 4] = [Curve::new(), Curve::new(), Curve::new(), Curve::new()];
    for (curve, strategy) in curves.iter_mut().zip(strategies) {
        curve.initialize(strategy, &inputs, &outputs);
    }

    println!("control points:");
    for (x, y) in inputs.iter().zip(&outputs) {
        println!("  ({x:>4.1}, {y:.1})");
    }
    println!();
    println!(
        "{:>6} {:>10} {:>10} {:>10} {:>12}",
        "x", "clamp", "clamp-up", "linear", "catmull-rom"
    );

    let steps = 26;
    for step in 0..=steps {
        let x = -0.5 + 6.0 * f64::from(step) / f64::from(steps);
        print!("{x:>6.2}");
        for curve in &curves {
            print!(" {:>10.4}", curve.value(x));
        }
        println!();
    }

    Ok(())
}
