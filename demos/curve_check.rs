//! Compares computed curve values against expected outputs, printing one
//! pass/fail line per check.
//!
//! Run with: cargo run --example curve_check

use anyhow::bail;
use contour::{Clamp, Curve, Interpolator, Linear};

const TOLERANCE: f64 = 1e-4;

fn check(curve: &Curve<f64, f64, 5>, input: f64, expected: f64) -> bool {
    let output = curve.value(input);
    let passed = (output - expected).abs() < TOLERANCE;
    if passed {
        println!("ok    value({input}) -> {output} == {expected}");
    } else {
        println!("FAIL  value({input}) -> {output} != {expected}");
    }
    passed
}

fn run_checks(
    name: &str,
    strategy: &dyn Interpolator<f64, f64>,
    cases: &[(f64, f64)],
) -> usize {
    println!("checking {name} interpolation:");
    let inputs = [0.0, 0.5, 1.5, 2.0, 5.0];
    let outputs = [4.0, 3.0, 4.0, 5.0, 5.0];
    let mut curve = Curve::<f64, f64, 5>::new();
    curve.initialize(strategy, &inputs, &outputs);

    let failures = cases
        .iter()
        .filter(|&&(input, expected)| !check(&curve, input, expected))
        .count();
    println!();
    failures
}

fn main() -> Result<(), anyhow::Error> {
    let linear_cases = [
        (-1.0, 4.0),
        (0.0, 4.0),
        (0.125, 3.75),
        (0.25, 3.5),
        (0.5, 3.0),
        (1.0, 3.5),
        (1.6, 4.2),
        (2.0, 5.0),
        (3.0, 5.0),
        (5.0, 5.0),
        (20.0, 5.0),
    ];
    let clamp_cases = [
        (-1.0, 4.0),
        (0.125, 4.0),
        (0.5, 3.0),
        (1.0, 3.0),
        (1.6, 4.0),
        (2.0, 5.0),
        (5.01, 5.0),
    ];

    let failures =
        run_checks("linear", &Linear, &linear_cases) + run_checks("clamp", &Clamp, &clamp_cases);

    if failures > 0 {
        bail!("{failures} check(s) failed");
    }
    println!("all checks passed");
    Ok(())
}
