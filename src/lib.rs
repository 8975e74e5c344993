//! Contour - sampled response curves for Rust
//!
//! This library maps arbitrary inputs through a fixed set of (input, output)
//! control points using a pluggable interpolation strategy: step functions
//! (`Clamp`, `ClampUp`), straight lines (`Linear`), or a smooth spline
//! (`CatmullRom`). Typical uses are parameter response curves: velocity to
//! gain, sensor reading to actuator position, time to envelope level.
//!
//! # Examples
//!
//! ```
//! use contour::{Curve, Linear};
//!
//! let mut gain = Curve::<f64, f64, 8>::new();
//! gain.initialize(&Linear, &[0.0, 0.5, 1.0], &[0.0, 0.8, 1.0]);
//!
//! assert_eq!(gain.value(0.25), 0.4);
//! assert_eq!(gain.value(2.0), 1.0); // out of range clamps to the boundary
//! ```

pub mod curve;
pub mod interpolators;
pub mod values;

// Re-export commonly used types at the crate root
pub use curve::Curve;
pub use interpolators::{CatmullRom, Clamp, ClampUp, InterpolationMode, Interpolator, Linear};
pub use values::{CurveInput, RatioInput, Scalable};
