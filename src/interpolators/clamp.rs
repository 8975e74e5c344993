//! Step-function interpolators.
//!
//! Both strategies here treat the curve as a staircase: the output is always
//! one of the control outputs, never a blend. They only require inputs to be
//! orderable and outputs to be copyable, so they work with value types that
//! have no arithmetic at all.

use crate::values::CurveInput;

use super::{InterpolationMode, Interpolator};

/// Holds each control point's output until the next control point is reached.
///
/// For a query inside `[inputs[i], inputs[i+1])` the result is `outputs[i]`,
/// exactly.
///
/// # Examples
///
/// ```
/// use contour::{Clamp, Curve};
///
/// let mut curve = Curve::<f64, f64, 4>::new();
/// curve.initialize(&Clamp, &[0.0, 1.0, 2.0], &[10.0, 20.0, 30.0]);
///
/// assert_eq!(curve.value(0.9), 10.0); // still holding the first output
/// assert_eq!(curve.value(1.0), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Clamp;

impl<I: CurveInput, O: Copy> Interpolator<I, O> for Clamp {
    fn mode(&self) -> InterpolationMode {
        InterpolationMode::Clamp
    }

    fn interpolate(&self, _input: I, _inputs: &[I], outputs: &[O], segment: usize) -> O {
        outputs[segment]
    }
}

/// Jumps to the upcoming control point's output as soon as its segment is
/// entered.
///
/// For a query inside `[inputs[i], inputs[i+1])` the result is
/// `outputs[i+1]`, exactly. The mirror image of [`Clamp`].
///
/// # Examples
///
/// ```
/// use contour::{ClampUp, Curve};
///
/// let mut curve = Curve::<f64, f64, 4>::new();
/// curve.initialize(&ClampUp, &[0.0, 1.0, 2.0], &[10.0, 20.0, 30.0]);
///
/// assert_eq!(curve.value(0.1), 20.0); // already holding the upcoming output
/// assert_eq!(curve.value(1.5), 30.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ClampUp;

impl<I: CurveInput, O: Copy> Interpolator<I, O> for ClampUp {
    fn mode(&self) -> InterpolationMode {
        InterpolationMode::ClampUp
    }

    fn interpolate(&self, _input: I, _inputs: &[I], outputs: &[O], segment: usize) -> O {
        outputs[segment + 1]
    }
}
