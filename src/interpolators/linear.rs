//! Straight-line interpolator.

use crate::values::{RatioInput, Scalable};

use super::{InterpolationMode, Interpolator};

/// Blends linearly between the two control points enclosing the query.
///
/// With `ratio` as the query's fractional position inside the segment, the
/// result is `outputs[i] + (outputs[i+1] - outputs[i]) * ratio`, an exact
/// affine interpolation. Inputs must implement [`RatioInput`] and outputs
/// [`Scalable`]; pairing `Linear` with types that do not blend is rejected at
/// compile time.
///
/// # Examples
///
/// ```
/// use contour::{Curve, Linear};
///
/// let mut curve = Curve::<f64, f64, 4>::new();
/// curve.initialize(&Linear, &[0.0, 1.0, 3.0], &[0.0, 10.0, 20.0]);
///
/// assert_eq!(curve.value(0.5), 5.0);
/// assert_eq!(curve.value(2.0), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl<I: RatioInput, O: Scalable> Interpolator<I, O> for Linear {
    fn mode(&self) -> InterpolationMode {
        InterpolationMode::Linear
    }

    fn interpolate(&self, input: I, inputs: &[I], outputs: &[O], segment: usize) -> O {
        let ratio = input.ratio(inputs[segment], inputs[segment + 1]);
        outputs[segment] + (outputs[segment + 1] - outputs[segment]) * ratio
    }
}
